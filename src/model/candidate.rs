use serde::{Deserialize, Serialize};
use std::fmt;

/// What sort of item a candidate refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Todo,
    Goal,
    Routine,
    Event,
}

impl ItemKind {
    /// Lowercase name, as used in workspace files and JSON output
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Todo => "todo",
            ItemKind::Goal => "goal",
            ItemKind::Routine => "routine",
            ItemKind::Event => "event",
        }
    }

    /// Fixed-width marker shown in front of suggestions and tag chips
    pub fn marker(self) -> &'static str {
        match self {
            ItemKind::Todo => "[ ]",
            ItemKind::Goal => "[*]",
            ItemKind::Routine => "[~]",
            ItemKind::Event => "[=]",
        }
    }

    /// Parse a kind from its label (case-insensitive)
    pub fn from_label(s: &str) -> Option<ItemKind> {
        match s.to_ascii_lowercase().as_str() {
            "todo" => Some(ItemKind::Todo),
            "goal" => Some(ItemKind::Goal),
            "routine" => Some(ItemKind::Routine),
            "event" => Some(ItemKind::Event),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An external item that can be mentioned from the input.
///
/// Owned by the host; the engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique identifier (e.g. `item-42`); pasting it verbatim tags the item
    pub id: String,
    pub title: String,
    pub kind: ItemKind,
    /// Free-text description, searched after the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, alias = "category")]
    pub category_id: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ItemKind) -> Self {
        Candidate {
            id: id.into(),
            title: title.into(),
            kind,
            body: None,
            category_id: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = category_id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_label_round_trip() {
        for kind in [ItemKind::Todo, ItemKind::Goal, ItemKind::Routine, ItemKind::Event] {
            assert_eq!(ItemKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(ItemKind::from_label("GOAL"), Some(ItemKind::Goal));
        assert_eq!(ItemKind::from_label("habit"), None);
    }

    #[test]
    fn markers_are_three_cells() {
        for kind in [ItemKind::Todo, ItemKind::Goal, ItemKind::Routine, ItemKind::Event] {
            assert_eq!(kind.marker().len(), 3);
        }
    }

    #[test]
    fn category_alias_in_toml() {
        let c: Candidate = toml::from_str(
            r#"id = "item-1"
title = "Water plants"
kind = "routine"
category = "home"
"#,
        )
        .unwrap();
        assert_eq!(c.category_id, "home");
        assert_eq!(c.kind, ItemKind::Routine);
        assert!(c.body.is_none());
    }
}
