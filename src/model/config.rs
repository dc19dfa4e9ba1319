use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration sections of mentions.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub mentions: MentionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentionConfig {
    /// Character that opens the suggestion popup
    #[serde(default = "default_trigger")]
    pub trigger: char,
    /// Upper bound on popup rows
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Turn a pasted item id into a tag instead of inserting the text
    #[serde(default = "default_true")]
    pub intercept_paste: bool,
    /// Whether the input starts out focused
    #[serde(default = "default_true")]
    pub auto_focus: bool,
}

impl Default for MentionConfig {
    fn default() -> Self {
        MentionConfig {
            trigger: '@',
            max_suggestions: 8,
            intercept_paste: true,
            auto_focus: true,
        }
    }
}

impl MentionConfig {
    /// Row limit actually used by the index (never zero)
    pub fn suggestion_limit(&self) -> usize {
        self.max_suggestions.max(1)
    }
}

fn default_trigger() -> char {
    '@'
}

fn default_max_suggestions() -> usize {
    8
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-kind chip colors, keyed by kind label (`todo`, `goal`, ...)
    #[serde(default)]
    pub kind_colors: HashMap<String, String>,
    /// Kitty keyboard protocol: true = force on, false = force off, absent = on (default).
    #[serde(default)]
    pub kitty_keyboard: Option<bool>,
    /// Capture mouse clicks (popup rows, click-outside dismissal)
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            colors: HashMap::new(),
            kind_colors: HashMap::new(),
            kitty_keyboard: None,
            mouse: true,
        }
    }
}
