use serde::{Deserialize, Serialize};

use super::candidate::{Candidate, ItemKind};

/// A ranked, display-ready projection of a candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub kind: ItemKind,
    /// Marker plus title, e.g. `[*] Run a marathon`
    pub display_text: String,
    /// Trigger plus title, e.g. `@Run a marathon`
    pub insertion_text: String,
}

impl Suggestion {
    pub fn from_candidate(candidate: &Candidate, trigger: char) -> Self {
        Suggestion {
            id: candidate.id.clone(),
            title: candidate.title.clone(),
            kind: candidate.kind,
            display_text: format!("{} {}", candidate.kind.marker(), candidate.title),
            insertion_text: format!("{}{}", trigger, candidate.title),
        }
    }
}

/// A committed reference chip shown above the input.
///
/// Fields are copied when the tag is created. Renaming or deleting the source
/// item afterwards does not touch the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextTag {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
}

impl From<&Suggestion> for ContextTag {
    fn from(s: &Suggestion) -> Self {
        ContextTag {
            id: s.id.clone(),
            name: s.title.clone(),
            kind: s.kind,
        }
    }
}

impl From<&Candidate> for ContextTag {
    fn from(c: &Candidate) -> Self {
        ContextTag {
            id: c.id.clone(),
            name: c.title.clone(),
            kind: c.kind,
        }
    }
}
