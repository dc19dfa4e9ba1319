use log::debug;

use super::index::CandidateIndex;
use crate::model::Suggestion;

/// What the host should do with a paste event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// The clipboard named a known item: suppress the default paste.
    Intercepted(Suggestion),
    /// Let the default paste insert the text.
    Passthrough,
}

impl PasteOutcome {
    pub fn is_intercepted(&self) -> bool {
        matches!(self, PasteOutcome::Intercepted(_))
    }
}

/// Match pasted plaintext against candidate ids.
///
/// `clipboard` is `None` when the platform denied the read; that is treated
/// the same as "no match".
pub fn resolve_paste(clipboard: Option<&str>, index: &CandidateIndex<'_>) -> Option<Suggestion> {
    let pasted = clipboard?.trim();
    if pasted.is_empty() {
        return None;
    }
    let candidate = index.find_by_id(pasted)?;
    debug!("paste matched item id {}", candidate.id);
    Some(Suggestion::from_candidate(candidate, index.trigger()))
}
