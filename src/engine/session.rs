use std::ops::Range;

use log::debug;

use super::index::CandidateIndex;
use super::span::{MentionSpan, clamp_cursor, detect_mention};
use crate::model::Suggestion;

/// A buffer mutation requested from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub text: String,
    /// Byte offset where the cursor lands
    pub cursor: usize,
}

/// Result of committing a suggestion from the popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    pub selection: Suggestion,
    /// The buffer with the typed trigger + query removed
    pub edit: TextEdit,
}

/// Popup state while a mention is being typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub span: MentionSpan,
    /// Never empty
    pub ranked: Vec<Suggestion>,
    /// Always a valid index into `ranked`
    pub highlight: usize,
}

/// The suggestion popup state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggestionSession {
    #[default]
    Inactive,
    Active(ActiveSession),
}

impl SuggestionSession {
    pub fn is_active(&self) -> bool {
        matches!(self, SuggestionSession::Active(_))
    }

    pub fn span(&self) -> Option<&MentionSpan> {
        match self {
            SuggestionSession::Active(a) => Some(&a.span),
            SuggestionSession::Inactive => None,
        }
    }

    /// Ranked rows (empty when inactive)
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            SuggestionSession::Active(a) => &a.ranked,
            SuggestionSession::Inactive => &[],
        }
    }

    pub fn highlight_index(&self) -> Option<usize> {
        match self {
            SuggestionSession::Active(a) => Some(a.highlight),
            SuggestionSession::Inactive => None,
        }
    }

    pub fn highlighted(&self) -> Option<&Suggestion> {
        match self {
            SuggestionSession::Active(a) => a.ranked.get(a.highlight),
            SuggestionSession::Inactive => None,
        }
    }

    /// Recompute the span and ranking after the buffer changed.
    ///
    /// Opens (or keeps open) the popup when a span is found and the query has
    /// at least one match; the highlight goes back to the first row.
    pub fn text_changed(&mut self, text: &str, cursor: usize, index: &CandidateIndex<'_>) {
        let span = match detect_mention(text, cursor, index.trigger()) {
            Some(span) => span,
            None => {
                self.close("no mention at cursor");
                return;
            }
        };
        let ranked = index.query(&span.query);
        if ranked.is_empty() {
            self.close("no matches");
            return;
        }
        if !self.is_active() {
            debug!(
                "suggestion popup opened at {} for {:?} ({} rows)",
                span.start,
                span.query,
                ranked.len()
            );
        }
        *self = SuggestionSession::Active(ActiveSession {
            span,
            ranked,
            highlight: 0,
        });
    }

    /// ArrowDown: next row, wrapping to the top
    pub fn move_down(&mut self) {
        if let SuggestionSession::Active(a) = self {
            a.highlight = (a.highlight + 1) % a.ranked.len();
        }
    }

    /// ArrowUp: previous row, wrapping to the bottom
    pub fn move_up(&mut self) {
        if let SuggestionSession::Active(a) = self {
            let len = a.ranked.len();
            a.highlight = (a.highlight + len - 1) % len;
        }
    }

    /// Pointer hover over a row. Out-of-range indices are ignored.
    pub fn set_highlight(&mut self, index: usize) {
        if let SuggestionSession::Active(a) = self
            && index < a.ranked.len()
        {
            a.highlight = index;
        }
    }

    /// Commit the highlighted row (Enter / Tab)
    pub fn commit(&mut self, text: &str) -> Option<Committed> {
        let index = self.highlight_index()?;
        self.commit_at(index, text)
    }

    /// Commit a specific row (pointer click). The popup closes either way.
    pub fn commit_at(&mut self, index: usize, text: &str) -> Option<Committed> {
        let active = match std::mem::take(self) {
            SuggestionSession::Active(a) => a,
            SuggestionSession::Inactive => return None,
        };
        let selection = active.ranked.into_iter().nth(index)?;
        let edit = splice_out(text, active.span.range());
        debug!(
            "committed {} ({:?}), removed {:?}",
            selection.id, selection.title, active.span.range()
        );
        Some(Committed { selection, edit })
    }

    /// Escape, click outside, or blur. Returns whether a popup was open.
    pub fn dismiss(&mut self) -> bool {
        let was_active = self.is_active();
        self.close("dismissed");
        was_active
    }

    fn close(&mut self, reason: &str) {
        if self.is_active() {
            debug!("suggestion popup closed: {}", reason);
        }
        *self = SuggestionSession::Inactive;
    }
}

/// Remove `range` from `text`, leaving the cursor where the range started.
/// The range is clamped to the text and to char boundaries.
pub fn splice_out(text: &str, range: Range<usize>) -> TextEdit {
    let start = clamp_cursor(text, range.start);
    let end = clamp_cursor(text, range.end).max(start);
    let mut out = String::with_capacity(text.len() - (end - start));
    out.push_str(&text[..start]);
    out.push_str(&text[end..]);
    TextEdit {
        text: out,
        cursor: start,
    }
}
