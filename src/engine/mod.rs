//! The mention engine: span detection, ranking, the popup state machine,
//! the committed tag set and paste interception. Nothing in here knows about
//! terminals or files.

pub mod index;
pub mod input;
pub mod paste;
pub mod session;
pub mod span;
pub mod tags;

pub use index::{CandidateIndex, MAX_SUGGESTIONS, MatchRank};
pub use input::{EditKey, KeyOutcome, MentionInput};
pub use paste::{PasteOutcome, resolve_paste};
pub use session::{ActiveSession, Committed, SuggestionSession, TextEdit, splice_out};
pub use span::{MentionSpan, clamp_cursor, detect_mention};
pub use tags::ContextTagSet;
