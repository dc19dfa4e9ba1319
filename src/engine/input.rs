use std::fmt;

use log::{debug, trace};

use super::index::CandidateIndex;
use super::paste::{PasteOutcome, resolve_paste};
use super::session::{Committed, SuggestionSession};
use super::tags::ContextTagSet;
use crate::model::{Candidate, ContextTag, MentionConfig};
use crate::util::unicode;

/// Host callback receiving the buffer after a commit splice
pub type TextListener = Box<dyn FnMut(&str)>;

/// Keys the engine cares about, independent of any terminal or GUI toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Up,
    Down,
    /// `modified` is true when Shift/Ctrl/Alt was held
    Enter { modified: bool },
    Tab,
    Esc,
    Other,
}

/// What the host should do after passing a key to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not consumed: run the host's default handling
    Ignored,
    /// Consumed by the popup (navigation or dismissal)
    Handled,
    /// A suggestion was committed; the host must apply `edit`
    Committed(Committed),
}

/// One mention-enabled input field: a suggestion session plus its tag set.
///
/// The host owns the text buffer and cursor and passes them in with every
/// event. The engine only asks for a buffer change through the text listener
/// (and the returned [`KeyOutcome::Committed`]).
pub struct MentionInput {
    config: MentionConfig,
    session: SuggestionSession,
    tags: ContextTagSet,
    on_text_change: Option<TextListener>,
    focused: bool,
}

impl fmt::Debug for MentionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MentionInput")
            .field("session", &self.session)
            .field("tags", &self.tags)
            .field("focused", &self.focused)
            .finish()
    }
}

impl Default for MentionInput {
    fn default() -> Self {
        MentionInput::new(MentionConfig::default())
    }
}

impl MentionInput {
    pub fn new(config: MentionConfig) -> Self {
        let focused = config.auto_focus;
        MentionInput {
            config,
            session: SuggestionSession::Inactive,
            tags: ContextTagSet::new(),
            on_text_change: None,
            focused,
        }
    }

    pub fn on_text_change(mut self, listener: impl FnMut(&str) + 'static) -> Self {
        self.on_text_change = Some(Box::new(listener));
        self
    }

    pub fn on_context_change(mut self, listener: impl FnMut(&[ContextTag]) + 'static) -> Self {
        self.tags.set_listener(Box::new(listener));
        self
    }

    pub fn config(&self) -> &MentionConfig {
        &self.config
    }

    pub fn session(&self) -> &SuggestionSession {
        &self.session
    }

    pub fn tags(&self) -> &ContextTagSet {
        &self.tags
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Ranked view over `candidates` using this input's trigger and row limit
    pub fn index<'a>(&self, candidates: &'a [Candidate]) -> CandidateIndex<'a> {
        CandidateIndex::new(candidates)
            .with_limit(self.config.suggestion_limit())
            .with_trigger(self.config.trigger)
    }

    /// Re-run detection after every buffer change
    pub fn text_changed(&mut self, text: &str, cursor: usize, candidates: &[Candidate]) {
        if !self.focused {
            self.session.dismiss();
            return;
        }
        let index = self.index(candidates);
        self.session.text_changed(text, cursor, &index);
    }

    /// Offer a key to the popup before the host handles it
    pub fn handle_key(&mut self, key: EditKey, text: &str) -> KeyOutcome {
        if !self.focused || !self.session.is_active() {
            return KeyOutcome::Ignored;
        }
        trace!("popup key {:?}", key);
        match key {
            EditKey::Down => {
                self.session.move_down();
                KeyOutcome::Handled
            }
            EditKey::Up => {
                self.session.move_up();
                KeyOutcome::Handled
            }
            EditKey::Enter { modified: false } | EditKey::Tab => {
                match self.session.commit(text) {
                    Some(committed) => self.apply(committed),
                    None => KeyOutcome::Handled,
                }
            }
            EditKey::Esc => {
                self.session.dismiss();
                KeyOutcome::Handled
            }
            EditKey::Enter { modified: true } | EditKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Pointer moved over popup row `row`
    pub fn hover(&mut self, row: usize) {
        self.session.set_highlight(row);
    }

    /// Pointer clicked popup row `row`
    pub fn click_suggestion(&mut self, row: usize, text: &str) -> Option<Committed> {
        let committed = self.session.commit_at(row, text)?;
        match self.apply(committed) {
            KeyOutcome::Committed(c) => Some(c),
            _ => None,
        }
    }

    /// Pointer clicked outside both the input and the popup
    pub fn click_outside(&mut self) -> bool {
        self.session.dismiss()
    }

    /// Handle a paste event. On [`PasteOutcome::Intercepted`] the host must not
    /// insert the clipboard text; the tag has already been added.
    pub fn paste(&mut self, clipboard: Option<&str>, candidates: &[Candidate]) -> PasteOutcome {
        if !self.config.intercept_paste {
            return PasteOutcome::Passthrough;
        }
        let index = self.index(candidates);
        match resolve_paste(clipboard, &index) {
            Some(selection) => {
                self.tags.insert(ContextTag::from(&selection));
                PasteOutcome::Intercepted(selection)
            }
            None => PasteOutcome::Passthrough,
        }
    }

    pub fn remove_tag(&mut self, id: &str) -> bool {
        self.tags.remove(id)
    }

    /// Remove the newest tag (Backspace on an empty buffer)
    pub fn remove_last_tag(&mut self) -> Option<ContextTag> {
        self.tags.pop()
    }

    pub fn clear_all_tags(&mut self) {
        self.tags.clear();
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Focus left the input: the popup closes
    pub fn blur(&mut self) {
        self.focused = false;
        self.session.dismiss();
    }

    /// Display column of the trigger character, for placing the popup.
    ///
    /// Computed from terminal cell widths rather than a fixed per-character
    /// estimate, so wide characters before the trigger shift it correctly.
    pub fn popup_anchor(&self, text: &str) -> Option<usize> {
        let span = self.session.span()?;
        Some(unicode::byte_offset_to_display_col(text, span.start))
    }

    fn apply(&mut self, committed: Committed) -> KeyOutcome {
        debug!("inserting tag for {}", committed.selection.id);
        self.tags.insert(ContextTag::from(&committed.selection));
        if let Some(listener) = &mut self.on_text_change {
            listener(&committed.edit.text);
        }
        KeyOutcome::Committed(committed)
    }
}
