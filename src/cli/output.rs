use serde::Serialize;

use crate::engine::{Committed, MentionSpan};
use crate::model::{Candidate, ContextTag, Suggestion};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct SpanJson {
    pub start: usize,
    pub end: usize,
    pub query: String,
}

impl From<&MentionSpan> for SpanJson {
    fn from(span: &MentionSpan) -> Self {
        SpanJson {
            start: span.start,
            end: span.end(),
            query: span.query.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct CompletionJson {
    pub text: String,
    pub cursor: usize,
    pub tag: ContextTag,
}

impl From<&Committed> for CompletionJson {
    fn from(c: &Committed) -> Self {
        CompletionJson {
            text: c.edit.text.clone(),
            cursor: c.edit.cursor,
            tag: ContextTag::from(&c.selection),
        }
    }
}

#[derive(Serialize)]
pub struct ResolveJson {
    /// None when the text isn't an item id
    pub tag: Option<ContextTag>,
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `todo-1  [ ] Buy groceries  (home)`
pub fn format_item_line(item: &Candidate) -> String {
    let mut line = format!("{}  {} {}", item.id, item.kind.marker(), item.title);
    if !item.category_id.is_empty() {
        line.push_str(&format!("  ({})", item.category_id));
    }
    line
}

/// `todo-1  [ ] Buy groceries`
pub fn format_suggestion_line(s: &Suggestion) -> String {
    format!("{}  {}", s.id, s.display_text)
}

/// `8..11 @jo`
pub fn format_span(span: &MentionSpan) -> String {
    format!("{}..{} {}{}", span.start, span.end(), span.trigger, span.query)
}

/// `tag: todo-1 [ ] Buy groceries`
pub fn format_tag_line(tag: &ContextTag) -> String {
    format!("tag: {} {} {}", tag.id, tag.kind.marker(), tag.name)
}

/// Spliced text, then the cursor, then the new tag
pub fn format_completion(c: &Committed) -> String {
    format!(
        "{}\ncursor: {}\n{}",
        c.edit.text,
        c.edit.cursor,
        format_tag_line(&ContextTag::from(&c.selection))
    )
}
