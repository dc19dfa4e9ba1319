use std::ops::Range;

/// The trigger-prefixed word currently being typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionSpan {
    /// Byte offset of the trigger character in the buffer
    pub start: usize,
    /// Text between the trigger and the cursor (may be empty)
    pub query: String,
    /// The trigger character itself
    pub trigger: char,
}

impl MentionSpan {
    /// Byte offset just past the query (the cursor position at detection time)
    pub fn end(&self) -> usize {
        self.start + self.trigger.len_utf8() + self.query.len()
    }

    /// Byte range of the trigger plus query, i.e. what a commit splices out
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Clamp `cursor` into `text`, flooring to the nearest char boundary.
pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut c = cursor.min(text.len());
    while !text.is_char_boundary(c) {
        c -= 1;
    }
    c
}

/// Find the mention span that ends at `cursor`.
///
/// Scans backward from the cursor for the nearest `trigger`. Whitespace
/// (including newlines) or the start of the text before a trigger is found
/// means there is no span.
pub fn detect_mention(text: &str, cursor: usize, trigger: char) -> Option<MentionSpan> {
    let cursor = clamp_cursor(text, cursor);
    for (i, c) in text[..cursor].char_indices().rev() {
        if c == trigger {
            return Some(MentionSpan {
                start: i,
                query: text[i + c.len_utf8()..cursor].to_string(),
                trigger,
            });
        }
        if c.is_whitespace() {
            return None;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn detects_query_after_trigger() {
        let span = detect_mention("Talk to @jo", 11, '@').unwrap();
        assert_eq!(span.start, 8);
        assert_eq!(span.query, "jo");
        assert_eq!(span.range(), 8..11);
    }

    #[test]
    fn bare_trigger_gives_empty_query() {
        let span = detect_mention("ping @", 6, '@').unwrap();
        assert_eq!(span.start, 5);
        assert_eq!(span.query, "");
    }

    #[test]
    fn whitespace_breaks_the_span() {
        assert_eq!(detect_mention("@jo hn", 6, '@'), None);
        assert_eq!(detect_mention("@jo\nhn", 6, '@'), None);
        assert_eq!(detect_mention("@jo ", 4, '@'), None);
    }

    #[test]
    fn no_trigger_no_span() {
        assert_eq!(detect_mention("hello", 5, '@'), None);
        assert_eq!(detect_mention("", 0, '@'), None);
    }

    #[test]
    fn cursor_before_trigger() {
        assert_eq!(detect_mention("ab@cd", 2, '@'), None);
    }

    #[test]
    fn mid_word_cursor_uses_text_up_to_cursor() {
        let span = detect_mention("@johnny", 3, '@').unwrap();
        assert_eq!(span.query, "jo");
    }

    #[test]
    fn nearest_trigger_wins() {
        let span = detect_mention("a@b@cd", 6, '@').unwrap();
        assert_eq!(span.start, 3);
        assert_eq!(span.query, "cd");
    }

    #[test]
    fn email_like_text_still_detects() {
        // No word-boundary rule before the trigger
        let span = detect_mention("mail bob@ex", 11, '@').unwrap();
        assert_eq!(span.start, 8);
        assert_eq!(span.query, "ex");
    }

    #[test]
    fn custom_trigger() {
        let span = detect_mention("see +gym", 8, '+').unwrap();
        assert_eq!(span.query, "gym");
        assert_eq!(detect_mention("see @gym", 8, '+'), None);
    }

    #[test]
    fn out_of_range_cursor_is_clamped() {
        let span = detect_mention("@abc", 99, '@').unwrap();
        assert_eq!(span.query, "abc");
    }

    #[test]
    fn cursor_inside_multibyte_char_floors() {
        // "é" is 2 bytes; offset 3 is inside it
        let text = "@cé";
        assert_eq!(clamp_cursor(text, 3), 2);
        let span = detect_mention(text, 3, '@').unwrap();
        assert_eq!(span.query, "c");
        let span = detect_mention(text, 4, '@').unwrap();
        assert_eq!(span.query, "cé");
        assert_eq!(span.end(), 4);
    }

    #[test]
    fn unicode_whitespace_breaks_span() {
        // U+3000 ideographic space
        assert_eq!(detect_mention("@a\u{3000}b", 6, '@'), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_matches_reference_scan(text in "[a-c@ \n]{0,24}", cut in 0usize..30) {
            let cursor = cut.min(text.len());
            let before = &text[..cursor];
            let expected = before.rfind('@').and_then(|at| {
                let between = &before[at + 1..];
                if between.chars().any(char::is_whitespace) {
                    None
                } else {
                    Some((at, between.to_string()))
                }
            });
            let got = detect_mention(&text, cursor, '@').map(|s| (s.start, s.query));
            prop_assert_eq!(got, expected);
        }
    }
}
