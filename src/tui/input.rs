use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::layout::{Position, Rect};

use crate::engine::{Committed, EditKey, KeyOutcome, PasteOutcome};
use crate::util::unicode;

use super::app::App;

/// Map a terminal key to the engine's key vocabulary
pub fn edit_key(key: KeyEvent) -> EditKey {
    match key.code {
        KeyCode::Up => EditKey::Up,
        KeyCode::Down => EditKey::Down,
        KeyCode::Tab => EditKey::Tab,
        KeyCode::Esc => EditKey::Esc,
        KeyCode::Enter => EditKey::Enter {
            modified: key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::CONTROL | KeyModifiers::ALT),
        },
        _ => EditKey::Other,
    }
}

/// Handle a key event. The popup gets first refusal; whatever it ignores is
/// ordinary line editing.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mention.handle_key(edit_key(key), &app.edit_buffer) {
        KeyOutcome::Handled => return,
        KeyOutcome::Committed(c) => {
            apply_commit(app, c);
            return;
        }
        KeyOutcome::Ignored => {}
    }

    match (key.modifiers, key.code) {
        // Esc with the popup closed leaves
        (_, KeyCode::Esc) => app.should_quit = true,
        (_, KeyCode::Enter) => app.submit(),
        // Paste (Ctrl+V or Super+V)
        (m, KeyCode::Char('v'))
            if m.contains(KeyModifiers::CONTROL) || m.contains(KeyModifiers::SUPER) =>
        {
            match app.clipboard.read_text() {
                Some(text) => handle_paste(app, &text),
                None => debug!("clipboard read denied or empty"),
            }
        }
        // Kill to start of line
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.drain(..app.edit_cursor);
            app.edit_cursor = 0;
            app.refresh_mentions();
        }
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => move_cursor(app, 0),
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            move_cursor(app, app.edit_buffer.len())
        }
        (_, KeyCode::Home) => move_cursor(app, 0),
        (_, KeyCode::End) => move_cursor(app, app.edit_buffer.len()),
        (_, KeyCode::Left) => {
            if let Some(pos) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                move_cursor(app, pos);
            }
        }
        (_, KeyCode::Right) => {
            if let Some(pos) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                move_cursor(app, pos);
            }
        }
        (_, KeyCode::Backspace) => {
            if app.edit_buffer.is_empty() {
                if let Some(tag) = app.mention.remove_last_tag() {
                    app.status = Some(format!("removed {}", tag.name));
                }
            } else if let Some(pos) =
                unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor)
            {
                app.edit_buffer.drain(pos..app.edit_cursor);
                app.edit_cursor = pos;
                app.refresh_mentions();
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(end) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.drain(app.edit_cursor..end);
                app.refresh_mentions();
            }
        }
        (m, KeyCode::Char(c))
            if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
        {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
            app.refresh_mentions();
        }
        _ => {}
    }
}

/// Handle pasted text (bracketed paste, or Ctrl+V after a clipboard read).
/// An exact item id becomes a tag; anything else is inserted at the cursor.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mention.paste(Some(text), &app.items) {
        PasteOutcome::Intercepted(selection) => {
            app.status = Some(format!("tagged {}", selection.title));
        }
        PasteOutcome::Passthrough => {
            // Single-line input: newlines become spaces
            let clean = text.replace('\n', " ").replace('\r', "");
            if clean.is_empty() {
                return;
            }
            app.edit_buffer.insert_str(app.edit_cursor, &clean);
            app.edit_cursor += clean.len();
            app.refresh_mentions();
        }
    }
}

/// Clicks on popup rows commit them, clicks in the input move the cursor,
/// clicks anywhere else dismiss the popup. Hovering a row highlights it.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.popup_area.is_some_and(|r| r.contains(pos)) {
                if let Some(row) = popup_row_at(app, pos)
                    && let Some(c) = app.mention.click_suggestion(row, &app.edit_buffer)
                {
                    apply_commit(app, c);
                }
                return;
            }
            if app.input_area.is_some_and(|r| r.contains(pos)) {
                app.mention.focus();
                match app.input_origin {
                    Some((x, _)) => {
                        let col = mouse.column.saturating_sub(x) as usize;
                        let offset = unicode::display_col_to_byte_offset(&app.edit_buffer, col);
                        move_cursor(app, offset);
                    }
                    None => app.refresh_mentions(),
                }
                return;
            }
            app.mention.click_outside();
        }
        MouseEventKind::Moved => {
            if let Some(row) = popup_row_at(app, pos) {
                app.mention.hover(row);
            }
        }
        _ => {}
    }
}

/// Suggestion row under `pos`, accounting for the popup border
fn popup_row_at(app: &App, pos: Position) -> Option<usize> {
    let area: Rect = app.popup_area?;
    if !area.contains(pos) || pos.y == area.y || pos.y + 1 >= area.bottom() {
        return None;
    }
    let row = (pos.y - area.y - 1) as usize;
    (row < app.mention.session().suggestions().len()).then_some(row)
}

fn move_cursor(app: &mut App, pos: usize) {
    app.edit_cursor = pos.min(app.edit_buffer.len());
    // Moving away from the trigger closes the popup; moving back reopens it
    app.refresh_mentions();
}

fn apply_commit(app: &mut App, c: Committed) {
    app.edit_buffer = c.edit.text;
    app.edit_cursor = c.edit.cursor;
    app.status = Some(format!("tagged {}", c.selection.title));
}
