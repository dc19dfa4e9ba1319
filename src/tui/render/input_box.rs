use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

const PROMPT: &str = "\u{203A} ";

/// Render the bordered input line. The mention being typed is drawn in the
/// highlight color. Records where the text starts for mouse hit-testing.
pub fn render_input_box(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mention.is_focused();

    let border = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .title(Span::styled(
            " message ",
            Style::default().fg(app.theme.text).bg(bg),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);

    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let buf = &app.edit_buffer;
    let mut spans = vec![Span::styled(
        PROMPT,
        Style::default().fg(app.theme.highlight).bg(bg),
    )];
    match app.mention.session().span() {
        Some(span) if span.end() <= buf.len() => {
            let range = span.range();
            spans.push(Span::styled(buf[..range.start].to_string(), text_style));
            spans.push(Span::styled(
                buf[range.clone()].to_string(),
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::UNDERLINED),
            ));
            spans.push(Span::styled(buf[range.end..].to_string(), text_style));
        }
        _ => spans.push(Span::styled(buf.clone(), text_style)),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    let origin_x = inner.x.saturating_add(unicode::display_width(PROMPT) as u16);
    app.input_origin = Some((origin_x, inner.y));
    app.input_area = Some(area);

    if focused && inner.height > 0 {
        let col = unicode::byte_offset_to_display_col(buf, app.edit_cursor);
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        let x = origin_x
            .saturating_add(col)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
