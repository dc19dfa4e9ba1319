use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

/// Border (2) plus the row prefix (3)
const CHROME_W: usize = 5;
const MIN_W: u16 = 12;

/// Render the suggestion popup under the trigger character. Flips above the
/// input when there is no room below. Records the popup area for mouse
/// hit-testing.
pub fn render_autocomplete(frame: &mut Frame, app: &mut App, input_area: Rect) {
    let session = app.mention.session();
    let rows = session.suggestions();
    if rows.is_empty() {
        return;
    }
    let highlight = session.highlight_index().unwrap_or(0);

    let bg = app.theme.background;
    let term_area = frame.area();

    let label_w = rows
        .iter()
        .map(|s| unicode::display_width(&s.display_text))
        .max()
        .unwrap_or(10);
    let popup_w = ((label_w + CHROME_W) as u16)
        .max(MIN_W)
        .min(term_area.width);
    let popup_h = (rows.len() as u16 + 2).min(term_area.height);

    let y = if input_area.bottom().saturating_add(popup_h) <= term_area.bottom() {
        input_area.bottom()
    } else {
        input_area.y.saturating_sub(popup_h)
    };
    let anchor = app.mention.popup_anchor(&app.edit_buffer).unwrap_or(0);
    let anchor = u16::try_from(anchor).unwrap_or(u16::MAX);
    let origin_x = app.input_origin.map_or(input_area.x, |(x, _)| x);
    let x = origin_x
        .saturating_add(anchor)
        .min(term_area.width.saturating_sub(popup_w));
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    // marker, space, title
    let title_w = (popup_w as usize).saturating_sub(CHROME_W + 4);
    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let is_selected = i == highlight;
            let style = if is_selected {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            let prefix = if is_selected { " \u{25B8} " } else { "   " };
            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(s.kind.marker(), style.fg(app.theme.kind_color(s.kind))),
                Span::styled(format!(" {}", unicode::fit_to_width(&s.title, title_w)), style),
            ])
        })
        .collect();

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);

    app.popup_area = Some(popup_area);
}
