use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Render the header row: app name, workspace file, item count
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        " \u{25B6} mentions",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(name) = app
        .workspace_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
    {
        spans.push(Span::styled(
            format!("  {}", name),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let count = match app.items.len() {
        1 => "1 item ".to_string(),
        n => format!("{} items ", n),
    };
    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let count_w = unicode::display_width(&count);
    if used + count_w < width {
        spans.push(Span::styled(
            " ".repeat(width - used - count_w),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(count, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
