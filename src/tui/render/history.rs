use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render submitted messages, newest at the bottom
pub fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let visible = area.height as usize;
    let skip = app.submissions.len().saturating_sub(visible);

    let lines: Vec<Line> = app
        .submissions
        .iter()
        .skip(skip)
        .map(|s| {
            let mut spans = vec![
                Span::styled(" \u{2713} ", Style::default().fg(app.theme.dim).bg(bg)),
                Span::styled(s.text.clone(), Style::default().fg(app.theme.text).bg(bg)),
            ];
            for tag in &s.tags {
                spans.push(Span::styled("  ", Style::default().bg(bg)));
                spans.push(Span::styled(
                    format!("{} {}", tag.kind.marker(), tag.name),
                    Style::default().fg(app.theme.kind_color(tag.kind)).bg(bg),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
