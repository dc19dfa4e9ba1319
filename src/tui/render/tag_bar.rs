use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Widest a chip name may get before it is truncated
const MAX_CHIP_NAME: usize = 24;

/// Render the attached context tags as chips, in insertion order
pub fn render_tag_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let tags = app.mention.tags();

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    if tags.is_empty() {
        spans.push(Span::styled(
            "no tags: type @ or paste an item id",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        let chip = Style::default().bg(app.theme.chip_bg);
        spans.push(Span::styled(" ", chip));
        spans.push(Span::styled(
            tag.kind.marker(),
            chip.fg(app.theme.kind_color(tag.kind)),
        ));
        spans.push(Span::styled(
            format!(" {} ", unicode::truncate_to_width(&tag.name, MAX_CHIP_NAME)),
            chip.fg(app.theme.text_bright),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
