pub mod autocomplete;
pub mod header;
pub mod history;
pub mod input_box;
pub mod status_row;
pub mod tag_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | tag bar | input box | history | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // tag chips
            Constraint::Length(3), // bordered input line
            Constraint::Min(0),    // submissions
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    tag_bar::render_tag_bar(frame, app, chunks[1]);
    input_box::render_input_box(frame, app, chunks[2]);
    history::render_history(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Popup last so it floats over the history
    app.popup_area = None;
    if app.mention.session().is_active() {
        autocomplete::render_autocomplete(frame, app, chunks[2]);
    }
}
