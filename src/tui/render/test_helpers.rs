use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Candidate, EngineConfig, ItemKind};
use crate::tui::app::App;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 16;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Items shared by the render tests
pub fn sample_items() -> Vec<Candidate> {
    vec![
        Candidate::new("t-1", "John", ItemKind::Todo),
        Candidate::new("g-1", "Joanna", ItemKind::Goal),
        Candidate::new("e-7", "Apple Pie", ItemKind::Event).with_category("food"),
        Candidate::new("r-3", "Stretch", ItemKind::Routine),
    ]
}

/// An app over `sample_items` with default config
pub fn sample_app() -> App {
    App::new(EngineConfig::default(), sample_items())
}

/// Put `text` in the buffer with the cursor at the end, then run detection
pub fn app_with_text(text: &str) -> App {
    let mut app = sample_app();
    app.edit_buffer = text.to_string();
    app.edit_cursor = text.len();
    app.refresh_mentions();
    app
}
