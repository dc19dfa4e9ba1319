use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture, Event, KeyEventKind, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use log::{info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use serde::Serialize;

use crate::engine::MentionInput;
use crate::io::clipboard::{Clipboard, SystemClipboard};
use crate::io::watcher::WorkspaceWatcher;
use crate::io::workspace_io::{load_workspace, resolve_workspace_path};
use crate::model::{Candidate, ContextTag, EngineConfig, Workspace};

use super::input;
use super::render;
use super::theme::Theme;

/// Text and tags sent with Enter while the popup is closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub text: String,
    pub tags: Vec<ContextTag>,
}

/// Main application state. The app is the host: it owns the text buffer and
/// cursor, and drives the mention engine with them.
pub struct App {
    pub workspace_path: Option<PathBuf>,
    pub items: Vec<Candidate>,
    pub mention: MentionInput,
    /// Single-line input buffer
    pub edit_buffer: String,
    /// Cursor byte offset into `edit_buffer`
    pub edit_cursor: usize,
    pub theme: Theme,
    pub should_quit: bool,
    pub submissions: Vec<Submission>,
    /// One-shot message for the status row, cleared on the next key
    pub status: Option<String>,
    pub clipboard: Box<dyn Clipboard>,
    pub mouse_enabled: bool,
    /// Where the input text starts on screen (set during render)
    pub input_origin: Option<(u16, u16)>,
    /// Input box area (set during render, for mouse hit-testing)
    pub input_area: Option<Rect>,
    /// Popup area (set during render, for mouse hit-testing)
    pub popup_area: Option<Rect>,
}

impl App {
    pub fn new(config: EngineConfig, items: Vec<Candidate>) -> Self {
        App {
            workspace_path: None,
            items,
            mention: MentionInput::new(config.mentions.clone()),
            edit_buffer: String::new(),
            edit_cursor: 0,
            theme: Theme::from_config(&config.ui),
            should_quit: false,
            submissions: Vec::new(),
            status: None,
            clipboard: Box::new(SystemClipboard),
            mouse_enabled: config.ui.mouse,
            input_origin: None,
            input_area: None,
            popup_area: None,
        }
    }

    pub fn from_workspace(ws: Workspace) -> Self {
        let mut app = App::new(ws.config, ws.items);
        app.workspace_path = Some(ws.path);
        app
    }

    /// Re-run mention detection for the current buffer and cursor
    pub fn refresh_mentions(&mut self) {
        self.mention
            .text_changed(&self.edit_buffer, self.edit_cursor, &self.items);
    }

    /// Give the input focus and pick up a mention already under the cursor
    pub fn focus_input(&mut self) {
        self.mention.focus();
        self.refresh_mentions();
    }

    /// Record the current text + tags and start over
    pub fn submit(&mut self) {
        if self.edit_buffer.trim().is_empty() && self.mention.tags().is_empty() {
            return;
        }
        let submission = Submission {
            text: std::mem::take(&mut self.edit_buffer),
            tags: self.mention.tags().to_vec(),
        };
        info!(
            "submitted {:?} with {} tags",
            submission.text,
            submission.tags.len()
        );
        self.submissions.push(submission);
        self.edit_cursor = 0;
        self.mention.clear_all_tags();
        self.refresh_mentions();
    }

    /// Reload items from the workspace file after it changed on disk.
    /// A file that fails to parse keeps the previous items.
    pub fn reload_items(&mut self) {
        let path = match &self.workspace_path {
            Some(p) => p.clone(),
            None => return,
        };
        match load_workspace(&path) {
            Ok(ws) => {
                self.items = ws.items;
                self.status = Some(format!("reloaded {} items", self.items.len()));
                self.refresh_mentions();
            }
            Err(e) => {
                warn!("reload failed: {}", e);
                self.status = Some(format!("reload failed: {}", e));
            }
        }
    }
}

/// Run the TUI application
pub fn run(workspace: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let path = resolve_workspace_path(workspace)?;
    let ws = load_workspace(&path)?;
    let kitty_pref = ws.config.ui.kitty_keyboard;
    let mut app = App::from_workspace(ws);

    // A watcher failure only costs live reload
    let watcher = match WorkspaceWatcher::start(&path) {
        Ok(w) => Some(w),
        Err(e) => {
            warn!("not watching {}: {}", path.display(), e);
            None
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste, EnableFocusChange)?;
    if app.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    // Kitty protocol lets Shift+Enter arrive as a distinct key
    let kitty = kitty_pref != Some(false) && supports_keyboard_enhancement().unwrap_or(false);
    if kitty {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    if kitty {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableFocusChange,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    for submission in &app.submissions {
        println!("{}", serde_json::to_string(submission)?);
    }

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&WorkspaceWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::FocusLost => app.mention.blur(),
                Event::FocusGained => app.focus_input(),
                _ => {}
            }
        }

        if watcher.is_some_and(|w| w.poll()) {
            app.reload_items();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
