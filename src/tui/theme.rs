use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{ItemKind, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub selection_bg: Color,
    pub chip_bg: Color,
    /// Per-kind marker colors for chips and popup rows
    pub kind_colors: HashMap<ItemKind, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut kind_colors = HashMap::new();
        kind_colors.insert(ItemKind::Todo, Color::Rgb(0x44, 0xDD, 0xFF));
        kind_colors.insert(ItemKind::Goal, Color::Rgb(0x44, 0xFF, 0x88));
        kind_colors.insert(ItemKind::Routine, Color::Rgb(0xCC, 0x66, 0xFF));
        kind_colors.insert(ItemKind::Event, Color::Rgb(0xFF, 0xD7, 0x00));

        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            chip_bg: Color::Rgb(0x1E, 0x10, 0x36),
            kind_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the workspace UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "selection_bg" => theme.selection_bg = color,
                    "chip_bg" => theme.chip_bg = color,
                    _ => {}
                }
            }
        }

        for (kind, value) in &ui.kind_colors {
            if let (Some(kind), Some(color)) = (ItemKind::from_label(kind), parse_hex_color(value)) {
                theme.kind_colors.insert(kind, color);
            }
        }

        theme
    }

    /// Marker color for an item kind, falling back to text color
    pub fn kind_color(&self, kind: ItemKind) -> Color {
        self.kind_colors.get(&kind).copied().unwrap_or(self.text)
    }
}
