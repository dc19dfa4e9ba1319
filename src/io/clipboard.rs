use std::process::Command;

/// Clipboard read access for paste interception.
///
/// A read that is denied or unsupported yields `None`; callers treat that as
/// "no match" and fall back to the default paste.
pub trait Clipboard {
    fn read_text(&mut self) -> Option<String>;
}

/// The system clipboard via `pbpaste` (macOS) or `xclip` (Linux)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Option<String> {
        #[cfg(target_os = "macos")]
        let output = Command::new("pbpaste").output().ok();
        #[cfg(target_os = "linux")]
        let output = Command::new("xclip")
            .args(["-selection", "clipboard", "-o"])
            .output()
            .ok();
        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        let output: Option<std::process::Output> = None;
        let text = output.and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout).ok()
            } else {
                None
            }
        });
        if text.is_none() {
            log::debug!("clipboard read unavailable");
        }
        text
    }
}

/// A fixed clipboard, for tests and non-interactive callers
#[derive(Debug, Default, Clone)]
pub struct StaticClipboard(pub Option<String>);

impl Clipboard for StaticClipboard {
    fn read_text(&mut self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_clipboard_returns_contents() {
        let mut cb = StaticClipboard(Some("item-42".into()));
        assert_eq!(cb.read_text().as_deref(), Some("item-42"));
        assert_eq!(StaticClipboard(None).read_text(), None);
    }
}
