pub mod clipboard;
pub mod watcher;
pub mod workspace_io;
