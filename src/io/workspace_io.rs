use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{Candidate, EngineConfig, Workspace};

/// Name of the workspace file looked up by [`discover_workspace`]
pub const WORKSPACE_FILE: &str = "mentions.toml";

/// Error type for workspace I/O operations
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("no mentions.toml found in this directory or any parent")]
    NotFound,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    TomlError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not parse {path}: {source}")]
    JsonError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("duplicate item id '{0}'")]
    DuplicateId(String),
}

/// On-disk shape of a workspace file
#[derive(Debug, Default, Serialize, Deserialize)]
struct WorkspaceFile {
    #[serde(flatten)]
    config: EngineConfig,
    #[serde(default)]
    items: Vec<Candidate>,
}

/// Walk up from `start` looking for a `mentions.toml`.
pub fn discover_workspace(start: &Path) -> Result<PathBuf, WorkspaceError> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(WORKSPACE_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            return Err(WorkspaceError::NotFound);
        }
    }
}

/// The explicit path if one was given, else the nearest mentions.toml above
/// the current directory.
pub fn resolve_workspace_path(explicit: Option<&Path>) -> Result<PathBuf, WorkspaceError> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().map_err(|e| WorkspaceError::ReadError {
                path: PathBuf::from("."),
                source: e,
            })?;
            discover_workspace(&cwd)
        }
    }
}

/// Load a workspace file. `.json` files are read as JSON, anything else as TOML.
pub fn load_workspace(path: &Path) -> Result<Workspace, WorkspaceError> {
    let text = fs::read_to_string(path).map_err(|e| WorkspaceError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let file = parse_workspace(path, &text)?;
    check_unique_ids(&file.items)?;
    debug!("loaded {} items from {}", file.items.len(), path.display());
    Ok(Workspace {
        path: path.to_path_buf(),
        config: file.config,
        items: file.items,
    })
}

fn parse_workspace(path: &Path, text: &str) -> Result<WorkspaceFile, WorkspaceError> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(text).map_err(|e| WorkspaceError::JsonError {
            path: path.to_path_buf(),
            source: e,
        })
    } else {
        toml::from_str(text).map_err(|e| WorkspaceError::TomlError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Ids must be unique: paste interception and tag dedup key on them.
fn check_unique_ids(items: &[Candidate]) -> Result<(), WorkspaceError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(WorkspaceError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}
