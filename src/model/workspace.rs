use std::path::PathBuf;

use super::candidate::Candidate;
use super::config::EngineConfig;

/// A loaded mentions.toml: engine settings plus the host's item list
#[derive(Debug, Clone)]
pub struct Workspace {
    /// The file this workspace was read from
    pub path: PathBuf,
    pub config: EngineConfig,
    /// Candidates in host order (the order used for the default popup list)
    pub items: Vec<Candidate>,
}
