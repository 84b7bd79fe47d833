use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Persisted record of the video identifiers already announced.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub posted: BTreeSet<String>,
    /// Other keys found in the file, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Why a state file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("state file not found")]
    Missing,

    #[error("state file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("failed to read state file: {0}")]
    Io(io::Error),
}

impl State {
    pub fn load(path: &Path) -> Result<Self, StateError> {
        let data = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StateError::Missing,
            _ => StateError::Io(e),
        })?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Load the state, falling back to an empty one on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(state) => {
                info!("Loaded state from {} ({} posted)", path.display(), state.posted.len());
                state
            }
            Err(StateError::Missing) => {
                info!("No state file at {}, starting fresh", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring state file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn is_posted(&self, video_id: &str) -> bool {
        self.posted.contains(video_id)
    }

    pub fn mark_posted(&mut self, video_id: &str) {
        self.posted.insert(video_id.to_string());
    }
}
