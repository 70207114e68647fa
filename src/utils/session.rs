use std::fs;
use std::path::{Path, PathBuf};

use eyre::Result;
use log::{debug, info, warn};

use crate::models::session::SessionState;

/// Session state persisted between invocations, one JSON file per user.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored session; a missing or unreadable file yields the defaults.
    pub fn load(&self) -> SessionState {
        if !self.path.exists() {
            debug!("no session at {}, starting fresh", self.path.display());
            return SessionState::default();
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(state) => {
                    debug!("loaded session from {}", self.path.display());
                    state
                }
                Err(e) => {
                    warn!(
                        "ignoring corrupt session file {}: {}",
                        self.path.display(),
                        e
                    );
                    SessionState::default()
                }
            },
            Err(e) => {
                warn!("failed to read session {}: {}", self.path.display(), e);
                SessionState::default()
            }
        }
    }

    pub fn save(&self, state: &SessionState) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            info!("created session directory: {}", parent.display());
        }

        fs::write(&self.path, serde_json::to_string_pretty(state)?)?;
        debug!("saved session to {}", self.path.display());
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!("cleared session at {}", self.path.display());
        }
        Ok(())
    }
}
