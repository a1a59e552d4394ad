use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::PersistedState;

const APP_QUALIFIER: &str = "ai";
const APP_ORG: &str = "Windbreaker";
const APP_NAME: &str = "Windbreaker";
const STATE_FILE: &str = "session.json";

/// JSON file holding the signed-in session between launches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Location under the platform config directory, if the platform has one.
    pub fn default_location() -> Option<Self> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| Self::at(dirs.config_dir().join(STATE_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files yield `None`; a corrupt file is not fatal.
    pub fn load(&self) -> Option<PersistedState> {
        let data = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&data) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "ignoring corrupt state file: {err}");
                None
            }
        }
    }

    pub fn save(&self, state: &PersistedState) -> Result<(), PersistSaveError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(self.path(), json)?;
        tracing::debug!(path = %self.path().display(), "session saved");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), PersistSaveError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

pub fn load_persisted_state() -> Option<PersistedState> {
    StateFile::default_location()?.load()
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    StateFile::default_location()
        .ok_or(PersistSaveError::StorageUnavailable)?
        .save(state)
}

pub fn clear_persisted_state() -> Result<(), PersistSaveError> {
    StateFile::default_location()
        .ok_or(PersistSaveError::StorageUnavailable)?
        .clear()
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Session;

    fn state_file(dir: &tempfile::TempDir) -> StateFile {
        StateFile::at(dir.path().join("nested").join(STATE_FILE))
    }

    #[test]
    fn save_then_load_restores_session() {
        let dir = tempfile::tempdir().unwrap();
        let file = state_file(&dir);
        let state = PersistedState {
            session: Session::new("token-123", "Ana"),
        };

        file.save(&state).unwrap();
        assert_eq!(file.load(), Some(state));
    }

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(state_file(&dir).load(), None);
    }

    #[test]
    fn corrupt_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::at(dir.path().join(STATE_FILE));
        fs::write(file.path(), "{not json").unwrap();
        assert_eq!(file.load(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let file = state_file(&dir);
        file.save(&PersistedState::default()).unwrap();

        file.clear().unwrap();
        assert!(!file.path().exists());
        file.clear().unwrap();
    }
}
