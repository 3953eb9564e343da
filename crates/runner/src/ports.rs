//! Port for loading the three roster data sets.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use opsmgr_shared::{GameDataMaster, OperatorMasterData, OperatorUserData};

/// Data could not be read or decoded.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Reading the underlying file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The content is not valid for its record type.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl SourceError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse(path: impl AsRef<Path>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn load_master(&self) -> Result<OperatorMasterData, SourceError>;

    /// `None` when no game data is configured; names then resolve to "Unknown".
    async fn load_game_data(&self) -> Result<Option<GameDataMaster>, SourceError>;

    async fn load_user(&self) -> Result<OperatorUserData, SourceError>;
}
