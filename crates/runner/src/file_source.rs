//! JSON-file implementation of [`RosterSource`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use opsmgr_shared::{GameDataMaster, OperatorMasterData, OperatorUserData};

use crate::config::RunnerConfig;
use crate::ports::{RosterSource, SourceError};

/// Reads the roster from JSON files on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    master_path: PathBuf,
    user_path: PathBuf,
    game_data_path: Option<PathBuf>,
}

impl JsonFileSource {
    pub fn new(
        master_path: impl Into<PathBuf>,
        user_path: impl Into<PathBuf>,
        game_data_path: Option<PathBuf>,
    ) -> Self {
        Self {
            master_path: master_path.into(),
            user_path: user_path.into(),
            game_data_path,
        }
    }

    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new(
            config.master_path.clone(),
            config.user_path.clone(),
            config.game_data_path.clone(),
        )
    }
}

#[async_trait]
impl RosterSource for JsonFileSource {
    async fn load_master(&self) -> Result<OperatorMasterData, SourceError> {
        let data: OperatorMasterData = read_json(&self.master_path).await?;
        debug!(
            path = %self.master_path.display(),
            version = %data.version,
            operators = data.operators.len(),
            "Loaded master data"
        );
        Ok(data)
    }

    async fn load_game_data(&self) -> Result<Option<GameDataMaster>, SourceError> {
        let Some(path) = &self.game_data_path else {
            return Ok(None);
        };
        read_json(path).await.map(Some)
    }

    async fn load_user(&self) -> Result<OperatorUserData, SourceError> {
        match tokio::fs::read_to_string(&self.user_path).await {
            Ok(content) => decode(&self.user_path, &content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    path = %self.user_path.display(),
                    "No user data file, starting with an empty roster"
                );
                Ok(OperatorUserData::default())
            }
            Err(e) => Err(SourceError::io(&self.user_path, e)),
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SourceError::io(path, e))?;
    decode(path, &content)
}

fn decode<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T, SourceError> {
    serde_json::from_str(content).map_err(|e| SourceError::parse(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MASTER: &str = r#"{
        "version": "2.1.0",
        "operators": {
            "R001": {"code": "R001", "rarity": "☆☆☆☆☆", "class": 4}
        }
    }"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_all_three_files() {
        let dir = TempDir::new().unwrap();
        let master = write(&dir, "master.json", MASTER);
        let user = write(
            &dir,
            "user.json",
            r#"{"operators": {"R001": {"potential": 1}}}"#,
        );
        let game = write(
            &dir,
            "game.json",
            r#"{"race": {"0": {"ja": "", "en": "Cautus", "ch": ""}}}"#,
        );
        let source = JsonFileSource::new(master, user, Some(game));

        let master = source.load_master().await.unwrap();
        assert_eq!(master.version, "2.1.0");
        assert!(master.operators.contains_key("R001"));

        let user = source.load_user().await.unwrap();
        assert_eq!(user.operators["R001"].potential, 1);

        let game = source.load_game_data().await.unwrap().unwrap();
        assert_eq!(game.race_name(0, "en"), "Cautus");
    }

    #[tokio::test]
    async fn missing_user_file_is_empty_roster() {
        let dir = TempDir::new().unwrap();
        let master = write(&dir, "master.json", MASTER);
        let source = JsonFileSource::new(master, dir.path().join("absent.json"), None);

        let user = source.load_user().await.unwrap();
        assert!(user.operators.is_empty());
        assert!(source.load_game_data().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_master_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"), "unused", None);

        let err = source.load_master().await.unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let master = write(&dir, "master.json", "{ not json");
        let user = write(&dir, "user.json", r#"{"operators": []}"#);
        let source = JsonFileSource::new(master, user, None);

        assert!(matches!(
            source.load_master().await.unwrap_err(),
            SourceError::Parse { .. }
        ));
        assert!(matches!(
            source.load_user().await.unwrap_err(),
            SourceError::Parse { .. }
        ));
    }
}
