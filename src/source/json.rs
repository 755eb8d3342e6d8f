use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::error::LoadError;
use crate::models::Entry;

use super::TreeSource;

/// Default location of the backing file, relative to the working directory.
pub const DEFAULT_JSON_FILE: &str = "data/structure.json";

/// Reads the tree from a JSON document on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_JSON_FILE)
    }
}

#[async_trait]
impl TreeSource for JsonFileSource {
    async fn load(&self) -> Result<Entry, LoadError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => LoadError::Missing {
                    path: self.path.clone(),
                },
                _ => LoadError::Read {
                    path: self.path.clone(),
                    source,
                },
            })?;

        let root: Entry = serde_json::from_str(&text).map_err(LoadError::InvalidJson)?;
        info!(path = %self.path.display(), root = root.name(), "loaded tree");
        Ok(root)
    }
}
