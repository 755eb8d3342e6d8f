mod json;

#[cfg(test)]
mod mock;

pub use json::{DEFAULT_JSON_FILE, JsonFileSource};

#[cfg(test)]
pub use mock::MockSource;

use async_trait::async_trait;

use crate::error::LoadError;
use crate::models::Entry;

/// Supplies the root of the tree to list.
#[async_trait]
pub trait TreeSource: Send + Sync {
    async fn load(&self) -> Result<Entry, LoadError>;
}
