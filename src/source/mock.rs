use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::LoadError;
use crate::models::Entry;

use super::TreeSource;

#[derive(Clone, Debug)]
enum Response {
    Tree(Entry),
    Missing(PathBuf),
}

/// In-memory source that counts how often it was loaded.
#[derive(Clone)]
pub struct MockSource {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    response: Response,
    loads: usize,
}

impl MockSource {
    pub fn with_tree(tree: Entry) -> Self {
        Self::with_response(Response::Tree(tree))
    }

    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self::with_response(Response::Missing(path.into()))
    }

    fn with_response(response: Response) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { response, loads: 0 })),
        }
    }

    pub fn loads(&self) -> usize {
        self.inner.lock().expect("mock source lock").loads
    }
}

#[async_trait]
impl TreeSource for MockSource {
    async fn load(&self) -> Result<Entry, LoadError> {
        let mut inner = self.inner.lock().expect("mock source lock");
        inner.loads += 1;

        match &inner.response {
            Response::Tree(tree) => Ok(tree.clone()),
            Response::Missing(path) => Err(LoadError::Missing { path: path.clone() }),
        }
    }
}
