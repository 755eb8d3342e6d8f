//! `ls` over a directory tree serialized as JSON.
//!
//! The tree is loaded once through a [`source::TreeSource`], a path is
//! resolved against it with [`crate::core::resolve`], and [`crate::core::list`] turns the
//! target into output lines according to [`models::ListingOptions`].

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod source;

use crate::error::Error;
use crate::models::ListingOptions;
use crate::source::TreeSource;

/// Load the tree from `source` and list `path` within it.
pub async fn list_from_source<S: TreeSource + ?Sized>(
    source: &S,
    path: &str,
    options: &ListingOptions,
) -> Result<Vec<String>, Error> {
    let root = source.load().await?;
    Ok(crate::core::list_path(&root, path, options)?)
}
