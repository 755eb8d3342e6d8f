use tracing::debug;

use crate::error::ResolveError;
use crate::models::Entry;

/// Follow a slash-separated `path` from `root`.
///
/// Leading, trailing and repeated slashes and `.` segments are ignored, so an
/// empty path resolves to `root`. A missing name and a descent into a file
/// both fail with [`ResolveError::NotFound`] carrying the whole input path.
pub fn resolve<'a>(root: &'a Entry, path: &str) -> Result<&'a Entry, ResolveError> {
    let not_found = || ResolveError::NotFound {
        path: path.to_owned(),
    };

    let mut current = root;
    for segment in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
        let children = current.children().unwrap_or_default();
        current = children
            .iter()
            .find(|child| child.name() == segment)
            .ok_or_else(not_found)?;
        debug!(segment, dir = current.is_dir(), "descended");
    }

    Ok(current)
}
