use std::slice;

use tracing::debug;

use crate::error::ResolveError;
use crate::models::{Entry, ListingOptions, TypeFilter};

use super::render::render_entry;
use super::resolve::resolve;

/// Resolve `path` under `root` and list the result.
pub fn list_path(
    root: &Entry,
    path: &str,
    options: &ListingOptions,
) -> Result<Vec<String>, ResolveError> {
    let target = resolve(root, path)?;
    Ok(list(target, options))
}

/// Output lines for `target`.
///
/// Long listings produce one line per entry; short listings join every name
/// onto a single line. Nothing survives filtering means no lines at all.
pub fn list(target: &Entry, options: &ListingOptions) -> Vec<String> {
    let entries = select_entries(target, options);
    debug!(shown = entries.len(), "entries selected");

    let rendered = entries.into_iter().map(|entry| render_entry(entry, options));
    if options.detailed {
        rendered.collect()
    } else {
        let names: Vec<String> = rendered.collect();
        if names.is_empty() {
            Vec::new()
        } else {
            vec![names.join(" ")]
        }
    }
}

/// Entries to show for `target`, sorted and filtered.
///
/// A directory contributes its immediate children, a file contributes itself.
pub fn select_entries<'a>(target: &'a Entry, options: &ListingOptions) -> Vec<&'a Entry> {
    let candidates = target.children().unwrap_or(slice::from_ref(target));
    let mut entries: Vec<&Entry> = candidates.iter().collect();

    // Stable sort, then reverse the whole sequence so ties flip too.
    if options.sort_by_time {
        entries.sort_by_key(|entry| entry.meta().time_modified);
    } else {
        entries.sort_by(|a, b| a.name().cmp(b.name()));
    }
    if options.reverse {
        entries.reverse();
    }

    entries.retain(|entry| {
        let name = entry.name();

        if !options.show_all && name.starts_with('.') {
            return false;
        }

        if let Some(ignore) = &options.ignore
            && ignore.is_ignored(name)
        {
            return false;
        }

        match options.type_filter {
            TypeFilter::All => true,
            TypeFilter::Files => !entry.is_dir(),
            TypeFilter::Directories => entry.is_dir(),
        }
    });

    entries
}
