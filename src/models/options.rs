use std::str::FromStr;

use thiserror::Error;

use crate::core::IgnorePatterns;

/// Restricts a listing to one kind of entry.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TypeFilter {
    #[default]
    All,
    Files,
    Directories,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a valid filter criteria. Available filters are 'dir' and 'file'")]
pub struct InvalidFilter(pub String);

impl FromStr for TypeFilter {
    type Err = InvalidFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(TypeFilter::Files),
            "dir" => Ok(TypeFilter::Directories),
            other => Err(InvalidFilter(other.to_owned())),
        }
    }
}

/// Display options for one listing.
#[derive(Clone, Debug, Default)]
pub struct ListingOptions {
    /// Include entries whose names begin with '.'
    pub show_all: bool,
    /// Reverse the sorted order
    pub reverse: bool,
    /// Sort by modification time (oldest first) instead of by name
    pub sort_by_time: bool,
    /// Render permissions, size, time and name per line
    pub detailed: bool,
    /// Render sizes with B/KB/MB/... suffixes
    pub human_readable: bool,
    pub type_filter: TypeFilter,
    /// Names matching these patterns are hidden
    pub ignore: Option<IgnorePatterns>,
}
