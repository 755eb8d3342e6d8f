mod entry;
mod options;

pub use entry::{Entry, Metadata};
pub use options::{InvalidFilter, ListingOptions, TypeFilter};
