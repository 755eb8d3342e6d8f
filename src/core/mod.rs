mod ignore;
mod listing;
mod render;
mod resolve;

pub use ignore::IgnorePatterns;
pub use listing::{list, list_path, select_entries};
pub use render::{format_timestamp, human_readable_size, render_entry};
pub use resolve::resolve;
