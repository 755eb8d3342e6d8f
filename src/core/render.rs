use std::fmt::Display;

use chrono::{Local, TimeZone};

use crate::models::{Entry, ListingOptions};

const SIZE_SUFFIXES: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
const SIZE_WIDTH: usize = 10;
const TIME_FORMAT: &str = "%b %d %H:%M";

/// `1536` -> `"1.5 KB"`. Always one decimal digit, base 1024, capped at PB.
pub fn human_readable_size(size: u64) -> String {
    let mut value = size as f64;
    let mut suffix = 0;
    while value >= 1024.0 && suffix < SIZE_SUFFIXES.len() - 1 {
        value /= 1024.0;
        suffix += 1;
    }
    format!("{value:.1} {}", SIZE_SUFFIXES[suffix])
}

/// Render `secs` as `Mon DD HH:MM` in `tz`.
pub fn format_timestamp<Tz>(secs: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_opt(secs, 0).earliest() {
        Some(time) => time.format(TIME_FORMAT).to_string(),
        None => "??? ?? ??:??".to_owned(),
    }
}

/// One listing line for `entry`: the bare name, or the long form
/// `<permissions> <size> <time> <name>` with the size right-aligned.
pub fn render_entry(entry: &Entry, options: &ListingOptions) -> String {
    if options.detailed {
        render_detailed(entry, options.human_readable, &Local)
    } else {
        entry.name().to_owned()
    }
}

pub(crate) fn render_detailed<Tz>(entry: &Entry, human_readable: bool, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let meta = entry.meta();
    let size = if human_readable {
        human_readable_size(meta.size)
    } else {
        meta.size.to_string()
    };

    format!(
        "{} {:>width$} {} {}",
        meta.permissions,
        size,
        format_timestamp(meta.time_modified, tz),
        meta.name,
        width = SIZE_WIDTH
    )
}
