use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::IgnorePatterns;
use crate::models::{ListingOptions, TypeFilter};
use crate::source::DEFAULT_JSON_FILE;

#[derive(Parser, Debug)]
#[command(name = "jls")]
#[command(about = "List the contents of a directory tree stored as JSON", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Path to list inside the JSON structure (defaults to the root)
    pub path: Option<String>,

    /// Long listing format
    #[arg(short = 'l', long = "long")]
    pub long: bool,

    /// Include entries whose names begin with a dot (.)
    #[arg(short = 'A', long)]
    pub all: bool,

    /// Reverse the order of the sort
    #[arg(short, long)]
    pub reverse: bool,

    /// Sort by modification time, oldest first
    #[arg(short, long)]
    pub time: bool,

    /// Display file sizes in human-readable format
    #[arg(short = 'h', long)]
    pub human_readable: bool,

    /// Show only files or only directories
    #[arg(long, value_name = "file|dir", value_parser = TypeFilter::from_str)]
    pub filter: Option<TypeFilter>,

    /// Hide entries matching a shell pattern ('|' separates alternatives)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// JSON file containing the directory structure
    #[arg(long, env = "JLS_JSON_FILE", default_value = DEFAULT_JSON_FILE)]
    pub json_file: PathBuf,

    /// Print help
    #[arg(short = '?', long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    pub fn target_path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    pub fn listing_options(&self) -> anyhow::Result<ListingOptions> {
        let ignore = if self.ignore.is_empty() {
            None
        } else {
            Some(IgnorePatterns::new(&self.ignore)?)
        };

        Ok(ListingOptions {
            show_all: self.all,
            reverse: self.reverse,
            sort_by_time: self.time,
            detailed: self.long,
            human_readable: self.human_readable,
            type_filter: self.filter.unwrap_or_default(),
            ignore,
        })
    }
}
