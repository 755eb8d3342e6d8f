use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jls::cli::Cli;
use jls::error::Error;
use jls::source::JsonFileSource;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let options = match cli.listing_options() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("jls: {err:#}");
            return ExitCode::from(2);
        }
    };

    let source = JsonFileSource::new(&cli.json_file);
    let lines = match jls::list_from_source(&source, cli.target_path(), &options).await {
        Ok(lines) => lines,
        Err(Error::Load(err)) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
        Err(err @ Error::Resolve(_)) => {
            eprintln!("jls: {err}");
            return ExitCode::from(2);
        }
    };

    let mut stdout = io::stdout().lock();
    for line in &lines {
        if let Err(err) = writeln!(stdout, "{line}") {
            eprintln!("jls: {err}");
            return ExitCode::from(1);
        }
    }

    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("JLS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
