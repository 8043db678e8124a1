use std::io;
use std::process::ExitCode;

use clap::Parser;
use spmat::cli::{run, Cli};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install log subscriber: {err}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&cli, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
