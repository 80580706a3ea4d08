use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use iocheck::Reporter;
use tracing_subscriber::EnvFilter;

/// Feeds every `<name>.in` file in a directory to a program and checks its
/// output against the matching `<name>.out` file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The program to test, optionally with arguments, e.g. "python3 solve.py"
    program: String,

    /// The directory containing the .in and .out test files
    dir: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // log events go to stderr, stdout is the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());

    match iocheck::run(&cli.program, &cli.dir, &mut reporter) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::debug!(error = ?err, "aborting run");
            reporter.fatal(&err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
