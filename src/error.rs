use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors that abort a whole run.
///
/// Recoverable conditions (a missing test directory, a missing `.out` file)
/// never become an [Error]; they are reported and the run carries on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid program command `{command}`")]
    InvalidCommand { command: String },

    #[error("Program {program} does not exist")]
    ProgramNotFound { program: String },

    #[error("Program {program} could not be started: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("subprocess error: {program} exited with {status}")]
    ProgramFailed { program: String, status: ExitStatus },

    #[error("unable to read test directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read input file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read output file {}: {source}", path.display())]
    ReadExpected {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to write report: {0}")]
    Report(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
