use std::fmt;
use std::fs::File;
use std::io;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::{Error, Result, TestCase};

/// The program under test: an executable plus the arguments it is always
/// invoked with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    command: String,
    executable: String,
    args: Vec<String>,
}

/// What one run of the [Program] produced.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub stdout: Vec<u8>,
    pub elapsed: Duration,
}

impl Program {
    /// Splits `command` into words the way a POSIX shell would, so
    /// `"python3 'my solver.py'"` runs `python3` with one argument.
    pub fn parse(command: &str) -> Result<Self> {
        let invalid = || Error::InvalidCommand {
            command: command.to_string(),
        };

        let mut words = shlex::split(command).ok_or_else(invalid)?.into_iter();
        let executable = words.next().ok_or_else(invalid)?;

        Ok(Program {
            command: command.to_string(),
            executable,
            args: words.collect(),
        })
    }

    /// Runs the program once with `<case>.in` as its standard input and
    /// captures its standard output. Standard error is passed through.
    ///
    /// Failing to start the program, or the program exiting unsuccessfully,
    /// is an error for the whole run rather than for this case.
    pub fn run(&self, case: &TestCase) -> Result<TestResult> {
        let input_path = case.input_path();
        let input = File::open(&input_path).map_err(|source| Error::ReadInput {
            path: input_path,
            source,
        })?;

        tracing::debug!(program = %self, case = %case.name(), "spawning");

        let start = Instant::now();
        let output = Command::new(&self.executable)
            .args(&self.args)
            .stdin(input)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| self.launch_error(source))?;
        let elapsed = start.elapsed();

        if !output.status.success() {
            return Err(Error::ProgramFailed {
                program: self.command.clone(),
                status: output.status,
            });
        }

        Ok(TestResult {
            stdout: output.stdout,
            elapsed,
        })
    }

    fn launch_error(&self, source: io::Error) -> Error {
        let program = self.command.clone();
        match source.kind() {
            io::ErrorKind::NotFound => Error::ProgramNotFound { program },
            _ => Error::Launch { program, source },
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}
