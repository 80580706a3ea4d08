use std::io::Write;
use std::path::Path;

use crate::{Error, Outcome, Result, TestCase};

/// Writes the line-oriented console report.
///
/// Every line the user sees goes through here, so tests can point a
/// [Reporter] at a `Vec<u8>` and inspect exactly what a run printed.
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    pub fn missing_directory(&mut self, dir: &Path) -> Result<()> {
        writeln!(self.out, "Directory {} doesn't exist.", dir.display())?;
        Ok(())
    }

    pub fn outcome(&mut self, case: &TestCase, outcome: &Outcome) -> Result<()> {
        let name = case.name();
        match outcome {
            Outcome::Passed { elapsed } => writeln!(
                self.out,
                "test {name} passed! Execution time: {:.4} s",
                elapsed.as_secs_f64()
            )?,
            Outcome::Failed => writeln!(self.out, "test {name} failed :(")?,
            Outcome::MissingOutput => {
                writeln!(self.out, "Output File for test {name} not found")?
            }
        }
        Ok(())
    }

    pub fn fatal(&mut self, err: &Error) -> Result<()> {
        writeln!(self.out, "{err}")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Counts of each [Outcome] seen during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Passed { .. } => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::MissingOutput => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }
}
