use std::fs;
use std::io;
use std::time::Duration;

use crate::execution::TestResult;
use crate::{Error, Result, TestCase};

/// How a single test case ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed { elapsed: Duration },
    Failed,
    /// The case has no `.out` file, so it was skipped.
    MissingOutput,
}

/// Reads `<case>.out`, or `None` when there is no such file.
pub fn read_expected(case: &TestCase) -> Result<Option<Vec<u8>>> {
    let path = case.output_path();
    match fs::read(&path) {
        Ok(expected) => Ok(Some(expected)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::ReadExpected { path, source }),
    }
}

/// Compares the expected output against what the program printed.
///
/// The comparison is exact: no line ending or whitespace normalisation.
/// Output that is not valid UTF-8 never passes.
pub fn evaluate(case: &TestCase, expected: &[u8], result: &TestResult) -> Outcome {
    let Ok(actual) = std::str::from_utf8(&result.stdout) else {
        tracing::warn!(case = %case.name(), "program output is not valid utf-8");
        return Outcome::Failed;
    };
    let Ok(expected) = std::str::from_utf8(expected) else {
        tracing::warn!(case = %case.name(), "expected output is not valid utf-8");
        return Outcome::Failed;
    };

    if expected == actual {
        Outcome::Passed {
            elapsed: result.elapsed,
        }
    } else {
        Outcome::Failed
    }
}
