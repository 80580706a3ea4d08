mod discovery;
mod error;
mod evaluation;
mod execution;
mod report;

use std::io::Write;
use std::path::Path;

pub use discovery::{discover, TestCase, INPUT_SUFFIX, OUTPUT_SUFFIX};
pub use error::{Error, Result};
pub use evaluation::{evaluate, read_expected, Outcome};
pub use execution::{Program, TestResult};
pub use report::{Reporter, Summary};

/// Runs every test case found in `dir` against the program `command`, one at
/// a time, in the order they were discovered.
///
/// Recoverable problems are written to `reporter` and the run continues. The
/// first error that makes further runs pointless is returned; cases after it
/// are not run. `command` is only parsed once a case needs the program.
pub fn run<W: Write>(command: &str, dir: &Path, reporter: &mut Reporter<W>) -> Result<Summary> {
    let cases = discover(dir, reporter)?;
    tracing::debug!(count = cases.len(), dir = %dir.display(), "discovered test cases");

    let mut program: Option<Program> = None;
    let mut summary = Summary::default();
    for case in &cases {
        let outcome = match read_expected(case)? {
            Some(expected) => {
                let program = match &mut program {
                    Some(program) => program,
                    slot @ None => slot.insert(Program::parse(command)?),
                };
                let result = program.run(case)?;
                evaluate(case, &expected, &result)
            }
            None => Outcome::MissingOutput,
        };

        reporter.outcome(case, &outcome)?;
        summary.record(&outcome);
    }

    tracing::info!(
        total = summary.total(),
        passed = summary.passed,
        failed = summary.failed,
        skipped = summary.skipped,
        "run finished"
    );

    Ok(summary)
}
