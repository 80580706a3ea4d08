use std::path::{Path, PathBuf};
use std::process::Command;

pub use self::test_utils::{execution_time, Run};

mod test_utils;

pub fn case_dir(name: &str) -> PathBuf {
    PathBuf::from("tests").join("cases").join(name)
}

/// Runs the `iocheck` binary against `dir` and collects what it printed.
pub fn run_iocheck(program: &str, dir: &Path) -> anyhow::Result<Run> {
    let output = Command::new(env!("CARGO_BIN_EXE_iocheck"))
        .arg(program)
        .arg(dir)
        .env_remove("RUST_LOG")
        .output()?;
    Run::from_output(output)
}
