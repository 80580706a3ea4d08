use std::process::Output;

pub struct Run {
    pub code: Option<i32>,
    pub stdout: String,
}

impl Run {
    pub fn from_output(output: Output) -> anyhow::Result<Self> {
        Ok(Run {
            code: output.status.code(),
            stdout: String::from_utf8(output.stdout)?,
        })
    }

    /// Report lines sorted, since cases run in directory listing order.
    pub fn sorted_lines(&self) -> Vec<&str> {
        let mut lines: Vec<_> = self.stdout.lines().collect();
        lines.sort_unstable();
        lines
    }

    pub fn line_starting_with(&self, prefix: &str) -> Option<&str> {
        self.stdout.lines().find(|line| line.starts_with(prefix))
    }
}

/// Pulls the seconds out of a `passed!` line, checking the format on the way.
pub fn execution_time(line: &str) -> anyhow::Result<f64> {
    let (_, time) = line
        .split_once("Execution time: ")
        .ok_or_else(|| anyhow::anyhow!("no execution time in {line:?}"))?;
    let secs = time
        .strip_suffix(" s")
        .ok_or_else(|| anyhow::anyhow!("no unit in {line:?}"))?;

    let (_, decimals) = secs
        .split_once('.')
        .ok_or_else(|| anyhow::anyhow!("no decimals in {line:?}"))?;
    anyhow::ensure!(decimals.len() == 4, "expected 4 decimals in {line:?}");

    Ok(secs.parse()?)
}
