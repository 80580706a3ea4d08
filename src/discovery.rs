use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::report::Reporter;
use crate::{Error, Result};

pub const INPUT_SUFFIX: &str = ".in";
pub const OUTPUT_SUFFIX: &str = ".out";

/// A test case is a base name inside a test directory.
///
/// The input file `<dir>/<name>.in` is known to exist once a case has been
/// discovered, the expected output `<dir>/<name>.out` may or may not.
///
/// The base name is kept as an [OsString] so file names that are not valid
/// UTF-8 still map back to the files on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    dir: PathBuf,
    name: OsString,
}

impl TestCase {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<OsString>) -> Self {
        TestCase {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// The base name, without directory or suffix. This is what reports show.
    pub fn name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    pub fn input_path(&self) -> PathBuf {
        self.path_with_suffix(INPUT_SUFFIX)
    }

    pub fn output_path(&self) -> PathBuf {
        self.path_with_suffix(OUTPUT_SUFFIX)
    }

    fn path_with_suffix(&self, suffix: &str) -> PathBuf {
        let mut file_name = self.name.clone();
        file_name.push(suffix);
        self.dir.join(file_name)
    }
}

/// Lists the test cases in `dir`, in directory listing order.
///
/// A case exists for every regular file ending in `.in`, including a file
/// named just `.in` (its base name is empty). A missing `dir` is reported
/// through `reporter` and yields no cases.
pub fn discover<W: Write>(dir: &Path, reporter: &mut Reporter<W>) -> Result<Vec<TestCase>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            reporter.missing_directory(dir)?;
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(Error::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let read_dir_err = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut cases = Vec::new();
    for entry in entries {
        let entry = entry.map_err(read_dir_err)?;
        let file_name = entry.file_name();

        let Some(name) = strip_input_suffix(&file_name) else {
            continue;
        };
        // follows symlinks, a `foo.in/` directory is not a test case
        if !entry.path().is_file() {
            continue;
        }

        tracing::debug!(name = %name.to_string_lossy(), "discovered test case");
        cases.push(TestCase::new(dir, name));
    }

    Ok(cases)
}

#[cfg(unix)]
fn strip_input_suffix(file_name: &OsStr) -> Option<&OsStr> {
    use std::os::unix::ffi::OsStrExt;

    file_name
        .as_bytes()
        .strip_suffix(INPUT_SUFFIX.as_bytes())
        .map(OsStr::from_bytes)
}

#[cfg(not(unix))]
fn strip_input_suffix(file_name: &OsStr) -> Option<&OsStr> {
    let Some(utf8) = file_name.to_str() else {
        if file_name.to_string_lossy().ends_with(INPUT_SUFFIX) {
            tracing::warn!(?file_name, "skipping input file with a non utf-8 name");
        }
        return None;
    };
    utf8.strip_suffix(INPUT_SUFFIX).map(OsStr::new)
}
