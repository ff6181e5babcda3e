use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use indexmap::IndexMap;
use tracing::debug;

/// Trait for templates that render to a generated text file
pub trait GeneratedFile {
    /// Logical file name, without suffix
    fn name(&self) -> String;

    /// Render the file as an ordered sequence of lines
    fn lines(&self) -> Vec<String>;

    /// Render the file content, each line terminated by a newline
    fn render(&self) -> String {
        render_lines(&self.lines())
    }
}

/// Join lines into file content, terminating every line with `\n`.
pub fn render_lines(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    std::fs::write(path, render_lines(lines))
        .wrap_err_with(|| format!("Failed to write {}", path.display()))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was created or rewritten
    Written,
    /// File was left untouched (already exists, overwrite not requested)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always rewrite (protected artifacts)
    Always,
    /// Only create if the file doesn't exist (user-editable stubs)
    IfMissing,
}

impl Overwrite {
    /// Map the user's `--overwrite` flag to a policy.
    pub fn from_flag(overwrite: bool) -> Self {
        if overwrite {
            Self::Always
        } else {
            Self::IfMissing
        }
    }
}

/// Per-file outcome reported by [`materialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Full target path
    pub path: PathBuf,
    /// File name including suffix (e.g. `Foo.C`)
    pub file_name: String,
    pub result: WriteResult,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    lines: Vec<String>,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file with the given path and lines (default policy: always overwrite)
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
            overwrite: Overwrite::Always,
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Check if a regular file already exists at the path
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write the file according to its overwrite policy
    pub fn write(&self) -> Result<WriteResult> {
        match self.overwrite {
            Overwrite::Always => {
                write_lines(&self.path, &self.lines)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_lines(&self.path, &self.lines)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Write every `name -> lines` entry to `dir/<name><suffix>`.
///
/// Missing files are created. Existing files are rewritten only under
/// [`Overwrite::Always`]; otherwise they are left untouched and reported as
/// [`WriteResult::Skipped`]. Repeated calls with [`Overwrite::IfMissing`] are
/// no-ops after the first.
pub fn materialize(
    files: &IndexMap<String, Vec<String>>,
    suffix: &str,
    dir: &Path,
    overwrite: Overwrite,
) -> Result<Vec<WriteOutcome>> {
    let mut outcomes = Vec::with_capacity(files.len());

    for (name, lines) in files {
        let file_name = format!("{}{}", name, suffix);
        let path = dir.join(&file_name);
        let result = File::new(&path, lines.clone())
            .with_overwrite(overwrite)
            .write()?;

        debug!(path = %path.display(), ?result, "materialized");
        outcomes.push(WriteOutcome {
            path,
            file_name,
            result,
        });
    }

    Ok(outcomes)
}

/// Add the owner execute bit to an existing file's permissions.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .wrap_err_with(|| format!("Failed to stat {}", path.display()))?
        .permissions();
    perms.set_mode(perms.mode() | 0o100);
    std::fs::set_permissions(path, perms)
        .wrap_err_with(|| format!("Failed to mark {} executable", path.display()))
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
