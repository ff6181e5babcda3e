//! Raw configuration from the command line and `rootgen.toml`.

use std::{path::Path, str::FromStr};

use rootgen_core::normalize_dir;
use serde::Deserialize;

use crate::{
    ClassSpec, DirectoryPaths, Error, FunctionSpec, LibraryName, Project, Result,
    validate::check_collisions,
};

/// Unvalidated inputs. Every field is optional until [`ProjectConfig::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    pub lib_name: Option<String>,
    pub classes: Vec<String>,
    /// Raw `<TYPE>,<NAME>` tokens
    pub functions: Vec<String>,
    pub source_dir: Option<String>,
    pub macros_dir: Option<String>,
    pub build_dir: Option<String>,
    pub install_dir: Option<String>,
    pub work_dir: Option<String>,
    pub overwrite: bool,
}

impl ProjectConfig {
    /// Layer `overrides` on top of `self`.
    ///
    /// Scalar values from `overrides` win; class and function lists are
    /// concatenated with `self`'s entries first.
    pub fn merge(mut self, overrides: ProjectConfig) -> ProjectConfig {
        self.lib_name = overrides.lib_name.or(self.lib_name);
        self.classes.extend(overrides.classes);
        self.functions.extend(overrides.functions);
        self.source_dir = overrides.source_dir.or(self.source_dir);
        self.macros_dir = overrides.macros_dir.or(self.macros_dir);
        self.build_dir = overrides.build_dir.or(self.build_dir);
        self.install_dir = overrides.install_dir.or(self.install_dir);
        self.work_dir = overrides.work_dir.or(self.work_dir);
        self.overwrite |= overrides.overwrite;
        self
    }

    /// Validate into a [`Project`]. Performs no I/O.
    ///
    /// Checks run in order: required values, function token syntax, at least
    /// one symbol, then name collisions.
    pub fn resolve(self) -> Result<Project> {
        let lib_name = required(self.lib_name, "--lib_name")?;
        let source = required(self.source_dir, "--source_dir")?;
        let macros = required(self.macros_dir, "--macros_dir")?;
        let build = required(self.build_dir, "--build_dir")?;
        let install = required(self.install_dir, "--install_dir")?;

        let functions = self
            .functions
            .iter()
            .map(|token| token.parse::<FunctionSpec>())
            .collect::<Result<Vec<_>>>()?;

        if self.classes.is_empty() && functions.is_empty() {
            return Err(Box::new(Error::NoSymbols));
        }

        let classes = self
            .classes
            .into_iter()
            .map(|name| {
                if name.is_empty() {
                    Err(Error::empty_name("class name", name))
                } else {
                    Ok(ClassSpec::new(name))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let lib_name = LibraryName::new(lib_name)?;
        let dirs = DirectoryPaths {
            source: normalize_dir(&source),
            macros: normalize_dir(&macros),
            build: normalize_dir(&build),
            install: normalize_dir(&install),
            work: normalize_dir(self.work_dir.as_deref().unwrap_or(".")),
        };
        check_collisions(&lib_name, &classes, &functions, &dirs)?;

        Ok(Project {
            lib_name,
            classes,
            functions,
            dirs,
            overwrite: self.overwrite,
        })
    }
}

/// A blank value counts as absent: an empty directory would resolve to the
/// process's working directory.
fn required(value: Option<String>, flag: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::missing_argument(flag))
}

/// Root schema for `rootgen.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectToml {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub dirs: DirsSection,
}

/// `[project]` table
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    pub lib_name: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub overwrite: bool,
}

/// `[dirs]` table
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirsSection {
    pub source: Option<String>,
    pub macros: Option<String>,
    pub build: Option<String>,
    pub install: Option<String>,
    pub work: Option<String>,
}

impl FromStr for ProjectToml {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "rootgen.toml")
    }
}

impl ProjectToml {
    /// Open and parse a project file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a project file from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    pub fn into_config(self) -> ProjectConfig {
        ProjectConfig {
            lib_name: self.project.lib_name,
            classes: self.project.classes,
            functions: self.project.functions,
            source_dir: self.dirs.source,
            macros_dir: self.dirs.macros,
            build_dir: self.dirs.build,
            install_dir: self.dirs.install,
            work_dir: self.dirs.work,
            overwrite: self.project.overwrite,
        }
    }
}
