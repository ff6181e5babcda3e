//! Validated inputs for a generation run.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{Error, Result};

/// A class to scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpec {
    pub name: String,
}

impl ClassSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A zero-argument function to scaffold, parsed from `<TYPE>,<NAME>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    pub return_type: String,
    pub name: String,
}

impl FunctionSpec {
    pub fn new(return_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
        }
    }
}

impl FromStr for FunctionSpec {
    type Err = Box<Error>;

    fn from_str(token: &str) -> Result<Self> {
        let parts: Vec<&str> = token.split(',').collect();
        let [return_type, name] = parts.as_slice() else {
            return Err(Error::malformed_function(token, parts.len()));
        };

        if return_type.is_empty() {
            return Err(Error::empty_name("return type", token));
        }
        if name.is_empty() {
            return Err(Error::empty_name("function name", token));
        }

        Ok(Self::new(*return_type, *name))
    }
}

impl fmt::Display for FunctionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.return_type, self.name)
    }
}

/// Logical name of the test harness macro written to the macros directory.
pub const TEST_HARNESS: &str = "Run_Tests";

/// Name of the library being built (`lib<name>.la`, `<name>LinkDef.h`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryName(String);

impl LibraryName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::empty_name("library name", name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Logical name of the link descriptor header, e.g. `analysisLinkDef`.
    pub fn link_def(&self) -> String {
        format!("{}LinkDef", self.0)
    }

    /// Libtool archive built by the build descriptor, e.g. `libanalysis.la`.
    pub fn libtool_archive(&self) -> String {
        format!("lib{}.la", self.0)
    }

    /// Shared object loaded by the test harness, e.g. `libanalysis.so`.
    pub fn shared_object(&self) -> String {
        format!("lib{}.so", self.0)
    }

    /// Automake variable prefix for the library, e.g. `libanalysis_la`.
    pub fn automake_prefix(&self) -> String {
        format!("lib{}_la", self.0)
    }
}

impl fmt::Display for LibraryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Destination directories, already normalized (no trailing separator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPaths {
    pub source: PathBuf,
    pub macros: PathBuf,
    pub build: PathBuf,
    pub install: PathBuf,
    /// Where the cleanup script is written; the current directory by default.
    pub work: PathBuf,
}

impl DirectoryPaths {
    /// Directories that must exist before any artifact is written.
    pub fn provisioned(&self) -> [&Path; 5] {
        [
            &self.source,
            &self.macros,
            &self.build,
            &self.install,
            &self.work,
        ]
    }
}

/// A fully validated generation request.
#[derive(Debug, Clone)]
pub struct Project {
    pub lib_name: LibraryName,
    pub classes: Vec<ClassSpec>,
    pub functions: Vec<FunctionSpec>,
    pub dirs: DirectoryPaths,
    /// Rewrite existing class and function stubs.
    pub overwrite: bool,
}

impl Project {
    /// All compiled symbol names: classes first, then functions, in input order.
    pub fn symbol_names(&self) -> Vec<&str> {
        self.classes
            .iter()
            .map(|c| c.name.as_str())
            .chain(self.functions.iter().map(|f| f.name.as_str()))
            .collect()
    }

    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn function_names(&self) -> Vec<&str> {
        self.functions.iter().map(|f| f.name.as_str()).collect()
    }

    /// Non-fatal findings about the requested names.
    pub fn warnings(&self) -> Vec<String> {
        crate::validate::lint_identifiers(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_spec_parses_type_and_name() {
        let spec: FunctionSpec = "int,bar".parse().unwrap();
        assert_eq!(spec, FunctionSpec::new("int", "bar"));
        assert_eq!(spec.to_string(), "int,bar");
    }

    #[test]
    fn test_function_spec_keeps_parts_verbatim() {
        let spec: FunctionSpec = "unsigned int,count".parse().unwrap();
        assert_eq!(spec.return_type, "unsigned int");
        assert_eq!(spec.name, "count");
    }

    #[test]
    fn test_function_spec_rejects_extra_parts() {
        let err = "int,foo,extra".parse::<FunctionSpec>().unwrap_err();
        assert!(matches!(
            *err,
            Error::MalformedFunction { ref token, parts: 3 } if token == "int,foo,extra"
        ));
    }

    #[test]
    fn test_function_spec_rejects_missing_comma() {
        let err = "foo".parse::<FunctionSpec>().unwrap_err();
        assert!(matches!(*err, Error::MalformedFunction { parts: 1, .. }));
    }

    #[test]
    fn test_function_spec_rejects_empty_parts() {
        let err = ",foo".parse::<FunctionSpec>().unwrap_err();
        assert!(matches!(*err, Error::EmptyName { ref context, .. } if context == "return type"));

        let err = "int,".parse::<FunctionSpec>().unwrap_err();
        assert!(matches!(*err, Error::EmptyName { ref context, .. } if context == "function name"));
    }

    #[test]
    fn test_library_name_derivations() {
        let lib = LibraryName::new("analysis").unwrap();
        assert_eq!(lib.link_def(), "analysisLinkDef");
        assert_eq!(lib.libtool_archive(), "libanalysis.la");
        assert_eq!(lib.shared_object(), "libanalysis.so");
        assert_eq!(lib.automake_prefix(), "libanalysis_la");
    }

    #[test]
    fn test_library_name_rejects_empty() {
        assert!(LibraryName::new("").is_err());
    }
}
