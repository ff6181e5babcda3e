use std::path::PathBuf;

use rootgen_core::GeneratedFile;
use rootgen_manifest::{DirectoryPaths, LibraryName};

/// Build-directory files produced by `configure` and `make`.
const BUILD_ARTIFACTS: &[&str] = &[
    "config.status",
    "Makefile",
    "libtool",
    "config.log",
    "testexternals.C",
    "DictOutput.h",
    "DictOutput.cxx",
    ".deps",
    ".libs",
];

/// Source-directory files produced by the autotools bootstrap.
const SOURCE_ARTIFACTS: &[&str] = &[
    "aclocal.m4",
    "autom4te.cache",
    "missing",
    "install-sh",
    "config.sub",
    "config.guess",
    "depcomp",
    "configure",
    "ltmain.sh",
    "Makefile.in",
    "compile",
];

/// `fullClean.sh`: removes everything the build generated, plus the
/// installed library.
pub struct FullClean {
    pub lib_name: LibraryName,
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub install_dir: PathBuf,
}

impl FullClean {
    pub fn new(lib_name: LibraryName, dirs: &DirectoryPaths) -> Self {
        Self {
            lib_name,
            source_dir: dirs.source.clone(),
            build_dir: dirs.build.clone(),
            install_dir: dirs.install.clone(),
        }
    }
}

impl GeneratedFile for FullClean {
    fn name(&self) -> String {
        "fullClean".to_string()
    }

    fn lines(&self) -> Vec<String> {
        let build = self.build_dir.display();
        let source = self.source_dir.display();

        std::iter::once("#! /bin/sh".to_string())
            .chain(
                BUILD_ARTIFACTS
                    .iter()
                    .map(|f| format!("rm -rfv {}/{}", build, f)),
            )
            .chain(
                SOURCE_ARTIFACTS
                    .iter()
                    .map(|f| format!("rm -rfv {}/{}", source, f)),
            )
            .chain(std::iter::once(format!(
                "rm -vf {}/lib/lib{}*",
                self.install_dir.display(),
                self.lib_name
            )))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs() -> DirectoryPaths {
        DirectoryPaths {
            source: "source".into(),
            macros: "macros".into(),
            build: "build".into(),
            install: "/opt/physics".into(),
            work: ".".into(),
        }
    }

    #[test]
    fn test_full_clean() {
        let lines = FullClean::new(LibraryName::new("analysis").unwrap(), &dirs()).lines();

        assert_eq!(lines[0], "#! /bin/sh");
        assert_eq!(lines[1], "rm -rfv build/config.status");
        assert!(lines.contains(&"rm -rfv build/.libs".to_string()));
        assert!(lines.contains(&"rm -rfv source/autom4te.cache".to_string()));
        assert!(lines.contains(&"rm -rfv source/Makefile.in".to_string()));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("rm -vf /opt/physics/lib/libanalysis*")
        );
        assert_eq!(
            lines.len(),
            1 + BUILD_ARTIFACTS.len() + SOURCE_ARTIFACTS.len() + 1
        );
    }

    #[test]
    fn test_full_clean_removes_forcefully_and_verbosely() {
        let lines = FullClean::new(LibraryName::new("a").unwrap(), &dirs()).lines();
        assert!(lines[1..].iter().all(|l| l.starts_with("rm -") && l.contains('v')));
        assert!(!lines.iter().any(|l| l.contains("macros")));
    }
}
