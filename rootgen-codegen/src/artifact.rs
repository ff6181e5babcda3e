//! Artifact kinds and where each one is written.

use std::path::Path;

use indexmap::IndexMap;
use rootgen_core::{GeneratedFile, Overwrite};
use rootgen_manifest::DirectoryPaths;

/// Every kind of file rootgen writes, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    ClassSource,
    ClassHeader,
    FunctionSource,
    FunctionHeader,
    BuildDescriptor,
    LinkDescriptor,
    BootstrapScript,
    ConfigureScript,
    TestHarness,
    CleanupScript,
}

/// Directory role an artifact is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Source,
    Macros,
    /// Directory rootgen is run from
    Work,
}

impl Destination {
    pub fn dir(self, dirs: &DirectoryPaths) -> &Path {
        match self {
            Self::Source => &dirs.source,
            Self::Macros => &dirs.macros,
            Self::Work => &dirs.work,
        }
    }
}

impl ArtifactKind {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::ClassSource | Self::FunctionSource | Self::TestHarness => ".C",
            Self::ClassHeader | Self::FunctionHeader | Self::LinkDescriptor => ".h",
            Self::BuildDescriptor => ".am",
            Self::BootstrapScript | Self::CleanupScript => ".sh",
            Self::ConfigureScript => ".ac",
        }
    }

    pub fn destination(self) -> Destination {
        match self {
            Self::TestHarness => Destination::Macros,
            Self::CleanupScript => Destination::Work,
            _ => Destination::Source,
        }
    }

    /// Protected artifacts are regenerated on every run; stubs belong to the user.
    pub fn is_protected(self) -> bool {
        !matches!(
            self,
            Self::ClassSource | Self::ClassHeader | Self::FunctionSource | Self::FunctionHeader
        )
    }

    /// Overwrite policy given the user's `--overwrite` flag.
    pub fn overwrite(self, requested: bool) -> Overwrite {
        if self.is_protected() {
            Overwrite::Always
        } else {
            Overwrite::from_flag(requested)
        }
    }

    /// Scripts that get the execute bit after writing.
    pub fn is_executable(self) -> bool {
        matches!(self, Self::BootstrapScript | Self::CleanupScript)
    }
}

/// All artifacts of one kind, keyed by logical name (no suffix).
#[derive(Debug, Clone)]
pub struct ArtifactGroup {
    pub kind: ArtifactKind,
    pub files: IndexMap<String, Vec<String>>,
}

impl ArtifactGroup {
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind,
            files: IndexMap::new(),
        }
    }

    /// Render `file` into this group.
    pub fn add(&mut self, file: &impl GeneratedFile) -> &mut Self {
        self.files.insert(file.name(), file.lines());
        self
    }

    pub fn with(mut self, file: &impl GeneratedFile) -> Self {
        self.add(file);
        self
    }

    /// File names including suffix, in insertion order.
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .keys()
            .map(|name| format!("{}{}", name, self.kind.suffix()))
            .collect()
    }
}
