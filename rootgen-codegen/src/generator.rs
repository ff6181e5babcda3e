use std::path::PathBuf;

use eyre::{Context, Result};
use rootgen_core::{WriteOutcome, WriteResult, make_executable, materialize, render_lines};
use rootgen_manifest::Project;
use tracing::{debug, info};

use crate::{
    ArtifactGroup, ArtifactKind,
    files::{
        AutogenSh, ClassHeader, ClassSource, ConfigureAc, FullClean, FunctionHeader,
        FunctionSource, LinkDef, MakefileAm, RunTests,
    },
};

/// A rendered file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Target path (destination directory joined with file name)
    pub path: PathBuf,
    pub content: String,
}

/// Result of writing a project to disk
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Per-file outcomes, in write order
    pub outcomes: Vec<WriteOutcome>,
    /// Scripts that were marked executable
    pub executables: Vec<PathBuf>,
}

impl GenerateResult {
    pub fn written(&self) -> impl Iterator<Item = &WriteOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.result == WriteResult::Written)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &WriteOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.result == WriteResult::Skipped)
    }
}

/// Renders and writes the scaffolding for a [`Project`].
pub struct Generator<'a> {
    project: &'a Project,
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// Render every artifact, grouped by kind in dispatch order.
    pub fn artifacts(&self) -> Vec<ArtifactGroup> {
        let project = self.project;
        let lib_name = &project.lib_name;
        let class_names = owned(project.class_names());
        let function_names = owned(project.function_names());

        let mut class_sources = ArtifactGroup::new(ArtifactKind::ClassSource);
        let mut class_headers = ArtifactGroup::new(ArtifactKind::ClassHeader);
        for class in &project.classes {
            class_sources.add(&ClassSource::new(&class.name));
            class_headers.add(&ClassHeader::new(&class.name));
        }

        let mut function_sources = ArtifactGroup::new(ArtifactKind::FunctionSource);
        let mut function_headers = ArtifactGroup::new(ArtifactKind::FunctionHeader);
        for function in &project.functions {
            function_sources.add(&FunctionSource::new(&function.return_type, &function.name));
            function_headers.add(&FunctionHeader::new(&function.return_type, &function.name));
        }

        vec![
            class_sources,
            class_headers,
            function_sources,
            function_headers,
            ArtifactGroup::new(ArtifactKind::BuildDescriptor).with(&MakefileAm::new(
                lib_name.clone(),
                owned(project.symbol_names()),
            )),
            ArtifactGroup::new(ArtifactKind::LinkDescriptor).with(&LinkDef::new(
                lib_name.clone(),
                class_names.clone(),
                function_names.clone(),
            )),
            ArtifactGroup::new(ArtifactKind::BootstrapScript).with(&AutogenSh),
            ArtifactGroup::new(ArtifactKind::ConfigureScript).with(&ConfigureAc),
            ArtifactGroup::new(ArtifactKind::TestHarness).with(&RunTests::new(
                lib_name.clone(),
                class_names,
                function_names,
            )),
            ArtifactGroup::new(ArtifactKind::CleanupScript)
                .with(&FullClean::new(lib_name.clone(), &project.dirs)),
        ]
    }

    /// Render every artifact without touching the filesystem.
    pub fn preview(&self) -> Vec<PreviewFile> {
        let dirs = &self.project.dirs;

        self.artifacts()
            .into_iter()
            .flat_map(|group| {
                let dir = group.kind.destination().dir(dirs).to_path_buf();
                let suffix = group.kind.suffix();
                group
                    .files
                    .into_iter()
                    .map(move |(name, lines)| PreviewFile {
                        path: dir.join(format!("{}{}", name, suffix)),
                        content: render_lines(&lines),
                    })
            })
            .collect()
    }

    /// Create the destination directories, write every artifact under its
    /// overwrite policy, then mark the scripts executable.
    pub fn generate(&self) -> Result<GenerateResult> {
        let dirs = &self.project.dirs;

        for dir in dirs.provisioned() {
            if !dir.exists() {
                debug!(dir = %dir.display(), "creating directory");
                std::fs::create_dir_all(dir)
                    .wrap_err_with(|| format!("Failed to create directory {}", dir.display()))?;
            }
        }

        let groups = self.artifacts();
        let mut result = GenerateResult::default();

        for group in &groups {
            let kind = group.kind;
            let outcomes = materialize(
                &group.files,
                kind.suffix(),
                kind.destination().dir(dirs),
                kind.overwrite(self.project.overwrite),
            )?;
            result.outcomes.extend(outcomes);
        }

        for group in groups.iter().filter(|g| g.kind.is_executable()) {
            let dir = group.kind.destination().dir(dirs);
            for file_name in group.file_names() {
                let path = dir.join(file_name);
                make_executable(&path)?;
                result.executables.push(path);
            }
        }

        info!(
            written = result.written().count(),
            skipped = result.skipped().count(),
            "generation finished"
        );
        Ok(result)
    }
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(String::from).collect()
}
