//! Generate operation - render and write the project scaffolding.

use eyre::{Context, Result};
use rootgen_codegen::Generator;
use rootgen_core::WriteResult;
use rootgen_manifest::Project;
use tracing::info;

use crate::reports::{FileLine, GenerateReport, GenerationResult, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// `project` is already validated, so nothing here can fail before the
/// first directory is created except filesystem errors.
pub fn generate(project: &Project, opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::new(project);

    info!(
        lib = %project.lib_name,
        classes = project.classes.len(),
        functions = project.functions.len(),
        dry_run = opts.dry_run,
        "generating project"
    );

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path.display().to_string(),
                content: f.content,
            })
            .collect();
        GenerationResult::Preview { files }
    } else {
        let written = generator
            .generate()
            .wrap_err("Failed to generate project files")?;

        GenerationResult::Written {
            files: written
                .outcomes
                .into_iter()
                .map(|o| FileLine {
                    path: o.path.display().to_string(),
                    file_name: o.file_name,
                    created: o.result == WriteResult::Written,
                })
                .collect(),
            executables: written
                .executables
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    };

    Ok(GenerateReport {
        lib_name: project.lib_name.to_string(),
        classes: project.class_names().into_iter().map(String::from).collect(),
        functions: project
            .functions
            .iter()
            .map(|f| format!("{} {}", f.return_type, f.name))
            .collect(),
        warnings: project.warnings(),
        result,
    })
}
