//! Generate report data structures.

use super::output::{Output, Report};

/// Shown whenever functions were requested: stubs `return 0;`, which only
/// compiles for built-in return types.
const RETURN_TYPE_HINT: &str = "Functions returning anything other than a built-in primitive \
need a suitable return value added to their source file before the project compiles.";

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub lib_name: String,
    pub classes: Vec<String>,
    /// Functions as `<TYPE> <NAME>`
    pub functions: Vec<String>,
    /// Non-fatal findings about the inputs.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        files: Vec<FileLine>,
        /// Scripts marked executable
        executables: Vec<String>,
    },
    /// Dry-run preview.
    Preview { files: Vec<PreviewFile> },
}

/// Outcome for one file.
#[derive(Debug)]
pub struct FileLine {
    pub path: String,
    pub file_name: String,
    /// `false` when the file existed and was left untouched
    pub created: bool,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written { files, executables } => {
                self.render_written(out, files, executables)
            }
            GenerationResult::Preview { files } => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, files: &[FileLine], executables: &[String]) {
        out.key_value("Library", &self.lib_name);
        if !self.classes.is_empty() {
            out.key_value("Classes", &self.classes.join(", "));
        }
        if !self.functions.is_empty() {
            out.key_value("Functions", &self.functions.join(", "));
        }
        out.newline();

        out.section("Files");
        for file in files {
            if file.created {
                out.added_item(&file.path);
            } else {
                out.skipped_item(&format!(
                    "{} exists, but overwrite was not requested",
                    file.file_name
                ));
            }
        }

        if !executables.is_empty() {
            out.newline();
            out.section("Marked executable");
            for path in executables {
                out.list_item(path);
            }
        }

        if !self.functions.is_empty() {
            out.newline();
            out.preformatted(RETURN_TYPE_HINT);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records rendered output as tagged lines.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Output for Recorder {
        fn section(&mut self, name: &str) {
            self.0.push(format!("section {name}"));
        }
        fn key_value(&mut self, key: &str, value: &str) {
            self.0.push(format!("{key}={value}"));
        }
        fn list_item(&mut self, text: &str) {
            self.0.push(format!("- {text}"));
        }
        fn added_item(&mut self, text: &str) {
            self.0.push(format!("+ {text}"));
        }
        fn skipped_item(&mut self, text: &str) {
            self.0.push(format!("! {text}"));
        }
        fn warning(&mut self, msg: &str) {
            self.0.push(format!("warning {msg}"));
        }
        fn divider(&mut self, label: &str) {
            self.0.push(format!("-- {label}"));
        }
        fn preformatted(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
        fn newline(&mut self) {
            self.0.push(String::new());
        }
    }

    fn report(functions: Vec<String>, result: GenerationResult) -> GenerateReport {
        GenerateReport {
            lib_name: "analysis".into(),
            classes: vec!["Foo".into()],
            functions,
            warnings: vec![],
            result,
        }
    }

    #[test]
    fn test_written_report_lists_created_and_skipped() {
        let report = report(
            vec![],
            GenerationResult::Written {
                files: vec![
                    FileLine {
                        path: "source/Foo.C".into(),
                        file_name: "Foo.C".into(),
                        created: false,
                    },
                    FileLine {
                        path: "source/analysis.am".into(),
                        file_name: "analysis.am".into(),
                        created: true,
                    },
                ],
                executables: vec!["fullClean.sh".into()],
            },
        );

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.0,
            [
                "Library=analysis",
                "Classes=Foo",
                "",
                "section Files",
                "! Foo.C exists, but overwrite was not requested",
                "+ source/analysis.am",
                "",
                "section Marked executable",
                "- fullClean.sh",
            ]
        );
    }

    #[test]
    fn test_return_type_hint_only_with_functions() {
        let written = || GenerationResult::Written {
            files: vec![],
            executables: vec![],
        };

        let mut out = Recorder::default();
        report(vec!["int bar".into()], written()).render(&mut out);
        assert_eq!(out.0.last().map(String::as_str), Some(RETURN_TYPE_HINT));
        assert!(out.0.contains(&"Functions=int bar".to_string()));

        let mut out = Recorder::default();
        report(vec![], written()).render(&mut out);
        assert!(!out.0.iter().any(|l| l == RETURN_TYPE_HINT));
    }

    #[test]
    fn test_preview_report() {
        let mut report = report(
            vec![],
            GenerationResult::Preview {
                files: vec![PreviewFile {
                    path: "source/Foo.h".into(),
                    content: "class Foo {\n};\n".into(),
                }],
            },
        );
        report.warnings.push("class name 'a-b' is not a valid C++ identifier".into());

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.0,
            [
                "warning class name 'a-b' is not a valid C++ identifier",
                "-- source/Foo.h",
                "class Foo {\n};\n",
                "-- Summary",
                "1 files would be generated",
            ]
        );
    }
}
