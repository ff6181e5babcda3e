use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use rootgen_manifest::{Project, ProjectConfig, ProjectToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Names of the classes to add to the project
    #[arg(short, long, num_args = 0.., value_name = "NAME")]
    pub classes: Vec<String>,

    /// Functions to add to the project, each as <TYPE>,<NAME>
    #[arg(short, long, num_args = 0.., value_name = "TYPE,NAME")]
    pub functions: Vec<String>,

    /// Name of the library
    #[arg(short = 'l', long = "lib_name")]
    pub lib_name: Option<String>,

    /// Source directory (stubs, build files, link descriptor)
    #[arg(short = 's', long = "source_dir")]
    pub source_dir: Option<String>,

    /// Macros directory (test harness)
    #[arg(short = 'm', long = "macros_dir")]
    pub macros_dir: Option<String>,

    /// Build directory
    #[arg(short = 'b', long = "build_dir")]
    pub build_dir: Option<String>,

    /// Library installation directory
    #[arg(short = 'i', long = "install_dir")]
    pub install_dir: Option<String>,

    /// Rewrite existing class and function files too. Build files and scripts
    /// are always regenerated.
    #[arg(short, long)]
    pub overwrite: bool,

    /// Read project settings from a rootgen.toml file; command-line values win
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.resolve().unwrap_or_exit();

        let report = ops::generate(
            &project,
            ops::generate::GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Merge the project file (if any) with the command line and validate.
    fn resolve(&self) -> rootgen_manifest::Result<Project> {
        let cli = self.to_config();
        let config = match &self.config {
            Some(path) => ProjectToml::open(path)?.into_config().merge(cli),
            None => cli,
        };
        config.resolve()
    }

    fn to_config(&self) -> ProjectConfig {
        ProjectConfig {
            lib_name: self.lib_name.clone(),
            classes: self.classes.clone(),
            functions: self.functions.clone(),
            source_dir: self.source_dir.clone(),
            macros_dir: self.macros_dir.clone(),
            build_dir: self.build_dir.clone(),
            install_dir: self.install_dir.clone(),
            work_dir: None,
            overwrite: self.overwrite,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rootgen_manifest::{Error, FunctionSpec};

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        cmd: GenerateCommand,
    }

    fn parse(args: &[&str]) -> GenerateCommand {
        let argv = std::iter::once("rootgen").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().cmd
    }

    const DIRS: [&str; 8] = ["-s", "source/", "-m", "macros", "-b", "build", "-i", "lib"];

    #[test]
    fn test_parses_long_flags() {
        let cmd = parse(&[
            "--classes",
            "Foo",
            "Bar",
            "--functions",
            "int,bar",
            "--lib_name",
            "analysis",
            "--source_dir",
            "source",
            "--macros_dir",
            "macros",
            "--build_dir",
            "build",
            "--install_dir",
            "lib",
            "--overwrite",
        ]);

        assert_eq!(cmd.classes, ["Foo", "Bar"]);
        assert_eq!(cmd.functions, ["int,bar"]);
        assert_eq!(cmd.lib_name.as_deref(), Some("analysis"));
        assert!(cmd.overwrite);
        assert!(!cmd.dry_run);
    }

    #[test]
    fn test_resolves_short_flags() {
        let mut args = vec!["-c", "Foo", "-f", "int,bar", "-l", "analysis"];
        args.extend(DIRS);
        let project = parse(&args).resolve().unwrap();

        assert_eq!(project.lib_name.as_str(), "analysis");
        assert_eq!(project.class_names(), ["Foo"]);
        assert_eq!(project.functions, [FunctionSpec::new("int", "bar")]);
        assert_eq!(project.dirs.source, PathBuf::from("source"));
        assert!(!project.overwrite);
    }

    #[test]
    fn test_repeated_flags_accumulate() {
        let cmd = parse(&["-c", "Foo", "-c", "Bar", "-f", "int,a", "-f", "int,b"]);
        assert_eq!(cmd.classes, ["Foo", "Bar"]);
        assert_eq!(cmd.functions, ["int,a", "int,b"]);
    }

    #[test]
    fn test_no_symbols_is_a_configuration_error() {
        let mut args = vec!["-l", "analysis"];
        args.extend(DIRS);
        let err = parse(&args).resolve().unwrap_err();
        assert!(matches!(*err, Error::NoSymbols));
    }

    #[test]
    fn test_malformed_function_is_a_parse_error() {
        let mut args = vec!["-f", "int,foo,extra", "-l", "analysis"];
        args.extend(DIRS);
        let err = parse(&args).resolve().unwrap_err();
        assert!(matches!(*err, Error::MalformedFunction { parts: 3, .. }));
    }

    #[test]
    fn test_missing_lib_name() {
        let mut args = vec!["-c", "Foo"];
        args.extend(DIRS);
        let err = parse(&args).resolve().unwrap_err();
        assert!(matches!(*err, Error::MissingArgument { ref flag } if flag == "--lib_name"));
    }

    #[test]
    fn test_empty_directory_flag_is_missing() {
        let err = parse(&["-c", "Foo", "-l", "analysis", "-s", "", "-m", "macros", "-b", "build", "-i", "lib"])
            .resolve()
            .unwrap_err();
        assert!(matches!(*err, Error::MissingArgument { ref flag } if flag == "--source_dir"));
    }

    #[test]
    fn test_config_file_supplies_missing_values() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("rootgen.toml");
        std::fs::write(
            &path,
            r#"
            [project]
            lib_name = "analysis"
            classes = ["Foo"]

            [dirs]
            source = "source"
            macros = "macros"
            build = "build"
            install = "lib"
            "#,
        )
        .unwrap();

        let config_path = path.display().to_string();
        let project = parse(&["--config", config_path.as_str(), "-c", "Bar", "-l", "tracking"])
            .resolve()
            .unwrap();

        assert_eq!(project.lib_name.as_str(), "tracking");
        assert_eq!(project.class_names(), ["Foo", "Bar"]);
        assert_eq!(project.dirs.install, PathBuf::from("lib"));
    }

    #[test]
    fn test_missing_config_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("absent.toml").display().to_string();
        let err = parse(&["--config", config_path.as_str()]).resolve().unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
