//! Cross-field checks on project inputs.

use std::collections::HashMap;

use rootgen_core::is_identifier;

use crate::{
    ClassSpec, DirectoryPaths, Error, FunctionSpec, LibraryName, Project, Result, TEST_HARNESS,
};

/// Reject names that would map two artifacts onto the same file.
///
/// Every class and function owns `<name>.C` and `<name>.h` in the source
/// directory, and the link descriptor owns `<lib>LinkDef.h` there. The test
/// harness owns `Run_Tests.C` in the macros directory, which only clashes
/// when that is also the source directory.
pub(crate) fn check_collisions(
    lib_name: &LibraryName,
    classes: &[ClassSpec],
    functions: &[FunctionSpec],
    dirs: &DirectoryPaths,
) -> Result<()> {
    let mut owners: HashMap<String, String> = HashMap::new();
    owners.insert(lib_name.link_def(), "the link descriptor".to_string());
    if dirs.macros == dirs.source {
        owners.insert(TEST_HARNESS.to_string(), "the test harness".to_string());
    }

    let symbols = classes
        .iter()
        .map(|c| (c.name.as_str(), format!("class '{}'", c.name)))
        .chain(
            functions
                .iter()
                .map(|f| (f.name.as_str(), format!("function '{}'", f))),
        );

    for (name, owner) in symbols {
        if let Some(first) = owners.get(name) {
            return Err(Error::name_collision(name, first.clone(), owner));
        }
        owners.insert(name.to_string(), owner);
    }

    Ok(())
}

/// Warn about names that are not plain C++ identifiers.
///
/// These still render; the generated sources just won't compile as-is.
pub(crate) fn lint_identifiers(project: &Project) -> Vec<String> {
    let mut warnings = Vec::new();

    if !is_identifier(project.lib_name.as_str()) {
        warnings.push(format!(
            "library name '{}' is not a valid identifier",
            project.lib_name
        ));
    }
    for class in &project.classes {
        if !is_identifier(&class.name) {
            warnings.push(format!(
                "class name '{}' is not a valid C++ identifier",
                class.name
            ));
        }
    }
    for function in &project.functions {
        if !is_identifier(&function.name) {
            warnings.push(format!(
                "function name '{}' is not a valid C++ identifier",
                function.name
            ));
        }
    }

    warnings.extend(lint_case_clashes(project));
    warnings
}

/// Warn about stub names that differ only by case.
///
/// Both stubs land in the source directory, so on a case-insensitive
/// filesystem the second one is reported as already existing and never
/// written.
fn lint_case_clashes(project: &Project) -> Vec<String> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut warnings = Vec::new();

    for name in project.symbol_names() {
        match seen.get(&name.to_lowercase()) {
            Some(first) => warnings.push(format!(
                "'{}' and '{}' differ only by case; their files clash on case-insensitive filesystems",
                first, name
            )),
            None => {
                seen.insert(name.to_lowercase(), name);
            }
        }
    }

    warnings
}
