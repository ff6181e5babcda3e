use rootgen_core::GeneratedFile;
use rootgen_manifest::LibraryName;

use crate::CodeBuilder;

/// `<lib>LinkDef.h`: exposes exactly the requested symbols to the dictionary
/// generator.
///
/// Everything is linked off first; each class is then linked back without an
/// auto-generated dictionary (`-!`) and each function by name.
pub struct LinkDef {
    pub lib_name: LibraryName,
    pub classes: Vec<String>,
    pub functions: Vec<String>,
}

impl LinkDef {
    pub fn new(lib_name: LibraryName, classes: Vec<String>, functions: Vec<String>) -> Self {
        Self {
            lib_name,
            classes,
            functions,
        }
    }
}

impl GeneratedFile for LinkDef {
    fn name(&self) -> String {
        self.lib_name.link_def()
    }

    fn lines(&self) -> Vec<String> {
        CodeBuilder::cpp()
            .line("#ifdef __CINT__")
            .line("#pragma link off all classes;")
            .line("#pragma link off all globals;")
            .line("#pragma link off all functions;")
            .line("#pragma link off all nestedclasses;")
            .blank()
            .line("// Classes, linked as:")
            .line("// #pragma link C++ class ClassName-!; // -! skips dictionary, + generates one")
            .each(
                self.classes
                    .iter()
                    .map(|c| format!("#pragma link C++ class {}-!;", c)),
            )
            .blank()
            .line("// Functions, linked as:")
            .line("// #pragma link C++ function FunctionName;")
            .each(
                self.functions
                    .iter()
                    .map(|f| format!("#pragma link C++ function {};", f)),
            )
            .blank()
            .line("#endif /* __CINT__ */")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_def() {
        let link_def = LinkDef::new(
            LibraryName::new("analysis").unwrap(),
            vec!["Foo".into(), "Bar".into()],
            vec!["baz".into()],
        );

        assert_eq!(link_def.name(), "analysisLinkDef");
        let lines = link_def.lines();
        assert_eq!(lines.first().map(String::as_str), Some("#ifdef __CINT__"));
        assert_eq!(lines.last().map(String::as_str), Some("#endif /* __CINT__ */"));

        let pragmas: Vec<_> = lines
            .iter()
            .filter(|l| l.starts_with("#pragma link C++"))
            .collect();
        assert_eq!(
            pragmas,
            [
                "#pragma link C++ class Foo-!;",
                "#pragma link C++ class Bar-!;",
                "#pragma link C++ function baz;",
            ]
        );
    }

    #[test]
    fn test_link_def_disables_defaults_first() {
        let lines = LinkDef::new(LibraryName::new("a").unwrap(), vec![], vec![]).lines();
        assert_eq!(
            &lines[1..5],
            [
                "#pragma link off all classes;",
                "#pragma link off all globals;",
                "#pragma link off all functions;",
                "#pragma link off all nestedclasses;",
            ]
        );
        assert!(!lines.iter().any(|l| l.starts_with("#pragma link C++")));
    }
}
