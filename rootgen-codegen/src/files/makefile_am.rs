use rootgen_core::GeneratedFile;
use rootgen_manifest::LibraryName;

use crate::{CodeBuilder, naming::sort_case_insensitive};

/// Generated dictionary source compiled into the library.
const DICT_SOURCE: &str = "DictOutput.cxx";

/// Smoke-test program built before the library.
const SMOKE_TEST: &str = "testexternals";

/// `<lib>.am`: the automake build descriptor.
///
/// Compiles every symbol's source plus the generated dictionary into
/// `lib<lib>.la`, links a smoke-test program against it, and regenerates the
/// dictionary from every header and the link descriptor with `rootcint`.
pub struct MakefileAm {
    pub lib_name: LibraryName,
    /// Symbol names, sorted case-insensitively
    pub symbols: Vec<String>,
}

impl MakefileAm {
    pub fn new(lib_name: LibraryName, mut symbols: Vec<String>) -> Self {
        sort_case_insensitive(&mut symbols);
        Self { lib_name, symbols }
    }

    /// Sources compiled into the library, in build order.
    pub fn sources(&self) -> Vec<String> {
        self.symbols
            .iter()
            .map(|s| format!("{}.C", s))
            .chain(std::iter::once(DICT_SOURCE.to_string()))
            .collect()
    }

    /// Inputs the dictionary is generated from.
    fn dictionary_inputs(&self) -> Vec<String> {
        self.symbols
            .iter()
            .map(|s| format!("{}.h", s))
            .chain(std::iter::once(format!("{}.h", self.lib_name.link_def())))
            .collect()
    }
}

/// Render `items` as make continuation lines: every item but the last ends in ` \`.
fn continued(items: &[String]) -> Vec<String> {
    let last = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == last {
                item.clone()
            } else {
                format!("{} \\", item)
            }
        })
        .collect()
}

impl GeneratedFile for MakefileAm {
    fn name(&self) -> String {
        self.lib_name.as_str().to_string()
    }

    fn lines(&self) -> Vec<String> {
        let archive = self.lib_name.libtool_archive();
        let prefix = self.lib_name.automake_prefix();

        CodeBuilder::make()
            .line("## automake only reads Makefile.am; rename or symlink this file first:")
            .line(format!("##   ln -s {}.am Makefile.am", self.lib_name))
            .blank()
            .line("AUTOMAKE_OPTIONS = foreign")
            .blank()
            .line("# Flags passed to the C++ compiler")
            .line("# -Wall: enable common warnings")
            .line("# -Werror: treat every warning as an error")
            .line("AM_CXXFLAGS = -Wall -Werror -std=c++0x")
            .blank()
            .line(format!(
                "# Builds {}.C first as a check of the build environment",
                SMOKE_TEST
            ))
            .line("BUILT_SOURCES = \\")
            .indent()
            .line(format!("{}.C", SMOKE_TEST))
            .dedent()
            .blank()
            .line("# Header search paths")
            .line("AM_CPPFLAGS = \\")
            .indent()
            .each(continued(&[
                "-I$(includedir)".to_string(),
                "-I$(ROOTSYS)/include".to_string(),
            ]))
            .dedent()
            .blank()
            .line("lib_LTLIBRARIES = \\")
            .indent()
            .line(&archive)
            .dedent()
            .blank()
            .line("# Headers listed here are not installed")
            .line("#noinst_HEADERS = \\")
            .line("#\tdontIncludeMe.h")
            .blank()
            .line(format!("{}_LDFLAGS = \\", prefix))
            .indent()
            .line("-L$(ROOTSYS)/lib `root-config --libs`")
            .dedent()
            .blank()
            .line("# Offline libraries are picked up when OFFLINE_MAIN is defined")
            .line("AM_LDFLAGS = \\")
            .indent()
            .each(continued(&[
                "-L$(OFFLINE_MAIN)/lib".to_string(),
                "-L$(ROOTSYS)/lib".to_string(),
                "-L$(libdir)".to_string(),
            ]))
            .dedent()
            .blank()
            .line("# Sources compiled into the library")
            .line(format!("{}_SOURCES = \\", prefix))
            .indent()
            .each(continued(&self.sources()))
            .dedent()
            .blank()
            .line("noinst_PROGRAMS = \\")
            .indent()
            .line(SMOKE_TEST)
            .dedent()
            .blank()
            .line(format!("{}_LDADD = \\", SMOKE_TEST))
            .indent()
            .line(&archive)
            .dedent()
            .blank()
            // Recipe lines must start with a tab.
            .line(format!("{}.C:", SMOKE_TEST))
            .indent()
            .line("echo \"//*** this is a generated file. Do not commit, do not edit\" > $@")
            .line("echo \"int main()\" >> $@")
            .line("echo \"{\" >> $@")
            .line("echo \"\treturn 0;\" >> $@")
            .line("echo \"}\" >> $@")
            .dedent()
            .blank()
            .line("# Dictionary generated from every header and the link descriptor")
            .line(format!("{}: \\", DICT_SOURCE))
            .indent()
            .each(continued(&self.dictionary_inputs()))
            .line("rootcint -f $@ -c $(DEFAULT_INCLUDES) $(AM_CPPFLAGS) $^")
            .dedent()
            .blank()
            .line("clean-local:")
            .indent()
            .line("rm -f *Dict.*")
            .build()
    }
}
