use rootgen_core::GeneratedFile;

use crate::CodeBuilder;

/// `configure.ac`: fixed autoconf input for a libtool C++ library.
pub struct ConfigureAc;

impl GeneratedFile for ConfigureAc {
    fn name(&self) -> String {
        "configure".to_string()
    }

    fn lines(&self) -> Vec<String> {
        CodeBuilder::make()
            .line("AC_INIT")
            .line("AC_CONFIG_SRCDIR(autogen.sh)")
            .blank()
            .line("AM_INIT_AUTOMAKE(packagename, 1.00)")
            .blank()
            .line("AC_PROG_CXX(CC g++)")
            .line("AC_ENABLE_STATIC(no)")
            .indent()
            .line("AC_PROG_LIBTOOL")
            .dedent()
            .blank()
            .line("AC_OUTPUT(Makefile)")
            .build()
    }
}
