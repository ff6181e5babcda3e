use rootgen_core::GeneratedFile;

use crate::CodeBuilder;

/// `<function>.C`: prints a message and returns a literal zero.
///
/// Only compiles for return types constructible from `0`; anything else
/// needs a hand-written return statement.
pub struct FunctionSource {
    pub return_type: String,
    pub name: String,
}

impl FunctionSource {
    pub fn new(return_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
        }
    }
}

impl GeneratedFile for FunctionSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn lines(&self) -> Vec<String> {
        CodeBuilder::cpp()
            .line(format!("#include \"{}.h\"", self.name))
            .line("#include <iostream>")
            .blank()
            .line(format!("{} {}(){{", self.return_type, self.name))
            .indent()
            .line(format!("std::cout << \"Running {}\" << std::endl;", self.name))
            .line("return 0;")
            .dedent()
            .line("}")
            .build()
    }
}
