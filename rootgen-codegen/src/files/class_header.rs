use rootgen_core::GeneratedFile;

use crate::CodeBuilder;

/// `<Class>.h`: a class with only a default constructor and destructor.
pub struct ClassHeader {
    pub name: String,
}

impl ClassHeader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for ClassHeader {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn lines(&self) -> Vec<String> {
        CodeBuilder::cpp()
            .line(format!("class {} {{", self.name))
            .indent()
            .line("public:")
            .indent()
            .line(format!("{}();", self.name))
            .line(format!("~{}();", self.name))
            .dedent()
            .line("private:")
            .dedent()
            .line("};")
            .build()
    }
}
