use rootgen_core::GeneratedFile;

use crate::CodeBuilder;

/// `<Class>.C`: constructor and destructor that report their address.
pub struct ClassSource {
    pub name: String,
}

impl ClassSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for ClassSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn lines(&self) -> Vec<String> {
        let name = &self.name;
        CodeBuilder::cpp()
            .line(format!("#include \"{}.h\"", name))
            .line("#include <iostream>")
            .blank()
            .line(format!("{}::{}() {{", name, name))
            .indent()
            .line(format!(
                "std::cout << \"{} instantiated at \" << this << std::endl;",
                name
            ))
            .dedent()
            .line("}")
            .blank()
            .line(format!("{}::~{}() {{", name, name))
            .indent()
            .line(format!(
                "std::cout << \"Destroying {} from \" << this << std::endl;",
                name
            ))
            .dedent()
            .line("}")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_source() {
        let lines = ClassSource::new("Foo").lines();

        assert_eq!(
            lines,
            [
                "#include \"Foo.h\"",
                "#include <iostream>",
                "",
                "Foo::Foo() {",
                "  std::cout << \"Foo instantiated at \" << this << std::endl;",
                "}",
                "",
                "Foo::~Foo() {",
                "  std::cout << \"Destroying Foo from \" << this << std::endl;",
                "}",
            ]
        );
    }
}
