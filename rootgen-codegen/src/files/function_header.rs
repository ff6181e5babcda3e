use rootgen_core::GeneratedFile;

/// `<function>.h`: a single zero-argument declaration.
pub struct FunctionHeader {
    pub return_type: String,
    pub name: String,
}

impl FunctionHeader {
    pub fn new(return_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
        }
    }
}

impl GeneratedFile for FunctionHeader {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn lines(&self) -> Vec<String> {
        vec![format!("{} {}();", self.return_type, self.name)]
    }
}
