//! Indentation configuration for generated files.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Two spaces per level.
    TwoSpaces,
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation (C++ stubs and macros).
    pub const CPP: Self = Self::TwoSpaces;

    /// Tab indentation (make recipes and continuation lines).
    pub const MAKE: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoSpaces => "  ",
            Self::Tab => "\t",
        }
    }
}
