//! Code builder utility for generating properly indented lines.

use super::Indent;

/// Fluent API for building a file as an ordered list of lines.
///
/// Consuming methods (returning `Self`) chain; they delegate to the
/// `push_` methods, which work on `&mut Self`.
///
/// # Example
///
/// ```
/// use rootgen_codegen::builder::CodeBuilder;
///
/// let lines = CodeBuilder::cpp()
///     .line("int main() {")
///     .indent()
///     .line("return 0;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(lines, ["int main() {", "  return 0;", "}"]);
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    lines: Vec<String>,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            lines: Vec::new(),
        }
    }

    /// Builder with 2-space indentation.
    pub fn cpp() -> Self {
        Self::new(Indent::CPP)
    }

    /// Builder with tab indentation.
    pub fn make() -> Self {
        Self::new(Indent::MAKE)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line with current indentation (mutable).
    pub fn push_line(&mut self, s: impl AsRef<str>) -> &mut Self {
        let prefix = self.indent.as_str().repeat(self.indent_level);
        self.lines.push(format!("{}{}", prefix, s.as_ref()));
        self
    }

    /// Add a blank line, never indented (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    pub fn line(mut self, s: impl AsRef<str>) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add one line per item at the current indentation.
    pub fn each<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.push_line(item);
        }
        self
    }

    pub fn build(self) -> Vec<String> {
        self.lines
    }
}
