use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(rootgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse project file")]
    #[diagnostic(code(rootgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required argument '{flag}'")]
    #[diagnostic(
        code(rootgen::missing_argument),
        help("pass {flag} on the command line or set it in the project file")
    )]
    MissingArgument { flag: String },

    #[error("no classes or functions to generate")]
    #[diagnostic(
        code(rootgen::no_symbols),
        help("specify at least one class or function with -c/--classes or -f/--functions")
    )]
    NoSymbols,

    #[error("malformed function '{token}': expected 2 comma-separated parts, found {parts}")]
    #[diagnostic(
        code(rootgen::malformed_function),
        help("functions are written as <TYPE>,<NAME>, e.g. 'int,count_tracks'")
    )]
    MalformedFunction { token: String, parts: usize },

    #[error("empty {context} in '{token}'")]
    #[diagnostic(code(rootgen::empty_name))]
    EmptyName { context: String, token: String },

    #[error("'{name}' is used by both {first} and {second}")]
    #[diagnostic(
        code(rootgen::name_collision),
        help("every class and function must have its own file name; rename one of them")
    )]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    pub fn missing_argument(flag: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingArgument { flag: flag.into() })
    }

    pub fn malformed_function(token: impl Into<String>, parts: usize) -> Box<Self> {
        Box::new(Error::MalformedFunction {
            token: token.into(),
            parts,
        })
    }

    pub fn empty_name(context: impl Into<String>, token: impl Into<String>) -> Box<Self> {
        Box::new(Error::EmptyName {
            context: context.into(),
            token: token.into(),
        })
    }

    pub fn name_collision(
        name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::NameCollision {
            name: name.into(),
            first: first.into(),
            second: second.into(),
        })
    }
}
