use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(nestdto::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(nestdto::parse_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse schema {filename}")]
    #[diagnostic(
        code(nestdto::schema_parse_error),
        help("the schema must be a JSON document with `models` and `enums` arrays")
    )]
    SchemaParse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid JSON here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{value}' is not a valid file naming style. Valid options are {valid}.")]
    #[diagnostic(
        code(nestdto::invalid_naming_style),
        help("set `fileNamingStyle` to one of {valid}")
    )]
    InvalidNamingStyle { value: String, valid: String },

    #[error("environment variable '{var}' is not set")]
    #[diagnostic(
        code(nestdto::missing_env),
        help("the output location is read from `env(\"{var}\")`; export it or use a literal path")
    )]
    MissingEnv { var: String },

    #[error("no output directory configured")]
    #[diagnostic(
        code(nestdto::missing_output),
        help("set `output` in the [generator] table or pass --output")
    )]
    MissingOutput,

    #[error("no schema configured")]
    #[diagnostic(
        code(nestdto::missing_schema),
        help("set `schema` in the [generator] table or pass --schema")
    )]
    MissingSchema,

    #[error("invalid option override '{pair}'")]
    #[diagnostic(code(nestdto::invalid_override), help("overrides use the form key=value"))]
    InvalidOverride { pair: String },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a schema parse error from a serde_json error with source context
    pub fn schema_parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = line_column_offset(src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::SchemaParse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

/// Convert a 1-based line and column into a byte offset.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}
