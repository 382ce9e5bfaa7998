use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Failed to parse '{file}': {message}")]
#[diagnostic(
    code(lineage::parse_error),
    help("Check the family description near the highlighted position")
)]
pub struct ParseError {
    pub file: String,
    pub message: String,
    /// 1-based line number of the offending line, when known
    pub line: Option<usize>,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}

impl ParseError {
    /// Build a parse error pointing at a whole line of `source`
    pub fn at_line(file: &str, source: &str, line: usize, message: impl Into<String>) -> Self {
        let span = line_span(source, line);
        Self {
            file: file.to_string(),
            message: message.into(),
            line: Some(line),
            source_code: NamedSource::new(file, source.to_string()),
            span,
        }
    }

    /// Build a parse error pointing at a 1-based line/column of `source`
    pub fn at_position(
        file: &str,
        source: &str,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        let span = line_span(source, line).map(|span| {
            let offset = span.offset() + column.saturating_sub(1).min(span.len());
            SourceSpan::new(offset.into(), 0)
        });
        Self {
            file: file.to_string(),
            message: message.into(),
            line: Some(line),
            source_code: NamedSource::new(file, source.to_string()),
            span,
        }
    }

    /// Build a parse error that is not tied to a single line
    pub fn whole_document(file: &str, source: &str, message: impl Into<String>) -> Self {
        Self {
            file: file.to_string(),
            message: message.into(),
            line: None,
            source_code: NamedSource::new(file, source.to_string()),
            span: None,
        }
    }
}

fn line_span(source: &str, line: usize) -> Option<SourceSpan> {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let len = text.trim_end_matches(['\n', '\r']).len();
            return Some(SourceSpan::new(offset.into(), len));
        }
        offset += text.len();
    }
    None
}

#[derive(Error, Debug, Diagnostic)]
pub enum LineageError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(lineage::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ParseError(Box<ParseError>),

    #[error("Cannot find person \"{query}\"")]
    #[diagnostic(
        code(lineage::person_not_found),
        help("Pass an identifier or the exact display name of a person in the input")
    )]
    PersonNotFound { query: String },

    #[error("\"{query}\" is ambiguous, it matches: {}", .candidates.join(", "))]
    #[diagnostic(
        code(lineage::ambiguous_person),
        help("Pass one of the listed identifiers instead of the display name")
    )]
    AmbiguousPerson {
        query: String,
        candidates: Vec<String>,
    },

    #[error("Cannot pick a root person automatically ({count} persons have no parents)")]
    #[diagnostic(
        code(lineage::no_root_specified),
        help("Specify the root explicitly with --ancestor <PERSON>")
    )]
    NoRootSpecified { count: usize },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(lineage::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(lineage::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(lineage::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl From<ParseError> for LineageError {
    fn from(error: ParseError) -> Self {
        LineageError::ParseError(Box::new(error))
    }
}
