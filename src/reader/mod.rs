//! # Format Readers
//!
//! Readers turn an input document into a fully populated
//! [`PersonRegistry`]. Two formats are supported:
//!
//! - **text**: the line-oriented indentation format ([`TextReader`])
//! - **json**: the structured document with explicit parent references
//!   ([`JsonReader`], [`FamilyDocument`])
//!
//! Any malformed input aborts the read with a
//! [`ParseError`](crate::error::ParseError); there is no best-effort
//! recovery.

pub mod document;
pub mod text;

use std::path::Path;

pub use document::{FamilyDocument, JsonReader};
pub use text::TextReader;

use crate::cli::InputFormat;
use crate::error::{LineageError, ParseError};
use crate::registry::PersonRegistry;

/// Common trait for all input formats
pub trait FamilyReader {
    /// Parse `source`, read from `file`, into a registry
    fn read(&self, file: &str, source: &str) -> Result<PersonRegistry, LineageError>;
}

pub fn reader_for(format: InputFormat) -> Box<dyn FamilyReader> {
    match format {
        InputFormat::Text => Box::new(TextReader),
        InputFormat::Json => Box::new(JsonReader),
    }
}

/// Read and parse a family file in the given format
pub fn read_family_file(path: &Path, format: InputFormat) -> Result<PersonRegistry, LineageError> {
    let source = std::fs::read_to_string(path).map_err(|source| LineageError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    reader_for(format).read(&path.display().to_string(), &source)
}

/// Fail when somebody ended up as their own ancestor
pub(crate) fn reject_cycles(
    registry: &PersonRegistry,
    file: &str,
    source: &str,
) -> Result<(), LineageError> {
    match registry.find_cycle() {
        Some(index) => {
            let person = registry.person(index);
            Err(ParseError::whole_document(
                file,
                source,
                format!(
                    "\"{}\" ({}) is recorded as their own ancestor",
                    person.name(),
                    person.id()
                ),
            )
            .into())
        }
        None => Ok(()),
    }
}
