//! Configuration constants for lineage
//!
//! This module contains the constants shared by the readers, the command
//! line and the DOT output.

/// Separator between persons of an `--ancestor` query
pub const ROOT_QUERY_SEPARATOR: char = ',';

/// Input configuration
pub mod input {
    /// Default input format when not specified
    pub const DEFAULT_FORMAT: &str = "json";
}

/// Indentation text format
pub mod text_format {
    /// Number of spaces per indentation level
    pub const INDENT_WIDTH: usize = 4;

    /// Prefix of a line naming the second parent of the line above it
    pub const SPOUSE_MARKER: char = '+';

    /// Keys that cannot be used as free-form attributes because the JSON
    /// document already has a field of that name
    pub const RESERVED_ATTRIBUTES: &[&str] = &["id", "name", "sex", "parents"];
}

/// Output formatting configuration
pub mod output {
    /// Default tree type when not specified
    pub const DEFAULT_TREE_TYPE: &str = "family-ancestor";

    /// Name of the emitted DOT graph
    pub const GRAPH_NAME: &str = "family";
}
