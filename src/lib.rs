//! # Lineage - Family Trees as Graphviz Graphs
//!
//! Lineage reads a description of a family, either a simple indentation
//! based text file or a JSON document, and writes a Graphviz DOT graph of the
//! descendants, the ancestors, or both, of a chosen person. The DOT output is
//! meant to be piped into a layout tool such as `dot`.
//!
//! ## Main Components
//!
//! - **Registry**: every person of the input and their parent/child
//!   relationships
//! - **Reader**: parses the text and JSON formats into a registry
//! - **Resolver**: finds the root person(s) from a name or identifier query
//! - **Walker**: visits descendants and/or ancestors, each person and
//!   relationship once
//! - **Graph**: renders the walk as DOT
//!
//! ## Usage
//!
//! ```
//! use lineage::cli::TreeType;
//! use lineage::graph::GraphRenderer;
//! use lineage::reader::{FamilyReader, TextReader};
//! use lineage::resolver::RootResolver;
//! use lineage::walker::TreeWalker;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = "\
//! Louis XIV (M, birthday=1638)
//! Maria Theresa of Spain (F)
//!     Louis, Grand Dauphin (M, id=GrandDauphin)
//!     + Maria Anna Victoria of Bavaria (F)
//!         Louis, Duke of Burgundy (M, id=Burgundy)
//! ";
//!
//! // Step 1: Build the registry
//! let registry = TextReader.read("louis.txt", source)?;
//!
//! // Step 2: Find the root of the tree
//! let resolved = RootResolver::new(&registry).resolve(Some("Louis XIV"), TreeType::Family)?;
//!
//! // Step 3: Walk the descendants
//! let events = TreeWalker::new(&registry).walk(&resolved.roots, TreeType::Family);
//!
//! // Step 4: Render DOT
//! let mut output = Vec::new();
//! GraphRenderer::new().render_dot(&events, &mut output)?;
//! let dot = String::from_utf8(output)?;
//!
//! assert!(dot.contains(r#""LouisXIV" -> "GrandDauphin";"#));
//! assert!(dot.contains(r#""GrandDauphin" -> "Burgundy";"#));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reader;
pub mod registry;
pub mod resolver;
pub mod walker;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    execute_command(Cli::parse())
}
