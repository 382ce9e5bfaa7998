//! # Graph Rendering Module
//!
//! Serializes the events produced by the [walker](crate::walker) into
//! Graphviz DOT. Rendering is pure formatting: one node statement per node
//! event and one edge statement per edge event, in event order.
//!
//! ## Example
//!
//! ```
//! use lineage::cli::TreeType;
//! use lineage::graph::GraphRenderer;
//! use lineage::reader::{FamilyReader, TextReader};
//! use lineage::walker::TreeWalker;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = TextReader.read("family.txt", "Louis XIV (M)\n    Louis (M)\n")?;
//! let root = registry.get("LouisXIV").unwrap();
//!
//! let events = TreeWalker::new(&registry).walk(&[root], TreeType::Family);
//!
//! let mut output = Vec::new();
//! GraphRenderer::new().render_dot(&events, &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains(r#""LouisXIV" -> "Louis";"#));
//! # Ok(())
//! # }
//! ```

mod renderer;

pub use renderer::GraphRenderer;
