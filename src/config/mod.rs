//! # Configuration Module
//!
//! Configuration structures for the two things lineage can do. Each one has
//! a builder with `with_*` methods, validated by
//! [`ConfigBuilder::build`](crate::common::ConfigBuilder::build).
//!
//! - **TreeOptions**: draw a family tree as a DOT graph
//! - **ConvertOptions**: convert an input file to the JSON document format
//!
//! ## Example
//!
//! ```
//! use lineage::cli::{InputFormat, TreeType};
//! use lineage::common::ConfigBuilder;
//! use lineage::config::TreeOptions;
//!
//! let options = TreeOptions::builder()
//!     .with_input("family.txt".into())
//!     .with_format(InputFormat::Text)
//!     .with_ancestor(Some("Louis XIV".to_string()))
//!     .with_tree_type(TreeType::Family)
//!     .with_output(None)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.tree_type, TreeType::Family);
//! ```

pub mod convert;
pub mod tree;

pub use convert::ConvertOptions;
pub use tree::TreeOptions;
