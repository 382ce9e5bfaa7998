//! # Person Registry
//!
//! The registry owns every person read from the input and the parent/child
//! relationships between them. It is built once per run by a
//! [reader](crate::reader) and only queried afterwards.
//!
//! Relationships are stored as edges of a `petgraph` directed graph going
//! from parent to child, so the parent and child lists of a person are always
//! mutual by construction.
//!
//! ## Example
//!
//! ```
//! use lineage::core::Person;
//! use lineage::registry::PersonRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = PersonRegistry::new();
//! let louis = registry.insert(Person::new("Louis XIV"), false)?;
//! let dauphin = registry.insert(Person::new("Louis de France"), false)?;
//! registry.add_parent_child(louis, dauphin);
//!
//! assert_eq!(registry.children_of(louis), vec![dauphin]);
//! assert_eq!(registry.parents_of(dauphin), vec![louis]);
//! assert_eq!(registry.all_roots(), vec![louis]);
//! # Ok(())
//! # }
//! ```

mod registry_impl;

pub use registry_impl::*;
