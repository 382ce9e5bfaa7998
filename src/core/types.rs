//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sex marker of a person, used for node styling
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    Male,
    Female,
    Other(String),
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        match value.as_str() {
            "M" => Sex::Male,
            "F" => Sex::Female,
            _ => Sex::Other(value),
        }
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.to_string()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "M"),
            Sex::Female => write!(f, "F"),
            Sex::Other(value) => write!(f, "{value}"),
        }
    }
}

/// A person of the family
///
/// Relationships are not stored here; they live in the
/// [`PersonRegistry`](crate::registry::PersonRegistry) graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: String,
    name: String,
    sex: Option<Sex>,
    attributes: BTreeMap<String, String>,
}

impl Person {
    /// Create a person whose identifier is derived from the name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: derive_id(&name),
            name,
            sex: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_sex(mut self, sex: Option<Sex>) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sex(&self) -> Option<&Sex> {
        self.sex.as_ref()
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Fold the description of a repeated appearance into this entry.
    ///
    /// Later values win for the sex marker and for attributes sharing a key.
    pub fn merge(&mut self, other: Person) {
        if other.sex.is_some() {
            self.sex = other.sex;
        }
        self.attributes.extend(other.attributes);
    }
}

/// Default identifier for a name: every character that is not an ASCII
/// letter or digit is dropped.
///
/// Names without any ASCII letter or digit keep the trimmed name itself.
pub fn derive_id(name: &str) -> String {
    let id: String = name.chars().filter(char::is_ascii_alphanumeric).collect();
    if id.is_empty() {
        name.trim().to_string()
    } else {
        id
    }
}
