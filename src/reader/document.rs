//! Structured JSON family document
//!
//! Persons carry their parent identifiers explicitly, so nothing depends on
//! the position of a record. The household list of older documents is still
//! accepted on input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Person, Sex};
use crate::error::{LineageError, ParseError};
use crate::reader::{FamilyReader, reject_cycles};
use crate::registry::{PersonIndex, PersonRegistry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyDocument {
    pub individuals: Vec<PersonRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub households: Vec<HouseholdRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

/// A union and its children, as written by household-based documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdRecord {
    #[serde(default)]
    pub parents: IdList,
    #[serde(default)]
    pub children: IdList,
}

/// Identifiers given either as a list or as an `{"ID0": .., "ID1": ..}` map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdList {
    List(Vec<String>),
    Keyed(BTreeMap<String, String>),
}

impl Default for IdList {
    fn default() -> Self {
        IdList::List(Vec::new())
    }
}

impl IdList {
    /// Identifiers in document order; keyed maps are ordered by the number
    /// in their keys so that `ID10` follows `ID9`
    pub fn ids(&self) -> Vec<&str> {
        match self {
            IdList::List(ids) => ids.iter().map(String::as_str).collect(),
            IdList::Keyed(map) => {
                let mut entries: Vec<(&String, &String)> = map.iter().collect();
                entries.sort_by(|(a, _), (b, _)| {
                    key_number(a).cmp(&key_number(b)).then_with(|| a.cmp(b))
                });
                entries.into_iter().map(|(_, id)| id.as_str()).collect()
            }
        }
    }
}

fn key_number(key: &str) -> Option<u64> {
    key.trim_start_matches(|c: char| !c.is_ascii_digit()).parse().ok()
}

impl FamilyDocument {
    /// Describe every person of the registry with explicit parent references
    pub fn from_registry(registry: &PersonRegistry) -> Self {
        let individuals = registry
            .persons()
            .map(|(index, person)| PersonRecord {
                id: person.id().to_string(),
                name: person.name().to_string(),
                sex: person.sex().cloned(),
                parents: registry
                    .parents_of(index)
                    .into_iter()
                    .map(|parent| registry.person(parent).id().to_string())
                    .collect(),
                attributes: person
                    .attributes()
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                    .collect(),
            })
            .collect();

        Self {
            individuals,
            households: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, LineageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the registry described by this document
    pub fn into_registry(self, file: &str, source: &str) -> Result<PersonRegistry, LineageError> {
        let error = |message: String| ParseError::whole_document(file, source, message);
        let mut registry = PersonRegistry::new();
        let mut pending: Vec<(PersonIndex, Vec<String>)> = Vec::new();

        for record in self.individuals {
            if record.id.is_empty() {
                return Err(error(format!("person \"{}\" has an empty id", record.name)).into());
            }

            let mut person = Person::new(record.name)
                .with_id(record.id)
                .with_sex(record.sex);
            for (key, value) in record.attributes {
                let value = match value {
                    Value::String(text) => text,
                    other => other.to_string(),
                };
                person = person.with_attribute(key, value);
            }

            let index = registry
                .insert(person, true)
                .map_err(|e| error(e.to_string()))?;
            pending.push((index, record.parents));
        }

        let lookup = |registry: &PersonRegistry, id: &str| {
            registry
                .get(id)
                .ok_or_else(|| error(format!("reference to unknown person id \"{id}\"")))
        };

        for (child, parents) in pending {
            for parent in parents {
                let parent = lookup(&registry, &parent)?;
                registry.add_parent_child(parent, child);
            }
        }

        for household in &self.households {
            let parents = household
                .parents
                .ids()
                .into_iter()
                .map(|id| lookup(&registry, id))
                .collect::<Result<Vec<_>, _>>()?;
            for id in household.children.ids() {
                let child = lookup(&registry, id)?;
                for &parent in &parents {
                    registry.add_parent_child(parent, child);
                }
            }
        }

        reject_cycles(&registry, file, source)?;
        Ok(registry)
    }
}

/// Parses the structured JSON document
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReader;

impl FamilyReader for JsonReader {
    fn read(&self, file: &str, source: &str) -> Result<PersonRegistry, LineageError> {
        let document: FamilyDocument = serde_json::from_str(source).map_err(|e| {
            ParseError::at_position(file, source, e.line(), e.column(), e.to_string())
        })?;
        document.into_registry(file, source)
    }
}
