use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use thiserror::Error;

use crate::core::Person;

/// Handle to a person stored in a [`PersonRegistry`]
pub type PersonIndex = NodeIndex;

/// Conflicts detected while adding persons to the registry
///
/// Readers turn these into parse errors pointing at the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("identifier \"{id}\" is already used by \"{existing}\", cannot reuse it for \"{incoming}\"")]
    ConflictingName {
        id: String,
        existing: String,
        incoming: String,
    },

    #[error("\"{name}\" could refer to several persons: {}", .candidates.join(", "))]
    AmbiguousName {
        name: String,
        candidates: Vec<String>,
    },
}

/// All persons of one run and their parent/child relationships
#[derive(Debug, Clone, Default)]
pub struct PersonRegistry {
    graph: DiGraph<Person, ()>,
    ids: HashMap<String, PersonIndex>,
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn person(&self, index: PersonIndex) -> &Person {
        &self.graph[index]
    }

    /// Look a person up by identifier only
    pub fn get(&self, id: &str) -> Option<PersonIndex> {
        self.ids.get(id).copied()
    }

    /// Return the person known under `identifier_or_name`, creating a bare
    /// entry keyed by that value when nobody matches
    pub fn get_or_create(&mut self, identifier_or_name: &str) -> Result<PersonIndex, RegistryError> {
        if let Some(index) = self.get(identifier_or_name) {
            return Ok(index);
        }
        if let Some(index) = self.unique_by_name(identifier_or_name)? {
            return Ok(index);
        }
        Ok(self.add(Person::new(identifier_or_name).with_id(identifier_or_name)))
    }

    /// Add a fully described person, or merge it into the entry it refers to.
    ///
    /// With `explicit_id` the person is matched by identifier only. Otherwise
    /// its derived identifier is tried first, then a unique exact display name.
    pub fn insert(&mut self, person: Person, explicit_id: bool) -> Result<PersonIndex, RegistryError> {
        if let Some(index) = self.get(person.id()) {
            let existing = &mut self.graph[index];
            if existing.name() != person.name() {
                return Err(RegistryError::ConflictingName {
                    id: person.id().to_string(),
                    existing: existing.name().to_string(),
                    incoming: person.name().to_string(),
                });
            }
            existing.merge(person);
            return Ok(index);
        }

        if !explicit_id && let Some(index) = self.unique_by_name(person.name())? {
            self.graph[index].merge(person);
            return Ok(index);
        }

        Ok(self.add(person))
    }

    /// Record `parent` as a parent of `child`.
    ///
    /// Returns `false` when the relationship was already known.
    pub fn add_parent_child(&mut self, parent: PersonIndex, child: PersonIndex) -> bool {
        if self.graph.find_edge(parent, child).is_some() {
            return false;
        }
        self.graph.add_edge(parent, child, ());
        true
    }

    /// Every person whose identifier or display name equals `query`
    pub fn find_by_name_or_id(&self, query: &str) -> Vec<PersonIndex> {
        self.graph
            .node_indices()
            .filter(|&index| {
                let person = &self.graph[index];
                person.id() == query || person.name() == query
            })
            .collect()
    }

    /// Persons without any recorded parent, in insertion order
    pub fn all_roots(&self) -> Vec<PersonIndex> {
        self.graph
            .node_indices()
            .filter(|&index| {
                self.graph
                    .neighbors_directed(index, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect()
    }

    pub fn parents_of(&self, index: PersonIndex) -> Vec<PersonIndex> {
        self.related(index, Direction::Incoming)
    }

    pub fn children_of(&self, index: PersonIndex) -> Vec<PersonIndex> {
        self.related(index, Direction::Outgoing)
    }

    /// All persons in insertion order
    pub fn persons(&self) -> impl Iterator<Item = (PersonIndex, &Person)> + '_ {
        self.graph
            .node_indices()
            .map(move |index| (index, &self.graph[index]))
    }

    /// All `(parent id, child id)` pairs in insertion order
    pub fn relationships(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .map(|edge| (self.graph[edge.source()].id(), self.graph[edge.target()].id()))
            .collect()
    }

    /// A person who is their own ancestor, if the relationships contain a
    /// cycle
    pub fn find_cycle(&self) -> Option<PersonIndex> {
        toposort(&self.graph, None).err().map(|cycle| cycle.node_id())
    }

    fn add(&mut self, person: Person) -> PersonIndex {
        let id = person.id().to_string();
        let index = self.graph.add_node(person);
        self.ids.insert(id, index);
        index
    }

    fn unique_by_name(&self, name: &str) -> Result<Option<PersonIndex>, RegistryError> {
        let matches: Vec<PersonIndex> = self
            .graph
            .node_indices()
            .filter(|&index| self.graph[index].name() == name)
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [index] => Ok(Some(*index)),
            _ => Err(RegistryError::AmbiguousName {
                name: name.to_string(),
                candidates: matches
                    .iter()
                    .map(|&index| self.graph[index].id().to_string())
                    .collect(),
            }),
        }
    }

    // Edges of one node come back newest first; sort by edge index to get
    // insertion order.
    fn related(&self, index: PersonIndex, direction: Direction) -> Vec<PersonIndex> {
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(index, direction)
            .map(|edge| {
                let other = match direction {
                    Direction::Outgoing => edge.target(),
                    Direction::Incoming => edge.source(),
                };
                (edge.id(), other)
            })
            .collect();
        edges.sort_by_key(|(edge, _)| edge.index());
        edges.into_iter().map(|(_, other)| other).collect()
    }
}
