//! # Tree Walker
//!
//! Traverses the registry from the resolved roots and produces the ordered
//! list of nodes and edges to draw.
//!
//! Walks are breadth-first over an explicit work list, one generation after
//! the other, so the output follows the order of the input file. Each walk
//! keeps its own visited set, which guarantees termination even on cyclic
//! relationships, while the emitted nodes and edges are shared by all walks
//! of a [`TreeWalker`] so that a combined tree draws everything once.

use std::collections::{HashSet, VecDeque};

use crate::cli::TreeType;
use crate::core::Person;
use crate::registry::{PersonIndex, PersonRegistry};

/// Something to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    Node(&'a Person),
    /// Parent to child relationship, by identifier
    Edge { parent: &'a str, child: &'a str },
}

pub struct TreeWalker<'a> {
    registry: &'a PersonRegistry,
    include_spouses: bool,
    emitted_nodes: HashSet<PersonIndex>,
    emitted_edges: HashSet<(PersonIndex, PersonIndex)>,
    events: Vec<WalkEvent<'a>>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(registry: &'a PersonRegistry) -> Self {
        Self {
            registry,
            include_spouses: true,
            emitted_nodes: HashSet::new(),
            emitted_edges: HashSet::new(),
            events: Vec::new(),
        }
    }

    /// Also draw the other parents of every descendant (enabled by default).
    /// They are not descended from.
    pub fn with_spouses(mut self, include_spouses: bool) -> Self {
        self.include_spouses = include_spouses;
        self
    }

    /// Run the walks a tree type asks for: ancestors first, then descendants
    pub fn walk(mut self, roots: &[PersonIndex], tree_type: TreeType) -> Vec<WalkEvent<'a>> {
        if tree_type.includes_ancestors() {
            self.walk_ancestors(roots);
        }
        if tree_type.includes_descendants() {
            self.walk_descendants(roots);
        }
        self.events
    }

    /// Follow child links downwards from `roots`
    pub fn walk_descendants(&mut self, roots: &[PersonIndex]) {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        for &root in roots {
            if visited.insert(root) {
                self.emit_node(root);
                queue.push_back(root);
            }
        }

        while let Some(person) = queue.pop_front() {
            for child in self.registry.children_of(person) {
                if visited.insert(child) {
                    self.emit_node(child);
                    queue.push_back(child);
                }
                self.emit_edge(person, child);

                if self.include_spouses {
                    for other in self.registry.parents_of(child) {
                        if other != person {
                            self.emit_node(other);
                            self.emit_edge(other, child);
                        }
                    }
                }
            }
        }
    }

    /// Follow parent links upwards from `roots`
    pub fn walk_ancestors(&mut self, roots: &[PersonIndex]) {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        for &root in roots {
            if visited.insert(root) {
                self.emit_node(root);
                queue.push_back(root);
            }
        }

        while let Some(person) = queue.pop_front() {
            for parent in self.registry.parents_of(person) {
                if visited.insert(parent) {
                    self.emit_node(parent);
                    queue.push_back(parent);
                }
                self.emit_edge(parent, person);
            }
        }
    }

    fn emit_node(&mut self, index: PersonIndex) {
        if self.emitted_nodes.insert(index) {
            self.events.push(WalkEvent::Node(self.registry.person(index)));
        }
    }

    fn emit_edge(&mut self, parent: PersonIndex, child: PersonIndex) {
        if self.emitted_edges.insert((parent, child)) {
            self.events.push(WalkEvent::Edge {
                parent: self.registry.person(parent).id(),
                child: self.registry.person(child).id(),
            });
        }
    }
}
