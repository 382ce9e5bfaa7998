//! Root person resolution
//!
//! Maps the `--ancestor` query to the persons a walk starts from.

use crate::cli::TreeType;
use crate::constants::ROOT_QUERY_SEPARATOR;
use crate::error::LineageError;
use crate::registry::{PersonIndex, PersonRegistry};

/// Outcome of resolving a root query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoots {
    /// Persons to start the walk from, without duplicates
    pub roots: Vec<PersonIndex>,
    /// Query components that were not used by a single-root walk
    pub ignored: Vec<String>,
}

pub struct RootResolver<'a> {
    registry: &'a PersonRegistry,
}

impl<'a> RootResolver<'a> {
    pub fn new(registry: &'a PersonRegistry) -> Self {
        Self { registry }
    }

    /// Resolve `query`, a comma separated list of identifiers or display
    /// names, for a walk of the given type.
    ///
    /// Without a query the only person that has no parents is used.
    pub fn resolve(
        &self,
        query: Option<&str>,
        tree_type: TreeType,
    ) -> Result<ResolvedRoots, LineageError> {
        let components: Vec<&str> = query
            .into_iter()
            .flat_map(|query| query.split(ROOT_QUERY_SEPARATOR))
            .map(str::trim)
            .filter(|component| !component.is_empty())
            .collect();

        if components.is_empty() {
            return self.discover().map(|root| ResolvedRoots {
                roots: vec![root],
                ignored: Vec::new(),
            });
        }

        if !tree_type.accepts_multiple_roots() {
            let root = self.resolve_single(components[0])?;
            return Ok(ResolvedRoots {
                roots: vec![root],
                ignored: components[1..].iter().map(|c| c.to_string()).collect(),
            });
        }

        let mut roots: Vec<PersonIndex> = Vec::new();
        for component in components {
            for index in self.matches(component)? {
                if !roots.contains(&index) {
                    roots.push(index);
                }
            }
        }

        Ok(ResolvedRoots {
            roots,
            ignored: Vec::new(),
        })
    }

    /// Resolve a query that has to name exactly one person
    pub fn resolve_single(&self, query: &str) -> Result<PersonIndex, LineageError> {
        let matches = self.matches(query)?;
        match matches.as_slice() {
            [index] => Ok(*index),
            _ => Err(LineageError::AmbiguousPerson {
                query: query.to_string(),
                candidates: matches
                    .iter()
                    .map(|&index| self.registry.person(index).id().to_string())
                    .collect(),
            }),
        }
    }

    fn matches(&self, query: &str) -> Result<Vec<PersonIndex>, LineageError> {
        let matches = self.registry.find_by_name_or_id(query);
        if matches.is_empty() {
            return Err(LineageError::PersonNotFound {
                query: query.to_string(),
            });
        }
        Ok(matches)
    }

    fn discover(&self) -> Result<PersonIndex, LineageError> {
        match self.registry.all_roots().as_slice() {
            [root] => Ok(*root),
            roots => Err(LineageError::NoRootSpecified { count: roots.len() }),
        }
    }
}
