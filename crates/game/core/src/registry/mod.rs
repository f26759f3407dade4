//! Arena storage with name resolution.
//!
//! Content refers to other content by name. The link pass turns those names
//! into handles exactly once; afterwards the engine only ever indexes.
mod handles;

pub use handles::{CharacterId, EventId, Handle, ItemId, ObjectiveId, ResourceId, TraitId};

use std::collections::HashMap;

use crate::link::{EntityKind, LinkError};

/// Result of resolving a name against a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup<'n, H> {
    Found(H),
    NotFound(&'n str),
}

impl<'n, H: Handle> Lookup<'n, H> {
    /// Converts a lookup into a link result, naming the entity that held the
    /// reference when the name is missing.
    pub fn require(self, kind: EntityKind, referenced_by: &str) -> Result<H, LinkError> {
        match self {
            Lookup::Found(handle) => Ok(handle),
            Lookup::NotFound(name) => Err(LinkError::Unresolved {
                kind,
                name: name.to_string(),
                referenced_by: referenced_by.to_string(),
            }),
        }
    }

    pub fn found(self) -> Option<H> {
        match self {
            Lookup::Found(handle) => Some(handle),
            Lookup::NotFound(_) => None,
        }
    }
}

/// Append-only arena of named entries.
#[derive(Clone, Debug)]
pub struct Registry<H, T> {
    kind: EntityKind,
    entries: Vec<T>,
    names: HashMap<String, H>,
}

impl<H: Handle, T> Registry<H, T> {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Inserts an entry under a unique name.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::Duplicate` if the name is already registered.
    pub fn insert(&mut self, name: &str, entry: T) -> Result<H, LinkError> {
        if self.names.contains_key(name) {
            return Err(LinkError::Duplicate {
                kind: self.kind,
                name: name.to_string(),
            });
        }
        let handle = H::from_index(self.entries.len());
        self.entries.push(entry);
        self.names.insert(name.to_string(), handle);
        Ok(handle)
    }

    pub fn lookup<'n>(&self, name: &'n str) -> Lookup<'n, H> {
        match self.names.get(name) {
            Some(handle) => Lookup::Found(*handle),
            None => Lookup::NotFound(name),
        }
    }

    /// Resolves a name that must exist.
    pub fn require(&self, name: &str, referenced_by: &str) -> Result<H, LinkError> {
        self.lookup(name).require(self.kind, referenced_by)
    }

    /// Handles are only issued by `insert`, so indexing cannot go out of bounds
    /// for a handle obtained from this registry.
    #[inline]
    pub fn get(&self, handle: H) -> &T {
        &self.entries[handle.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, handle: H) -> &mut T {
        &mut self.entries[handle.index()]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Entries in handle order; position `i` belongs to `H::from_index(i)`.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [T] {
        &mut self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (H, &T)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (H::from_index(index), entry))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (H, &mut T)> {
        self.entries
            .iter_mut()
            .enumerate()
            .map(|(index, entry)| (H::from_index(index), entry))
    }

    pub fn handles(&self) -> impl Iterator<Item = H> + '_ {
        (0..self.entries.len()).map(H::from_index)
    }
}
