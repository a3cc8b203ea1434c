//! Declaration graphs.
//!
//! A [`Module`] owns its declarations in an arena. Edges between declarations
//! are [`TypeRef`](crate::TypeRef)s holding [`DeclId`]s, so cycles cost
//! nothing and identity is id equality.

// Declaration counts are bounded far below u32::MAX
#![allow(clippy::cast_possible_truncation)]

use std::collections::{BTreeSet, HashMap};

use obsgen_foundation::{DeclId, ModuleId};

use crate::declaration::Declaration;
use crate::visitor::{DeclarationCollector, walk_declaration};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A graph of class and interface declarations.
///
/// Deserializing keeps the stored id and reserves it, so modules created
/// afterwards never collide with it. Graphs serialized by different processes
/// may still carry the same [`ModuleId`] and must not be mixed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Module {
    id: ModuleId,
    /// Module name, used for diagnostics.
    pub name: String,
    declarations: Vec<Declaration>,
}

impl Module {
    /// Creates an empty module with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ModuleId::fresh(),
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    /// Returns this module's id.
    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    /// Adds a declaration, returning its id.
    pub fn add(&mut self, declaration: Declaration) -> DeclId {
        let id = DeclId::new(self.id, self.declarations.len() as u32);
        self.declarations.push(declaration);
        id
    }

    /// Adds an empty class.
    pub fn add_class(&mut self, name: impl Into<String>) -> DeclId {
        self.add(Declaration::class(name))
    }

    /// Adds an empty interface.
    pub fn add_interface(&mut self, name: impl Into<String>) -> DeclId {
        self.add(Declaration::interface(name))
    }

    /// Returns true if `id` addresses a declaration of this module.
    #[must_use]
    pub fn contains(&self, id: DeclId) -> bool {
        id.belongs_to(self.id) && (id.index as usize) < self.declarations.len()
    }

    /// Gets a declaration by id.
    ///
    /// Returns `None` for ids of other modules.
    #[must_use]
    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        if !id.belongs_to(self.id) {
            return None;
        }
        self.declarations.get(id.index as usize)
    }

    /// Gets a declaration mutably by id.
    pub fn get_mut(&mut self, id: DeclId) -> Option<&mut Declaration> {
        if !id.belongs_to(self.id) {
            return None;
        }
        self.declarations.get_mut(id.index as usize)
    }

    /// Iterates over declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &Declaration)> {
        let module = self.id;
        self.declarations
            .iter()
            .enumerate()
            .map(move |(i, d)| (DeclId::new(module, i as u32), d))
    }

    /// Iterates over declaration ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = DeclId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if the module has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Finds the first declaration with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<DeclId> {
        self.iter().find(|(_, d)| d.name == name).map(|(id, _)| id)
    }

    /// Returns names declared more than once, in first-seen order.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for decl in &self.declarations {
            let count = counts.entry(decl.name.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(decl.name.as_str());
            }
        }
        order
    }

    /// Returns every declaration referenced from this module that it does not own.
    #[must_use]
    pub fn external_references(&self) -> BTreeSet<DeclId> {
        let mut collector = DeclarationCollector::default();
        for decl in &self.declarations {
            walk_declaration(&mut collector, decl);
        }
        collector
            .found
            .into_iter()
            .filter(|id| !id.belongs_to(self.id))
            .collect()
    }
}
