//! Reference mapping from source declarations to their generated forms.
//!
//! Each source declaration owns one [`MapEntry`] holding up to two target
//! forms, one per [`Shape`]. A form is recorded once and never replaced, so
//! every reference to the same source declaration under the same shape
//! resolves to the same target id.

use std::collections::HashMap;

use obsgen_foundation::DeclId;

use crate::shape::Shape;

/// The generated forms of one source declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapEntry {
    /// Class form, if created.
    pub class: Option<DeclId>,
    /// Interface form, if created.
    pub interface: Option<DeclId>,
}

impl MapEntry {
    /// Returns the form for `shape`, if created.
    #[must_use]
    pub const fn form(&self, shape: Shape) -> Option<DeclId> {
        match shape {
            Shape::Class => self.class,
            Shape::Interface => self.interface,
        }
    }

    fn slot(&mut self, shape: Shape) -> &mut Option<DeclId> {
        match shape {
            Shape::Class => &mut self.class,
            Shape::Interface => &mut self.interface,
        }
    }
}

/// Outcome of looking up a source declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The declaration is outside the transformed graph.
    Unmapped,
    /// The form for the requested shape exists.
    Mapped(DeclId),
    /// The declaration is mapped but has no form for the requested shape yet.
    Missing,
}

/// Run-scoped table from source declaration to generated forms.
#[derive(Clone, Debug, Default)]
pub struct ReferenceMap {
    entries: HashMap<DeclId, MapEntry>,
    /// Source ids in registration order.
    order: Vec<DeclId>,
    /// Reverse index from generated form to source declaration.
    sources: HashMap<DeclId, DeclId>,
}

impl ReferenceMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `target` as the `shape` form of `source`.
    ///
    /// Returns `false` and leaves the entry untouched if that form already
    /// exists.
    pub fn declare(&mut self, source: DeclId, shape: Shape, target: DeclId) -> bool {
        let entry = self.entries.entry(source).or_insert_with(|| {
            self.order.push(source);
            MapEntry::default()
        });
        let slot = entry.slot(shape);
        if slot.is_some() {
            return false;
        }
        *slot = Some(target);
        self.sources.insert(target, source);
        true
    }

    /// Looks up the `shape` form of `source`.
    #[must_use]
    pub fn lookup(&self, source: DeclId, shape: Shape) -> Lookup {
        match self.entries.get(&source) {
            None => Lookup::Unmapped,
            Some(entry) => entry.form(shape).map_or(Lookup::Missing, Lookup::Mapped),
        }
    }

    /// Returns the entry for `source`.
    #[must_use]
    pub fn entry(&self, source: DeclId) -> Option<&MapEntry> {
        self.entries.get(&source)
    }

    /// Returns the source declaration a generated form was created for.
    #[must_use]
    pub fn source_of(&self, target: DeclId) -> Option<DeclId> {
        self.sources.get(&target).copied()
    }

    /// Iterates over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &MapEntry)> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|entry| (*id, entry)))
    }

    /// Returns the number of mapped source declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every entry so the map can serve a new run.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.sources.clear();
    }
}
