//! Identifiers for declaration graphs.
//!
//! Every graph is an arena. A [`ModuleId`] names one arena for the lifetime of
//! the process, and a [`DeclId`] addresses one declaration inside it. Two
//! references denote the same declaration exactly when their ids are equal.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Global counter for allocating module identifiers.
static MODULE_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Identifier of one declaration graph.
///
/// Allocated from a process-wide counter so ids of distinct graphs never
/// collide, even when a source and a target graph are alive side by side.
/// Deserialized ids are reserved on the counter, so graphs built afterwards
/// never reuse them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModuleId(u32);

impl ModuleId {
    /// Allocates a fresh, never before returned module id.
    #[must_use]
    pub fn fresh() -> Self {
        Self(MODULE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the id with the given raw value and makes sure
    /// [`fresh`](Self::fresh) never hands it out afterwards.
    #[must_use]
    pub fn reserve(raw: u32) -> Self {
        MODULE_COUNTER.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
        Self(raw)
    }

    /// Returns the raw value of this id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

#[cfg(feature = "serde")]
impl Serialize for ModuleId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ModuleId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::reserve)
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// Identifier of a declaration within a specific module.
///
/// # Layout
/// - `module`: the graph that owns the declaration
/// - `index`: position in the owning module's declaration list
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeclId {
    /// Owning module.
    pub module: ModuleId,
    /// Index into the owning module's declaration list.
    pub index: u32,
}

impl DeclId {
    /// Creates a declaration id.
    #[must_use]
    pub const fn new(module: ModuleId, index: u32) -> Self {
        Self { module, index }
    }

    /// Returns true if this declaration lives in the given module.
    #[must_use]
    pub fn belongs_to(self, module: ModuleId) -> bool {
        self.module == module
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclId({}#{})", self.module.0, self.index)
    }
}

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.module, self.index)
    }
}
