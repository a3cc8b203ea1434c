//! obsgen - Observable view-model generation
//!
//! This crate re-exports all layers of obsgen for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: obsgen_transform  — Reference mapping, rewriting, duality, hydration
//! Layer 1: obsgen_model      — Declaration graph, type references, rendering
//! Layer 0: obsgen_foundation — Identities and errors
//! ```

pub use obsgen_foundation as foundation;
pub use obsgen_model as model;
pub use obsgen_transform as transform;
