//! Observable view-model generation for obsgen.
//!
//! This crate provides:
//! - [`ObservableTransformer`] - Rewrites a source graph into observable form
//! - [`ReferenceMap`] - Source-to-target declaration identities
//! - [`TransformContext`] - Per-run state shared by the generation passes
//! - [`make_observable`] / [`make_observable_in_place`] - Property wrapping
//!
//! Generation runs in two phases. Every source declaration first gets an
//! empty skeleton in the primary [`Shape`] so cyclic references resolve, then
//! each skeleton is filled: inheritance edges are rewired, properties are
//! wrapped and, for classes, a hydration function is synthesized.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod context;
pub mod duality;
pub mod engine;
pub mod hydrate;
pub mod in_place;
pub mod mapper;
pub mod rewrite;
pub mod shape;
pub mod wrap;

pub use config::{GenerationMode, ObservableNaming, TransformConfig};
pub use context::{TransformContext, TransformOutput};
pub use engine::ObservableTransformer;
pub use in_place::make_observable_in_place;
pub use mapper::{Lookup, MapEntry, ReferenceMap};
pub use shape::Shape;
pub use wrap::make_observable;
