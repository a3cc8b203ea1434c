//! Declaration graph model for obsgen.
//!
//! This crate provides:
//! - [`Module`] - An arena-backed graph of declarations
//! - [`Declaration`] - Classes and interfaces with generics, members and edges
//! - [`TypeRef`] - References between declarations and to other types
//! - [`visitor`] - Read-only traversal of type references
//! - [`render`] - Debug rendering of graph fragments
//!
//! The same model describes both the source graph a front-end builds and the
//! target graph the transformer produces.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod declaration;
pub mod module;
pub mod render;
pub mod types;
pub mod visitor;

pub use declaration::{
    Accessibility, DeclKind, Declaration, FunctionMember, FunctionParameter, GenericParameter,
    Member, MemberOrigin, PropertyMember,
};
pub use module::Module;
pub use types::{PrimitiveType, RawFragment, RawStatements, TypeRef, TypeTarget};

pub use obsgen_foundation::{DeclId, ModuleId};
