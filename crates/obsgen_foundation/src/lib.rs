//! Identifiers and error types for obsgen.
//!
//! This crate provides:
//! - [`ModuleId`] / [`DeclId`] - Arena identities for declaration graphs
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use id::{DeclId, ModuleId};
