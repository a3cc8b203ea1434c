//! Integration tests for the observable transformation
//!
//! Tests for reference mapping, property wrapping, duality resolution,
//! hydration synthesis and error reporting.

mod hydration;
mod mapping;
