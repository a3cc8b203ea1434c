//! Error types for obsgen.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every error is fatal for the transformation run that raised it.

use std::fmt;

use thiserror::Error;

use crate::id::DeclId;

/// The main error type for obsgen operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's context, creating the context if needed.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates an invalid hierarchy error.
    #[must_use]
    pub fn invalid_hierarchy(interface: impl Into<String>, base: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidHierarchy {
            interface: interface.into(),
            base: base.into(),
        })
    }

    /// Creates an unsupported shape error.
    #[must_use]
    pub fn unsupported_shape(declaration: DeclId) -> Self {
        Self::new(ErrorKind::UnsupportedShape { declaration })
    }

    /// Creates a missing structural counterpart error.
    #[must_use]
    pub fn missing_counterpart(declaration: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingCounterpart {
            declaration: declaration.into(),
            property: property.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A source interface extends a source class while generating classes.
    #[error("interface {interface} cannot extend class {base}")]
    InvalidHierarchy {
        /// Name of the offending interface.
        interface: String,
        /// Name of the class it extends.
        base: String,
    },

    /// A declaration id reached a dispatch site without resolving to a class
    /// or an interface in its graph.
    #[error("unsupported source shape: {declaration} is neither a class nor an interface")]
    UnsupportedShape {
        /// The unresolved declaration.
        declaration: DeclId,
    },

    /// A generated property has no originating source property.
    #[error("missing source property {property} for generated member of {declaration}")]
    MissingCounterpart {
        /// Name of the generated declaration.
        declaration: String,
        /// Name of the property without a counterpart.
        property: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the module being transformed.
    pub module: Option<String>,
    /// Declarations being processed, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the module name.
    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(module) = &self.module {
            write!(f, "in module {module}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  while generating {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for obsgen operations.
pub type Result<T> = std::result::Result<T, Error>;
