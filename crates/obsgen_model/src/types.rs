//! Type references and raw statement fragments.
//!
//! A [`TypeRef`] is the only way one declaration points at another. It also
//! carries positional generic arguments, each a `TypeRef` itself.

use obsgen_foundation::DeclId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// PrimitiveType
// =============================================================================

/// Built-in types a front-end resolves directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveType {
    /// `any`
    Any,
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `string`
    String,
    /// `Date`, the only date-like primitive.
    Date,
    /// `void`
    Void,
}

impl PrimitiveType {
    /// Returns the source spelling of this primitive.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Date => "Date",
            Self::Void => "void",
        }
    }

    /// Returns true for date-like primitives.
    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::Date)
    }
}

// =============================================================================
// TypeRef
// =============================================================================

/// What a [`TypeRef`] points at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeTarget {
    /// Opaque expression; only embedded type references are structural.
    Raw(RawStatements),
    /// Bare name, assumed primitive or already correct on the target side.
    Named(String),
    /// Reference to a declaration in some graph.
    Declaration(DeclId),
    /// Array of the element type.
    Array(Box<TypeRef>),
    /// Built-in primitive.
    Primitive(PrimitiveType),
}

/// A reference to a type, with positional generic arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeRef {
    /// The referenced type.
    pub target: TypeTarget,
    /// Generic type arguments in declaration order.
    pub generic_args: Vec<TypeRef>,
}

impl TypeRef {
    /// Creates a reference with no generic arguments.
    #[must_use]
    pub fn new(target: TypeTarget) -> Self {
        Self {
            target,
            generic_args: Vec::new(),
        }
    }

    /// Creates a raw-form reference.
    #[must_use]
    pub fn raw(statements: RawStatements) -> Self {
        Self::new(TypeTarget::Raw(statements))
    }

    /// Creates a bare-name reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(TypeTarget::Named(name.into()))
    }

    /// Creates a declaration reference.
    #[must_use]
    pub fn declaration(id: DeclId) -> Self {
        Self::new(TypeTarget::Declaration(id))
    }

    /// Creates an array-of-`element` reference.
    #[must_use]
    pub fn array(element: TypeRef) -> Self {
        Self::new(TypeTarget::Array(Box::new(element)))
    }

    /// Creates a primitive reference.
    #[must_use]
    pub fn primitive(primitive: PrimitiveType) -> Self {
        Self::new(TypeTarget::Primitive(primitive))
    }

    /// Appends a generic argument.
    #[must_use]
    pub fn with_arg(mut self, arg: TypeRef) -> Self {
        self.generic_args.push(arg);
        self
    }

    /// Returns the referenced declaration, if this is a declaration reference.
    #[must_use]
    pub fn as_declaration(&self) -> Option<DeclId> {
        match self.target {
            TypeTarget::Declaration(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the element type, if this is an array reference.
    #[must_use]
    pub fn array_element(&self) -> Option<&TypeRef> {
        match &self.target {
            TypeTarget::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Returns true if this is an array reference.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.target, TypeTarget::Array(_))
    }

    /// Returns the primitive, if this is a primitive reference.
    #[must_use]
    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self.target {
            TypeTarget::Primitive(p) => Some(p),
            _ => None,
        }
    }
}

impl From<PrimitiveType> for TypeRef {
    fn from(primitive: PrimitiveType) -> Self {
        Self::primitive(primitive)
    }
}

impl From<DeclId> for TypeRef {
    fn from(id: DeclId) -> Self {
        Self::declaration(id)
    }
}

// =============================================================================
// RawStatements
// =============================================================================

/// One piece of a raw expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RawFragment {
    /// Literal source text.
    Text(String),
    /// An embedded type reference, rendered by name.
    Type(TypeRef),
}

/// An opaque expression or statement list with embedded type references.
///
/// Used for property initializers, function bodies and raw type forms.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawStatements {
    fragments: Vec<RawFragment>,
}

impl RawStatements {
    /// Creates an empty statement list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a statement list holding one text fragment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        let mut raw = Self::new();
        raw.push_text(text);
        raw
    }

    /// Appends a text fragment.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.fragments.push(RawFragment::Text(text.into()));
    }

    /// Appends an embedded type reference.
    pub fn push_type(&mut self, ty: TypeRef) {
        self.fragments.push(RawFragment::Type(ty));
    }

    /// Appends every fragment of `other`.
    pub fn append(&mut self, other: RawStatements) {
        self.fragments.extend(other.fragments);
    }

    /// Returns the fragments in order.
    #[must_use]
    pub fn fragments(&self) -> &[RawFragment] {
        &self.fragments
    }

    /// Returns true if there are no fragments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Iterates over the embedded type references.
    pub fn type_refs(&self) -> impl Iterator<Item = &TypeRef> {
        self.fragments.iter().filter_map(|f| match f {
            RawFragment::Type(ty) => Some(ty),
            RawFragment::Text(_) => None,
        })
    }
}

impl FromIterator<RawFragment> for RawStatements {
    fn from_iter<I: IntoIterator<Item = RawFragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}
