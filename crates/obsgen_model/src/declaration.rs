//! Declarations and their members.
//!
//! A [`Declaration`] is a class or an interface. The shape is a closed sum
//! ([`DeclKind`]) so every dispatch site matches it exhaustively.

use obsgen_foundation::DeclId;

use crate::types::{RawStatements, TypeRef};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Generic Parameters
// =============================================================================

/// A generic parameter such as `T extends Base`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenericParameter {
    /// Parameter name.
    pub name: String,
    /// Optional constraint.
    pub constraint: Option<TypeRef>,
}

impl GenericParameter {
    /// Creates an unconstrained parameter.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
        }
    }

    /// Sets the constraint.
    #[must_use]
    pub fn with_constraint(mut self, constraint: TypeRef) -> Self {
        self.constraint = Some(constraint);
        self
    }
}

// =============================================================================
// Members
// =============================================================================

/// Member visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Accessibility {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
}

impl Accessibility {
    /// Returns the source keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// Back-reference from a generated property to the property it was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemberOrigin {
    /// Declaration owning the original property.
    pub declaration: DeclId,
    /// Index of the original property in that declaration's member list.
    pub member: usize,
}

/// A stored property.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyMember {
    /// Property name.
    pub name: String,
    /// Declared visibility, if any.
    pub accessibility: Option<Accessibility>,
    /// Declared type. Absent for untyped members.
    pub ty: Option<TypeRef>,
    /// Initialization expression. Absent for interface members.
    pub init: Option<RawStatements>,
    /// Originating property, set on generated members.
    pub origin: Option<MemberOrigin>,
}

impl PropertyMember {
    /// Creates an untyped, uninitialized property.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accessibility: None,
            ty: None,
            init: None,
            origin: None,
        }
    }

    /// Sets the declared type.
    #[must_use]
    pub fn with_type(mut self, ty: impl Into<TypeRef>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Sets the initializer.
    #[must_use]
    pub fn with_init(mut self, init: RawStatements) -> Self {
        self.init = Some(init);
        self
    }

    /// Sets the visibility.
    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }
}

/// A function parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionParameter {
    /// Parameter name.
    pub name: String,
    /// Optional parameter type; `None` means untyped.
    pub ty: Option<TypeRef>,
}

impl FunctionParameter {
    /// Creates an untyped parameter.
    #[must_use]
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }
}

/// A method with a raw body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionMember {
    /// Function name.
    pub name: String,
    /// Parameters in order.
    pub params: Vec<FunctionParameter>,
    /// Body statements.
    pub body: RawStatements,
}

impl FunctionMember {
    /// Creates a function with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, body: RawStatements) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            body,
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_param(mut self, param: FunctionParameter) -> Self {
        self.params.push(param);
        self
    }
}

/// A declaration member.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Member {
    /// A stored property.
    Property(PropertyMember),
    /// A method.
    Function(FunctionMember),
}

impl Member {
    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Property(p) => &p.name,
            Self::Function(f) => &f.name,
        }
    }

    /// Returns the property, if this member is one.
    #[must_use]
    pub fn as_property(&self) -> Option<&PropertyMember> {
        match self {
            Self::Property(p) => Some(p),
            Self::Function(_) => None,
        }
    }
}

// =============================================================================
// Declaration
// =============================================================================

/// The shape of a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeclKind {
    /// A class with its implemented interfaces.
    Class {
        /// `implements` clause in order.
        implements: Vec<TypeRef>,
    },
    /// An interface.
    Interface,
}

/// A class or interface declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Declaration {
    /// Declaration name.
    pub name: String,
    /// Shape and shape-specific edges.
    pub kind: DeclKind,
    /// Generic parameters in positional order.
    pub generics: Vec<GenericParameter>,
    /// Members in declared order.
    pub members: Vec<Member>,
    /// `extends` clause: base class for classes, base interfaces for interfaces.
    pub extends: Vec<TypeRef>,
}

impl Declaration {
    fn with_kind(name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
            generics: Vec::new(),
            members: Vec::new(),
            extends: Vec::new(),
        }
    }

    /// Creates an empty class.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            DeclKind::Class {
                implements: Vec::new(),
            },
        )
    }

    /// Creates an empty interface.
    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self::with_kind(name, DeclKind::Interface)
    }

    /// Returns true for classes.
    #[must_use]
    pub fn is_class(&self) -> bool {
        matches!(self.kind, DeclKind::Class { .. })
    }

    /// Returns true for interfaces.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        matches!(self.kind, DeclKind::Interface)
    }

    /// Returns `"class"` or `"interface"`.
    #[must_use]
    pub fn shape_name(&self) -> &'static str {
        match self.kind {
            DeclKind::Class { .. } => "class",
            DeclKind::Interface => "interface",
        }
    }

    /// Returns the `implements` clause; always empty for interfaces.
    #[must_use]
    pub fn implements(&self) -> &[TypeRef] {
        match &self.kind {
            DeclKind::Class { implements } => implements,
            DeclKind::Interface => &[],
        }
    }

    /// Returns the first `extends` entry, the base class of a class.
    #[must_use]
    pub fn base(&self) -> Option<&TypeRef> {
        self.extends.first()
    }

    /// Iterates over property members in declared order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyMember> {
        self.members.iter().filter_map(Member::as_property)
    }

    /// Iterates over property members with their index in the member list.
    pub fn indexed_properties(&self) -> impl Iterator<Item = (usize, &PropertyMember)> {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.as_property().map(|p| (i, p)))
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyMember> {
        self.properties().find(|p| p.name == name)
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionMember> {
        self.members.iter().find_map(|m| match m {
            Member::Function(f) if f.name == name => Some(f),
            _ => None,
        })
    }

    /// Appends a generic parameter.
    #[must_use]
    pub fn with_generic(mut self, generic: GenericParameter) -> Self {
        self.generics.push(generic);
        self
    }

    /// Appends a property.
    #[must_use]
    pub fn with_property(mut self, property: PropertyMember) -> Self {
        self.members.push(Member::Property(property));
        self
    }

    /// Appends a function.
    #[must_use]
    pub fn with_function(mut self, function: FunctionMember) -> Self {
        self.members.push(Member::Function(function));
        self
    }

    /// Appends an `extends` entry.
    #[must_use]
    pub fn extending(mut self, base: TypeRef) -> Self {
        self.extends.push(base);
        self
    }

    /// Appends an `implements` entry.
    ///
    /// Interfaces have no `implements` clause; for them the contract is
    /// appended to `extends`, which is how an interface inherits one.
    #[must_use]
    pub fn implementing(mut self, contract: TypeRef) -> Self {
        match &mut self.kind {
            DeclKind::Class { implements } => implements.push(contract),
            DeclKind::Interface => self.extends.push(contract),
        }
        self
    }
}
