//! Target shape threaded through every mapping call.

use std::fmt;

/// Which structural form is being generated at the current position.
///
/// Passed by value down every recursive call, so there is no stack to
/// unbalance when an error unwinds a traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Contract only.
    Interface,
    /// Contract plus initialization.
    Class,
}

impl Shape {
    /// Returns true for the interface shape.
    #[must_use]
    pub const fn is_interface(self) -> bool {
        matches!(self, Self::Interface)
    }

    /// Returns the other shape.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Interface => Self::Class,
            Self::Class => Self::Interface,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interface => write!(f, "interface"),
            Self::Class => write!(f, "class"),
        }
    }
}
