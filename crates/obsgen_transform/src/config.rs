//! Configuration for the observable transformation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::shape::Shape;

/// Which form the transformation generates for every source declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GenerationMode {
    /// Generate observable interfaces (pure contracts).
    Interfaces,
    /// Generate observable classes (executable model).
    #[default]
    Classes,
}

impl GenerationMode {
    /// Returns the shape of the skeletons declared up front.
    #[must_use]
    pub const fn primary_shape(self) -> Shape {
        match self {
            Self::Interfaces => Shape::Interface,
            Self::Classes => Shape::Class,
        }
    }
}

/// Spellings of the observable library the generated model targets.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObservableNaming {
    /// Type of a single observable value, e.g. `Observable<T>`.
    pub observable_type: String,
    /// Type of an observable sequence, e.g. `ObservableArray<T>`.
    pub observable_array_type: String,
    /// Factory creating an observable value.
    pub observable_factory: String,
    /// Factory creating an observable sequence.
    pub observable_array_factory: String,
    /// Name of the generated hydration function.
    pub hydrate_function: String,
    /// Name of the hydration function's input parameter.
    pub hydrate_parameter: String,
    /// Prefix for interface forms created next to a generated class.
    pub companion_prefix: String,
    /// Name used when a property has no declared type.
    pub any_type: String,
}

impl Default for ObservableNaming {
    fn default() -> Self {
        Self {
            observable_type: "Observable".to_string(),
            observable_array_type: "ObservableArray".to_string(),
            observable_factory: "observable".to_string(),
            observable_array_factory: "observableArray".to_string(),
            hydrate_function: "hydrate".to_string(),
            hydrate_parameter: "input".to_string(),
            companion_prefix: "I".to_string(),
            any_type: "any".to_string(),
        }
    }
}

impl ObservableNaming {
    /// KnockoutJS spellings (`KnockoutObservable<T>`, `ko.observable`, `fromJS`).
    #[must_use]
    pub fn knockout() -> Self {
        Self {
            observable_type: "KnockoutObservable".to_string(),
            observable_array_type: "KnockoutObservableArray".to_string(),
            observable_factory: "ko.observable".to_string(),
            observable_array_factory: "ko.observableArray".to_string(),
            hydrate_function: "fromJS".to_string(),
            hydrate_parameter: "obj".to_string(),
            ..Self::default()
        }
    }
}

/// Configuration for one transformer.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformConfig {
    /// Top-level generation mode.
    pub mode: GenerationMode,
    /// Emit a hydration function on every generated class.
    pub enable_conversion_functions: bool,
    /// Guard each hydration assignment with a presence check.
    pub conversion_existence_check: bool,
    /// Target library spellings.
    pub naming: ObservableNaming,
}

impl TransformConfig {
    /// Creates a configuration generating interfaces.
    #[must_use]
    pub fn interfaces() -> Self {
        Self {
            mode: GenerationMode::Interfaces,
            ..Self::default()
        }
    }

    /// Creates a configuration generating classes.
    #[must_use]
    pub fn classes() -> Self {
        Self {
            mode: GenerationMode::Classes,
            ..Self::default()
        }
    }

    /// Builder method to set the generation mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method to enable hydration functions.
    #[must_use]
    pub fn with_conversion_functions(mut self, enabled: bool) -> Self {
        self.enable_conversion_functions = enabled;
        self
    }

    /// Builder method to enable presence guards in hydration functions.
    #[must_use]
    pub fn with_existence_check(mut self, enabled: bool) -> Self {
        self.conversion_existence_check = enabled;
        self
    }

    /// Builder method to set the library spellings.
    #[must_use]
    pub fn with_naming(mut self, naming: ObservableNaming) -> Self {
        self.naming = naming;
        self
    }
}
