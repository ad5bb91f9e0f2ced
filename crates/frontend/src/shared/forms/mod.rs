//! Form-field layer: descriptors, values, validation rule composition,
//! the two binding strategies and the `DynamicField` renderer.

pub mod autocomplete;
pub mod binding;
pub mod control;
pub mod descriptor;
pub mod dynamic_field;
pub mod validation;
pub mod value;

pub use autocomplete::{SuggestionFetcher, SuggestionFuture};
pub use binding::{BoundField, FieldBinding, FormContext};
pub use control::ControlSpec;
pub use descriptor::{BoundMode, FieldDescriptor, FieldKind, FieldOption};
pub use dynamic_field::DynamicField;
pub use validation::{FieldErrorState, ValidationRule, ValidationRuleSet};
pub use value::FieldValue;
