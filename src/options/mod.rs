//! Option store: typed, validated, dirty-tracked view over the config.

/// The editable option store and its errors.
mod store;
/// Typed values and validation rules.
mod value;

pub use store::{OptionState, OptionStore, StoreError};
pub use value::{named_color, OptionValue, NAMED_COLORS};
