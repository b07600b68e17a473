//! keyline-api-core: value & property vocabulary (core, engine-agnostic)
//!
//! Shared between the timeline evaluation core and its collaborators: the
//! closed Value union, RGBA color handling, animatable property paths, and
//! the externally supplied property-metadata table.

pub mod color;
pub mod metadata;
pub mod path;
pub mod value;

pub use color::Rgba;
pub use metadata::{InterpolationFamily, PropertyMetadata, PropertyValueType};
pub use path::AnimatableProperty;
pub use value::{Value, ValueKind};
