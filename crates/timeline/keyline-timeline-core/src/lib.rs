//! Keyline Timeline Core (engine-agnostic)
//!
//! Pure timeline evaluation for a keyframe animation tool: given a layer's
//! keyframes and a query time, produce the concrete value of every animated
//! channel at that instant. Presets compose on top either as one-shot
//! keyframe bursts or as continuous enter/exit transitions.
//!
//! Every entry point is `(immutable inputs) -> owned output`: no shared
//! mutable state, no I/O, no caching across calls. The renderer decides when
//! to re-evaluate; concurrent callers need no coordination.

pub mod burst;
pub mod data;
pub mod ease;
pub mod error;
pub mod interp;
pub mod presets;
pub mod resolve;
pub mod sampling;
pub mod transition;

// Re-exports for consumers (document model, renderer, authoring layer)
pub use burst::expand_preset;
pub use data::{
    Interpolation, Keyframe, KeyframeDraft, Layer, Props, QuantizeStrategy, RevealStrategy,
    StepStrategy, Style, Transform, TransitionSpec,
};
pub use ease::Easing;
pub use error::EvalError;
pub use interp::interpolate;
pub use presets::{get_preset, presets_in_category, PresetCategory, PresetKeyframe, TypedAnimationPreset};
pub use resolve::{resolve_layer, ResolvedLayer};
pub use sampling::{sample_sorted, sample_track};
pub use transition::{evaluate_transitions, TransitionDelta};
pub use keyline_api_core::{
    AnimatableProperty, InterpolationFamily, PropertyMetadata, PropertyValueType, Rgba, Value,
    ValueKind,
};
