//! Timeline data model: keyframes, interpolation descriptors, and the
//! read-only layer snapshot the resolver consumes.
//!
//! The document model owns and mutates these objects; the core only reads
//! them. Within one property's track keyframes are logically a set: the
//! sampler sorts by time before use, and duplicate times are tolerated.

use hashbrown::HashMap;
use keyline_api_core::{
    AnimatableProperty, InterpolationFamily, PropertyMetadata, PropertyValueType, Value,
};
use serde::{Deserialize, Serialize};

use crate::ease::Easing;

/// Threshold mode for the discrete family.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StepStrategy {
    /// Jump to the end value only once the segment completes.
    #[default]
    StepEnd,
    /// Jump as soon as the segment starts.
    StepStart,
    /// Jump at the segment midpoint.
    StepMid,
}

/// Rounding mode for the quantized family.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum QuantizeStrategy {
    #[default]
    Integer,
    /// Floor onto multiples of the descriptor's `increment`.
    SnapGrid,
}

/// Granularity for the text family.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RevealStrategy {
    #[default]
    CharReveal,
    WordReveal,
}

/// How a segment leaving a keyframe is sampled.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum Interpolation {
    /// Eased blend; numbers and color strings.
    Continuous { strategy: Easing },
    /// Hard jump between start and end; any value kind.
    Discrete { strategy: StepStrategy },
    /// Linear (non-eased) blend rounded to a grid; numbers only.
    Quantized {
        strategy: QuantizeStrategy,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        increment: Option<f64>,
    },
    /// Progressive reveal of the end string from the shared prefix.
    Text {
        strategy: RevealStrategy,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        separator: Option<String>,
    },
}

impl Default for Interpolation {
    fn default() -> Self {
        Interpolation::Continuous {
            strategy: Easing::EaseInOut,
        }
    }
}

impl Interpolation {
    /// Coarse family of this descriptor.
    pub fn family(&self) -> InterpolationFamily {
        match self {
            Interpolation::Continuous { .. } => InterpolationFamily::Continuous,
            Interpolation::Discrete { .. } => InterpolationFamily::Discrete,
            Interpolation::Quantized { .. } => InterpolationFamily::Quantized,
            Interpolation::Text { .. } => InterpolationFamily::Text,
        }
    }

    /// Sensible default descriptor for a metadata-declared property: eased
    /// continuous where legal, text reveal for strings, discrete otherwise.
    pub fn default_for(meta: &PropertyMetadata) -> Interpolation {
        match meta.value_type {
            PropertyValueType::Number | PropertyValueType::Color
                if meta.supports_family(InterpolationFamily::Continuous) =>
            {
                Interpolation::default()
            }
            PropertyValueType::Number if meta.supports_family(InterpolationFamily::Quantized) => {
                Interpolation::Quantized {
                    strategy: QuantizeStrategy::Integer,
                    increment: None,
                }
            }
            PropertyValueType::String if meta.supports_family(InterpolationFamily::Text) => {
                Interpolation::Text {
                    strategy: RevealStrategy::CharReveal,
                    separator: None,
                }
            }
            _ => Interpolation::Discrete {
                strategy: StepStrategy::StepEnd,
            },
        }
    }

    /// Authoring-time check that a descriptor is legal for a property.
    pub fn is_valid_for(&self, meta: &PropertyMetadata) -> bool {
        meta.supports_family(self.family())
    }
}

/// A single authored point on a property's timeline. The descriptor governs
/// the segment *leaving* this keyframe; the last keyframe's descriptor is
/// stored but never consulted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    pub id: String,
    /// Seconds, non-negative.
    pub time: f64,
    pub property: AnimatableProperty,
    pub value: Value,
    #[serde(default)]
    pub interpolation: Interpolation,
}

/// Fixed transform channels of a layer.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 2],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 2],
        }
    }
}

/// Fixed style channels of a layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub opacity: f64,
    pub blur: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub saturate: f64,
    pub drop_shadow_x: f64,
    pub drop_shadow_y: f64,
    pub drop_shadow_blur: f64,
    pub drop_shadow_color: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            blur: 0.0,
            brightness: 1.0,
            contrast: 1.0,
            saturate: 1.0,
            drop_shadow_x: 0.0,
            drop_shadow_y: 0.0,
            drop_shadow_blur: 0.0,
            drop_shadow_color: "#000000".to_string(),
        }
    }
}

/// Custom property values keyed by bare name.
pub type Props = HashMap<String, Value>;

/// Selection of a preset as a continuous enter or exit transition.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TransitionSpec {
    /// Preset id; an unknown id degrades to "no transition".
    pub preset: String,
    /// Seconds.
    pub duration: f64,
}

/// Read-only snapshot of one layer, supplied per render request by the
/// document model.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: String,
    pub name: String,
    /// Keyframes for all properties, in no particular order.
    pub keyframes: Vec<Keyframe>,
    /// Static base values used wherever a channel has no keyframes.
    #[serde(default)]
    pub transform: Transform,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub props: Props,
    /// Timeline window the layer is visible in, seconds.
    pub start_time: f64,
    pub end_time: f64,
    #[serde(default)]
    pub enter: Option<TransitionSpec>,
    #[serde(default)]
    pub exit: Option<TransitionSpec>,
}

impl Layer {
    /// Validate basic invariants (finite non-negative times, sane window).
    /// An authoring aid; sampling never requires it.
    pub fn validate_basic(&self) -> Result<(), String> {
        if !self.start_time.is_finite() || !self.end_time.is_finite() {
            return Err(format!("layer '{}': non-finite window", self.id));
        }
        if self.end_time < self.start_time {
            return Err(format!("layer '{}': window ends before it starts", self.id));
        }
        for kf in &self.keyframes {
            if !kf.time.is_finite() || kf.time < 0.0 {
                return Err(format!(
                    "keyframe '{}' on {}: time must be finite and non-negative",
                    kf.id, kf.property
                ));
            }
        }
        Ok(())
    }
}

/// What the burst applicator computes for insertion: a keyframe minus the
/// identity the document model will assign.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct KeyframeDraft {
    pub time: f64,
    pub property: AnimatableProperty,
    pub value: Value,
    pub interpolation: Interpolation,
}
