//! Per-layer-type property metadata.
//!
//! The document model owns a declarative schema for each layer type: which
//! custom properties exist, what value type each carries, and which
//! interpolation families are legal on it. The core consumes that table to
//! enumerate custom channels during resolution and to pick sensible default
//! descriptors at authoring time. Kept as plain data, not code.

use serde::{Deserialize, Serialize};

/// Declared value type of a custom property.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyValueType {
    Number,
    Boolean,
    String,
    Color,
    Enum,
    Background,
}

/// Coarse interpolation family; the concrete strategy lives with the
/// keyframe descriptor.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationFamily {
    Continuous,
    Discrete,
    Quantized,
    Text,
}

/// Metadata for one custom property of a layer type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PropertyMetadata {
    /// Bare property name; addressed on the timeline as "props.<name>".
    pub name: String,
    pub value_type: PropertyValueType,
    /// Families this property may legally be animated with.
    pub families: Vec<InterpolationFamily>,
}

impl PropertyMetadata {
    pub fn new(
        name: impl Into<String>,
        value_type: PropertyValueType,
        families: Vec<InterpolationFamily>,
    ) -> Self {
        Self {
            name: name.into(),
            value_type,
            families,
        }
    }

    pub fn supports_family(&self, family: InterpolationFamily) -> bool {
        self.families.contains(&family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_support() {
        let meta = PropertyMetadata::new(
            "energy",
            PropertyValueType::Number,
            vec![
                InterpolationFamily::Continuous,
                InterpolationFamily::Quantized,
            ],
        );
        assert!(meta.supports_family(InterpolationFamily::Continuous));
        assert!(!meta.supports_family(InterpolationFamily::Text));
    }

    #[test]
    fn serde_shape() {
        let meta = PropertyMetadata::new(
            "label",
            PropertyValueType::String,
            vec![InterpolationFamily::Discrete, InterpolationFamily::Text],
        );
        let s = serde_json::to_string(&meta).unwrap();
        assert!(s.contains("\"string\""));
        assert!(s.contains("\"text\""));
        let back: PropertyMetadata = serde_json::from_str(&s).unwrap();
        assert_eq!(meta, back);
    }
}
