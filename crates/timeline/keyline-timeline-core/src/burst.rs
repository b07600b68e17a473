//! Expanding a preset into absolute-time keyframe drafts.
//!
//! "Applying" a preset permanently means inserting real keyframes into the
//! document. This module only computes what should be inserted; the document
//! model owns the mutation. Burst semantics are absolute, unlike the live,
//! relative transition compositor: position offsets are rebased onto the
//! layer's current base value at apply time, everything else passes through
//! unchanged.

use keyline_api_core::{AnimatableProperty, Value};

use crate::data::{KeyframeDraft, Transform};
use crate::presets::TypedAnimationPreset;

/// Expand `preset` over [start_time, start_time + duration], clamping draft
/// times into [0, timeline_length].
pub fn expand_preset(
    preset: &TypedAnimationPreset,
    start_time: f64,
    duration: f64,
    timeline_length: f64,
    base: &Transform,
) -> Vec<KeyframeDraft> {
    let timeline_length = timeline_length.max(0.0);
    preset
        .keyframes
        .iter()
        .map(|kf| {
            let time = (start_time + kf.time * duration).clamp(0.0, timeline_length);
            let value = kf.value + position_base(&kf.property, base);
            KeyframeDraft {
                time,
                property: kf.property.clone(),
                value: Value::Number(value),
                interpolation: kf.interpolation.clone().unwrap_or_default(),
            }
        })
        .collect()
}

fn position_base(property: &AnimatableProperty, base: &Transform) -> f64 {
    match property {
        AnimatableProperty::PositionX => base.position[0],
        AnimatableProperty::PositionY => base.position[1],
        AnimatableProperty::PositionZ => base.position[2],
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::get_preset;

    #[test]
    fn fade_in_expands_into_window() {
        let preset = get_preset("fade-in").unwrap();
        let drafts = expand_preset(preset, 2.0, 0.5, 60.0, &Transform::default());
        assert_eq!(drafts.len(), 2);
        for d in &drafts {
            assert!((2.0..=2.5).contains(&d.time));
        }
        assert_eq!(drafts[0].value, Value::Number(0.0));
        assert_eq!(drafts[1].value, Value::Number(1.0));
    }

    #[test]
    fn position_offsets_rebase_onto_base_value() {
        let preset = get_preset("slide-in-left").unwrap();
        let base = Transform {
            position: [300.0, 40.0, 0.0],
            ..Transform::default()
        };
        let drafts = expand_preset(preset, 0.0, 1.0, 60.0, &base);
        let first_x = drafts
            .iter()
            .find(|d| d.property == AnimatableProperty::PositionX)
            .unwrap();
        assert_eq!(first_x.value, Value::Number(100.0)); // 300 + (-200)
        // factors pass through unchanged
        let first_opacity = drafts
            .iter()
            .find(|d| d.property == AnimatableProperty::Opacity)
            .unwrap();
        assert_eq!(first_opacity.value, Value::Number(0.0));
    }

    #[test]
    fn times_clamp_to_the_timeline() {
        let preset = get_preset("fade-out").unwrap();
        let drafts = expand_preset(preset, 59.8, 1.0, 60.0, &Transform::default());
        assert!(drafts.iter().all(|d| d.time <= 60.0));
    }
}
