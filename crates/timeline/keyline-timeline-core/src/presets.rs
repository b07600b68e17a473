//! Built-in animation presets.
//!
//! A preset is a named keyframe pattern over normalized time [0,1]. Values
//! follow the offset/factor convention: position.* and rotation.* values are
//! offsets from rest (0 = no change), scale.* and opacity values are factors
//! relative to rest (1 = no change). The same pattern therefore works both
//! as a one-shot keyframe burst and as a continuous enter/exit transition.
//!
//! The catalog is built once on first access and immutable for the lifetime
//! of the process; it is safe to share by reference across threads.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use keyline_api_core::AnimatableProperty;

use crate::data::Interpolation;
use crate::ease::Easing;

/// Where in a layer's lifetime a preset is meant to be used.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    Enter,
    Exit,
    Emphasis,
}

/// One point of a preset pattern; `time` is normalized to [0,1].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PresetKeyframe {
    pub time: f64,
    pub property: AnimatableProperty,
    pub value: f64,
    /// None means the catalog default (continuous ease-in-out).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<Interpolation>,
}

/// A named, reusable motion pattern.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TypedAnimationPreset {
    pub id: String,
    pub name: String,
    pub category: PresetCategory,
    pub keyframes: Vec<PresetKeyframe>,
}

static CATALOG: OnceLock<Vec<TypedAnimationPreset>> = OnceLock::new();

fn catalog() -> &'static [TypedAnimationPreset] {
    CATALOG.get_or_init(build_catalog).as_slice()
}

/// Look up a preset by id.
pub fn get_preset(id: &str) -> Option<&'static TypedAnimationPreset> {
    catalog().iter().find(|p| p.id == id)
}

/// All presets declared for a usage category, in catalog order.
pub fn presets_in_category(category: PresetCategory) -> Vec<&'static TypedAnimationPreset> {
    catalog().iter().filter(|p| p.category == category).collect()
}

fn kf(time: f64, property: AnimatableProperty, value: f64) -> PresetKeyframe {
    PresetKeyframe {
        time,
        property,
        value,
        interpolation: None,
    }
}

fn kf_eased(
    time: f64,
    property: AnimatableProperty,
    value: f64,
    easing: Easing,
) -> PresetKeyframe {
    PresetKeyframe {
        time,
        property,
        value,
        interpolation: Some(Interpolation::Continuous { strategy: easing }),
    }
}

fn preset(
    id: &str,
    name: &str,
    category: PresetCategory,
    keyframes: Vec<PresetKeyframe>,
) -> TypedAnimationPreset {
    TypedAnimationPreset {
        id: id.to_string(),
        name: name.to_string(),
        category,
        keyframes,
    }
}

fn build_catalog() -> Vec<TypedAnimationPreset> {
    use AnimatableProperty::*;
    use PresetCategory::*;

    vec![
        preset(
            "fade-in",
            "Fade In",
            Enter,
            vec![kf(0.0, Opacity, 0.0), kf(1.0, Opacity, 1.0)],
        ),
        preset(
            "fade-out",
            "Fade Out",
            Exit,
            vec![kf(0.0, Opacity, 1.0), kf(1.0, Opacity, 0.0)],
        ),
        preset(
            "slide-in-left",
            "Slide In Left",
            Enter,
            vec![
                kf_eased(0.0, PositionX, -200.0, Easing::EaseOutCubic),
                kf(1.0, PositionX, 0.0),
                kf(0.0, Opacity, 0.0),
                kf(1.0, Opacity, 1.0),
            ],
        ),
        preset(
            "slide-in-right",
            "Slide In Right",
            Enter,
            vec![
                kf_eased(0.0, PositionX, 200.0, Easing::EaseOutCubic),
                kf(1.0, PositionX, 0.0),
                kf(0.0, Opacity, 0.0),
                kf(1.0, Opacity, 1.0),
            ],
        ),
        preset(
            "slide-in-up",
            "Slide In Up",
            Enter,
            vec![
                kf_eased(0.0, PositionY, 150.0, Easing::EaseOutCubic),
                kf(1.0, PositionY, 0.0),
                kf(0.0, Opacity, 0.0),
                kf(1.0, Opacity, 1.0),
            ],
        ),
        preset(
            "slide-in-down",
            "Slide In Down",
            Enter,
            vec![
                kf_eased(0.0, PositionY, -150.0, Easing::EaseOutCubic),
                kf(1.0, PositionY, 0.0),
                kf(0.0, Opacity, 0.0),
                kf(1.0, Opacity, 1.0),
            ],
        ),
        preset(
            "slide-out-left",
            "Slide Out Left",
            Exit,
            vec![
                kf_eased(0.0, PositionX, 0.0, Easing::EaseInCubic),
                kf(1.0, PositionX, -200.0),
                kf(0.0, Opacity, 1.0),
                kf(1.0, Opacity, 0.0),
            ],
        ),
        preset(
            "slide-out-right",
            "Slide Out Right",
            Exit,
            vec![
                kf_eased(0.0, PositionX, 0.0, Easing::EaseInCubic),
                kf(1.0, PositionX, 200.0),
                kf(0.0, Opacity, 1.0),
                kf(1.0, Opacity, 0.0),
            ],
        ),
        preset(
            "scale-in",
            "Scale In",
            Enter,
            vec![
                kf_eased(0.0, ScaleX, 0.0, Easing::EaseOutBack),
                kf(1.0, ScaleX, 1.0),
                kf_eased(0.0, ScaleY, 0.0, Easing::EaseOutBack),
                kf(1.0, ScaleY, 1.0),
                kf(0.0, Opacity, 0.0),
                kf(1.0, Opacity, 1.0),
            ],
        ),
        preset(
            "scale-out",
            "Scale Out",
            Exit,
            vec![
                kf_eased(0.0, ScaleX, 1.0, Easing::EaseInCubic),
                kf(1.0, ScaleX, 0.0),
                kf_eased(0.0, ScaleY, 1.0, Easing::EaseInCubic),
                kf(1.0, ScaleY, 0.0),
                kf(0.0, Opacity, 1.0),
                kf(1.0, Opacity, 0.0),
            ],
        ),
        preset(
            "bounce-in",
            "Bounce In",
            Enter,
            vec![
                kf_eased(0.0, ScaleX, 0.0, Easing::EaseOutBounce),
                kf(1.0, ScaleX, 1.0),
                kf_eased(0.0, ScaleY, 0.0, Easing::EaseOutBounce),
                kf(1.0, ScaleY, 1.0),
                kf_eased(0.0, Opacity, 0.0, Easing::EaseOutQuad),
                kf(0.3, Opacity, 1.0),
                kf(1.0, Opacity, 1.0),
            ],
        ),
        preset(
            "spin-in",
            "Spin In",
            Enter,
            vec![
                kf_eased(0.0, RotationZ, -180.0, Easing::EaseOutCubic),
                kf(1.0, RotationZ, 0.0),
                kf(0.0, Opacity, 0.0),
                kf(1.0, Opacity, 1.0),
            ],
        ),
        preset(
            "pulse",
            "Pulse",
            Emphasis,
            vec![
                kf(0.0, ScaleX, 1.0),
                kf(0.5, ScaleX, 1.08),
                kf(1.0, ScaleX, 1.0),
                kf(0.0, ScaleY, 1.0),
                kf(0.5, ScaleY, 1.08),
                kf(1.0, ScaleY, 1.0),
            ],
        ),
        preset(
            "shake",
            "Shake",
            Emphasis,
            vec![
                kf(0.0, PositionX, 0.0),
                kf(0.1, PositionX, -10.0),
                kf(0.3, PositionX, 10.0),
                kf(0.5, PositionX, -8.0),
                kf(0.7, PositionX, 6.0),
                kf(0.85, PositionX, -4.0),
                kf(1.0, PositionX, 0.0),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        assert!(get_preset("fade-in").is_some());
        assert!(get_preset("does-not-exist").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = catalog().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn categories_partition_the_catalog() {
        let total = presets_in_category(PresetCategory::Enter).len()
            + presets_in_category(PresetCategory::Exit).len()
            + presets_in_category(PresetCategory::Emphasis).len();
        assert_eq!(total, catalog().len());
    }

    #[test]
    fn times_are_normalized() {
        for p in catalog() {
            for k in &p.keyframes {
                assert!(
                    (0.0..=1.0).contains(&k.time),
                    "{}: keyframe time {} out of [0,1]",
                    p.id,
                    k.time
                );
            }
        }
    }

    #[test]
    fn offset_and_factor_conventions_hold_at_rest() {
        // Every enter preset must end at rest; every exit must start at rest.
        for p in catalog() {
            let rest_at = |time: f64| {
                for k in p.keyframes.iter().filter(|k| k.time == time) {
                    let rest = if k.property.is_offset_style() { 0.0 } else { 1.0 };
                    assert_eq!(
                        k.value, rest,
                        "{}: {} not at rest at t={}",
                        p.id, k.property, time
                    );
                }
            };
            match p.category {
                PresetCategory::Enter => rest_at(1.0),
                PresetCategory::Exit => rest_at(0.0),
                PresetCategory::Emphasis => {
                    rest_at(0.0);
                    rest_at(1.0);
                }
            }
        }
    }
}
