//! Layer resolution: sampled channel values over static bases, plus
//! transition deltas.
//!
//! For every fixed transform/style channel and every metadata-declared
//! custom property, the resolver filters the layer's keyframes to that
//! channel and samples it; a channel with zero keyframes behaves exactly as
//! a non-animated field (sparse override). Transition deltas are then
//! composed on top: offsets add, factors multiply, filter overrides replace.

use hashbrown::HashMap;
use keyline_api_core::{AnimatableProperty, PropertyMetadata, Value, ValueKind};
use serde::{Deserialize, Serialize};

use crate::data::{Keyframe, Layer, Props, Style, Transform};
use crate::error::EvalError;
use crate::sampling::sample_refs;
use crate::transition::evaluate_transitions;

/// Fully-resolved values for one layer at one instant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResolvedLayer {
    pub transform: Transform,
    pub style: Style,
    pub props: Props,
}

/// Resolve every animated channel of a layer at time t (seconds).
pub fn resolve_layer(
    layer: &Layer,
    metadata: &[PropertyMetadata],
    t: f64,
) -> Result<ResolvedLayer, EvalError> {
    let tracks = group_tracks(&layer.keyframes);

    let number = |prop: AnimatableProperty, base: f64| -> Result<f64, EvalError> {
        match sample_channel(&tracks, &prop, t)? {
            None => Ok(base),
            Some(Value::Number(v)) => Ok(v),
            Some(other) => Err(EvalError::ChannelKindMismatch {
                property: prop.to_string(),
                expected: ValueKind::Number,
                actual: other.kind(),
            }),
        }
    };

    let base = &layer.transform;
    let mut transform = Transform {
        position: [
            number(AnimatableProperty::PositionX, base.position[0])?,
            number(AnimatableProperty::PositionY, base.position[1])?,
            number(AnimatableProperty::PositionZ, base.position[2])?,
        ],
        rotation: [
            number(AnimatableProperty::RotationX, base.rotation[0])?,
            number(AnimatableProperty::RotationY, base.rotation[1])?,
            number(AnimatableProperty::RotationZ, base.rotation[2])?,
        ],
        scale: [
            number(AnimatableProperty::ScaleX, base.scale[0])?,
            number(AnimatableProperty::ScaleY, base.scale[1])?,
        ],
    };

    let base = &layer.style;
    let mut style = Style {
        opacity: number(AnimatableProperty::Opacity, base.opacity)?,
        blur: number(AnimatableProperty::Blur, base.blur)?,
        brightness: number(AnimatableProperty::Brightness, base.brightness)?,
        contrast: number(AnimatableProperty::Contrast, base.contrast)?,
        saturate: number(AnimatableProperty::Saturate, base.saturate)?,
        drop_shadow_x: number(AnimatableProperty::DropShadowX, base.drop_shadow_x)?,
        drop_shadow_y: number(AnimatableProperty::DropShadowY, base.drop_shadow_y)?,
        drop_shadow_blur: number(AnimatableProperty::DropShadowBlur, base.drop_shadow_blur)?,
        drop_shadow_color: match sample_channel(&tracks, &AnimatableProperty::DropShadowColor, t)? {
            None => base.drop_shadow_color.clone(),
            Some(Value::Text(s)) => s,
            Some(other) => {
                return Err(EvalError::ChannelKindMismatch {
                    property: AnimatableProperty::DropShadowColor.to_string(),
                    expected: ValueKind::Text,
                    actual: other.kind(),
                })
            }
        },
    };

    let mut props = layer.props.clone();
    for meta in metadata {
        let prop = AnimatableProperty::Custom(meta.name.clone());
        if let Some(value) = sample_channel(&tracks, &prop, t)? {
            props.insert(meta.name.clone(), value);
        }
    }

    // Layer transitions compose on top of the animated values.
    let delta = evaluate_transitions(layer, t);
    for i in 0..3 {
        transform.position[i] += delta.position_offset[i];
        transform.rotation[i] += delta.rotation_offset[i];
    }
    transform.scale[0] *= delta.scale_factor[0];
    transform.scale[1] *= delta.scale_factor[1];
    style.opacity *= delta.opacity_factor;
    if let Some(v) = delta.blur {
        style.blur = v;
    }
    if let Some(v) = delta.brightness {
        style.brightness = v;
    }
    if let Some(v) = delta.contrast {
        style.contrast = v;
    }
    if let Some(v) = delta.saturate {
        style.saturate = v;
    }

    Ok(ResolvedLayer {
        transform,
        style,
        props,
    })
}

type TrackIndex<'a> = HashMap<&'a AnimatableProperty, Vec<&'a Keyframe>>;

fn group_tracks(keyframes: &[Keyframe]) -> TrackIndex<'_> {
    let mut tracks: TrackIndex<'_> = HashMap::new();
    for kf in keyframes {
        tracks.entry(&kf.property).or_default().push(kf);
    }
    for track in tracks.values_mut() {
        track.sort_by(|a, b| a.time.total_cmp(&b.time));
    }
    tracks
}

fn sample_channel(
    tracks: &TrackIndex<'_>,
    property: &AnimatableProperty,
    t: f64,
) -> Result<Option<Value>, EvalError> {
    match tracks.get(property) {
        Some(kfs) => sample_refs(kfs, t),
        None => Ok(None),
    }
}
