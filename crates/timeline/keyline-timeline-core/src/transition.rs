//! Enter/exit transition evaluation.
//!
//! A transition layers a preset's offset/factor pattern on top of a layer's
//! resolved values while the query time is inside that layer's enter or exit
//! window. The evaluation is a pure function of time: nothing is persisted
//! between calls.
//!
//! Windows:
//! - enter: [start_time, start_time + duration], elapsed = t - start_time
//! - exit:  [end_time - duration, end_time], elapsed = duration - (end_time - t),
//!   so exit patterns run forward and finish exactly at end_time
//!
//! When both windows are active at once (short layer, long transitions) the
//! exit evaluation overrides the enter evaluation field by field, except
//! `opacity_factor`, which multiplies so a simultaneous fade-in and fade-out
//! attenuate each other.

use hashbrown::HashMap;
use keyline_api_core::{AnimatableProperty, Value};

use crate::data::{Layer, TransitionSpec};
use crate::interp::interpolate;
use crate::presets::{get_preset, PresetKeyframe, TypedAnimationPreset};

/// Offset/factor deltas contributed by active transitions. The default is
/// the identity: zero offsets, unit factors, no filter overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionDelta {
    pub position_offset: [f64; 3],
    pub rotation_offset: [f64; 3],
    pub scale_factor: [f64; 2],
    pub opacity_factor: f64,
    /// Absolute filter overrides; None leaves the resolved value untouched.
    pub blur: Option<f64>,
    pub brightness: Option<f64>,
    pub contrast: Option<f64>,
    pub saturate: Option<f64>,
}

impl Default for TransitionDelta {
    fn default() -> Self {
        Self {
            position_offset: [0.0; 3],
            rotation_offset: [0.0; 3],
            scale_factor: [1.0; 2],
            opacity_factor: 1.0,
            blur: None,
            brightness: None,
            contrast: None,
            saturate: None,
        }
    }
}

/// Evaluate a layer's enter and exit transitions at time t (seconds) and
/// merge them into a single delta. Absent or unknown presets and times
/// outside both windows yield the identity.
pub fn evaluate_transitions(layer: &Layer, t: f64) -> TransitionDelta {
    let enter = layer
        .enter
        .as_ref()
        .and_then(|spec| evaluate_window(spec, t - layer.start_time));
    let exit = layer.exit.as_ref().and_then(|spec| {
        let elapsed = spec.duration - (layer.end_time - t);
        evaluate_window(spec, elapsed)
    });

    let mut delta = TransitionDelta::default();
    if let Some(fields) = &enter {
        apply_fields(&mut delta, fields, Merge::Assign);
    }
    if let Some(fields) = &exit {
        apply_fields(&mut delta, fields, Merge::ExitOverride);
    }
    delta
}

/// Sampled per-property contributions of one preset evaluation.
type Fields = HashMap<AnimatableProperty, f64>;

enum Merge {
    Assign,
    /// Offsets and overrides replace; opacity multiplies.
    ExitOverride,
}

fn evaluate_window(spec: &TransitionSpec, elapsed: f64) -> Option<Fields> {
    if spec.duration <= 0.0 || elapsed < 0.0 || elapsed > spec.duration {
        return None;
    }
    let Some(preset) = get_preset(&spec.preset) else {
        log::debug!("unknown transition preset '{}', skipping", spec.preset);
        return None;
    };
    Some(evaluate_preset(preset, elapsed / spec.duration))
}

/// Sample every property pattern of a preset at normalized time u.
fn evaluate_preset(preset: &TypedAnimationPreset, u: f64) -> Fields {
    let mut tracks: HashMap<&AnimatableProperty, Vec<&PresetKeyframe>> = HashMap::new();
    for kf in &preset.keyframes {
        tracks.entry(&kf.property).or_default().push(kf);
    }
    let mut fields = Fields::new();
    for (property, mut kfs) in tracks {
        kfs.sort_by(|a, b| a.time.total_cmp(&b.time));
        fields.insert(property.clone(), sample_pattern(&kfs, u));
    }
    fields
}

/// Track-sampler semantics over preset keyframes: hold ends, departure
/// descriptor, degenerate segments at progress 1. Numeric by construction;
/// anything else fails soft to the departure value.
fn sample_pattern(kfs: &[&PresetKeyframe], u: f64) -> f64 {
    let n = kfs.len();
    debug_assert!(n > 0);
    if n == 1 || u <= kfs[0].time {
        return kfs[0].value;
    }
    let last = kfs[n - 1];
    if u >= last.time {
        return last.value;
    }
    for i in 0..n - 1 {
        let a = kfs[i];
        let b = kfs[i + 1];
        if u >= a.time && u <= b.time {
            let span = b.time - a.time;
            let progress = if span > 0.0 { (u - a.time) / span } else { 1.0 };
            let interp = a.interpolation.clone().unwrap_or_default();
            return interpolate(
                &Value::Number(a.value),
                &Value::Number(b.value),
                progress,
                &interp,
            )
            .ok()
            .and_then(|v| v.as_number())
            .unwrap_or(a.value);
        }
    }
    last.value
}

fn apply_fields(delta: &mut TransitionDelta, fields: &Fields, merge: Merge) {
    use AnimatableProperty::*;
    for (property, value) in fields {
        match property {
            PositionX => delta.position_offset[0] = *value,
            PositionY => delta.position_offset[1] = *value,
            PositionZ => delta.position_offset[2] = *value,
            RotationX => delta.rotation_offset[0] = *value,
            RotationY => delta.rotation_offset[1] = *value,
            RotationZ => delta.rotation_offset[2] = *value,
            ScaleX => delta.scale_factor[0] = *value,
            ScaleY => delta.scale_factor[1] = *value,
            Opacity => match merge {
                Merge::Assign => delta.opacity_factor = *value,
                Merge::ExitOverride => delta.opacity_factor *= *value,
            },
            Blur => delta.blur = Some(*value),
            Brightness => delta.brightness = Some(*value),
            Contrast => delta.contrast = Some(*value),
            Saturate => delta.saturate = Some(*value),
            // Presets do not target shadow or custom channels.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Props, Style, Transform};

    fn layer_with(
        start: f64,
        end: f64,
        enter: Option<TransitionSpec>,
        exit: Option<TransitionSpec>,
    ) -> Layer {
        Layer {
            id: "l".into(),
            name: "layer".into(),
            keyframes: vec![],
            transform: Transform::default(),
            style: Style::default(),
            props: Props::default(),
            start_time: start,
            end_time: end,
            enter,
            exit,
        }
    }

    fn spec(preset: &str, duration: f64) -> TransitionSpec {
        TransitionSpec {
            preset: preset.to_string(),
            duration,
        }
    }

    #[test]
    fn identity_outside_windows() {
        let layer = layer_with(2.0, 10.0, Some(spec("fade-in", 1.0)), None);
        assert_eq!(evaluate_transitions(&layer, 1.0), TransitionDelta::default());
        assert_eq!(evaluate_transitions(&layer, 5.0), TransitionDelta::default());
    }

    #[test]
    fn fade_in_ramps_opacity_factor() {
        let layer = layer_with(2.0, 10.0, Some(spec("fade-in", 1.0)), None);
        let at_start = evaluate_transitions(&layer, 2.0);
        assert!(at_start.opacity_factor.abs() < 1e-9);
        let at_end = evaluate_transitions(&layer, 3.0);
        assert!((at_end.opacity_factor - 1.0).abs() < 1e-9);
        let mid = evaluate_transitions(&layer, 2.5);
        assert!(mid.opacity_factor > 0.0 && mid.opacity_factor < 1.0);
    }

    #[test]
    fn exit_runs_forward_ending_at_end_time() {
        let layer = layer_with(0.0, 10.0, None, Some(spec("fade-out", 2.0)));
        let at_window_start = evaluate_transitions(&layer, 8.0);
        assert!((at_window_start.opacity_factor - 1.0).abs() < 1e-9);
        let at_end = evaluate_transitions(&layer, 10.0);
        assert!(at_end.opacity_factor.abs() < 1e-9);
    }

    #[test]
    fn simultaneous_fades_multiply() {
        // 1-second layer, both transitions cover the whole window.
        let layer = layer_with(
            0.0,
            1.0,
            Some(spec("fade-in", 1.0)),
            Some(spec("fade-out", 1.0)),
        );
        let mid = evaluate_transitions(&layer, 0.5);
        let enter_only = evaluate_transitions(
            &layer_with(0.0, 1.0, Some(spec("fade-in", 1.0)), None),
            0.5,
        );
        assert!(mid.opacity_factor < enter_only.opacity_factor);
        assert!(mid.opacity_factor > 0.0);
    }

    #[test]
    fn exit_overrides_enter_offsets() {
        let layer = layer_with(
            0.0,
            1.0,
            Some(spec("slide-in-left", 1.0)),
            Some(spec("slide-out-right", 1.0)),
        );
        let mid = evaluate_transitions(&layer, 0.5);
        // slide-out-right at u=0.5 moves right; the enter offset (negative,
        // coming from the left) must have been replaced, not summed.
        assert!(mid.position_offset[0] > 0.0);
    }

    #[test]
    fn unknown_preset_contributes_nothing() {
        let layer = layer_with(0.0, 10.0, Some(spec("mystery-wobble", 1.0)), None);
        assert_eq!(evaluate_transitions(&layer, 0.5), TransitionDelta::default());
    }

    #[test]
    fn zero_duration_contributes_nothing() {
        let layer = layer_with(0.0, 10.0, Some(spec("fade-in", 0.0)), None);
        assert_eq!(evaluate_transitions(&layer, 0.0), TransitionDelta::default());
    }
}
