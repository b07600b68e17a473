//! Per-property keyframe track sampling.
//!
//! Semantics:
//! - empty track -> None (caller falls back to its static value)
//! - t at or before the first keyframe -> hold the first value
//! - t at or after the last keyframe -> hold the last value
//! - otherwise find the first adjacent pair with a.time <= t <= b.time and
//!   dispatch with the *departure* keyframe's descriptor (a keyframe says how
//!   motion leaves it, not how motion arrives)
//! - zero-length segments (duplicate times) sample at progress 1 instead of
//!   dividing by zero
//!
//! Tracks are logically sets; `sample_track` sorts defensively (stable, by
//! time) and `sample_sorted` skips that for callers that pre-sort.

use keyline_api_core::Value;

use crate::data::Keyframe;
use crate::error::EvalError;
use crate::interp::interpolate;

/// Sample a property track at time t (seconds), sorting first.
pub fn sample_track(track: &[Keyframe], t: f64) -> Result<Option<Value>, EvalError> {
    let mut refs: Vec<&Keyframe> = track.iter().collect();
    if !is_sorted(&refs) {
        refs.sort_by(|a, b| a.time.total_cmp(&b.time));
    }
    sample_refs(&refs, t)
}

/// Sample a track the caller guarantees is sorted by time. Correctness
/// matches `sample_track` for sorted input; this just skips the check.
pub fn sample_sorted(track: &[Keyframe], t: f64) -> Result<Option<Value>, EvalError> {
    let refs: Vec<&Keyframe> = track.iter().collect();
    sample_refs(&refs, t)
}

fn is_sorted(kfs: &[&Keyframe]) -> bool {
    kfs.windows(2).all(|w| w[0].time <= w[1].time)
}

pub(crate) fn sample_refs(kfs: &[&Keyframe], t: f64) -> Result<Option<Value>, EvalError> {
    let n = kfs.len();
    if n == 0 {
        return Ok(None);
    }
    if n == 1 || t <= kfs[0].time {
        return Ok(Some(kfs[0].value.clone()));
    }
    let last = kfs[n - 1];
    if t >= last.time {
        return Ok(Some(last.value.clone()));
    }
    for i in 0..n - 1 {
        let a = kfs[i];
        let b = kfs[i + 1];
        if t >= a.time && t <= b.time {
            let span = b.time - a.time;
            let progress = if span > 0.0 { (t - a.time) / span } else { 1.0 };
            return interpolate(&a.value, &b.value, progress, &a.interpolation).map(Some);
        }
    }
    // Unreachable for sorted input; hold the last value regardless.
    Ok(Some(last.value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Interpolation;
    use crate::ease::Easing;
    use keyline_api_core::AnimatableProperty;

    fn kf(id: &str, time: f64, value: f64) -> Keyframe {
        Keyframe {
            id: id.to_string(),
            time,
            property: AnimatableProperty::Opacity,
            value: Value::Number(value),
            interpolation: Interpolation::Continuous {
                strategy: Easing::Linear,
            },
        }
    }

    #[test]
    fn empty_track_returns_none() {
        assert_eq!(sample_track(&[], 1.0).unwrap(), None);
    }

    #[test]
    fn holds_outside_range() {
        let track = vec![kf("a", 1.0, 5.0), kf("b", 2.0, 10.0)];
        assert_eq!(
            sample_track(&track, 0.0).unwrap(),
            Some(Value::Number(5.0))
        );
        assert_eq!(
            sample_track(&track, 9.0).unwrap(),
            Some(Value::Number(10.0))
        );
    }

    #[test]
    fn interpolates_between_pairs() {
        let track = vec![kf("a", 0.0, 0.0), kf("b", 2.0, 4.0)];
        assert_eq!(
            sample_track(&track, 0.5).unwrap(),
            Some(Value::Number(1.0))
        );
    }

    #[test]
    fn unsorted_input_is_sorted_first() {
        let track = vec![kf("b", 2.0, 4.0), kf("a", 0.0, 0.0)];
        assert_eq!(
            sample_track(&track, 1.0).unwrap(),
            Some(Value::Number(2.0))
        );
    }

    #[test]
    fn duplicate_times_do_not_divide_by_zero() {
        let track = vec![kf("a", 1.0, 0.0), kf("b", 1.0, 7.0), kf("c", 2.0, 9.0)];
        // Degenerate segment samples at progress 1
        let v = sample_track(&track, 1.0).unwrap();
        assert_eq!(v, Some(Value::Number(0.0))); // hold-before applies at t == first
        let v = sample_track(&track, 1.5).unwrap();
        assert_eq!(v, Some(Value::Number(8.0)));
    }
}
