//! Easing catalog.
//!
//! Named strategies come in three shapes:
//! - fixed cubic-bezier timing curves (the ease/quad/cubic/quart/quint/sine/
//!   expo/circ/back families), evaluated by solving the curve for y given
//!   x = t via binary-search inversion;
//! - the bounce family, a closed-form piecewise quadratic that no single
//!   cubic bezier can represent;
//! - the elastic family, closed-form exponential-decay sines, with t in
//!   {0, 1} returned unchanged to avoid the singular endpoints.
//!
//! Input t is clamped to [0,1]; back and elastic outputs may overshoot that
//! range, which downstream continuous blending accepts.
//!
//! Unknown strategy names never reach `eval`: `From<String>` resolves them
//! to `Linear`, so a stale name in stored data degrades instead of erroring
//! on the per-frame path.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
}

impl Easing {
    pub fn from_name(name: &str) -> Option<Easing> {
        use Easing::*;
        let e = match name {
            "linear" => Linear,
            "ease-in" => EaseIn,
            "ease-out" => EaseOut,
            "ease-in-out" => EaseInOut,
            "ease-in-quad" => EaseInQuad,
            "ease-out-quad" => EaseOutQuad,
            "ease-in-out-quad" => EaseInOutQuad,
            "ease-in-cubic" => EaseInCubic,
            "ease-out-cubic" => EaseOutCubic,
            "ease-in-out-cubic" => EaseInOutCubic,
            "ease-in-quart" => EaseInQuart,
            "ease-out-quart" => EaseOutQuart,
            "ease-in-out-quart" => EaseInOutQuart,
            "ease-in-quint" => EaseInQuint,
            "ease-out-quint" => EaseOutQuint,
            "ease-in-out-quint" => EaseInOutQuint,
            "ease-in-sine" => EaseInSine,
            "ease-out-sine" => EaseOutSine,
            "ease-in-out-sine" => EaseInOutSine,
            "ease-in-expo" => EaseInExpo,
            "ease-out-expo" => EaseOutExpo,
            "ease-in-out-expo" => EaseInOutExpo,
            "ease-in-circ" => EaseInCirc,
            "ease-out-circ" => EaseOutCirc,
            "ease-in-out-circ" => EaseInOutCirc,
            "ease-in-back" => EaseInBack,
            "ease-out-back" => EaseOutBack,
            "ease-in-out-back" => EaseInOutBack,
            "ease-in-bounce" => EaseInBounce,
            "ease-out-bounce" => EaseOutBounce,
            "ease-in-out-bounce" => EaseInOutBounce,
            "ease-in-elastic" => EaseInElastic,
            "ease-out-elastic" => EaseOutElastic,
            "ease-in-out-elastic" => EaseInOutElastic,
            _ => return None,
        };
        Some(e)
    }

    pub fn name(&self) -> &'static str {
        use Easing::*;
        match self {
            Linear => "linear",
            EaseIn => "ease-in",
            EaseOut => "ease-out",
            EaseInOut => "ease-in-out",
            EaseInQuad => "ease-in-quad",
            EaseOutQuad => "ease-out-quad",
            EaseInOutQuad => "ease-in-out-quad",
            EaseInCubic => "ease-in-cubic",
            EaseOutCubic => "ease-out-cubic",
            EaseInOutCubic => "ease-in-out-cubic",
            EaseInQuart => "ease-in-quart",
            EaseOutQuart => "ease-out-quart",
            EaseInOutQuart => "ease-in-out-quart",
            EaseInQuint => "ease-in-quint",
            EaseOutQuint => "ease-out-quint",
            EaseInOutQuint => "ease-in-out-quint",
            EaseInSine => "ease-in-sine",
            EaseOutSine => "ease-out-sine",
            EaseInOutSine => "ease-in-out-sine",
            EaseInExpo => "ease-in-expo",
            EaseOutExpo => "ease-out-expo",
            EaseInOutExpo => "ease-in-out-expo",
            EaseInCirc => "ease-in-circ",
            EaseOutCirc => "ease-out-circ",
            EaseInOutCirc => "ease-in-out-circ",
            EaseInBack => "ease-in-back",
            EaseOutBack => "ease-out-back",
            EaseInOutBack => "ease-in-out-back",
            EaseInBounce => "ease-in-bounce",
            EaseOutBounce => "ease-out-bounce",
            EaseInOutBounce => "ease-in-out-bounce",
            EaseInElastic => "ease-in-elastic",
            EaseOutElastic => "ease-out-elastic",
            EaseInOutElastic => "ease-in-out-elastic",
        }
    }

    /// Whether this strategy may push eased progress outside [0,1].
    pub fn can_overshoot(&self) -> bool {
        use Easing::*;
        matches!(
            self,
            EaseInBack
                | EaseOutBack
                | EaseInOutBack
                | EaseInElastic
                | EaseOutElastic
                | EaseInOutElastic
        )
    }

    /// Map raw progress t in [0,1] to eased progress.
    pub fn eval(self, t: f64) -> f64 {
        use Easing::*;
        let t = t.clamp(0.0, 1.0);
        match self {
            Linear => t,
            EaseIn => bezier_ease(t, 0.42, 0.0, 1.0, 1.0),
            EaseOut => bezier_ease(t, 0.0, 0.0, 0.58, 1.0),
            EaseInOut => bezier_ease(t, 0.42, 0.0, 0.58, 1.0),
            EaseInQuad => bezier_ease(t, 0.55, 0.085, 0.68, 0.53),
            EaseOutQuad => bezier_ease(t, 0.25, 0.46, 0.45, 0.94),
            EaseInOutQuad => bezier_ease(t, 0.455, 0.03, 0.515, 0.955),
            EaseInCubic => bezier_ease(t, 0.55, 0.055, 0.675, 0.19),
            EaseOutCubic => bezier_ease(t, 0.215, 0.61, 0.355, 1.0),
            EaseInOutCubic => bezier_ease(t, 0.645, 0.045, 0.355, 1.0),
            EaseInQuart => bezier_ease(t, 0.895, 0.03, 0.685, 0.22),
            EaseOutQuart => bezier_ease(t, 0.165, 0.84, 0.44, 1.0),
            EaseInOutQuart => bezier_ease(t, 0.77, 0.0, 0.175, 1.0),
            EaseInQuint => bezier_ease(t, 0.755, 0.05, 0.855, 0.06),
            EaseOutQuint => bezier_ease(t, 0.23, 1.0, 0.32, 1.0),
            EaseInOutQuint => bezier_ease(t, 0.86, 0.0, 0.07, 1.0),
            EaseInSine => bezier_ease(t, 0.47, 0.0, 0.745, 0.715),
            EaseOutSine => bezier_ease(t, 0.39, 0.575, 0.565, 1.0),
            EaseInOutSine => bezier_ease(t, 0.445, 0.05, 0.55, 0.95),
            EaseInExpo => bezier_ease(t, 0.95, 0.05, 0.795, 0.035),
            EaseOutExpo => bezier_ease(t, 0.19, 1.0, 0.22, 1.0),
            EaseInOutExpo => bezier_ease(t, 1.0, 0.0, 0.0, 1.0),
            EaseInCirc => bezier_ease(t, 0.6, 0.04, 0.98, 0.335),
            EaseOutCirc => bezier_ease(t, 0.075, 0.82, 0.165, 1.0),
            EaseInOutCirc => bezier_ease(t, 0.785, 0.135, 0.15, 0.86),
            EaseInBack => bezier_ease(t, 0.6, -0.28, 0.735, 0.045),
            EaseOutBack => bezier_ease(t, 0.175, 0.885, 0.32, 1.275),
            EaseInOutBack => bezier_ease(t, 0.68, -0.55, 0.265, 1.55),
            EaseInBounce => 1.0 - ease_out_bounce(1.0 - t),
            EaseOutBounce => ease_out_bounce(t),
            EaseInOutBounce => {
                if t < 0.5 {
                    (1.0 - ease_out_bounce(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + ease_out_bounce(2.0 * t - 1.0)) / 2.0
                }
            }
            EaseInElastic => ease_in_elastic(t),
            EaseOutElastic => ease_out_elastic(t),
            EaseInOutElastic => ease_in_out_elastic(t),
        }
    }
}

/// Unknown names resolve to Linear so stale stored data degrades instead of
/// failing deserialization.
impl From<String> for Easing {
    fn from(s: String) -> Self {
        Easing::from_name(&s).unwrap_or(Easing::Linear)
    }
}

impl From<Easing> for String {
    fn from(e: Easing) -> Self {
        e.name().to_string()
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

// Piecewise quadratic with the classic 7.5625 / 2.75 constants; lands on
// exactly 1.0 at t = 1.
fn ease_out_bounce(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

fn ease_in_elastic(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let c4 = (2.0 * PI) / 3.0;
    -(2.0f64.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * c4).sin()
}

fn ease_out_elastic(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let c4 = (2.0 * PI) / 3.0;
    2.0f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
}

fn ease_in_out_elastic(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let c5 = (2.0 * PI) / 4.5;
    if t < 0.5 {
        -(2.0f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * c5).sin()) / 2.0
    } else {
        2.0f64.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * c5).sin() / 2.0 + 1.0
    }
}
