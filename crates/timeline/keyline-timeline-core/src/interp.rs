//! Interpolation dispatch: (start, end, progress, descriptor) -> value.
//!
//! Raw progress is clamped to [0,1] before dispatch. For the continuous
//! family the *eased* progress may leave [0,1] (back/elastic overshoot);
//! quantized blending deliberately uses the linear, non-eased progress.
//!
//! Two text values that do not both parse as colors degrade to step-end
//! behavior instead of erroring; genuinely mixed kinds are an authoring bug
//! and surface as a type-mismatch error.

use keyline_api_core::{Rgba, Value};

use crate::data::{Interpolation, QuantizeStrategy, RevealStrategy, StepStrategy};
use crate::ease::Easing;
use crate::error::EvalError;

/// Sample a segment at the given raw progress.
pub fn interpolate(
    start: &Value,
    end: &Value,
    progress: f64,
    interp: &Interpolation,
) -> Result<Value, EvalError> {
    let progress = progress.clamp(0.0, 1.0);
    match interp {
        Interpolation::Continuous { strategy } => continuous(start, end, progress, *strategy),
        Interpolation::Discrete { strategy } => Ok(discrete(start, end, progress, *strategy)),
        Interpolation::Quantized {
            strategy,
            increment,
        } => quantized(start, end, progress, *strategy, *increment),
        Interpolation::Text {
            strategy,
            separator,
        } => Ok(text_reveal(
            start,
            end,
            progress,
            *strategy,
            separator.as_deref(),
        )),
    }
}

fn continuous(
    start: &Value,
    end: &Value,
    progress: f64,
    strategy: Easing,
) -> Result<Value, EvalError> {
    match (start, end) {
        (Value::Number(a), Value::Number(b)) => {
            let eased = strategy.eval(progress);
            Ok(Value::Number(a + (b - a) * eased))
        }
        (Value::Text(a), Value::Text(b)) => match (Rgba::parse(a), Rgba::parse(b)) {
            (Some(ca), Some(cb)) => {
                let eased = strategy.eval(progress);
                Ok(Value::Text(ca.blend(&cb, eased).to_string()))
            }
            // Not a color pair: hold the start value until the segment
            // completes rather than failing a frame.
            _ => Ok(discrete(start, end, progress, StepStrategy::StepEnd)),
        },
        _ => Err(EvalError::ContinuousKindMismatch {
            start: start.kind(),
            end: end.kind(),
        }),
    }
}

fn discrete(start: &Value, end: &Value, progress: f64, strategy: StepStrategy) -> Value {
    let jumped = match strategy {
        StepStrategy::StepEnd => progress >= 1.0,
        StepStrategy::StepStart => progress > 0.0,
        StepStrategy::StepMid => progress >= 0.5,
    };
    if jumped {
        end.clone()
    } else {
        start.clone()
    }
}

fn quantized(
    start: &Value,
    end: &Value,
    progress: f64,
    strategy: QuantizeStrategy,
    increment: Option<f64>,
) -> Result<Value, EvalError> {
    let (a, b) = match (start.as_number(), end.as_number()) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return Err(EvalError::QuantizedKindMismatch {
                start: start.kind(),
                end: end.kind(),
            })
        }
    };
    let linear = a + (b - a) * progress;
    let snapped = match strategy {
        QuantizeStrategy::Integer => linear.round(),
        // snap-grid floors onto the grid: a value only advances once the
        // linear blend has fully crossed the next increment.
        QuantizeStrategy::SnapGrid => match increment.filter(|i| *i > 0.0) {
            Some(inc) => (linear / inc).floor() * inc,
            // Missing or non-positive increment degrades to integer rounding.
            None => linear.round(),
        },
    };
    Ok(Value::Number(snapped))
}

fn text_reveal(
    start: &Value,
    end: &Value,
    progress: f64,
    strategy: RevealStrategy,
    separator: Option<&str>,
) -> Value {
    let from = start.coerce_text();
    let to = end.coerce_text();
    if from == to {
        return Value::Text(to);
    }
    let revealed = match strategy {
        RevealStrategy::CharReveal => char_reveal(&from, &to, progress),
        RevealStrategy::WordReveal => word_reveal(&from, &to, progress, separator.unwrap_or(" ")),
    };
    Value::Text(revealed)
}

/// Reveal the end string char by char, keeping the longest shared prefix.
fn char_reveal(from: &str, to: &str, progress: f64) -> String {
    let to_chars: Vec<char> = to.chars().collect();
    let shared = from
        .chars()
        .zip(to_chars.iter())
        .take_while(|(a, b)| a == *b)
        .count();
    let rest = &to_chars[shared..];
    let count = ((rest.len() as f64 * progress).round() as usize).min(rest.len());
    to_chars[..shared + count].iter().collect()
}

/// Reveal whole words only, keeping the run of identical leading words.
fn word_reveal(from: &str, to: &str, progress: f64, separator: &str) -> String {
    let from_words: Vec<&str> = from.split(separator).collect();
    let to_words: Vec<&str> = to.split(separator).collect();
    let shared = from_words
        .iter()
        .zip(to_words.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let rest = to_words.len() - shared;
    let count = ((rest as f64 * progress).round() as usize).min(rest);
    to_words[..shared + count].join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: f64) -> Value {
        Value::Number(v)
    }

    fn continuous_linear() -> Interpolation {
        Interpolation::Continuous {
            strategy: Easing::Linear,
        }
    }

    #[test]
    fn linear_numbers() {
        let v = interpolate(&num(0.0), &num(10.0), 0.25, &continuous_linear()).unwrap();
        assert_eq!(v, num(2.5));
    }

    #[test]
    fn discrete_thresholds() {
        let step = |s: StepStrategy, p: f64| {
            interpolate(
                &num(0.0),
                &num(10.0),
                p,
                &Interpolation::Discrete { strategy: s },
            )
            .unwrap()
        };
        assert_eq!(step(StepStrategy::StepMid, 0.49), num(0.0));
        assert_eq!(step(StepStrategy::StepMid, 0.5), num(10.0));
        assert_eq!(step(StepStrategy::StepEnd, 0.99), num(0.0));
        assert_eq!(step(StepStrategy::StepEnd, 1.0), num(10.0));
        assert_eq!(step(StepStrategy::StepStart, 0.0), num(0.0));
        assert_eq!(step(StepStrategy::StepStart, 0.01), num(10.0));
    }

    #[test]
    fn quantized_snap_grid() {
        let v = interpolate(
            &num(0.0),
            &num(10.0),
            0.5,
            &Interpolation::Quantized {
                strategy: QuantizeStrategy::SnapGrid,
                increment: Some(3.0),
            },
        )
        .unwrap();
        // linear value 5 floors onto the 3-grid
        assert_eq!(v, num(3.0));
    }

    #[test]
    fn quantized_ignores_easing_overshoot() {
        // quantized always blends linearly; there is no eased overshoot path
        let v = interpolate(
            &num(0.0),
            &num(4.0),
            0.5,
            &Interpolation::Quantized {
                strategy: QuantizeStrategy::Integer,
                increment: None,
            },
        )
        .unwrap();
        assert_eq!(v, num(2.0));
    }

    #[test]
    fn color_midpoint() {
        let v = interpolate(
            &Value::from("#000000"),
            &Value::from("#ffffff"),
            0.5,
            &continuous_linear(),
        )
        .unwrap();
        assert_eq!(v, Value::from("#808080"));
    }

    #[test]
    fn non_color_text_degrades_to_step() {
        let v = interpolate(
            &Value::from("Hello"),
            &Value::from("World"),
            0.5,
            &continuous_linear(),
        )
        .unwrap();
        assert_eq!(v, Value::from("Hello"));
        let v = interpolate(
            &Value::from("Hello"),
            &Value::from("World"),
            1.0,
            &continuous_linear(),
        )
        .unwrap();
        assert_eq!(v, Value::from("World"));
    }

    #[test]
    fn mixed_kinds_are_an_error() {
        let err = interpolate(
            &num(0.0),
            &Value::from("ten"),
            0.5,
            &continuous_linear(),
        )
        .unwrap_err();
        assert!(matches!(err, EvalError::ContinuousKindMismatch { .. }));
    }

    #[test]
    fn char_reveal_progression() {
        let reveal = |p: f64| {
            interpolate(
                &Value::from(""),
                &Value::from("Hello"),
                p,
                &Interpolation::Text {
                    strategy: RevealStrategy::CharReveal,
                    separator: None,
                },
            )
            .unwrap()
        };
        assert_eq!(reveal(0.0), Value::from(""));
        assert_eq!(reveal(0.4), Value::from("He"));
        assert_eq!(reveal(1.0), Value::from("Hello"));
    }

    #[test]
    fn char_reveal_keeps_shared_prefix() {
        assert_eq!(char_reveal("Hell", "Help", 0.0), "Hel");
        assert_eq!(char_reveal("Hell", "Help", 1.0), "Help");
    }

    #[test]
    fn word_reveal_whole_words_only() {
        let out = word_reveal("the quick", "the quick brown fox", 0.5, " ");
        assert_eq!(out, "the quick brown");
    }

    #[test]
    fn reveal_never_regresses() {
        let mut last_len = 0;
        for i in 0..=20 {
            let p = i as f64 / 20.0;
            let s = char_reveal("", "monotonic", p);
            assert!(s.len() >= last_len, "regressed at p={p}");
            last_len = s.len();
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let v = interpolate(&num(0.0), &num(10.0), 1.7, &continuous_linear()).unwrap();
        assert_eq!(v, num(10.0));
        let v = interpolate(&num(0.0), &num(10.0), -0.3, &continuous_linear()).unwrap();
        assert_eq!(v, num(0.0));
    }
}
