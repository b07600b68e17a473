//! Error types for timeline evaluation.
//!
//! Only genuine contract violations surface as errors; every time/data edge
//! case (empty tracks, duplicate timestamps, out-of-range query times,
//! unknown preset ids) is absorbed with a documented fallback so playback
//! never stalls mid-frame.

use keyline_api_core::ValueKind;
use thiserror::Error;

/// Errors that can occur during timeline evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("continuous interpolation needs two numbers or two colors, got {start} and {end}")]
    ContinuousKindMismatch { start: ValueKind, end: ValueKind },

    #[error("quantized interpolation needs numeric endpoints, got {start} and {end}")]
    QuantizedKindMismatch { start: ValueKind, end: ValueKind },

    #[error("channel `{property}` sampled to a {actual} value, expected {expected}")]
    ChannelKindMismatch {
        property: String,
        expected: ValueKind,
        actual: ValueKind,
    },
}
