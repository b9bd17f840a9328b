// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Boundary errors for data entering the engine

use thiserror::Error;

/// Reasons a preset or baked payload is rejected at the boundary
///
/// The editing core itself never fails; these are raised only when data
/// from outside (files, collaborators) is checked before use.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f64),

    #[error("preset contains no anchors")]
    EmptyPreset,

    #[error("anchor {index} has a non-finite coordinate or angle")]
    NonFiniteAnchor { index: usize },

    #[error("baked motion needs at least 2 samples, got {0}")]
    TooFewSamples(usize),
}

/// Check that a duration is usable for sampling
pub fn check_duration(duration: f64) -> Result<f64, CurveError> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        Err(CurveError::InvalidDuration(duration))
    }
}
