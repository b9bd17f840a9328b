// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Persistence payloads for curve motions
//!
//! Two shapes are written: an [`AnchorPreset`] that can be loaded back for
//! editing, and a [`BakedMotion`] holding the sampled waveform for playback.
//! Both share the `{"type": "bezier_curve", "name", "parameters": {...}}`
//! envelope.

use crate::curve::sample;
use crate::error::{CurveError, check_duration};
use crate::model::{Anchor, CurveParams, Direction};
use serde::{Deserialize, Serialize};

/// Payload type tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadKind {
    #[default]
    #[serde(rename = "bezier_curve")]
    BezierCurve,
}

// ===== Anchor Preset =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetParameters {
    pub anchors: Vec<Anchor>,
    pub duration: f64,
    pub magnitude: u32,
    pub direction: Direction,
}

/// Re-editable curve: the anchors plus curve parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorPreset {
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    pub name: String,
    pub parameters: PresetParameters,
}

impl AnchorPreset {
    pub fn new(params: &CurveParams, anchors: Vec<Anchor>) -> Self {
        Self {
            kind: PayloadKind::BezierCurve,
            name: params.name.clone(),
            parameters: PresetParameters {
                anchors,
                duration: params.duration,
                magnitude: params.magnitude,
                direction: params.direction,
            },
        }
    }

    /// Curve parameters carried by the preset
    pub fn curve_params(&self) -> CurveParams {
        CurveParams {
            name: self.name.clone(),
            duration: self.parameters.duration,
            magnitude: self.parameters.magnitude,
            direction: self.parameters.direction,
        }
    }

    /// Check the preset before it is loaded or sent on
    pub fn validate(&self) -> Result<(), CurveError> {
        check_duration(self.parameters.duration)?;
        if self.parameters.anchors.is_empty() {
            return Err(CurveError::EmptyPreset);
        }
        if let Some(index) = self.parameters.anchors.iter().position(|a| !a.is_finite()) {
            return Err(CurveError::NonFiniteAnchor { index });
        }
        Ok(())
    }

    /// Sample the preset into a playback payload
    pub fn bake(&self) -> BakedMotion {
        let data = sample(&self.parameters.anchors, self.parameters.duration);
        BakedMotion::new(&self.curve_params(), data)
    }
}

// ===== Baked Motion =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakedParameters {
    /// Sample sequence in `[-1, 1]` at the system sample rate
    pub data: Vec<f64>,
    pub duration: f64,
    pub magnitude: u32,
    pub direction: Direction,
}

/// Sampled curve ready for playback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakedMotion {
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    pub name: String,
    pub parameters: BakedParameters,
}

impl BakedMotion {
    pub fn new(params: &CurveParams, data: Vec<f64>) -> Self {
        Self {
            kind: PayloadKind::BezierCurve,
            name: params.name.clone(),
            parameters: BakedParameters {
                data,
                duration: params.duration,
                magnitude: params.magnitude,
                direction: params.direction,
            },
        }
    }

    pub fn validate(&self) -> Result<(), CurveError> {
        check_duration(self.parameters.duration)?;
        let len = self.parameters.data.len();
        if len < 2 {
            return Err(CurveError::TooFewSamples(len));
        }
        Ok(())
    }

    /// Waveforms for the four actuators `[fl, fr, rl, rr]`
    ///
    /// Each is the sample data scaled by the direction's channel gain.
    pub fn channels(&self) -> [Vec<f64>; 4] {
        let gains = self.parameters.direction.channel_gains();
        gains.map(|gain| self.parameters.data.iter().map(|v| v * gain).collect())
    }
}
