// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve parameters and motion direction

use serde::{Deserialize, Serialize};

/// Actuator layout the waveform is routed to
///
/// Channel order everywhere is front-left, front-right, rear-left,
/// rear-right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Heave,
    Pitch,
    Roll,
    Front,
    Rear,
    Left,
    Right,
    Fl,
    Fr,
    Rl,
    Rr,
}

impl Direction {
    pub const ALL: [Direction; 11] = [
        Direction::Heave,
        Direction::Pitch,
        Direction::Roll,
        Direction::Front,
        Direction::Rear,
        Direction::Left,
        Direction::Right,
        Direction::Fl,
        Direction::Fr,
        Direction::Rl,
        Direction::Rr,
    ];

    /// Per-actuator gain `[fl, fr, rl, rr]`
    pub fn channel_gains(self) -> [f64; 4] {
        match self {
            Direction::Heave => [1.0, 1.0, 1.0, 1.0],
            Direction::Pitch => [1.0, 1.0, -1.0, -1.0],
            Direction::Roll => [1.0, -1.0, 1.0, -1.0],
            Direction::Front => [1.0, 1.0, 0.0, 0.0],
            Direction::Rear => [0.0, 0.0, 1.0, 1.0],
            Direction::Left => [1.0, 0.0, 1.0, 0.0],
            Direction::Right => [0.0, 1.0, 0.0, 1.0],
            Direction::Fl => [1.0, 0.0, 0.0, 0.0],
            Direction::Fr => [0.0, 1.0, 0.0, 0.0],
            Direction::Rl => [0.0, 0.0, 1.0, 0.0],
            Direction::Rr => [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Parameters of the curve being edited
///
/// `magnitude` is display and playback scale only; sampling never reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveParams {
    pub name: String,
    /// Seconds, always > 0
    pub duration: f64,
    /// Newtons
    pub magnitude: u32,
    pub direction: Direction,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            duration: 1.0,
            magnitude: 100,
            direction: Direction::Heave,
        }
    }
}
