// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Engine settings and configuration constants.
//!
//! Compile-time defaults live in the grouped modules below. The values an
//! operator may want to tune (tolerances, handle length, canvas size) are
//! also carried by [`EditorConfig`], which can be loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// CURVE SETTINGS
// ============================================================================
/// Samples per second of every generated waveform (system-wide, fixed)
const SAMPLE_RATE: f64 = 100.0;

/// Tangent slopes are limited to ±this many value units per second
const SLOPE_LIMIT: f64 = 5.0;

// ============================================================================
// CANVAS SETTINGS
// ============================================================================
const CANVAS_WIDTH: f64 = 1200.0;
const CANVAS_HEIGHT: f64 = 600.0;

// Plot margins inside the canvas (pixels)
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 50.0;

// ============================================================================
// INTERACTION SETTINGS
// ============================================================================
/// Pointer distance (pixels) within which an anchor or handle is hit
const HIT_TOLERANCE: f64 = 8.0;

/// Vertical pointer distance (pixels) to the curve within which a click
/// inserts an anchor. Independent of `HIT_TOLERANCE`.
const CURVE_TOLERANCE: f64 = 8.0;

/// Visual length of a tangent handle (pixels)
const HANDLE_LENGTH: f64 = 40.0;

// ============================================================================
// ZOOM SETTINGS
// ============================================================================
/// Minimum horizontal zoom (10% of the fitted width)
const MIN_ZOOM: f64 = 0.1;

/// Maximum horizontal zoom (10x the fitted width)
const MAX_ZOOM: f64 = 10.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Sampling settings
pub mod curve {
    /// Samples per second
    pub const SAMPLE_RATE: f64 = super::SAMPLE_RATE;

    /// Slope clamp for tangent angles
    pub const SLOPE_LIMIT: f64 = super::SLOPE_LIMIT;
}

/// Default canvas and plot area
pub mod canvas {
    pub const WIDTH: f64 = super::CANVAS_WIDTH;
    pub const HEIGHT: f64 = super::CANVAS_HEIGHT;

    /// Plot margins (left, right, top, bottom)
    pub mod margin {
        pub const LEFT: f64 = super::super::MARGIN_LEFT;
        pub const RIGHT: f64 = super::super::MARGIN_RIGHT;
        pub const TOP: f64 = super::super::MARGIN_TOP;
        pub const BOTTOM: f64 = super::super::MARGIN_BOTTOM;
    }
}

/// Hit testing and anchor creation
pub mod interaction {
    pub const HIT_TOLERANCE: f64 = super::HIT_TOLERANCE;
    pub const CURVE_TOLERANCE: f64 = super::CURVE_TOLERANCE;
    pub const HANDLE_LENGTH: f64 = super::HANDLE_LENGTH;
}

/// Horizontal zoom limits
pub mod zoom {
    pub const MIN: f64 = super::MIN_ZOOM;
    pub const MAX: f64 = super::MAX_ZOOM;
}

// ============================================================================
// RUNTIME CONFIGURATION
// ============================================================================

/// Runtime-tunable editor values
///
/// Missing fields fall back to the compile-time defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pointer distance for anchor/handle hits (pixels)
    pub hit_tolerance: f64,
    /// Vertical distance to the curve for anchor insertion (pixels)
    pub curve_tolerance: f64,
    /// Tangent handle length (pixels)
    pub handle_length: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: HIT_TOLERANCE,
            curve_tolerance: CURVE_TOLERANCE,
            handle_length: HANDLE_LENGTH,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
        }
    }
}

impl EditorConfig {
    /// Load a config from a TOML file
    ///
    /// A missing or malformed file yields the defaults.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded editor config: {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Invalid editor config {}, using defaults: {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Could not read editor config {}, using defaults: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Write the config as pretty TOML
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved editor config: {}", path.display());
        Ok(())
    }
}
