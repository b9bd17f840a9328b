// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing payload files

use super::preset::{AnchorPreset, BakedMotion};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load and validate an anchor preset from a JSON file
pub fn load_preset(path: &Path) -> Result<AnchorPreset> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset {}", path.display()))?;
    let preset: AnchorPreset = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse preset {}", path.display()))?;
    preset
        .validate()
        .with_context(|| format!("Invalid preset {}", path.display()))?;
    tracing::info!(
        "Loaded preset '{}' ({} anchors, {:.2}s)",
        preset.name,
        preset.parameters.anchors.len(),
        preset.parameters.duration
    );
    Ok(preset)
}

/// Load and validate a baked motion from a JSON file
pub fn load_baked(path: &Path) -> Result<BakedMotion> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read motion {}", path.display()))?;
    let baked: BakedMotion = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse motion {}", path.display()))?;
    baked
        .validate()
        .with_context(|| format!("Invalid motion {}", path.display()))?;
    Ok(baked)
}

/// Write any payload as pretty JSON
pub fn save_json<T: Serialize>(path: &Path, payload: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(payload).context("Failed to serialize payload")?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Saved {}", path.display());
    Ok(())
}
