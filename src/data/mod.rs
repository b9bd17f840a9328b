// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Persistence payloads and file I/O

pub mod file_io;
pub mod preset;

pub use file_io::{load_baked, load_preset, save_json};
pub use preset::{AnchorPreset, BakedMotion, BakedParameters, PayloadKind, PresetParameters};
