// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Data model: anchors, the anchor store and curve parameters

pub mod anchor;
pub mod entity_id;
pub mod motion;
pub mod store;

pub use anchor::{Anchor, AnchorPatch, Side, clamp_time, clamp_value, sort_by_time};
pub use entity_id::AnchorId;
pub use motion::{CurveParams, Direction};
pub use store::AnchorStore;
