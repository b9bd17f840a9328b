// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for anchors.
//!
//! Each `AnchorId` is a monotonically increasing `u64` generated from a global
//! atomic counter. IDs are the only stable identity of an anchor: its time may
//! collide with another anchor or change during a drag, and its position in
//! the sorted view changes whenever it crosses a neighbour. IDs are never
//! reused within a process, so a deleted anchor leaves no dangling reference.
//!
//! The derived `Ord` is the tie-break used when two anchors share a time.
//!
//! On the wire an id is written as its display string (`a_7`); ids are never
//! read back, loaded anchors always get fresh ones.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnchorId(u64);

static ANCHOR_COUNTER: AtomicU64 = AtomicU64::new(1);

impl AnchorId {
    /// Create a new unique anchor ID
    pub fn next() -> Self {
        Self(ANCHOR_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AnchorId {
    fn default() -> Self {
        Self::next()
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a_{}", self.0)
    }
}

impl Serialize for AnchorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
