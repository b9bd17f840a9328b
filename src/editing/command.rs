// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Explicit edit commands applied to an [`AnchorStore`]
//!
//! Every mutation the interaction controller performs goes through one of
//! these, so edits can be replayed and tested without any pointer input.

use crate::model::{AnchorId, AnchorPatch, AnchorStore, Side};

/// A single mutation of the anchor set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditCommand {
    /// Add an anchor with inferred tangents
    AddAnchor { x: f64, y: f64 },
    /// Move an anchor (clamped into range)
    MoveAnchor { id: AnchorId, x: f64, y: f64 },
    /// Set one tangent; `None` reverts it to the inferred straight line
    SetAngle {
        id: AnchorId,
        side: Side,
        value: Option<f64>,
    },
    /// Delete an anchor
    RemoveAnchor { id: AnchorId },
}

/// Outcome of applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// A new anchor was created
    Added(AnchorId),
    /// An existing anchor was changed or removed
    Changed,
    /// The target anchor does not exist; nothing happened
    Unchanged,
}

impl Applied {
    pub fn is_change(&self) -> bool {
        !matches!(self, Applied::Unchanged)
    }
}

impl AnchorStore {
    /// Apply an edit command
    ///
    /// Commands naming an unknown anchor are ignored.
    pub fn apply(&mut self, command: EditCommand) -> Applied {
        let applied = match command {
            EditCommand::AddAnchor { x, y } => Applied::Added(self.add(x, y)),
            EditCommand::MoveAnchor { id, x, y } => {
                changed(self.update(id, AnchorPatch::position(x, y)))
            }
            EditCommand::SetAngle { id, side, value } => {
                changed(self.update(id, AnchorPatch::angle(side, value)))
            }
            EditCommand::RemoveAnchor { id } => changed(self.remove(id).is_some()),
        };
        if applied == Applied::Unchanged {
            tracing::debug!("[AnchorStore::apply] ignored {:?}", command);
        }
        applied
    }
}

fn changed(hit: bool) -> Applied {
    if hit { Applied::Changed } else { Applied::Unchanged }
}
