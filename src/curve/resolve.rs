// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Effective tangent angles for sorted anchors.
//!
//! An explicit angle is used as is; a missing one is the straight-line
//! angle to the neighbour in time order. The first anchor has no incoming
//! tangent and the last has no outgoing one. Nothing here is cached: callers
//! resolve from the current sorted list every time they need angles.

use crate::model::{Anchor, AnchorId, Side};

/// An anchor with its tangent angles resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAnchor {
    pub id: AnchorId,
    pub x: f64,
    pub y: f64,
    /// `None` only for the first anchor
    pub angle_in: Option<f64>,
    /// `None` only for the last anchor
    pub angle_out: Option<f64>,
}

impl ResolvedAnchor {
    pub fn angle(&self, side: Side) -> Option<f64> {
        match side {
            Side::In => self.angle_in,
            Side::Out => self.angle_out,
        }
    }
}

/// Straight-line angle from one anchor to another in (seconds, value) space
///
/// Coincident times give a flat angle.
pub fn straight_angle(from: &Anchor, to: &Anchor) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 { 0.0 } else { dy.atan2(dx) }
}

/// Effective incoming angle of the anchor at `index` in a sorted list
pub fn effective_in(sorted: &[Anchor], index: usize) -> Option<f64> {
    if index == 0 || index >= sorted.len() {
        return None;
    }
    let anchor = &sorted[index];
    Some(
        anchor
            .angle_in
            .unwrap_or_else(|| straight_angle(&sorted[index - 1], anchor)),
    )
}

/// Effective outgoing angle of the anchor at `index` in a sorted list
pub fn effective_out(sorted: &[Anchor], index: usize) -> Option<f64> {
    if index + 1 >= sorted.len() {
        return None;
    }
    let anchor = &sorted[index];
    Some(
        anchor
            .angle_out
            .unwrap_or_else(|| straight_angle(anchor, &sorted[index + 1])),
    )
}

/// Effective angle for one side
pub fn effective_angle(sorted: &[Anchor], index: usize, side: Side) -> Option<f64> {
    match side {
        Side::In => effective_in(sorted, index),
        Side::Out => effective_out(sorted, index),
    }
}

/// Resolve every anchor of a sorted list
pub fn resolve(sorted: &[Anchor]) -> Vec<ResolvedAnchor> {
    sorted
        .iter()
        .enumerate()
        .map(|(i, a)| ResolvedAnchor {
            id: a.id,
            x: a.x,
            y: a.y,
            angle_in: effective_in(sorted, i),
            angle_out: effective_out(sorted, i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn boundaries_have_no_outer_tangent() {
        let sorted = vec![Anchor::new(0.0, 0.0), Anchor::new(1.0, 1.0)];
        let resolved = resolve(&sorted);
        assert_eq!(resolved[0].angle_in, None);
        assert_eq!(resolved[1].angle_out, None);
        assert_relative_eq!(resolved[0].angle_out.unwrap(), FRAC_PI_4);
        assert_relative_eq!(resolved[1].angle_in.unwrap(), FRAC_PI_4);
    }

    #[test]
    fn single_anchor_has_no_tangents() {
        let sorted = vec![Anchor::new(0.5, 0.5)];
        let resolved = resolve(&sorted);
        assert_eq!(resolved[0].angle_in, None);
        assert_eq!(resolved[0].angle_out, None);
    }

    #[test]
    fn explicit_angles_win() {
        let sorted = vec![
            Anchor::new(0.0, 0.0),
            Anchor::with_angles(0.5, 0.5, Some(0.1), Some(-0.2)),
            Anchor::new(1.0, 0.0),
        ];
        assert_eq!(effective_in(&sorted, 1), Some(0.1));
        assert_eq!(effective_out(&sorted, 1), Some(-0.2));
    }

    #[test]
    fn coincident_times_infer_flat() {
        let sorted = vec![Anchor::new(0.5, 0.0), Anchor::new(0.5, 1.0)];
        assert_eq!(effective_out(&sorted, 0), Some(0.0));
        assert_eq!(effective_in(&sorted, 1), Some(0.0));
    }

    #[test]
    fn downward_segment_has_negative_angle() {
        let sorted = vec![Anchor::new(0.0, 1.0), Anchor::new(2.0, -1.0)];
        assert_relative_eq!(effective_out(&sorted, 0).unwrap(), -FRAC_PI_4);
    }

    #[test]
    fn out_of_range_index_is_none() {
        let sorted = vec![Anchor::new(0.0, 0.0)];
        assert_eq!(effective_in(&sorted, 3), None);
        assert_eq!(effective_out(&sorted, 3), None);
        assert_eq!(effective_in(&[], 0), None);
    }
}
