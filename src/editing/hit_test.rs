// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing of anchors and tangent handles

use super::geometry::AnchorGeometry;
use crate::model::{AnchorId, Side};
use kurbo::Point;

/// What part of an anchor was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The anchor body
    Anchor,
    /// One of its tangent handles
    Handle(Side),
}

/// Result of a hit test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestResult {
    pub id: AnchorId,
    pub target: HitTarget,
    /// Pointer distance in pixels
    pub distance: f64,
}

/// Find what is under the pointer
///
/// Anchor bodies take priority over handles: the nearest anchor within
/// `tolerance` wins, ties going to the earlier anchor in time order. Only
/// when no anchor is hit are handles checked, in time order with the
/// in-handle before the out-handle; the first one within tolerance wins.
pub fn hit_test(layout: &[AnchorGeometry], pos: Point, tolerance: f64) -> Option<HitTestResult> {
    let mut best: Option<HitTestResult> = None;
    for geometry in layout {
        let distance = geometry.position.distance(pos);
        if distance <= tolerance && best.is_none_or(|b| distance < b.distance) {
            best = Some(HitTestResult {
                id: geometry.id,
                target: HitTarget::Anchor,
                distance,
            });
        }
    }
    if best.is_some() {
        return best;
    }

    layout.iter().find_map(|geometry| {
        [geometry.in_handle, geometry.out_handle]
            .into_iter()
            .flatten()
            .find_map(|handle| {
                let distance = handle.endpoint.distance(pos);
                (distance <= tolerance).then_some(HitTestResult {
                    id: geometry.id,
                    target: HitTarget::Handle(handle.side),
                    distance,
                })
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::geometry::layout_anchors;
    use crate::editing::viewport::ViewPort;
    use crate::model::Anchor;

    fn viewport() -> ViewPort {
        ViewPort::for_canvas(1200.0, 600.0, 1.0)
    }

    #[test]
    fn exact_anchor_position_hits_anchor() {
        let anchors = vec![Anchor::new(0.0, 0.0), Anchor::new(1.0, 0.0)];
        let vp = viewport();
        let layout = layout_anchors(&anchors, &vp, 40.0);
        let hit = hit_test(&layout, layout[1].position, 8.0).unwrap();
        assert_eq!(hit.id, anchors[1].id);
        assert_eq!(hit.target, HitTarget::Anchor);
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn anchor_wins_over_coincident_handle() {
        // A zero-length handle puts the handle endpoint on the anchor itself
        let anchors = vec![Anchor::new(0.0, 0.0), Anchor::new(1.0, 0.5)];
        let layout = layout_anchors(&anchors, &viewport(), 0.0);
        let hit = hit_test(&layout, layout[0].position, 8.0).unwrap();
        assert_eq!(hit.target, HitTarget::Anchor);
    }

    #[test]
    fn handle_endpoint_is_hit() {
        let anchors = vec![Anchor::new(0.0, 0.0), Anchor::new(1.0, 0.0)];
        let layout = layout_anchors(&anchors, &viewport(), 40.0);
        let out = layout[0].out_handle.unwrap().endpoint;
        let hit = hit_test(&layout, out + kurbo::Vec2::new(3.0, 3.0), 8.0).unwrap();
        assert_eq!(hit.id, anchors[0].id);
        assert_eq!(hit.target, HitTarget::Handle(Side::Out));

        let inh = layout[1].in_handle.unwrap().endpoint;
        let hit = hit_test(&layout, inh, 8.0).unwrap();
        assert_eq!(hit.id, anchors[1].id);
        assert_eq!(hit.target, HitTarget::Handle(Side::In));
    }

    #[test]
    fn overlapping_handles_prefer_earlier_anchor() {
        // 80 px apart: the first out-handle and the second in-handle both
        // end at x=100
        let anchors = vec![Anchor::new(0.0, 0.0), Anchor::new(80.0 / 1120.0, 0.0)];
        let layout = layout_anchors(&anchors, &viewport(), 40.0);
        let out = layout[0].out_handle.unwrap().endpoint;
        let inh = layout[1].in_handle.unwrap().endpoint;
        assert!(out.distance(inh) < 1e-9);

        let hit = hit_test(&layout, out, 8.0).unwrap();
        assert_eq!(hit.id, anchors[0].id);
        assert_eq!(hit.target, HitTarget::Handle(Side::Out));
    }

    #[test]
    fn hidden_handles_are_not_hit() {
        // With two anchors the first has no in-handle; its would-be
        // endpoint is 40 px to the left of it.
        let anchors = vec![Anchor::new(0.5, 0.0), Anchor::new(1.0, 0.0)];
        let layout = layout_anchors(&anchors, &viewport(), 40.0);
        let would_be = layout[0].position - kurbo::Vec2::new(40.0, 0.0);
        assert!(hit_test(&layout, would_be, 8.0).is_none());
    }

    #[test]
    fn nearest_anchor_wins() {
        let anchors = vec![Anchor::new(0.0, 0.0), Anchor::new(0.005, 0.0)];
        let layout = layout_anchors(&anchors, &viewport(), 40.0);
        // The anchors are 5.6 px apart; aim right next to the second
        let pos = layout[1].position + kurbo::Vec2::new(1.0, 0.0);
        let hit = hit_test(&layout, pos, 8.0).unwrap();
        assert_eq!(hit.id, anchors[1].id);
    }

    #[test]
    fn miss_returns_none() {
        let anchors = vec![Anchor::new(0.0, 0.0), Anchor::new(1.0, 0.0)];
        let layout = layout_anchors(&anchors, &viewport(), 40.0);
        assert!(hit_test(&layout, kurbo::Point::new(600.0, 100.0), 8.0).is_none());
        assert!(hit_test(&[], kurbo::Point::new(600.0, 100.0), 8.0).is_none());
    }
}
