// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Anchor and handle geometry in canvas pixels.
//!
//! This is the single source of truth for where anchors and tangent
//! handles appear. Hit testing and the rendering collaborator both consume
//! [`layout_anchors`], so what is drawn and what is clickable cannot drift
//! apart.

use super::viewport::ViewPort;
use crate::curve::resolve::effective_angle;
use crate::model::{Anchor, AnchorId, Side};
use kurbo::{Point, Vec2};

/// Which handles an anchor shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleVisibility {
    pub show_in: bool,
    pub show_out: bool,
}

impl HandleVisibility {
    pub fn shows(&self, side: Side) -> bool {
        match side {
            Side::In => self.show_in,
            Side::Out => self.show_out,
        }
    }
}

/// Handle visibility for the anchor at `index` among `count` sorted anchors
///
/// - 1 anchor: no handles
/// - 2 anchors: the earlier shows only its out-handle, the later only its
///   in-handle
/// - 3+ anchors: both handles, except no in-handle on the first and no
///   out-handle on the last
pub fn handle_visibility(index: usize, count: usize) -> HandleVisibility {
    match count {
        0 | 1 => HandleVisibility {
            show_in: false,
            show_out: false,
        },
        2 => HandleVisibility {
            show_in: index == 1,
            show_out: index == 0,
        },
        _ => HandleVisibility {
            show_in: index > 0,
            show_out: index + 1 < count,
        },
    }
}

/// Unit direction from an anchor towards its handle endpoint, in canvas
/// pixels (y down)
///
/// The out-handle points along the tangent, the in-handle against it.
pub fn handle_direction(angle: f64, side: Side) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    match side {
        Side::Out => Vec2::new(cos, -sin),
        Side::In => Vec2::new(-cos, sin),
    }
}

/// Endpoint of a handle drawn from `anchor_pos`
pub fn handle_endpoint(anchor_pos: Point, angle: f64, side: Side, length: f64) -> Point {
    anchor_pos + handle_direction(angle, side) * length
}

/// Tangent angle that puts a handle's endpoint in the direction of `pointer`
///
/// Inverse of [`handle_endpoint`]: dropping a handle exactly on its own
/// endpoint leaves the angle unchanged.
pub fn angle_towards(anchor_pos: Point, pointer: Point, side: Side) -> f64 {
    let dx = pointer.x - anchor_pos.x;
    let dy = anchor_pos.y - pointer.y;
    match side {
        Side::Out => dy.atan2(dx),
        Side::In => (-dy).atan2(-dx),
    }
}

/// A visible tangent handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGeometry {
    pub side: Side,
    /// Resolved angle in radians
    pub angle: f64,
    pub endpoint: Point,
    /// `false` when the angle is inferred (drawn dashed by renderers)
    pub explicit: bool,
}

/// Canvas geometry of one anchor and its visible handles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorGeometry {
    pub id: AnchorId,
    /// Index in the time-sorted anchor list
    pub index: usize,
    pub position: Point,
    pub in_handle: Option<HandleGeometry>,
    pub out_handle: Option<HandleGeometry>,
}

impl AnchorGeometry {
    pub fn handle(&self, side: Side) -> Option<&HandleGeometry> {
        match side {
            Side::In => self.in_handle.as_ref(),
            Side::Out => self.out_handle.as_ref(),
        }
    }
}

/// Lay out every anchor of a time-sorted list on the canvas
pub fn layout_anchors(
    sorted: &[Anchor],
    viewport: &ViewPort,
    handle_length: f64,
) -> Vec<AnchorGeometry> {
    let count = sorted.len();
    sorted
        .iter()
        .enumerate()
        .map(|(index, anchor)| {
            let position = viewport.to_screen(anchor.x, anchor.y);
            let visibility = handle_visibility(index, count);
            let handle = |side: Side| -> Option<HandleGeometry> {
                if !visibility.shows(side) {
                    return None;
                }
                let angle = effective_angle(sorted, index, side)?;
                Some(HandleGeometry {
                    side,
                    angle,
                    endpoint: handle_endpoint(position, angle, side, handle_length),
                    explicit: anchor.angle(side).is_some(),
                })
            };
            AnchorGeometry {
                id: anchor.id,
                index,
                position,
                in_handle: handle(Side::In),
                out_handle: handle(Side::Out),
            }
        })
        .collect()
}
