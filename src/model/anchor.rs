// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Anchor points and partial anchor updates

use super::AnchorId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Lowest and highest normalized waveform value
pub const VALUE_MIN: f64 = -1.0;
pub const VALUE_MAX: f64 = 1.0;

/// Which tangent of an anchor a handle controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Incoming tangent (towards the previous anchor in time)
    In,
    /// Outgoing tangent (towards the next anchor in time)
    Out,
}

impl Side {
    /// The other tangent of the same anchor
    pub fn opposite(self) -> Self {
        match self {
            Side::In => Side::Out,
            Side::Out => Side::In,
        }
    }
}

/// A user-placed control point of the waveform
///
/// `angle_in`/`angle_out` of `None` means "straight line to the neighbouring
/// anchor in time order"; `Some` is an explicit override in radians.
///
/// The id is skipped when deserializing so anchors loaded from a preset
/// always receive fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anchor {
    #[serde(skip_deserializing)]
    pub id: AnchorId,
    /// Time in seconds
    pub x: f64,
    /// Normalized value in [-1, 1]
    pub y: f64,
    pub angle_in: Option<f64>,
    pub angle_out: Option<f64>,
}

impl Anchor {
    /// Create an anchor with inferred tangents
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            id: AnchorId::next(),
            x,
            y,
            angle_in: None,
            angle_out: None,
        }
    }

    /// Create an anchor with explicit tangent angles
    pub fn with_angles(x: f64, y: f64, angle_in: Option<f64>, angle_out: Option<f64>) -> Self {
        Self {
            angle_in,
            angle_out,
            ..Self::new(x, y)
        }
    }

    /// Stored angle for one side (`None` = inferred)
    pub fn angle(&self, side: Side) -> Option<f64> {
        match side {
            Side::In => self.angle_in,
            Side::Out => self.angle_out,
        }
    }

    /// Set the stored angle for one side
    pub fn set_angle(&mut self, side: Side, angle: Option<f64>) {
        match side {
            Side::In => self.angle_in = angle,
            Side::Out => self.angle_out = angle,
        }
    }

    /// Ordering used by every algorithm: time first, then id
    pub fn time_order(a: &Anchor, b: &Anchor) -> Ordering {
        a.x.total_cmp(&b.x).then_with(|| a.id.cmp(&b.id))
    }

    /// Whether every coordinate and explicit angle is a finite number
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.angle_in.is_none_or(f64::is_finite)
            && self.angle_out.is_none_or(f64::is_finite)
    }
}

/// Sort anchors by (time, id)
pub fn sort_by_time(anchors: &mut [Anchor]) {
    anchors.sort_by(Anchor::time_order);
}

/// Clamp a time into `[0, duration]`
pub fn clamp_time(x: f64, duration: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, duration.max(0.0))
}

/// Clamp a value into `[-1, 1]`
pub fn clamp_value(y: f64) -> f64 {
    if y.is_nan() {
        return 0.0;
    }
    y.clamp(VALUE_MIN, VALUE_MAX)
}

/// Partial update of an anchor
///
/// Each field left as `None` is untouched. The angle fields are doubly
/// optional: `Some(None)` resets that side to the inferred straight line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub angle_in: Option<Option<f64>>,
    pub angle_out: Option<Option<f64>>,
}

impl AnchorPatch {
    /// Patch that moves an anchor
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch that sets one tangent
    pub fn angle(side: Side, angle: Option<f64>) -> Self {
        match side {
            Side::In => Self {
                angle_in: Some(angle),
                ..Self::default()
            },
            Side::Out => Self {
                angle_out: Some(angle),
                ..Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_order_breaks_ties_by_id() {
        let a = Anchor::new(0.5, 0.0);
        let b = Anchor::new(0.5, 1.0);
        assert_eq!(Anchor::time_order(&a, &b), Ordering::Less);
        assert_eq!(Anchor::time_order(&b, &a), Ordering::Greater);

        let early = Anchor::new(0.1, 0.0);
        assert_eq!(Anchor::time_order(&early, &a), Ordering::Less);
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_time(-1.0, 2.0), 0.0);
        assert_eq!(clamp_time(3.0, 2.0), 2.0);
        assert_eq!(clamp_time(f64::NAN, 2.0), 0.0);
        assert_eq!(clamp_value(1.5), 1.0);
        assert_eq!(clamp_value(-7.0), -1.0);
        assert_eq!(clamp_value(0.25), 0.25);
    }

    #[test]
    fn set_angle_targets_one_side() {
        let mut a = Anchor::new(0.0, 0.0);
        a.set_angle(Side::Out, Some(0.3));
        assert_eq!(a.angle(Side::Out), Some(0.3));
        assert_eq!(a.angle(Side::In), None);
        assert_eq!(Side::In.opposite(), Side::Out);
    }

    #[test]
    fn deserialized_anchor_gets_fresh_id() {
        let json = r#"{"x":0.5,"y":0.25,"angleIn":null,"angleOut":0.1}"#;
        let a: Anchor = serde_json::from_str(json).unwrap();
        let b: Anchor = serde_json::from_str(json).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.angle_out, Some(0.1));
        assert_eq!(a.angle_in, None);
    }

    #[test]
    fn non_finite_anchor_is_detected() {
        assert!(Anchor::new(0.0, 0.0).is_finite());
        assert!(!Anchor::with_angles(0.0, 0.0, Some(f64::NAN), None).is_finite());
        assert!(!Anchor::new(f64::INFINITY, 0.0).is_finite());
    }
}
