// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! View transform between curve space (seconds, value) and canvas pixels.
//!
//! The plot rectangle is fitted to the duration at zoom 1. Zoom stretches
//! time horizontally, and `offset_x` pans the stretched content. The
//! offset is always clamped so the visible window stays inside the content.
//! Values map to the full plot height, `+1` at the top and `-1` at the
//! bottom.

use crate::settings;
use kurbo::{Point, Rect};

/// Plot geometry and pan/zoom state
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPort {
    /// Plot area in canvas pixels
    pub plot: Rect,
    /// Curve duration in seconds
    duration: f64,
    /// Horizontal zoom factor
    zoom: f64,
    /// Horizontal pan in pixels, always in `[min_offset, 0]`
    offset_x: f64,
}

impl ViewPort {
    /// Create a viewport for a canvas of the given size
    ///
    /// The plot area is the canvas minus the standard margins.
    pub fn for_canvas(width: f64, height: f64, duration: f64) -> Self {
        use settings::canvas::margin;
        let x1 = (width - margin::RIGHT).max(margin::LEFT + 1.0);
        let y1 = (height - margin::BOTTOM).max(margin::TOP + 1.0);
        Self::new(Rect::new(margin::LEFT, margin::TOP, x1, y1), duration)
    }

    /// Create a viewport with an explicit plot rectangle
    pub fn new(plot: Rect, duration: f64) -> Self {
        Self {
            plot,
            duration,
            zoom: 1.0,
            offset_x: 0.0,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Horizontal scale in pixels per second
    pub fn pixels_per_second(&self) -> f64 {
        if self.duration <= 0.0 {
            return self.plot.width() * self.zoom;
        }
        self.plot.width() * self.zoom / self.duration
    }

    /// Vertical scale in pixels per value unit
    pub fn y_scale(&self) -> f64 {
        self.plot.height() / 2.0
    }

    /// Canvas y of value 0
    pub fn center_y(&self) -> f64 {
        self.plot.y0 + self.plot.height() / 2.0
    }

    /// Canvas x for a time
    pub fn time_to_x(&self, t: f64) -> f64 {
        self.plot.x0 + t * self.pixels_per_second() + self.offset_x
    }

    /// Canvas y for a value
    pub fn value_to_y(&self, v: f64) -> f64 {
        self.center_y() - v * self.y_scale()
    }

    /// Canvas position of a curve point
    pub fn to_screen(&self, t: f64, v: f64) -> Point {
        Point::new(self.time_to_x(t), self.value_to_y(v))
    }

    /// Time under a canvas x (unclamped)
    pub fn x_to_time(&self, x: f64) -> f64 {
        (x - self.plot.x0 - self.offset_x) / self.pixels_per_second()
    }

    /// Value under a canvas y (unclamped)
    pub fn y_to_value(&self, y: f64) -> f64 {
        (self.center_y() - y) / self.y_scale()
    }

    /// Curve point `(time, value)` under a canvas position (unclamped)
    pub fn screen_to_curve(&self, pos: Point) -> (f64, f64) {
        (self.x_to_time(pos.x), self.y_to_value(pos.y))
    }

    /// Whether a canvas position lies inside the plot area (edges included)
    pub fn contains(&self, pos: Point) -> bool {
        pos.x >= self.plot.x0 && pos.x <= self.plot.x1 && pos.y >= self.plot.y0 && pos.y <= self.plot.y1
    }

    /// Width of the whole curve in pixels at the current zoom
    pub fn content_width(&self) -> f64 {
        self.duration.max(0.0) * self.pixels_per_second()
    }

    /// Most negative pan offset allowed
    fn min_offset(&self) -> f64 {
        (self.plot.width() - self.content_width()).min(0.0)
    }

    /// Pan by a horizontal pixel delta, clamped to the content extent
    pub fn pan(&mut self, dx: f64) {
        let target = self.offset_x + dx;
        self.offset_x = if target.is_nan() {
            0.0
        } else {
            target.clamp(self.min_offset(), 0.0)
        };
    }

    /// Set the horizontal zoom (clamped) and re-clamp the pan offset
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = if zoom.is_nan() {
            1.0
        } else {
            zoom.clamp(settings::zoom::MIN, settings::zoom::MAX)
        };
        self.pan(0.0);
    }

    /// Change the duration and re-clamp the pan offset
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
        self.pan(0.0);
    }

    /// Back to zoom 1 with no pan
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.offset_x = 0.0;
    }
}

/// Map the editor's 0..=100 zoom slider onto a zoom factor
///
/// The scale is logarithmic: 0 → 0.1, 50 → 1, 100 → 10.
pub fn zoom_from_slider(value: u8) -> f64 {
    let value = f64::from(value.min(100));
    let midpoint = 50.0;
    if value < midpoint {
        0.1 * 10f64.powf(value / midpoint)
    } else {
        10f64.powf((value - midpoint) / (100.0 - midpoint))
    }
}
