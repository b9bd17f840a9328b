// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Piecewise cubic Hermite sampling of an anchor set.
//!
//! The sample sequence is a pure function of (anchors, duration, sample
//! rate): same input, bit-identical output. It is recomputed on every change
//! and never edited by hand.
//!
//! Policy by anchor count:
//! - 0 anchors: constant zero
//! - 1 anchor: constant at that anchor's value
//! - 2+ anchors: Hermite segments between resolved anchors, a flat lead-in
//!   from `t = 0` to the first anchor and a flat tail after the last one.

use super::resolve::resolve;
use crate::model::{Anchor, clamp_value, sort_by_time};
use crate::settings;

/// Number of samples for a curve: `max(2, round(duration * rate))`
pub fn sample_count(duration: f64, sample_rate: f64) -> usize {
    let n = (duration * sample_rate).round();
    if n.is_finite() && n > 2.0 { n as usize } else { 2 }
}

/// Time of sample `index` in a sequence of `count` samples spanning
/// `[0, duration]`
pub fn sample_time(index: usize, count: usize, duration: f64) -> f64 {
    if count < 2 {
        return 0.0;
    }
    index as f64 / (count - 1) as f64 * duration
}

/// Slope (value per second) for a tangent angle, limited to avoid
/// near-vertical blow-up
pub fn angle_to_slope(angle: f64) -> f64 {
    let slope = angle.tan();
    if slope.is_nan() {
        return 0.0;
    }
    slope.clamp(-settings::curve::SLOPE_LIMIT, settings::curve::SLOPE_LIMIT)
}

/// Evaluate one cubic Hermite segment at time `t`
///
/// `m0`/`m1` are slopes in value per second; they are scaled by the segment
/// width. A zero-width segment returns `y0`.
pub fn hermite_segment(t0: f64, y0: f64, m0: f64, t1: f64, y1: f64, m1: f64, t: f64) -> f64 {
    let dt = t1 - t0;
    if dt == 0.0 {
        return y0;
    }
    let u = ((t - t0) / dt).clamp(0.0, 1.0);
    let u2 = u * u;
    let u3 = u2 * u;

    let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
    let h10 = u3 - 2.0 * u2 + u;
    let h01 = -2.0 * u3 + 3.0 * u2;
    let h11 = u3 - u2;
    h00 * y0 + h10 * m0 * dt + h01 * y1 + h11 * m1 * dt
}

/// A segment endpoint ready for evaluation
#[derive(Debug, Clone, Copy)]
struct Knot {
    x: f64,
    y: f64,
    slope_in: f64,
    slope_out: f64,
}

/// Build the knot list: resolved anchors plus the synthetic lead-in
fn build_knots(sorted: &[Anchor]) -> Vec<Knot> {
    let resolved = resolve(sorted);
    let mut knots: Vec<Knot> = Vec::with_capacity(resolved.len() + 1);

    let first = resolved[0];
    if first.x > 0.0 {
        knots.push(Knot {
            x: 0.0,
            y: first.y,
            slope_in: 0.0,
            slope_out: 0.0,
        });
    }

    for (i, anchor) in resolved.iter().enumerate() {
        // The first real anchor always approaches flat, so no inferred
        // slope reaches the time before it.
        let slope_in = if i == 0 {
            0.0
        } else {
            angle_to_slope(anchor.angle_in.unwrap_or(0.0))
        };
        knots.push(Knot {
            x: anchor.x,
            y: anchor.y,
            slope_in,
            slope_out: angle_to_slope(anchor.angle_out.unwrap_or(0.0)),
        });
    }
    knots
}

/// Discretize an anchor set into `sample_count(duration, sample_rate)` values
/// in `[-1, 1]`
///
/// Anchors may be passed in any order; they are sorted by (time, id).
pub fn sample_curve(anchors: &[Anchor], duration: f64, sample_rate: f64) -> Vec<f64> {
    let count = sample_count(duration, sample_rate);

    match anchors {
        [] => return vec![0.0; count],
        [only] => return vec![clamp_value(only.y); count],
        _ => {}
    }

    let mut sorted = anchors.to_vec();
    sort_by_time(&mut sorted);
    let knots = build_knots(&sorted);
    let last = knots[knots.len() - 1];

    (0..count)
        .map(|i| {
            let t = sample_time(i, count, duration);
            if t > last.x {
                return clamp_value(last.y);
            }
            let segment = knots
                .windows(2)
                .find(|pair| t >= pair[0].x && t <= pair[1].x);
            let y = match segment {
                Some(pair) => {
                    let (a, b) = (pair[0], pair[1]);
                    hermite_segment(a.x, a.y, a.slope_out, b.x, b.y, b.slope_in, t)
                }
                None => last.y,
            };
            clamp_value(y)
        })
        .collect()
}

/// Sample an anchor set at the system sample rate
pub fn sample(anchors: &[Anchor], duration: f64) -> Vec<f64> {
    sample_curve(anchors, duration, settings::curve::SAMPLE_RATE)
}

/// Value of a sample sequence at time `t`, linearly interpolated
///
/// `t` is clamped into `[0, duration]`; an empty sequence reads as zero.
pub fn value_at_time(samples: &[f64], t: f64, duration: f64) -> f64 {
    let n = samples.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 || duration <= 0.0 {
        return samples[0];
    }
    let pos = (t / duration).clamp(0.0, 1.0) * (n - 1) as f64;
    let i0 = (pos.floor() as usize).min(n - 1);
    let i1 = (i0 + 1).min(n - 1);
    let frac = (pos - i0 as f64).clamp(0.0, 1.0);
    clamp_value(samples[i0] + (samples[i1] - samples[i0]) * frac)
}
