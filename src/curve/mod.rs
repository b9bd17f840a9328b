// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve math: tangent resolution and Hermite sampling

pub mod resolve;
pub mod sampler;

pub use resolve::{ResolvedAnchor, effective_angle, effective_in, effective_out, resolve};
pub use sampler::{sample, sample_count, sample_curve, sample_time, value_at_time};
