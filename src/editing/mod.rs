// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod command;
pub mod geometry;
pub mod hit_test;
pub mod mouse;
pub mod session;
pub mod viewport;

pub use command::{Applied, EditCommand};
pub use geometry::{AnchorGeometry, HandleGeometry, HandleVisibility, handle_visibility, layout_anchors};
pub use hit_test::{HitTarget, HitTestResult, hit_test};
pub use mouse::{Modifiers, MouseButton, MouseEvent};
pub use session::{CurveSession, InteractionState};
pub use viewport::{ViewPort, zoom_from_slider};
