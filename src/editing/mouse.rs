// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event types delivered to the editing session
//!
//! Positions are in canvas pixels (origin top-left, y down). Translating
//! device coordinates into the canvas is the host's job.

use kurbo::Point;

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Keyboard modifiers held during a pointer event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false };

    pub const SHIFT: Modifiers = Modifiers { shift: true };
}

/// A pointer event in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub pos: Point,
    pub button: Option<MouseButton>,
    pub mods: Modifiers,
}

impl MouseEvent {
    pub fn new(pos: Point, button: Option<MouseButton>) -> Self {
        Self::with_modifiers(pos, button, Modifiers::NONE)
    }

    pub fn with_modifiers(pos: Point, button: Option<MouseButton>, mods: Modifiers) -> Self {
        Self { pos, button, mods }
    }

    /// Whether the "independent handle edit" modifier is held
    ///
    /// Shift unlocks a handle from its partner on the same anchor.
    pub fn independent_edit(&self) -> bool {
        self.mods.shift
    }
}
