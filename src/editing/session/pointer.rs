// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer handling for CurveSession
//!
//! Each handler runs to completion and returns the edit commands it
//! applied to the store, in order.

use super::{CurveSession, InteractionState};
use crate::curve::value_at_time;
use crate::editing::command::{Applied, EditCommand};
use crate::editing::geometry::angle_towards;
use crate::editing::hit_test::{HitTarget, hit_test};
use crate::editing::mouse::{MouseButton, MouseEvent};
use crate::model::{Side, clamp_time, clamp_value};
use kurbo::Point;

impl CurveSession {
    // ===== Pointer Down =====

    /// Start a gesture
    ///
    /// A secondary click is routed to [`CurveSession::context_menu`].
    /// Otherwise a hit grabs the anchor or handle, a click on (or near)
    /// the curve inside the plot creates an anchor with flat tangents and
    /// grabs it, and anything else starts panning.
    pub fn pointer_down(&mut self, event: MouseEvent) -> Vec<EditCommand> {
        if event.button == Some(MouseButton::Right) {
            return self.context_menu(event);
        }

        self.drag_x = event.pos.x;
        let layout = self.layout();
        if let Some(hit) = hit_test(&layout, event.pos, self.config.hit_tolerance) {
            self.state = match hit.target {
                HitTarget::Anchor => InteractionState::DraggingAnchor { id: hit.id },
                HitTarget::Handle(side) => InteractionState::DraggingHandle { id: hit.id, side },
            };
            self.selected = Some(hit.id);
            tracing::debug!(
                "[CurveSession::pointer_down] hit {:?} of {} at {:?}",
                hit.target,
                hit.id,
                event.pos
            );
            return Vec::new();
        }

        if self.viewport.contains(event.pos)
            && let Some(y) = self.creation_value(event.pos)
        {
            let x = clamp_time(self.viewport.x_to_time(event.pos.x), self.params.duration);
            let add = EditCommand::AddAnchor { x, y };
            if let Applied::Added(id) = self.store.apply(add) {
                // Clicked anchors start with flat tangents on both sides
                let mut applied = vec![add];
                for side in [Side::In, Side::Out] {
                    let flat = EditCommand::SetAngle {
                        id,
                        side,
                        value: Some(0.0),
                    };
                    self.store.apply(flat);
                    applied.push(flat);
                }
                self.state = InteractionState::DraggingAnchor { id };
                self.selected = Some(id);
                tracing::debug!(
                    "[CurveSession::pointer_down] created {} at x={:.3}, y={:.3}",
                    id,
                    x,
                    y
                );
                return applied;
            }
        }

        self.state = InteractionState::Panning;
        tracing::debug!("[CurveSession::pointer_down] panning from x={:.1}", event.pos.x);
        Vec::new()
    }

    /// Value for a new anchor under the pointer, or `None` if the click
    /// should not create one
    ///
    /// With fewer than two anchors any click creates one at the pointer
    /// value. Otherwise the click must land within the curve tolerance of
    /// the sampled curve, and the anchor is placed on the curve.
    fn creation_value(&self, pos: Point) -> Option<f64> {
        let sorted = self.store.list();
        let last = match sorted.as_slice() {
            [] | [_] => return Some(clamp_value(self.viewport.y_to_value(pos.y))),
            [.., last] => *last,
        };

        let duration = self.params.duration;
        let t = clamp_time(self.viewport.x_to_time(pos.x), duration);
        let y_at = if t <= last.x {
            value_at_time(&self.samples(), t, duration)
        } else {
            clamp_value(last.y)
        };

        let distance = (pos.y - self.viewport.value_to_y(y_at)).abs();
        (distance <= self.config.curve_tolerance).then_some(y_at)
    }

    // ===== Pointer Move =====

    /// Continue the current gesture
    pub fn pointer_move(&mut self, event: MouseEvent) -> Vec<EditCommand> {
        match self.state {
            InteractionState::Idle => Vec::new(),
            InteractionState::Panning => {
                let dx = event.pos.x - self.drag_x;
                self.drag_x = event.pos.x;
                self.viewport.pan(dx);
                Vec::new()
            }
            InteractionState::DraggingAnchor { id } => {
                let (x, y) = self.viewport.screen_to_curve(event.pos);
                let command = EditCommand::MoveAnchor { id, x, y };
                self.apply_drag(vec![command])
            }
            InteractionState::DraggingHandle { id, side } => {
                let Some(anchor) = self.store.get(id) else {
                    return self.abandon_drag();
                };
                let anchor_pos = self.viewport.to_screen(anchor.x, anchor.y);
                if anchor_pos.distance(event.pos) <= f64::EPSILON {
                    return Vec::new();
                }
                let angle = angle_towards(anchor_pos, event.pos, side);
                let set = |side: Side| EditCommand::SetAngle {
                    id,
                    side,
                    value: Some(angle),
                };
                let commands = if event.independent_edit() {
                    vec![set(side)]
                } else {
                    vec![set(side), set(side.opposite())]
                };
                self.apply_drag(commands)
            }
        }
    }

    /// Apply drag commands, dropping back to idle if the target vanished
    fn apply_drag(&mut self, commands: Vec<EditCommand>) -> Vec<EditCommand> {
        let mut applied = Vec::with_capacity(commands.len());
        for command in commands {
            if !self.store.apply(command).is_change() {
                self.abandon_drag();
                return applied;
            }
            applied.push(command);
        }
        applied
    }

    fn abandon_drag(&mut self) -> Vec<EditCommand> {
        tracing::warn!(
            "[CurveSession::pointer_move] drag target of {:?} is gone, returning to idle",
            self.state
        );
        self.state = InteractionState::Idle;
        Vec::new()
    }

    // ===== Pointer Up / Leave =====

    /// End the current gesture; partial edits are kept
    pub fn pointer_up(&mut self, _event: MouseEvent) {
        self.end_gesture();
    }

    /// The pointer left the surface; same as releasing it
    pub fn pointer_leave(&mut self) {
        self.end_gesture();
    }

    fn end_gesture(&mut self) {
        if self.state.is_dragging() {
            tracing::debug!("[CurveSession::end_gesture] {:?} -> Idle", self.state);
        }
        self.state = InteractionState::Idle;
    }

    // ===== Context Menu =====

    /// Secondary click: delete an anchor, or revert a handle to the
    /// inferred straight line
    ///
    /// Handles on the forced-flat boundary sides (the first anchor's
    /// in-side, the last anchor's out-side) are left alone.
    pub fn context_menu(&mut self, event: MouseEvent) -> Vec<EditCommand> {
        let layout = self.layout();
        let Some(hit) = hit_test(&layout, event.pos, self.config.hit_tolerance) else {
            return Vec::new();
        };

        let command = match hit.target {
            HitTarget::Anchor => {
                self.state = InteractionState::Idle;
                EditCommand::RemoveAnchor { id: hit.id }
            }
            HitTarget::Handle(side) => {
                let count = layout.len();
                let Some(index) = layout.iter().find(|g| g.id == hit.id).map(|g| g.index) else {
                    return Vec::new();
                };
                let eligible = match side {
                    Side::In => index > 0,
                    Side::Out => index + 1 < count,
                };
                if !eligible {
                    return Vec::new();
                }
                EditCommand::SetAngle {
                    id: hit.id,
                    side,
                    value: None,
                }
            }
        };

        tracing::debug!("[CurveSession::context_menu] {:?}", command);
        if self.apply(command).is_change() {
            vec![command]
        } else {
            Vec::new()
        }
    }
}
