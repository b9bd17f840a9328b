// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve session - owns all editing state for one curve
//!
//! A session holds the anchor store, the curve parameters, the view
//! transform and the pointer state machine. Everything a renderer needs
//! (sorted anchors, handle geometry, samples) is computed on demand from
//! the store; nothing derived is cached.

mod pointer;

use super::command::{Applied, EditCommand};
use super::geometry::{AnchorGeometry, layout_anchors};
use super::viewport::{ViewPort, zoom_from_slider};
use crate::curve::{ResolvedAnchor, resolve, sample};
use crate::data::{AnchorPreset, BakedMotion};
use crate::error::{CurveError, check_duration};
use crate::model::{Anchor, AnchorId, AnchorStore, CurveParams, Direction, Side};
use crate::settings::EditorConfig;

/// Pointer interaction state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Moving an anchor body
    DraggingAnchor { id: AnchorId },
    /// Rotating one tangent handle
    DraggingHandle { id: AnchorId, side: Side },
    /// Scrolling the view horizontally
    Panning,
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, InteractionState::Idle)
    }
}

/// Editing session for a single curve
#[derive(Debug, Clone)]
pub struct CurveSession {
    store: AnchorStore,
    params: CurveParams,
    viewport: ViewPort,
    config: EditorConfig,
    state: InteractionState,
    /// Pointer x at the previous drag event (pan reference)
    drag_x: f64,
    /// Anchor last grabbed or created
    selected: Option<AnchorId>,
}

impl Default for CurveSession {
    fn default() -> Self {
        Self::new(CurveParams::default(), EditorConfig::default())
    }
}

impl CurveSession {
    pub fn new(params: CurveParams, config: EditorConfig) -> Self {
        let viewport =
            ViewPort::for_canvas(config.canvas_width, config.canvas_height, params.duration);
        tracing::debug!(
            "[CurveSession::new] '{}' duration={:.3}s plot={:?}",
            params.name,
            params.duration,
            viewport.plot
        );
        Self {
            store: AnchorStore::new(params.duration),
            params,
            viewport,
            config,
            state: InteractionState::Idle,
            drag_x: 0.0,
            selected: None,
        }
    }

    // ===== Accessors =====

    pub fn store(&self) -> &AnchorStore {
        &self.store
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    pub fn viewport(&self) -> &ViewPort {
        &self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn selected(&self) -> Option<AnchorId> {
        self.selected
    }

    // ===== Render outputs =====

    /// Anchors sorted by (time, id)
    pub fn anchors(&self) -> Vec<Anchor> {
        self.store.list()
    }

    /// Sorted anchors with their effective tangent angles
    pub fn resolved(&self) -> Vec<ResolvedAnchor> {
        resolve(&self.store.list())
    }

    /// Canvas geometry of anchors and visible handles
    ///
    /// The same layout drives hit testing, so drawing from it keeps the
    /// display and the clickable targets identical.
    pub fn layout(&self) -> Vec<AnchorGeometry> {
        layout_anchors(&self.store.list(), &self.viewport, self.config.handle_length)
    }

    /// Current sample sequence
    pub fn samples(&self) -> Vec<f64> {
        sample(&self.store.list(), self.params.duration)
    }

    // ===== Edits =====

    /// Apply an edit command to the anchor set
    pub fn apply(&mut self, command: EditCommand) -> Applied {
        let applied = self.store.apply(command);
        if let EditCommand::RemoveAnchor { id } = command
            && applied.is_change()
            && self.selected == Some(id)
        {
            self.selected = None;
        }
        applied
    }

    /// Change the curve duration
    ///
    /// Anchors keep their times; only later edits are clamped to the new
    /// range. An invalid duration is rejected and nothing changes.
    pub fn set_duration(&mut self, duration: f64) -> Result<(), CurveError> {
        let duration = check_duration(duration)?;
        self.params.duration = duration;
        self.store.set_duration(duration);
        self.viewport.set_duration(duration);
        tracing::debug!("[CurveSession::set_duration] {:.3}s", duration);
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.params.name = name.into();
    }

    pub fn set_magnitude(&mut self, magnitude: u32) {
        self.params.magnitude = magnitude;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.params.direction = direction;
    }

    /// Set the horizontal zoom factor (clamped)
    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    /// Set the zoom from the 0..=100 slider position
    pub fn set_zoom_slider(&mut self, value: u8) {
        self.viewport.set_zoom(zoom_from_slider(value));
    }

    /// Clear all anchors and the view state
    pub fn reset(&mut self) {
        self.store.clear();
        self.viewport.reset();
        self.state = InteractionState::Idle;
        self.selected = None;
        tracing::info!("Reset curve '{}'", self.params.name);
    }

    // ===== Presets =====

    /// Replace the session contents with a preset
    ///
    /// Anchors are inserted with fresh ids; the view returns to zoom 1.
    pub fn load_preset(&mut self, preset: &AnchorPreset) -> Result<(), CurveError> {
        preset.validate()?;
        self.params = preset.curve_params();
        self.store = AnchorStore::new(self.params.duration);
        for anchor in &preset.parameters.anchors {
            self.store.insert(Anchor::with_angles(
                anchor.x,
                anchor.y,
                anchor.angle_in,
                anchor.angle_out,
            ));
        }
        self.viewport.set_duration(self.params.duration);
        self.viewport.reset();
        self.state = InteractionState::Idle;
        self.selected = None;
        tracing::info!(
            "Loaded preset '{}' with {} anchors",
            self.params.name,
            self.store.len()
        );
        Ok(())
    }

    /// Re-editable payload of the current curve
    pub fn export_preset(&self) -> AnchorPreset {
        AnchorPreset::new(&self.params, self.store.list())
    }

    /// Playback payload of the current curve
    pub fn bake(&self) -> BakedMotion {
        BakedMotion::new(&self.params, self.samples())
    }

    // ===== Readout =====

    /// Short description of the control being dragged
    pub fn control_info(&self) -> Option<String> {
        let (id, side) = match self.state {
            InteractionState::DraggingAnchor { id } => (id, None),
            InteractionState::DraggingHandle { id, side } => (id, Some(side)),
            _ => return None,
        };
        let anchor = self.store.get(id)?;
        Some(match side {
            None => format!("x={:.3}s, y={:.3}", anchor.x, anchor.y),
            Some(side) => match anchor.angle(side) {
                Some(angle) => format!("angle={:.1}°", angle.to_degrees()),
                None => "straight line".to_string(),
            },
        })
    }
}
