// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Anchor store: the set of control points of one editing session.
//!
//! Anchors live in an `Arc<BTreeMap<AnchorId, Anchor>>` keyed by id, so the
//! store can be cheaply cloned and mutations copy on write (`Arc::make_mut`).
//! Storage order is id order and never doubles as identity; every consumer
//! reads the time-sorted view returned by [`AnchorStore::list`].

use super::anchor::{Anchor, AnchorPatch, clamp_time, clamp_value, sort_by_time};
use super::AnchorId;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Ordered set of anchors with id-based identity
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorStore {
    anchors: Arc<BTreeMap<AnchorId, Anchor>>,
    /// Upper bound for anchor times
    duration: f64,
}

impl AnchorStore {
    /// Create an empty store for a curve of the given duration
    pub fn new(duration: f64) -> Self {
        Self {
            anchors: Arc::new(BTreeMap::new()),
            duration,
        }
    }

    /// Duration used to clamp anchor times
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Change the clamp range for future edits
    ///
    /// Existing anchors are left where they are.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn contains(&self, id: AnchorId) -> bool {
        self.anchors.contains_key(&id)
    }

    /// Look up an anchor by id
    pub fn get(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.get(&id)
    }

    /// Add an anchor with inferred tangents, returning its fresh id
    ///
    /// `x` is clamped into `[0, duration]` and `y` into `[-1, 1]`.
    pub fn add(&mut self, x: f64, y: f64) -> AnchorId {
        let anchor = Anchor::new(clamp_time(x, self.duration), clamp_value(y));
        let id = anchor.id;
        Arc::make_mut(&mut self.anchors).insert(id, anchor);
        tracing::debug!(
            "[AnchorStore::add] {} at x={:.3}, y={:.3}",
            id,
            anchor.x,
            anchor.y
        );
        id
    }

    /// Insert a fully specified anchor (used when loading presets)
    ///
    /// The anchor keeps its id and angles; its position is clamped.
    pub fn insert(&mut self, mut anchor: Anchor) -> AnchorId {
        anchor.x = clamp_time(anchor.x, self.duration);
        anchor.y = clamp_value(anchor.y);
        let id = anchor.id;
        Arc::make_mut(&mut self.anchors).insert(id, anchor);
        id
    }

    /// Remove an anchor
    ///
    /// Unknown ids are a no-op; returns the removed anchor if there was one.
    pub fn remove(&mut self, id: AnchorId) -> Option<Anchor> {
        if !self.anchors.contains_key(&id) {
            return None;
        }
        Arc::make_mut(&mut self.anchors).remove(&id)
    }

    /// Apply a partial update, clamping positions into range
    ///
    /// Returns `false` when the id is unknown.
    pub fn update(&mut self, id: AnchorId, patch: AnchorPatch) -> bool {
        if !self.anchors.contains_key(&id) {
            return false;
        }
        let duration = self.duration;
        let Some(anchor) = Arc::make_mut(&mut self.anchors).get_mut(&id) else {
            return false;
        };
        if let Some(x) = patch.x {
            anchor.x = clamp_time(x, duration);
        }
        if let Some(y) = patch.y {
            anchor.y = clamp_value(y);
        }
        if let Some(angle) = patch.angle_in {
            anchor.angle_in = angle;
        }
        if let Some(angle) = patch.angle_out {
            anchor.angle_out = angle;
        }
        true
    }

    /// Remove every anchor
    pub fn clear(&mut self) {
        self.anchors = Arc::new(BTreeMap::new());
    }

    /// All anchors sorted by (time, id)
    pub fn list(&self) -> Vec<Anchor> {
        let mut sorted: Vec<Anchor> = self.anchors.values().copied().collect();
        sort_by_time(&mut sorted);
        sorted
    }

    /// Position of an anchor in the sorted view
    pub fn sorted_index(&self, id: AnchorId) -> Option<usize> {
        self.list().iter().position(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Side;

    #[test]
    fn add_clamps_into_range() {
        let mut store = AnchorStore::new(2.0);
        let id = store.add(5.0, -3.0);
        let a = store.get(id).unwrap();
        assert_eq!(a.x, 2.0);
        assert_eq!(a.y, -1.0);
        assert_eq!(a.angle_in, None);
        assert_eq!(a.angle_out, None);

        let id = store.add(-1.0, 0.5);
        assert_eq!(store.get(id).unwrap().x, 0.0);
    }

    #[test]
    fn add_assigns_fresh_ids() {
        let mut store = AnchorStore::new(1.0);
        let a = store.add(0.5, 0.0);
        let b = store.add(0.5, 0.0);
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut store = AnchorStore::new(1.0);
        store.add(0.2, 0.2);
        let before = store.clone();
        assert!(store.remove(AnchorId::next()).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn remove_can_empty_the_store() {
        let mut store = AnchorStore::new(1.0);
        let id = store.add(0.2, 0.2);
        assert!(store.remove(id).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn list_sorts_by_time_then_id() {
        let mut store = AnchorStore::new(1.0);
        let late = store.add(0.9, 0.0);
        let tie_a = store.add(0.4, 0.0);
        let tie_b = store.add(0.4, 0.5);
        let early = store.add(0.1, 0.0);

        let order: Vec<AnchorId> = store.list().iter().map(|a| a.id).collect();
        assert_eq!(order, vec![early, tie_a, tie_b, late]);
        assert_eq!(store.sorted_index(late), Some(3));
    }

    #[test]
    fn update_moves_and_clamps() {
        let mut store = AnchorStore::new(1.0);
        let id = store.add(0.5, 0.0);
        assert!(store.update(id, AnchorPatch::position(1.5, 0.25)));
        let a = store.get(id).unwrap();
        assert_eq!(a.x, 1.0);
        assert_eq!(a.y, 0.25);
    }

    #[test]
    fn update_angles() {
        let mut store = AnchorStore::new(1.0);
        let id = store.add(0.5, 0.0);
        store.update(id, AnchorPatch::angle(Side::Out, Some(0.4)));
        assert_eq!(store.get(id).unwrap().angle_out, Some(0.4));
        store.update(id, AnchorPatch::angle(Side::Out, None));
        assert_eq!(store.get(id).unwrap().angle_out, None);
    }

    #[test]
    fn update_unknown_returns_false() {
        let mut store = AnchorStore::new(1.0);
        assert!(!store.update(AnchorId::next(), AnchorPatch::position(0.0, 0.0)));
    }

    #[test]
    fn clone_is_independent() {
        let mut store = AnchorStore::new(1.0);
        store.add(0.1, 0.1);
        let snapshot = store.clone();
        store.add(0.2, 0.2);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }
}
