//! Viewport intersection observers
//!
//! An observer watches the union of a group's element bounds and reports the
//! moment its visible fraction rises to the threshold. Falling back below the
//! threshold re-arms it; whether a re-armed observer may fire again is decided
//! by its owner through `once`.

use crate::coordinator::ScopeId;
use crate::group::GroupId;
use folio_core::{Document, ElementId, Rect};

slotmap::new_key_type! {
    /// Handle to a live intersection observer
    pub struct ObserverId;
}

#[derive(Clone, Debug)]
pub(crate) struct Observer {
    pub scope: ScopeId,
    pub group: GroupId,
    pub threshold: f32,
    pub once: bool,
    intersecting: bool,
}

impl Observer {
    pub fn new(scope: ScopeId, group: GroupId, threshold: f32, once: bool) -> Self {
        Self {
            scope,
            group,
            threshold,
            once,
            intersecting: false,
        }
    }

    /// Feed the latest visible fraction; returns true on an upward crossing
    pub fn update(&mut self, fraction: f32) -> bool {
        let inside = fraction > 0.0 && fraction >= self.threshold;
        let crossed = inside && !self.intersecting;
        self.intersecting = inside;
        crossed
    }
}

/// Union of the bounds of the attached elements, `None` if none are attached
pub(crate) fn group_bounds(doc: &Document, elements: &[ElementId]) -> Option<Rect> {
    elements
        .iter()
        .filter(|e| doc.is_attached(**e))
        .filter_map(|e| doc.bounds(*e))
        .reduce(|acc, b| acc.union(&b))
}
