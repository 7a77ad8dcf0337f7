use serde::{Deserialize, Serialize};

use crate::controls::percent;
use crate::model::{Vec2, ViewId};
use crate::viewer::Viewer;

/// Net movement at or below this is treated as none.
const NO_OP_EPSILON: f32 = 1e-5;

/// Identifies one press-drag-release interaction; pans only merge within a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GestureId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct PanChange {
    view: ViewId,
    gesture: GestureId,
    delta: Vec2,
    old: Vec2,
    new: Vec2,
}

impl PanChange {
    pub fn new(viewer: &Viewer, view: ViewId, delta: Vec2, gesture: GestureId) -> Self {
        let old = viewer.view(view).translation();
        Self {
            view,
            gesture,
            delta,
            old,
            new: old + delta,
        }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    pub(super) fn apply(&self, viewer: &mut Viewer) {
        viewer.view_mut(self.view).set_translation(self.new);
        viewer.redraw_mut().request(self.view);
    }

    pub(super) fn reverse(&self, viewer: &mut Viewer) {
        viewer.view_mut(self.view).set_translation(self.old);
        viewer.redraw_mut().request(self.view);
    }

    pub(super) fn merge(&mut self, next: &PanChange) -> bool {
        if self.view != next.view || self.gesture != next.gesture {
            return false;
        }
        self.delta += next.delta;
        self.new = next.new;
        true
    }

    pub(super) fn is_no_op(&self) -> bool {
        (self.new - self.old).length() <= NO_OP_EPSILON
    }

    pub(super) fn description(&self) -> String {
        format!(
            "Move {} image by ({}%, {}%)",
            self.view.label(),
            percent(self.delta.x),
            percent(self.delta.y)
        )
    }
}

/// Zoom by a relative amount. Old and new scales are captured absolutely so
/// clamping at the limits never breaks undo.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomChange {
    view: ViewId,
    delta: f32,
    old: f32,
    new: f32,
}

impl ZoomChange {
    pub fn new(viewer: &Viewer, view: ViewId, delta: f32) -> Self {
        let state = viewer.view(view);
        let old = state.scale();
        let new = if delta.is_nan() {
            old
        } else {
            state.scale_limits().clamp(old + delta)
        };
        Self {
            view,
            delta,
            old,
            new,
        }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub(super) fn apply(&self, viewer: &mut Viewer) {
        viewer.view_mut(self.view).set_scale(self.new);
        viewer.redraw_mut().request(self.view);
    }

    pub(super) fn reverse(&self, viewer: &mut Viewer) {
        viewer.view_mut(self.view).set_scale(self.old);
        viewer.redraw_mut().request(self.view);
    }

    pub(super) fn merge(&mut self, next: &ZoomChange) -> bool {
        if self.view != next.view {
            return false;
        }
        self.delta += next.delta;
        self.new = next.new;
        true
    }

    pub(super) fn is_no_op(&self) -> bool {
        (self.new - self.old).abs() <= NO_OP_EPSILON
    }

    /// Describes the applied change, which differs from the summed delta once clamped.
    pub(super) fn description(&self) -> String {
        format!(
            "Scale {} image by {}%",
            self.view.label(),
            percent(self.new - self.old)
        )
    }
}
