use crate::controls::{ControlBindings, MirrorWrite, percent};
use crate::model::{PropertyKind, PropertyValue, ViewId};
use crate::viewer::Viewer;

/// Absolute change of one [`PropertyKind`] on one view, with the control values
/// that display the old and the new value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyChange {
    view: ViewId,
    old: PropertyValue,
    new: PropertyValue,
    old_mirror: Vec<MirrorWrite>,
    new_mirror: Vec<MirrorWrite>,
}

impl PropertyChange {
    pub fn new(
        viewer: &Viewer,
        bindings: &ControlBindings,
        view: ViewId,
        new: PropertyValue,
    ) -> Self {
        let old = viewer.view(view).property(new.kind());
        Self {
            view,
            old,
            new,
            old_mirror: bindings.writes_for(view, &old),
            new_mirror: bindings.writes_for(view, &new),
        }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn kind(&self) -> PropertyKind {
        self.new.kind()
    }

    pub fn old(&self) -> PropertyValue {
        self.old
    }

    pub fn new_value(&self) -> PropertyValue {
        self.new
    }

    pub(super) fn apply(&self, viewer: &mut Viewer) {
        self.write(viewer, self.new, &self.new_mirror);
    }

    pub(super) fn reverse(&self, viewer: &mut Viewer) {
        self.write(viewer, self.old, &self.old_mirror);
    }

    fn write(&self, viewer: &mut Viewer, value: PropertyValue, mirror: &[MirrorWrite]) {
        viewer.view_mut(self.view).set_property(value);
        viewer.mirror(mirror);
        viewer.redraw_mut().request(self.view);
    }

    pub(super) fn merge(&mut self, next: &PropertyChange) -> bool {
        if self.view != next.view || self.kind() != next.kind() || !self.kind().merges() {
            return false;
        }
        self.new = next.new;
        self.new_mirror = next.new_mirror.clone();
        true
    }

    pub(super) fn is_no_op(&self) -> bool {
        self.old == self.new
    }

    pub(super) fn description(&self) -> String {
        match self.new {
            PropertyValue::Brightness(v) => format!("Brightness set to {}%", percent(v)),
            PropertyValue::BrightnessThreshold(v) => {
                format!("Brightness threshold set to {}%", percent(v))
            }
            PropertyValue::Contrast(v) => format!("Contrast set to {}%", percent(v)),
            PropertyValue::PrimaryColorMap(map) => {
                format!("Primary color map set to {}", map.label())
            }
            PropertyValue::SecondaryColorMap(map) => {
                format!("Secondary color map set to {}", map.label())
            }
            PropertyValue::PrimaryOpacity(v) => format!("Primary opacity set to {}%", percent(v)),
            PropertyValue::SecondaryOpacity(v) => {
                format!("Secondary opacity set to {}%", percent(v))
            }
            PropertyValue::DisplayType(display_type) => {
                format!("Slice view set to {}", display_type.label())
            }
            PropertyValue::TracingLayer(layer) => {
                format!("Tracing layer set to {}", layer.label())
            }
            PropertyValue::LayerVisible(layer, visible) => format!(
                "{} tracing layer {}",
                if visible { "Show" } else { "Hide" },
                layer.label()
            ),
            PropertyValue::DrawMode(mode) => format!("Draw mode set to {}", mode.label()),
        }
    }
}
