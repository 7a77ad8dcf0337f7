use crate::controls::{Binding, ControlBindings, ControlId, ControlValue, MirrorWrite};
use crate::model::{CursorLocation, LocationAxis, Result};
use crate::viewer::Viewer;

/// Moves the shared cursor of both views.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationChange {
    old: CursorLocation,
    new: CursorLocation,
    axis_controls: [Vec<ControlId>; 4],
}

impl LocationChange {
    /// Axes of `request` left at [`CursorLocation::NO_CHANGE`] keep their current value.
    pub fn new(
        viewer: &Viewer,
        bindings: &ControlBindings,
        request: CursorLocation,
    ) -> Result<Self> {
        let old = viewer.location();
        let new = old.resolve(request);
        new.validate(&viewer.extent())?;
        Ok(Self {
            old,
            new,
            axis_controls: LocationAxis::ALL
                .map(|axis| bindings.controls_for(Binding::Slice(axis)).to_vec()),
        })
    }

    pub fn old(&self) -> CursorLocation {
        self.old
    }

    pub fn new_location(&self) -> CursorLocation {
        self.new
    }

    pub(super) fn apply(&self, viewer: &mut Viewer) {
        self.write(viewer, self.new);
    }

    pub(super) fn reverse(&self, viewer: &mut Viewer) {
        self.write(viewer, self.old);
    }

    fn write(&self, viewer: &mut Viewer, target: CursorLocation) {
        viewer.set_location(target);
        let writes: Vec<MirrorWrite> = self
            .old
            .changed_axes(&self.new)
            .into_iter()
            .flat_map(|axis| {
                self.axis_controls[axis.index()]
                    .iter()
                    .map(move |control| {
                        MirrorWrite::new(*control, ControlValue::Int(target.axis(axis)))
                    })
            })
            .collect();
        viewer.mirror(&writes);
        viewer.redraw_mut().request_all();
    }

    pub(super) fn merge(&mut self, next: &LocationChange) -> bool {
        self.new = next.new;
        self.axis_controls = next.axis_controls.clone();
        true
    }

    pub(super) fn is_no_op(&self) -> bool {
        self.old == self.new
    }

    pub(super) fn description(&self) -> String {
        let axes = self.old.changed_axes(&self.new);
        if axes.is_empty() {
            return "Move to current location".to_string();
        }
        let parts: Vec<String> = axes
            .into_iter()
            .map(|axis| format!("{} slice {}", axis.label(), self.new.axis(axis)))
            .collect();
        format!("Move to {}", parts.join(", "))
    }
}
