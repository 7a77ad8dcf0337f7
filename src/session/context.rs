use tracing::debug;

use crate::config::ViewerConfig;
use crate::controls::{
    Binding, ControlBindings, ControlError, ControlId, ControlKind, UpdateSource,
};
use crate::history::{
    Command, GestureId, History, LocationChange, PanChange, PropertyChange, PushOutcome,
    ResetView, TraceEdit, TraceEditMode, ZoomChange,
};
use crate::model::{
    ColorMap, CursorLocation, DrawMode, LocationAxis, ModelError, PropertyValue,
    SliceDisplayType, TracingLayer, Vec2, ViewId,
};
use crate::trace::TracePoint;
use crate::viewer::Viewer;

use super::{Result, events};

/// Owns the viewer, its undo history and the control bindings, and turns user
/// intents into pushed commands.
#[derive(Debug, Clone)]
pub struct Session {
    viewer: Viewer,
    history: History,
    bindings: ControlBindings,
    next_gesture: u64,
}

impl Session {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            viewer: Viewer::new(config)?,
            history: History::new(config.history.clone()),
            bindings: ControlBindings::new(),
            next_gesture: 0,
        })
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut Viewer {
        &mut self.viewer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }

    /// Creates a control, binds it and shows the current state on it.
    pub fn add_control(
        &mut self,
        kind: ControlKind,
        label: impl Into<String>,
        binding: Binding,
    ) -> Result<ControlId> {
        let id = self.viewer.controls_mut().add(kind, label);
        self.bind(binding, id)?;
        Ok(id)
    }

    pub fn bind(&mut self, binding: Binding, control: ControlId) -> Result<()> {
        let kind = self
            .viewer
            .controls()
            .get(control)
            .map(|control| control.kind)
            .ok_or(ControlError::UnknownControl(control))?;
        self.bindings.bind(binding, control, kind)?;
        let writes: Vec<_> = events::current_writes(&self.viewer, &self.bindings, binding)
            .into_iter()
            .filter(|write| write.control == control)
            .collect();
        self.viewer.mirror(&writes);
        self.discard_history_events();
        Ok(())
    }

    pub fn begin_gesture(&mut self) -> GestureId {
        self.next_gesture += 1;
        GestureId(self.next_gesture)
    }

    pub fn execute(&mut self, command: Command) -> PushOutcome {
        let outcome = self.history.push(command, &mut self.viewer);
        self.discard_history_events();
        outcome
    }

    pub fn pan(&mut self, view: ViewId, delta: Vec2, gesture: GestureId) -> PushOutcome {
        let command = PanChange::new(&self.viewer, view, delta, gesture);
        self.execute(command.into())
    }

    pub fn zoom(&mut self, view: ViewId, delta: f32) -> PushOutcome {
        let command = ZoomChange::new(&self.viewer, view, delta);
        self.execute(command.into())
    }

    pub fn reset_view(&mut self) -> PushOutcome {
        let command = ResetView::new(&self.viewer);
        self.execute(command.into())
    }

    pub fn set_property(&mut self, view: ViewId, value: PropertyValue) -> PushOutcome {
        let command = PropertyChange::new(&self.viewer, &self.bindings, view, value);
        self.execute(command.into())
    }

    pub fn set_brightness(&mut self, view: ViewId, brightness: f32) -> PushOutcome {
        self.set_property(view, PropertyValue::Brightness(brightness))
    }

    pub fn set_brightness_threshold(&mut self, view: ViewId, threshold: f32) -> PushOutcome {
        self.set_property(view, PropertyValue::BrightnessThreshold(threshold))
    }

    pub fn set_contrast(&mut self, view: ViewId, contrast: f32) -> PushOutcome {
        self.set_property(view, PropertyValue::Contrast(contrast))
    }

    pub fn set_primary_color_map(&mut self, view: ViewId, map: ColorMap) -> PushOutcome {
        self.set_property(view, PropertyValue::PrimaryColorMap(map))
    }

    pub fn set_secondary_color_map(&mut self, view: ViewId, map: ColorMap) -> PushOutcome {
        self.set_property(view, PropertyValue::SecondaryColorMap(map))
    }

    pub fn set_primary_opacity(&mut self, view: ViewId, opacity: f32) -> PushOutcome {
        self.set_property(view, PropertyValue::PrimaryOpacity(opacity))
    }

    pub fn set_secondary_opacity(&mut self, view: ViewId, opacity: f32) -> PushOutcome {
        self.set_property(view, PropertyValue::SecondaryOpacity(opacity))
    }

    pub fn set_display_type(&mut self, view: ViewId, display_type: SliceDisplayType) -> PushOutcome {
        self.set_property(view, PropertyValue::DisplayType(display_type))
    }

    pub fn set_tracing_layer(&mut self, view: ViewId, layer: TracingLayer) -> PushOutcome {
        self.set_property(view, PropertyValue::TracingLayer(layer))
    }

    pub fn set_layer_visible(
        &mut self,
        view: ViewId,
        layer: TracingLayer,
        visible: bool,
    ) -> PushOutcome {
        self.set_property(view, PropertyValue::LayerVisible(layer, visible))
    }

    pub fn set_draw_mode(&mut self, view: ViewId, mode: DrawMode) -> PushOutcome {
        self.set_property(view, PropertyValue::DrawMode(mode))
    }

    /// Axes of `request` left at [`CursorLocation::NO_CHANGE`] keep their value.
    pub fn move_cursor(&mut self, request: CursorLocation) -> Result<PushOutcome> {
        let command = LocationChange::new(&self.viewer, &self.bindings, request)?;
        Ok(self.execute(command.into()))
    }

    /// Paints `points` on the axial view's tracing layer at the current axial slice.
    pub fn add_trace_points(
        &mut self,
        points: impl IntoIterator<Item = TracePoint>,
    ) -> Result<PushOutcome> {
        self.edit_traces(TraceEditMode::Add, points)
    }

    pub fn erase_trace_points(
        &mut self,
        points: impl IntoIterator<Item = TracePoint>,
    ) -> Result<PushOutcome> {
        self.edit_traces(TraceEditMode::Erase, points)
    }

    fn edit_traces(
        &mut self,
        mode: TraceEditMode,
        points: impl IntoIterator<Item = TracePoint>,
    ) -> Result<PushOutcome> {
        let layer = self.viewer.view(ViewId::Axial).tracing_layer();
        let axial = self.viewer.location().axial;
        let slice = usize::try_from(axial).map_err(|_| ModelError::LocationOutOfRange {
            axis: LocationAxis::Axial.label(),
            value: axial,
            extent: self.viewer.extent().slices,
        })?;
        let edit = TraceEdit::new(&self.viewer, mode, layer, slice, points)?;
        Ok(self.execute(edit.into()))
    }

    pub fn undo(&mut self) -> Option<String> {
        let undone = self.history.undo(&mut self.viewer);
        self.discard_history_events();
        undone
    }

    pub fn redo(&mut self) -> Option<String> {
        let redone = self.history.redo(&mut self.viewer);
        self.discard_history_events();
        redone
    }

    pub fn undo_to(&mut self, index: usize) -> usize {
        let steps = self.history.undo_to(index, &mut self.viewer);
        self.discard_history_events();
        steps
    }

    pub fn set_history_index(&mut self, index: usize) -> usize {
        let steps = self.history.set_index(index, &mut self.viewer);
        self.discard_history_events();
        steps
    }

    /// Mirrored writes only echo the history; user edits stay queued for dispatch.
    fn discard_history_events(&mut self) {
        let dropped = self
            .viewer
            .controls_mut()
            .discard_events(UpdateSource::History);
        if dropped > 0 {
            debug!(dropped, "discarded mirrored control events");
        }
    }

    /// Drains queued control events and pushes a command for every user edit.
    /// Returns the number of commands pushed.
    pub fn dispatch_events(&mut self) -> usize {
        let queued = self.viewer.controls_mut().take_events();
        let mut pushed = 0;
        for event in queued {
            if event.source == UpdateSource::History {
                continue;
            }
            if let Some(command) = events::command_for(&self.viewer, &self.bindings, &event) {
                self.execute(command);
                pushed += 1;
            }
        }
        debug!(pushed, "dispatched control events");
        pushed
    }
}
