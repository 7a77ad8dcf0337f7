use std::collections::HashMap;

use crate::model::{DrawMode, LocationAxis, PropertyValue, SliceDisplayType, TracingLayer, ViewId};

use super::{ControlError, ControlId, ControlKind, ControlValue, MirrorWrite, Result};

/// View-state field a control mirrors.
///
/// Exclusive choices (display type, tracing layer, draw mode) bind one button per option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Brightness(ViewId),
    BrightnessThreshold(ViewId),
    Contrast(ViewId),
    PrimaryOpacity(ViewId),
    SecondaryOpacity(ViewId),
    PrimaryColorMap(ViewId),
    SecondaryColorMap(ViewId),
    DisplayType(ViewId, SliceDisplayType),
    TracingLayer(ViewId, TracingLayer),
    LayerVisible(ViewId, TracingLayer),
    DrawMode(ViewId, DrawMode),
    DrawModePages(ViewId),
    Slice(LocationAxis),
}

impl Binding {
    pub fn accepts(self, kind: ControlKind) -> bool {
        match self {
            Self::Brightness(_)
            | Self::BrightnessThreshold(_)
            | Self::Contrast(_)
            | Self::PrimaryOpacity(_)
            | Self::SecondaryOpacity(_)
            | Self::Slice(_) => matches!(kind, ControlKind::Slider | ControlKind::SpinBox),
            Self::PrimaryColorMap(_) | Self::SecondaryColorMap(_) => {
                matches!(kind, ControlKind::ComboBox)
            }
            Self::DisplayType(..) | Self::TracingLayer(..) | Self::DrawMode(..) => {
                kind.exclusive_group().is_some()
            }
            Self::LayerVisible(..) => matches!(kind, ControlKind::CheckBox),
            Self::DrawModePages(_) => {
                matches!(kind, ControlKind::StackedPages | ControlKind::ComboBox)
            }
        }
    }
}

/// Slider and spin box positions for fractional properties, in percent.
pub fn percent(value: f32) -> i32 {
    (value * 100.0).round() as i32
}

pub fn from_percent(value: i32) -> f32 {
    value as f32 / 100.0
}

#[derive(Debug, Clone, Default)]
pub struct ControlBindings {
    forward: HashMap<Binding, Vec<ControlId>>,
    reverse: HashMap<ControlId, Binding>,
}

impl ControlBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `control` to `binding`, replacing any earlier binding of the same control.
    pub fn bind(&mut self, binding: Binding, control: ControlId, kind: ControlKind) -> Result<()> {
        if !binding.accepts(kind) {
            return Err(ControlError::UnsupportedBinding {
                control,
                kind,
                binding: format!("{binding:?}"),
            });
        }
        if let Some(previous) = self.reverse.insert(control, binding)
            && let Some(controls) = self.forward.get_mut(&previous)
        {
            controls.retain(|bound| *bound != control);
        }
        self.forward.entry(binding).or_default().push(control);
        Ok(())
    }

    pub fn controls_for(&self, binding: Binding) -> &[ControlId] {
        self.forward
            .get(&binding)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn binding_of(&self, control: ControlId) -> Option<Binding> {
        self.reverse.get(&control).copied()
    }

    /// Control values that display `value` on `view`.
    pub fn writes_for(&self, view: ViewId, value: &PropertyValue) -> Vec<MirrorWrite> {
        let scaled = |binding, value: f32| self.fill(binding, ControlValue::Int(percent(value)));
        match *value {
            PropertyValue::Brightness(v) => scaled(Binding::Brightness(view), v),
            PropertyValue::BrightnessThreshold(v) => scaled(Binding::BrightnessThreshold(view), v),
            PropertyValue::Contrast(v) => scaled(Binding::Contrast(view), v),
            PropertyValue::PrimaryOpacity(v) => scaled(Binding::PrimaryOpacity(view), v),
            PropertyValue::SecondaryOpacity(v) => scaled(Binding::SecondaryOpacity(view), v),
            PropertyValue::PrimaryColorMap(map) => self.fill(
                Binding::PrimaryColorMap(view),
                ControlValue::Index(map.index()),
            ),
            PropertyValue::SecondaryColorMap(map) => self.fill(
                Binding::SecondaryColorMap(view),
                ControlValue::Index(map.index()),
            ),
            PropertyValue::DisplayType(display_type) => self.fill(
                Binding::DisplayType(view, display_type),
                ControlValue::Checked(true),
            ),
            PropertyValue::TracingLayer(layer) => self.fill(
                Binding::TracingLayer(view, layer),
                ControlValue::Checked(true),
            ),
            PropertyValue::LayerVisible(layer, visible) => self.fill(
                Binding::LayerVisible(view, layer),
                ControlValue::Checked(visible),
            ),
            PropertyValue::DrawMode(mode) => {
                let mut writes = self.fill(
                    Binding::DrawMode(view, mode),
                    ControlValue::Checked(true),
                );
                writes.extend(self.fill(
                    Binding::DrawModePages(view),
                    ControlValue::Index(mode.index()),
                ));
                writes
            }
        }
    }

    fn fill(&self, binding: Binding, value: ControlValue) -> Vec<MirrorWrite> {
        self.controls_for(binding)
            .iter()
            .map(|control| MirrorWrite::new(*control, value))
            .collect()
    }
}
