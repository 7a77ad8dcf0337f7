use tracing::warn;

use crate::controls::{
    Binding, ControlBindings, ControlEvent, ControlValue, MirrorWrite, from_percent,
};
use crate::history::{Command, LocationChange, PropertyChange};
use crate::model::{ColorMap, CursorLocation, DrawMode, PropertyKind, PropertyValue, ViewId};
use crate::viewer::Viewer;

/// View and property a binding displays; `None` for cursor bindings.
pub(super) fn property_of(binding: Binding) -> Option<(ViewId, PropertyKind)> {
    let target = match binding {
        Binding::Brightness(view) => (view, PropertyKind::Brightness),
        Binding::BrightnessThreshold(view) => (view, PropertyKind::BrightnessThreshold),
        Binding::Contrast(view) => (view, PropertyKind::Contrast),
        Binding::PrimaryOpacity(view) => (view, PropertyKind::PrimaryOpacity),
        Binding::SecondaryOpacity(view) => (view, PropertyKind::SecondaryOpacity),
        Binding::PrimaryColorMap(view) => (view, PropertyKind::PrimaryColorMap),
        Binding::SecondaryColorMap(view) => (view, PropertyKind::SecondaryColorMap),
        Binding::DisplayType(view, _) => (view, PropertyKind::DisplayType),
        Binding::TracingLayer(view, _) => (view, PropertyKind::TracingLayer),
        Binding::LayerVisible(view, layer) => (view, PropertyKind::LayerVisible(layer)),
        Binding::DrawMode(view, _) | Binding::DrawModePages(view) => {
            (view, PropertyKind::DrawMode)
        }
        Binding::Slice(_) => return None,
    };
    Some(target)
}

/// Control values showing the viewer's current state for `binding`.
pub(super) fn current_writes(
    viewer: &Viewer,
    bindings: &ControlBindings,
    binding: Binding,
) -> Vec<MirrorWrite> {
    match property_of(binding) {
        Some((view, kind)) => bindings.writes_for(view, &viewer.view(view).property(kind)),
        None => match binding {
            Binding::Slice(axis) => bindings
                .controls_for(binding)
                .iter()
                .map(|control| {
                    MirrorWrite::new(*control, ControlValue::Int(viewer.location().axis(axis)))
                })
                .collect(),
            _ => Vec::new(),
        },
    }
}

/// Translates a user-sourced control event into the command it requests.
///
/// Unbound controls, mistyped values and out-of-range indices are logged and
/// produce nothing. Exclusive buttons being unchecked by a peer are silent.
pub(super) fn command_for(
    viewer: &Viewer,
    bindings: &ControlBindings,
    event: &ControlEvent,
) -> Option<Command> {
    let Some(binding) = bindings.binding_of(event.control) else {
        warn!(control = ?event.control, "user event from unbound control");
        return None;
    };

    let value = match (binding, event.value) {
        (Binding::Slice(axis), ControlValue::Int(slice)) => {
            if slice < 0 {
                warn!(?axis, slice, "ignoring negative slice request");
                return None;
            }
            let request = CursorLocation::unchanged().with_axis(axis, slice);
            return match LocationChange::new(viewer, bindings, request) {
                Ok(change) => Some(change.into()),
                Err(error) => {
                    warn!(%error, "ignoring slice request");
                    None
                }
            };
        }
        (Binding::Brightness(_), ControlValue::Int(v)) => PropertyValue::Brightness(from_percent(v)),
        (Binding::BrightnessThreshold(_), ControlValue::Int(v)) => {
            PropertyValue::BrightnessThreshold(from_percent(v))
        }
        (Binding::Contrast(_), ControlValue::Int(v)) => PropertyValue::Contrast(from_percent(v)),
        (Binding::PrimaryOpacity(_), ControlValue::Int(v)) => {
            PropertyValue::PrimaryOpacity(from_percent(v))
        }
        (Binding::SecondaryOpacity(_), ControlValue::Int(v)) => {
            PropertyValue::SecondaryOpacity(from_percent(v))
        }
        (Binding::PrimaryColorMap(_), ControlValue::Index(index)) => {
            match ColorMap::from_index(index) {
                Ok(map) => PropertyValue::PrimaryColorMap(map),
                Err(error) => {
                    warn!(%error, "ignoring color map selection");
                    return None;
                }
            }
        }
        (Binding::SecondaryColorMap(_), ControlValue::Index(index)) => {
            match ColorMap::from_index(index) {
                Ok(map) => PropertyValue::SecondaryColorMap(map),
                Err(error) => {
                    warn!(%error, "ignoring color map selection");
                    return None;
                }
            }
        }
        (Binding::DisplayType(_, display_type), ControlValue::Checked(checked)) => {
            if !checked {
                return None;
            }
            PropertyValue::DisplayType(display_type)
        }
        (Binding::TracingLayer(_, layer), ControlValue::Checked(checked)) => {
            if !checked {
                return None;
            }
            PropertyValue::TracingLayer(layer)
        }
        (Binding::DrawMode(_, mode), ControlValue::Checked(checked)) => {
            if !checked {
                return None;
            }
            PropertyValue::DrawMode(mode)
        }
        (Binding::DrawModePages(_), ControlValue::Index(index)) => {
            match DrawMode::from_index(index) {
                Ok(mode) => PropertyValue::DrawMode(mode),
                Err(error) => {
                    warn!(%error, "ignoring draw mode page");
                    return None;
                }
            }
        }
        (Binding::LayerVisible(_, layer), ControlValue::Checked(visible)) => {
            PropertyValue::LayerVisible(layer, visible)
        }
        (binding, value) => {
            warn!(?binding, ?value, "user event value does not fit its binding");
            return None;
        }
    };

    let (view, _) = property_of(binding)?;
    Some(PropertyChange::new(viewer, bindings, view, value).into())
}
