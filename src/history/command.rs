use crate::viewer::Viewer;

use super::{LocationChange, PanChange, PropertyChange, ResetView, TraceEdit, ZoomChange};

/// One undoable edit. Every variant captures what it needs to apply and
/// reverse itself at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetProperty(PropertyChange),
    Pan(PanChange),
    Zoom(ZoomChange),
    MoveCursor(LocationChange),
    Trace(TraceEdit),
    ResetView(ResetView),
}

impl Command {
    pub fn apply(&self, viewer: &mut Viewer) {
        match self {
            Self::SetProperty(change) => change.apply(viewer),
            Self::Pan(change) => change.apply(viewer),
            Self::Zoom(change) => change.apply(viewer),
            Self::MoveCursor(change) => change.apply(viewer),
            Self::Trace(edit) => edit.apply(viewer),
            Self::ResetView(reset) => reset.apply(viewer),
        }
    }

    pub fn reverse(&self, viewer: &mut Viewer) {
        match self {
            Self::SetProperty(change) => change.reverse(viewer),
            Self::Pan(change) => change.reverse(viewer),
            Self::Zoom(change) => change.reverse(viewer),
            Self::MoveCursor(change) => change.reverse(viewer),
            Self::Trace(edit) => edit.reverse(viewer),
            Self::ResetView(reset) => reset.reverse(viewer),
        }
    }

    /// Folds `next` into `self` when both belong to one continuous edit.
    /// Returns `false` and leaves `self` untouched otherwise.
    pub fn try_merge(&mut self, next: &Command) -> bool {
        match (self, next) {
            (Self::SetProperty(current), Self::SetProperty(next)) => current.merge(next),
            (Self::Pan(current), Self::Pan(next)) => current.merge(next),
            (Self::Zoom(current), Self::Zoom(next)) => current.merge(next),
            (Self::MoveCursor(current), Self::MoveCursor(next)) => current.merge(next),
            _ => false,
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::SetProperty(change) => change.description(),
            Self::Pan(change) => change.description(),
            Self::Zoom(change) => change.description(),
            Self::MoveCursor(change) => change.description(),
            Self::Trace(edit) => edit.description(),
            Self::ResetView(_) => "Reset view".to_string(),
        }
    }

    /// True when applying the command leaves the viewer unchanged.
    pub fn is_no_op(&self) -> bool {
        match self {
            Self::SetProperty(change) => change.is_no_op(),
            Self::Pan(change) => change.is_no_op(),
            Self::Zoom(change) => change.is_no_op(),
            Self::MoveCursor(change) => change.is_no_op(),
            Self::Trace(edit) => edit.is_no_op(),
            Self::ResetView(_) => false,
        }
    }
}

impl From<PropertyChange> for Command {
    fn from(change: PropertyChange) -> Self {
        Self::SetProperty(change)
    }
}

impl From<PanChange> for Command {
    fn from(change: PanChange) -> Self {
        Self::Pan(change)
    }
}

impl From<ZoomChange> for Command {
    fn from(change: ZoomChange) -> Self {
        Self::Zoom(change)
    }
}

impl From<LocationChange> for Command {
    fn from(change: LocationChange) -> Self {
        Self::MoveCursor(change)
    }
}

impl From<TraceEdit> for Command {
    fn from(edit: TraceEdit) -> Self {
        Self::Trace(edit)
    }
}

impl From<ResetView> for Command {
    fn from(reset: ResetView) -> Self {
        Self::ResetView(reset)
    }
}
