use serde::{Deserialize, Serialize};

use crate::model::{CursorLocation, PropertyValue, ViewId};
use crate::trace::TracePoint;

use super::{Result, ScriptError};

/// A recorded sequence of user intents, replayed against a fresh session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionScript {
    pub name: Option<String>,
    #[serde(default)]
    pub actions: Vec<ScriptAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptAction {
    /// Pans sharing a `gesture` label merge into one history entry.
    Pan {
        view: ViewId,
        dx: f32,
        dy: f32,
        #[serde(default)]
        gesture: Option<u64>,
    },
    Zoom {
        view: ViewId,
        delta: f32,
    },
    ResetView,
    Set {
        view: ViewId,
        value: PropertyValue,
    },
    MoveCursor {
        #[serde(default)]
        sagittal: Option<i32>,
        #[serde(default)]
        coronal: Option<i32>,
        #[serde(default)]
        axial: Option<i32>,
        #[serde(default)]
        time: Option<i32>,
    },
    AddPoints {
        points: Vec<TracePoint>,
    },
    ErasePoints {
        points: Vec<TracePoint>,
    },
    Undo,
    Redo,
    UndoTo {
        index: usize,
    },
}

impl ScriptAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pan { .. } => "pan",
            Self::Zoom { .. } => "zoom",
            Self::ResetView => "reset_view",
            Self::Set { .. } => "set",
            Self::MoveCursor { .. } => "move_cursor",
            Self::AddPoints { .. } => "add_points",
            Self::ErasePoints { .. } => "erase_points",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::UndoTo { .. } => "undo_to",
        }
    }

    /// Cursor request with omitted axes left unchanged.
    pub(super) fn cursor_request(
        sagittal: Option<i32>,
        coronal: Option<i32>,
        axial: Option<i32>,
        time: Option<i32>,
    ) -> CursorLocation {
        let keep = CursorLocation::NO_CHANGE;
        CursorLocation::new(
            sagittal.unwrap_or(keep),
            coronal.unwrap_or(keep),
            axial.unwrap_or(keep),
            time.unwrap_or(keep),
        )
    }

    fn numbers(&self) -> Vec<f32> {
        match self {
            Self::Pan { dx, dy, .. } => vec![*dx, *dy],
            Self::Zoom { delta, .. } => vec![*delta],
            Self::Set { value, .. } => value.as_f32().into_iter().collect(),
            _ => Vec::new(),
        }
    }

    fn negative_axis(&self) -> Option<i32> {
        match self {
            Self::MoveCursor {
                sagittal,
                coronal,
                axial,
                time,
            } => [sagittal, coronal, axial, time]
                .into_iter()
                .flatten()
                .copied()
                .find(|value| *value < 0),
            _ => None,
        }
    }
}

impl SessionScript {
    pub fn validate(&self) -> Result<()> {
        if self.actions.is_empty() {
            return Err(ScriptError::Parse(
                "session script must include at least one action".to_string(),
            ));
        }
        for (index, action) in self.actions.iter().enumerate() {
            if action.numbers().iter().any(|value| !value.is_finite()) {
                return Err(ScriptError::Parse(format!(
                    "action {index} (`{}`) has a non-finite value",
                    action.name()
                )));
            }
            if let Some(value) = action.negative_axis() {
                return Err(ScriptError::Parse(format!(
                    "action {index} (`{}`) requests negative slice {value}",
                    action.name()
                )));
            }
        }
        Ok(())
    }
}
