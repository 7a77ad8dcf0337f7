use serde::{Deserialize, Serialize};

/// Arena handle of a control owned by a [`super::ControlPanel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ControlId(pub(super) usize);

impl ControlId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Slider,
    SpinBox,
    ComboBox,
    /// Checking one button of a group unchecks the others.
    RadioButton { group: u32 },
    CheckBox,
    /// Checkable, exclusive within its group like a radio button.
    PushButton { group: u32 },
    StackedPages,
}

impl ControlKind {
    pub fn initial_value(self) -> ControlValue {
        match self {
            Self::Slider | Self::SpinBox => ControlValue::Int(0),
            Self::ComboBox | Self::StackedPages => ControlValue::Index(0),
            Self::RadioButton { .. } | Self::CheckBox | Self::PushButton { .. } => {
                ControlValue::Checked(false)
            }
        }
    }

    pub fn accepts(self, value: &ControlValue) -> bool {
        matches!(
            (self, value),
            (Self::Slider | Self::SpinBox, ControlValue::Int(_))
                | (Self::ComboBox | Self::StackedPages, ControlValue::Index(_))
                | (
                    Self::RadioButton { .. } | Self::CheckBox | Self::PushButton { .. },
                    ControlValue::Checked(_)
                )
        )
    }

    pub fn exclusive_group(self) -> Option<u32> {
        match self {
            Self::RadioButton { group } | Self::PushButton { group } => Some(group),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlValue {
    Int(i32),
    Index(usize),
    Checked(bool),
}

/// Who changed a control. History-sourced changes must never produce new commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateSource {
    User,
    History,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirroredControl {
    pub kind: ControlKind,
    pub label: String,
    pub value: ControlValue,
    pub blocked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlEvent {
    pub control: ControlId,
    pub value: ControlValue,
    pub source: UpdateSource,
}

/// One value a command writes into a control when it applies or reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorWrite {
    pub control: ControlId,
    pub value: ControlValue,
}

impl MirrorWrite {
    pub fn new(control: ControlId, value: ControlValue) -> Self {
        Self { control, value }
    }
}
