use serde::{Deserialize, Serialize};

use super::{ColorMap, DrawMode, SliceDisplayType, TracingLayer};

/// Absolute-valued view properties that share one set/restore code path.
///
/// Pan, zoom and the cursor location are handled by dedicated commands because
/// they carry deltas or span both views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Brightness,
    BrightnessThreshold,
    Contrast,
    PrimaryColorMap,
    SecondaryColorMap,
    PrimaryOpacity,
    SecondaryOpacity,
    DisplayType,
    TracingLayer,
    LayerVisible(TracingLayer),
    DrawMode,
}

impl PropertyKind {
    /// Whether consecutive changes of this kind collapse into one history entry.
    pub fn merges(self) -> bool {
        !matches!(self, Self::DisplayType | Self::LayerVisible(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Brightness(f32),
    BrightnessThreshold(f32),
    Contrast(f32),
    PrimaryColorMap(ColorMap),
    SecondaryColorMap(ColorMap),
    PrimaryOpacity(f32),
    SecondaryOpacity(f32),
    DisplayType(SliceDisplayType),
    TracingLayer(TracingLayer),
    LayerVisible(TracingLayer, bool),
    DrawMode(DrawMode),
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Brightness(_) => PropertyKind::Brightness,
            Self::BrightnessThreshold(_) => PropertyKind::BrightnessThreshold,
            Self::Contrast(_) => PropertyKind::Contrast,
            Self::PrimaryColorMap(_) => PropertyKind::PrimaryColorMap,
            Self::SecondaryColorMap(_) => PropertyKind::SecondaryColorMap,
            Self::PrimaryOpacity(_) => PropertyKind::PrimaryOpacity,
            Self::SecondaryOpacity(_) => PropertyKind::SecondaryOpacity,
            Self::DisplayType(_) => PropertyKind::DisplayType,
            Self::TracingLayer(_) => PropertyKind::TracingLayer,
            Self::LayerVisible(layer, _) => PropertyKind::LayerVisible(*layer),
            Self::DrawMode(_) => PropertyKind::DrawMode,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Brightness(value)
            | Self::BrightnessThreshold(value)
            | Self::Contrast(value)
            | Self::PrimaryOpacity(value)
            | Self::SecondaryOpacity(value) => Some(*value),
            _ => None,
        }
    }
}
