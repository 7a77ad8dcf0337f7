use serde::{Deserialize, Serialize};

use super::{ModelError, Result};

/// Handle of one of the two slice views owned by a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Axial,
    Coronal,
}

impl ViewId {
    pub const ALL: [ViewId; 2] = [ViewId::Axial, ViewId::Coronal];

    pub fn index(self) -> usize {
        match self {
            Self::Axial => 0,
            Self::Coronal => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Axial => "axial",
            Self::Coronal => "coronal",
        }
    }
}

/// Lookup table applied to a slice channel. Index order matches the combo box item order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorMap {
    #[default]
    Gray,
    Red,
    Green,
    Blue,
    Hot,
    Cool,
    Jet,
    Hsv,
}

impl ColorMap {
    pub const ALL: [ColorMap; 8] = [
        ColorMap::Gray,
        ColorMap::Red,
        ColorMap::Green,
        ColorMap::Blue,
        ColorMap::Hot,
        ColorMap::Cool,
        ColorMap::Jet,
        ColorMap::Hsv,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ModelError::UnknownIndex {
                kind: "color map",
                index,
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Gray => "Gray",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Hot => "Hot",
            Self::Cool => "Cool",
            Self::Jet => "Jet",
            Self::Hsv => "HSV",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SliceDisplayType {
    #[default]
    FatOnly,
    WaterOnly,
    FatFraction,
    WaterFraction,
}

impl SliceDisplayType {
    pub const ALL: [SliceDisplayType; 4] = [
        SliceDisplayType::FatOnly,
        SliceDisplayType::WaterOnly,
        SliceDisplayType::FatFraction,
        SliceDisplayType::WaterFraction,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ModelError::UnknownIndex {
                kind: "display type",
                index,
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FatOnly => "Fat only",
            Self::WaterOnly => "Water only",
            Self::FatFraction => "Fat fraction",
            Self::WaterFraction => "Water fraction",
        }
    }
}

/// Anatomical fat-tissue category a user can paint onto axial slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TracingLayer {
    /// Epicardial adipose tissue.
    #[default]
    Eat,
    /// Intermuscular adipose tissue.
    Imat,
    /// Periaortic adipose tissue.
    Paat,
    /// Pericardial adipose tissue.
    Pat,
    /// Subcutaneous adipose tissue.
    Scat,
    /// Visceral adipose tissue.
    Vat,
}

impl TracingLayer {
    pub const ALL: [TracingLayer; 6] = [
        TracingLayer::Eat,
        TracingLayer::Imat,
        TracingLayer::Paat,
        TracingLayer::Pat,
        TracingLayer::Scat,
        TracingLayer::Vat,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ModelError::UnknownIndex {
                kind: "tracing layer",
                index,
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Eat => "EAT",
            Self::Imat => "IMAT",
            Self::Paat => "PAAT",
            Self::Pat => "PAT",
            Self::Scat => "SCAT",
            Self::Vat => "VAT",
        }
    }
}

/// Pointer behavior on the axial view. Index order matches the draw-mode page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    #[default]
    Points,
    Erase,
}

impl DrawMode {
    pub const ALL: [DrawMode; 2] = [DrawMode::Points, DrawMode::Erase];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ModelError::UnknownIndex {
                kind: "draw mode",
                index,
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Points => "Points",
            Self::Erase => "Erase",
        }
    }
}
