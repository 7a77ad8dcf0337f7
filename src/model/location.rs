use serde::{Deserialize, Serialize};

use super::{ModelError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationAxis {
    Sagittal,
    Coronal,
    Axial,
    Time,
}

impl LocationAxis {
    /// Fixed order used for descriptions and control updates.
    pub const ALL: [LocationAxis; 4] = [
        LocationAxis::Sagittal,
        LocationAxis::Coronal,
        LocationAxis::Axial,
        LocationAxis::Time,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sagittal => "sagittal",
            Self::Coronal => "coronal",
            Self::Axial => "axial",
            Self::Time => "time",
        }
    }
}

/// Size of the loaded fat/water volume in voxels and time points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeExtent {
    pub width: usize,
    pub height: usize,
    pub slices: usize,
    pub time_points: usize,
}

impl Default for VolumeExtent {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            slices: 64,
            time_points: 1,
        }
    }
}

impl VolumeExtent {
    pub fn axis_len(&self, axis: LocationAxis) -> usize {
        match axis {
            LocationAxis::Sagittal => self.width,
            LocationAxis::Coronal => self.height,
            LocationAxis::Axial => self.slices,
            LocationAxis::Time => self.time_points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.slices == 0 || self.time_points == 0
    }
}

/// Cursor through the 4D volume, shared by the axial and coronal views.
///
/// As a change request, an axis holding [`CursorLocation::NO_CHANGE`] keeps its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CursorLocation {
    pub sagittal: i32,
    pub coronal: i32,
    pub axial: i32,
    pub time: i32,
}

impl CursorLocation {
    pub const NO_CHANGE: i32 = -1;

    pub fn new(sagittal: i32, coronal: i32, axial: i32, time: i32) -> Self {
        Self {
            sagittal,
            coronal,
            axial,
            time,
        }
    }

    /// A request that changes nothing; combine with [`CursorLocation::with_axis`].
    pub fn unchanged() -> Self {
        Self::new(
            Self::NO_CHANGE,
            Self::NO_CHANGE,
            Self::NO_CHANGE,
            Self::NO_CHANGE,
        )
    }

    pub fn axis(&self, axis: LocationAxis) -> i32 {
        match axis {
            LocationAxis::Sagittal => self.sagittal,
            LocationAxis::Coronal => self.coronal,
            LocationAxis::Axial => self.axial,
            LocationAxis::Time => self.time,
        }
    }

    pub fn with_axis(mut self, axis: LocationAxis, value: i32) -> Self {
        match axis {
            LocationAxis::Sagittal => self.sagittal = value,
            LocationAxis::Coronal => self.coronal = value,
            LocationAxis::Axial => self.axial = value,
            LocationAxis::Time => self.time = value,
        }
        self
    }

    /// Substitutes the current value for every axis of `request` left at `NO_CHANGE`.
    pub fn resolve(&self, request: CursorLocation) -> CursorLocation {
        LocationAxis::ALL
            .iter()
            .fold(*self, |location, axis| match request.axis(*axis) {
                Self::NO_CHANGE => location,
                value => location.with_axis(*axis, value),
            })
    }

    pub fn changed_axes(&self, other: &CursorLocation) -> Vec<LocationAxis> {
        LocationAxis::ALL
            .iter()
            .copied()
            .filter(|axis| self.axis(*axis) != other.axis(*axis))
            .collect()
    }

    pub fn validate(&self, extent: &VolumeExtent) -> Result<()> {
        for axis in LocationAxis::ALL {
            let value = self.axis(axis);
            let len = extent.axis_len(axis);
            if value < 0 || value as usize >= len {
                return Err(ModelError::LocationOutOfRange {
                    axis: axis.label(),
                    value,
                    extent: len,
                });
            }
        }
        Ok(())
    }
}
