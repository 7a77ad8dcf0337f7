use ndarray::{Array3, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::model::VolumeExtent;

use super::{Result, TraceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TracePoint {
    pub x: usize,
    pub y: usize,
}

impl TracePoint {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Painted pixels of one tracing layer, stored `[z, y, x]` over every axial slice.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceMask {
    bits: Array3<bool>,
}

impl TraceMask {
    pub fn new(extent: &VolumeExtent) -> Result<Self> {
        if extent.width == 0 || extent.height == 0 || extent.slices == 0 {
            return Err(TraceError::EmptyVolume {
                width: extent.width,
                height: extent.height,
                slices: extent.slices,
            });
        }
        Ok(Self {
            bits: Array3::from_elem((extent.slices, extent.height, extent.width), false),
        })
    }

    pub fn width(&self) -> usize {
        self.bits.shape()[2]
    }

    pub fn height(&self) -> usize {
        self.bits.shape()[1]
    }

    pub fn slices(&self) -> usize {
        self.bits.shape()[0]
    }

    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.width() && y < self.height() && z < self.slices()
    }

    pub fn check(&self, x: usize, y: usize, z: usize) -> Result<()> {
        if self.contains(x, y, z) {
            Ok(())
        } else {
            Err(TraceError::OutOfBounds {
                x,
                y,
                z,
                width: self.width(),
                height: self.height(),
                slices: self.slices(),
            })
        }
    }

    pub fn is_set(&self, x: usize, y: usize, z: usize) -> bool {
        self.bits.get((z, y, x)).copied().unwrap_or(false)
    }

    /// Paints one pixel. Returns whether the bit changed; out-of-range points are ignored.
    pub fn set(&mut self, x: usize, y: usize, z: usize) -> bool {
        self.write(x, y, z, true)
    }

    /// Clears one pixel. Returns whether the bit changed; out-of-range points are ignored.
    pub fn reset(&mut self, x: usize, y: usize, z: usize) -> bool {
        self.write(x, y, z, false)
    }

    fn write(&mut self, x: usize, y: usize, z: usize, value: bool) -> bool {
        match self.bits.get_mut((z, y, x)) {
            Some(bit) if *bit != value => {
                *bit = value;
                true
            }
            _ => false,
        }
    }

    pub fn slice(&self, z: usize) -> Option<ArrayView2<'_, bool>> {
        (z < self.slices()).then(|| self.bits.index_axis(Axis(0), z))
    }

    pub fn count_slice(&self, z: usize) -> usize {
        self.slice(z)
            .map(|slice| slice.iter().filter(|bit| **bit).count())
            .unwrap_or(0)
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }

    pub fn clear(&mut self) {
        self.bits.fill(false);
    }
}
