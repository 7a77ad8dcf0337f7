use std::collections::BTreeMap;

use crate::model::{TracingLayer, VolumeExtent};

use super::{Result, TraceMask};

/// One [`TraceMask`] per tracing layer, all sized to the loaded volume.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStore {
    extent: VolumeExtent,
    masks: Vec<TraceMask>,
}

impl TraceStore {
    pub fn new(extent: VolumeExtent) -> Result<Self> {
        let mask = TraceMask::new(&extent)?;
        Ok(Self {
            extent,
            masks: vec![mask; TracingLayer::ALL.len()],
        })
    }

    pub fn extent(&self) -> VolumeExtent {
        self.extent
    }

    pub fn layer(&self, layer: TracingLayer) -> &TraceMask {
        &self.masks[layer.index()]
    }

    pub fn layer_mut(&mut self, layer: TracingLayer) -> &mut TraceMask {
        &mut self.masks[layer.index()]
    }

    pub fn set(&mut self, layer: TracingLayer, x: usize, y: usize, z: usize) -> bool {
        self.layer_mut(layer).set(x, y, z)
    }

    pub fn reset(&mut self, layer: TracingLayer, x: usize, y: usize, z: usize) -> bool {
        self.layer_mut(layer).reset(x, y, z)
    }

    pub fn is_set(&self, layer: TracingLayer, x: usize, y: usize, z: usize) -> bool {
        self.layer(layer).is_set(x, y, z)
    }

    /// Painted pixel count per layer, keyed by layer label.
    pub fn counts(&self) -> BTreeMap<String, usize> {
        TracingLayer::ALL
            .iter()
            .map(|layer| (layer.label().to_string(), self.layer(*layer).count()))
            .collect()
    }
}
