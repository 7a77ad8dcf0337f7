use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{TracingLayer, ViewId};
use crate::trace::{Result, TracePoint};
use crate::viewer::Viewer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEditMode {
    Add,
    Erase,
}

/// Paints or erases pixels of one layer on one axial slice.
///
/// Only pixels whose bit actually flips are kept, so reversing clears exactly
/// what applying set (and the other way round for erasing).
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEdit {
    mode: TraceEditMode,
    layer: TracingLayer,
    slice: usize,
    points: Vec<TracePoint>,
}

impl TraceEdit {
    pub fn new(
        viewer: &Viewer,
        mode: TraceEditMode,
        layer: TracingLayer,
        slice: usize,
        points: impl IntoIterator<Item = TracePoint>,
    ) -> Result<Self> {
        let mask = viewer.traces().layer(layer);
        let mut unique = BTreeSet::new();
        for point in points {
            mask.check(point.x, point.y, slice)?;
            let set = mask.is_set(point.x, point.y, slice);
            let flips = match mode {
                TraceEditMode::Add => !set,
                TraceEditMode::Erase => set,
            };
            if flips {
                unique.insert(point);
            }
        }
        Ok(Self {
            mode,
            layer,
            slice,
            points: unique.into_iter().collect(),
        })
    }

    pub fn mode(&self) -> TraceEditMode {
        self.mode
    }

    pub fn layer(&self) -> TracingLayer {
        self.layer
    }

    pub fn slice(&self) -> usize {
        self.slice
    }

    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    pub(super) fn apply(&self, viewer: &mut Viewer) {
        self.write(viewer, self.mode == TraceEditMode::Add);
    }

    pub(super) fn reverse(&self, viewer: &mut Viewer) {
        self.write(viewer, self.mode == TraceEditMode::Erase);
    }

    fn write(&self, viewer: &mut Viewer, paint: bool) {
        let traces = viewer.traces_mut();
        for point in &self.points {
            if paint {
                traces.set(self.layer, point.x, point.y, self.slice);
            } else {
                traces.reset(self.layer, point.x, point.y, self.slice);
            }
        }
        let redraw = viewer.redraw_mut();
        redraw.mark_trace_dirty(self.layer);
        redraw.request(ViewId::Axial);
    }

    pub(super) fn is_no_op(&self) -> bool {
        self.points.is_empty()
    }

    pub(super) fn description(&self) -> String {
        match self.mode {
            TraceEditMode::Add => format!("Added points to {} layer", self.layer.label()),
            TraceEditMode::Erase => format!("Erased points from {} layer", self.layer.label()),
        }
    }
}
