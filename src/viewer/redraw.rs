use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{TracingLayer, ViewId};

/// Views to repaint and trace layers whose overlay must be re-uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RedrawRequest {
    pub views: BTreeSet<ViewId>,
    pub trace_layers: BTreeSet<TracingLayer>,
}

impl RedrawRequest {
    pub fn is_empty(&self) -> bool {
        self.views.is_empty() && self.trace_layers.is_empty()
    }
}

/// Coalesces redraw requests until the renderer drains them before the next frame.
#[derive(Debug, Clone, Default)]
pub struct RedrawQueue {
    pending: RedrawRequest,
}

impl RedrawQueue {
    pub fn request(&mut self, view: ViewId) {
        self.pending.views.insert(view);
    }

    pub fn request_all(&mut self) {
        self.pending.views.extend(ViewId::ALL);
    }

    pub fn mark_trace_dirty(&mut self, layer: TracingLayer) {
        self.pending.trace_layers.insert(layer);
    }

    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn peek(&self) -> &RedrawRequest {
        &self.pending
    }

    pub fn take(&mut self) -> RedrawRequest {
        std::mem::take(&mut self.pending)
    }
}
