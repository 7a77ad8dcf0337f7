use tracing::warn;

use crate::config::ViewerConfig;
use crate::controls::{ControlPanel, MirrorWrite, UpdateSource};
use crate::model::{CursorLocation, ViewId, ViewState, VolumeExtent};
use crate::trace::TraceStore;

use super::{RedrawQueue, Result};

/// Owns everything a command may touch: both view states, trace masks,
/// mirrored controls and pending redraws.
///
/// Commands address its parts through [`ViewId`] and [`crate::controls::ControlId`] handles.
#[derive(Debug, Clone)]
pub struct Viewer {
    views: [ViewState; 2],
    traces: TraceStore,
    controls: ControlPanel,
    redraw: RedrawQueue,
}

impl Viewer {
    /// Fails when `config` does not validate or the volume is empty.
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        config.validate()?;
        let view = ViewState::new(&config.defaults, config.scale);
        Ok(Self {
            views: [view.clone(), view],
            traces: TraceStore::new(config.volume)?,
            controls: ControlPanel::new(),
            redraw: RedrawQueue::default(),
        })
    }

    pub fn view(&self, id: ViewId) -> &ViewState {
        &self.views[id.index()]
    }

    pub fn view_mut(&mut self, id: ViewId) -> &mut ViewState {
        &mut self.views[id.index()]
    }

    pub fn extent(&self) -> VolumeExtent {
        self.traces.extent()
    }

    /// The shared cursor; both views always hold the same location.
    pub fn location(&self) -> CursorLocation {
        self.view(ViewId::Axial).location()
    }

    pub fn set_location(&mut self, location: CursorLocation) {
        for view in &mut self.views {
            view.set_location(location);
        }
    }

    pub fn traces(&self) -> &TraceStore {
        &self.traces
    }

    pub fn traces_mut(&mut self) -> &mut TraceStore {
        &mut self.traces
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ControlPanel {
        &mut self.controls
    }

    pub fn redraw(&self) -> &RedrawQueue {
        &self.redraw
    }

    pub fn redraw_mut(&mut self) -> &mut RedrawQueue {
        &mut self.redraw
    }

    /// Writes command-driven values into controls, tagged so they never echo back as commands.
    pub fn mirror(&mut self, writes: &[MirrorWrite]) {
        for write in writes {
            if let Err(error) = self
                .controls
                .set(write.control, write.value, UpdateSource::History)
            {
                warn!(%error, "skipping mirrored control update");
            }
        }
    }
}
