use crate::model::{Vec2, ViewId};
use crate::viewer::Viewer;

/// Restores identity translation and scale on both views.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetView {
    before: [(Vec2, f32); 2],
}

impl ResetView {
    pub fn new(viewer: &Viewer) -> Self {
        Self {
            before: ViewId::ALL.map(|id| {
                let view = viewer.view(id);
                (view.translation(), view.scale())
            }),
        }
    }

    pub(super) fn apply(&self, viewer: &mut Viewer) {
        for id in ViewId::ALL {
            viewer.view_mut(id).reset_view();
        }
        viewer.redraw_mut().request_all();
    }

    pub(super) fn reverse(&self, viewer: &mut Viewer) {
        for id in ViewId::ALL {
            let (translation, scale) = self.before[id.index()];
            let view = viewer.view_mut(id);
            view.set_translation(translation);
            view.set_scale(scale);
        }
        viewer.redraw_mut().request_all();
    }
}
