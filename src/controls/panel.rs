use super::{
    ControlError, ControlEvent, ControlId, ControlKind, ControlValue, MirroredControl, Result,
    UpdateSource,
};

/// Owns every mirrored control and queues their change notifications.
#[derive(Debug, Clone, Default)]
pub struct ControlPanel {
    controls: Vec<MirroredControl>,
    events: Vec<ControlEvent>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ControlKind, label: impl Into<String>) -> ControlId {
        self.controls.push(MirroredControl {
            kind,
            label: label.into(),
            value: kind.initial_value(),
            blocked: false,
        });
        ControlId(self.controls.len() - 1)
    }

    pub fn get(&self, id: ControlId) -> Option<&MirroredControl> {
        self.controls.get(id.0)
    }

    pub fn value(&self, id: ControlId) -> Option<ControlValue> {
        self.get(id).map(|control| control.value)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ControlId, &MirroredControl)> {
        self.controls
            .iter()
            .enumerate()
            .map(|(index, control)| (ControlId(index), control))
    }

    /// Writes `value` and queues a notification tagged with `source`.
    ///
    /// Returns `Ok(false)` when the control already showed `value`. Checking an
    /// exclusive button unchecks the rest of its group.
    pub fn set(&mut self, id: ControlId, value: ControlValue, source: UpdateSource) -> Result<bool> {
        let kind = self
            .get(id)
            .map(|control| control.kind)
            .ok_or(ControlError::UnknownControl(id))?;
        if !kind.accepts(&value) {
            return Err(ControlError::ValueMismatch {
                control: id,
                kind,
                value,
            });
        }
        if !self.write(id, value, source) {
            return Ok(false);
        }
        if let (Some(group), ControlValue::Checked(true)) = (kind.exclusive_group(), value) {
            let peers = self
                .iter()
                .filter(|(peer, control)| {
                    *peer != id && control.kind.exclusive_group() == Some(group)
                })
                .map(|(peer, _)| peer)
                .collect::<Vec<_>>();
            for peer in peers {
                self.write(peer, ControlValue::Checked(false), source);
            }
        }
        Ok(true)
    }

    fn write(&mut self, id: ControlId, value: ControlValue, source: UpdateSource) -> bool {
        let control = &mut self.controls[id.0];
        if control.value == value {
            return false;
        }
        control.value = value;
        if !control.blocked {
            self.events.push(ControlEvent {
                control: id,
                value,
                source,
            });
        }
        true
    }

    /// Suppresses notifications from one control. Returns the previous blocked state.
    pub fn block_notifications(&mut self, id: ControlId, blocked: bool) -> Result<bool> {
        let control = self
            .controls
            .get_mut(id.0)
            .ok_or(ControlError::UnknownControl(id))?;
        Ok(std::mem::replace(&mut control.blocked, blocked))
    }

    pub fn pending_events(&self) -> &[ControlEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drops queued notifications tagged with `source`, keeping the rest in order.
    /// Returns how many were dropped.
    pub fn discard_events(&mut self, source: UpdateSource) -> usize {
        let before = self.events.len();
        self.events.retain(|event| event.source != source);
        before - self.events.len()
    }
}
