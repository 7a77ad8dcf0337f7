use tracing::debug;

use crate::config::HistoryConfig;
use crate::viewer::Viewer;

use super::Command;

/// What [`History::push`] did with an incoming command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Appended,
    Merged,
    /// Merged into the entry below, which then cancelled out and was removed.
    Collapsed,
}

/// Linear undo history with a position.
///
/// Entries below `index` are applied, entries from `index` up are undone and
/// available to redo until the next push truncates them.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Command>,
    index: usize,
    config: HistoryConfig,
}

impl History {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            config,
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Applies `command` and records it.
    pub fn push(&mut self, command: Command, viewer: &mut Viewer) -> PushOutcome {
        command.apply(viewer);
        self.record(command)
    }

    /// Records a command whose effect is already visible in the viewer.
    pub fn record(&mut self, command: Command) -> PushOutcome {
        if self.index < self.entries.len() {
            debug!(
                dropped = self.entries.len() - self.index,
                "discarding redo entries"
            );
            self.entries.truncate(self.index);
        }

        if let Some(last) = self.entries.last_mut()
            && last.try_merge(&command)
        {
            if self.config.drop_no_op_merges && last.is_no_op() {
                let removed = self.entries.pop().map(|entry| entry.description());
                self.index = self.entries.len();
                debug!(?removed, "merged entry cancelled out");
                return PushOutcome::Collapsed;
            }
            debug!(description = %last.description(), "merged into previous entry");
            return PushOutcome::Merged;
        }

        debug!(description = %command.description(), "pushed history entry");
        self.entries.push(command);
        self.index = self.entries.len();
        self.prune();
        PushOutcome::Appended
    }

    fn prune(&mut self) {
        let Some(limit) = self.config.undo_limit else {
            return;
        };
        if self.entries.len() > limit {
            let excess = self.entries.len() - limit;
            self.entries.drain(..excess);
            self.index = self.index.saturating_sub(excess);
            debug!(excess, limit, "pruned oldest history entries");
        }
    }

    /// Reverses the entry below the position. Returns its description.
    pub fn undo(&mut self, viewer: &mut Viewer) -> Option<String> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        let command = &self.entries[self.index];
        command.reverse(viewer);
        let description = command.description();
        debug!(%description, index = self.index, "undo");
        Some(description)
    }

    /// Re-applies the entry at the position. Returns its description.
    pub fn redo(&mut self, viewer: &mut Viewer) -> Option<String> {
        let command = self.entries.get(self.index)?;
        command.apply(viewer);
        let description = command.description();
        self.index += 1;
        debug!(%description, index = self.index, "redo");
        Some(description)
    }

    /// Undoes until `index` entries remain applied. Never redoes.
    pub fn undo_to(&mut self, index: usize, viewer: &mut Viewer) -> usize {
        let mut steps = 0;
        while self.index > index && self.undo(viewer).is_some() {
            steps += 1;
        }
        steps
    }

    /// Moves the position to `index` (clamped to the history length), undoing
    /// or redoing one entry at a time. Returns the number of steps taken.
    pub fn set_index(&mut self, index: usize, viewer: &mut Viewer) -> usize {
        let target = index.min(self.entries.len());
        let mut steps = self.undo_to(target, viewer);
        while self.index < target && self.redo(viewer).is_some() {
            steps += 1;
        }
        steps
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index < self.entries.len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.index
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(Command::description)
    }

    pub fn redo_description(&self) -> Option<String> {
        self.entries.get(self.index).map(Command::description)
    }

    pub fn entries(&self) -> &[Command] {
        &self.entries
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.entries.iter().map(Command::description).collect()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }
}
