use std::collections::VecDeque;

use crate::snapshot::Snapshot;

/// Linear undo/redo history of whole-canvas snapshots.
///
/// `past` holds the states captured right before each draw action, oldest
/// first. `future` holds the states that an undo stepped away from.
#[derive(Debug, Default)]
pub struct SnapshotHistory {
    past: VecDeque<Snapshot>,
    future: Vec<Snapshot>,
    /// Maximum number of `past` entries, 0 for unbounded
    limit: usize,
}

impl SnapshotHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Records the state before a new draw action.
    /// Any pending redo entries are discarded.
    pub fn record(&mut self, before: Snapshot) {
        if !self.future.is_empty() {
            log::debug!("Discarding {} redo entries", self.future.len());
            self.future.clear();
        }

        self.past.push_back(before);
        if self.limit > 0 && self.past.len() > self.limit {
            self.past.pop_front();
        }
    }

    /// Steps back one action. `current` is the visible state, which becomes
    /// redoable. Returns the snapshot to restore, or `None` if there is
    /// nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.past.pop_back()?;
        self.future.push(current);
        Some(previous)
    }

    /// Re-applies the last undone action. Returns the snapshot to restore,
    /// or `None` if there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.future.pop()?;
        self.past.push_back(current);
        Some(next)
    }

    /// Returns true if there are states that can be undone
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Returns true if there are states that can be redone
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    /// Drops both stacks
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use egui::Color32;

    fn snapshot() -> Snapshot {
        Canvas::new(4, 4, 1.0, Color32::WHITE).unwrap().snapshot()
    }

    #[test]
    fn test_empty_history_is_noop() {
        let mut history = SnapshotHistory::new(0);
        assert!(history.undo(snapshot()).is_none());
        assert!(history.redo(snapshot()).is_none());
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = SnapshotHistory::new(2);
        let first = snapshot();
        let second = snapshot();
        let third = snapshot();

        history.record(first);
        history.record(second.clone());
        history.record(third.clone());
        assert_eq!(history.undo_len(), 2);

        assert!(history.undo(snapshot()).unwrap().ptr_eq(&third));
        assert!(history.undo(snapshot()).unwrap().ptr_eq(&second));
        assert!(history.undo(snapshot()).is_none());
    }

    #[test]
    fn test_undo_moves_current_to_redo() {
        let mut history = SnapshotHistory::new(0);
        let before = snapshot();
        let current = snapshot();
        history.record(before.clone());

        let restored = history.undo(current.clone()).unwrap();
        assert!(restored.ptr_eq(&before));
        assert!(history.can_redo());

        let redone = history.redo(restored).unwrap();
        assert!(redone.ptr_eq(&current));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }
}
