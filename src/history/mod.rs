//! Undo/redo history over immutable property snapshots.

use std::collections::VecDeque;

use crate::button::PropertySnapshot;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Undo,
    Redo,
}

impl HistoryAction {
    pub const fn applied_message(self) -> &'static str {
        match self {
            Self::Undo => "Undo performed",
            Self::Redo => "Redo performed",
        }
    }

    const fn empty_message(self) -> &'static str {
        match self {
            Self::Undo => "undo stack empty",
            Self::Redo => "redo stack empty",
        }
    }
}

/// Current snapshot plus `past` (oldest first) and `future` (next first).
///
/// A `limit` of zero leaves both stacks unbounded; otherwise the oldest
/// entries are dropped once a stack grows past it.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    current: PropertySnapshot,
    past: VecDeque<PropertySnapshot>,
    future: VecDeque<PropertySnapshot>,
    limit: usize,
}

impl HistoryManager {
    pub fn new(initial: PropertySnapshot) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(initial: PropertySnapshot, limit: usize) -> Self {
        Self {
            current: initial,
            past: VecDeque::new(),
            future: VecDeque::new(),
            limit,
        }
    }

    pub fn current(&self) -> &PropertySnapshot {
        &self.current
    }

    pub fn past(&self) -> &VecDeque<PropertySnapshot> {
        &self.past
    }

    pub fn future(&self) -> &VecDeque<PropertySnapshot> {
        &self.future
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Replace the current snapshot, returning the one it displaced.
    ///
    /// With `record_history` the displaced snapshot moves onto `past` and
    /// `future` is discarded; without it both stacks are left alone.
    pub fn apply(&mut self, snapshot: PropertySnapshot, record_history: bool) -> PropertySnapshot {
        let previous = std::mem::replace(&mut self.current, snapshot);
        if record_history {
            self.past.push_back(previous.clone());
            self.future.clear();
            self.enforce_limit();
        }
        tracing::debug!(
            record_history,
            past = self.past.len(),
            future = self.future.len(),
            "history apply"
        );
        previous
    }

    /// Returns `false` without touching any state when `past` is empty.
    pub fn undo(&mut self) -> bool {
        self.step(HistoryAction::Undo)
    }

    /// Returns `false` without touching any state when `future` is empty.
    pub fn redo(&mut self) -> bool {
        self.step(HistoryAction::Redo)
    }

    pub fn step(&mut self, action: HistoryAction) -> bool {
        let restored = match action {
            HistoryAction::Undo => self.past.pop_back(),
            HistoryAction::Redo => self.future.pop_front(),
        };
        let Some(restored) = restored else {
            tracing::debug!("{}", action.empty_message());
            return false;
        };

        let displaced = std::mem::replace(&mut self.current, restored);
        match action {
            HistoryAction::Undo => self.future.push_front(displaced),
            HistoryAction::Redo => self.past.push_back(displaced),
        }
        self.enforce_limit();

        tracing::debug!(
            ?action,
            past = self.past.len(),
            future = self.future.len(),
            "history step"
        );
        true
    }

    fn enforce_limit(&mut self) {
        if self.limit == 0 {
            return;
        }
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        while self.future.len() > self.limit {
            self.future.pop_back();
        }
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(PropertySnapshot::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{PropertyPatch, Size};

    fn labelled(label: &str) -> PropertySnapshot {
        PropertySnapshot::default().with_patch(&PropertyPatch::label(label))
    }

    #[test]
    fn apply_with_history_pushes_previous_and_clears_future() {
        let mut history = HistoryManager::default();
        history.apply(labelled("a"), true);
        history.apply(labelled("b"), true);
        assert!(history.undo());
        assert_eq!(history.future().len(), 1);

        let displaced = history.apply(labelled("c"), true);
        assert_eq!(displaced.label, "a");
        assert_eq!(history.current().label, "c");
        assert!(history.future().is_empty());
        assert_eq!(
            history.past().iter().map(|s| s.label.as_str()).collect::<Vec<_>>(),
            vec!["SusButton", "a"]
        );
    }

    #[test]
    fn apply_without_history_leaves_stacks_untouched() {
        let mut history = HistoryManager::default();
        history.apply(labelled("a"), true);
        history.undo();

        history.apply(labelled("quiet"), false);
        assert_eq!(history.current().label, "quiet");
        assert!(history.past().is_empty());
        assert_eq!(history.future().len(), 1);
    }

    #[test]
    fn undo_and_redo_move_snapshots_between_stacks() {
        let mut history = HistoryManager::default();
        history.apply(labelled("a"), true);
        history.apply(labelled("b"), true);

        assert!(history.undo());
        assert!(history.undo());
        assert_eq!(history.current().label, "SusButton");
        assert_eq!(
            history.future().iter().map(|s| s.label.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );

        assert!(history.redo());
        assert_eq!(history.current().label, "a");
        assert_eq!(history.past().len(), 1);
        assert_eq!(history.future().len(), 1);
    }

    #[test]
    fn empty_stacks_are_no_ops() {
        let mut history = HistoryManager::default();
        let before = history.current().clone();

        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(history.current(), &before);
        assert!(history.past().is_empty());
        assert!(history.future().is_empty());
    }

    #[test]
    fn size_change_undo_then_new_edit_discards_redo_branch() {
        let mut history = HistoryManager::default();
        let larger = history
            .current()
            .with_patch(&PropertyPatch::size(Size::L));
        history.apply(larger, true);
        assert_eq!(history.current().size, Size::L);
        assert_eq!((history.past().len(), history.future().len()), (1, 0));

        history.undo();
        assert_eq!(history.current().size, Size::M);
        assert_eq!((history.past().len(), history.future().len()), (0, 1));

        let relabelled = history.current().with_patch(&PropertyPatch::label("X"));
        history.apply(relabelled, true);
        assert!(history.future().is_empty());
        assert_eq!(history.past().len(), 1);
    }

    #[test]
    fn limit_drops_oldest_past_entries() {
        let mut history = HistoryManager::with_limit(PropertySnapshot::default(), 3);
        for index in 0..5 {
            history.apply(labelled(&index.to_string()), true);
        }

        assert_eq!(
            history.past().iter().map(|s| s.label.as_str()).collect::<Vec<_>>(),
            vec!["1", "2", "3"]
        );
        assert_eq!(history.current().label, "4");
    }

    #[test]
    fn zero_limit_keeps_everything() {
        let mut history = HistoryManager::with_limit(PropertySnapshot::default(), 0);
        for index in 0..(DEFAULT_HISTORY_LIMIT + 10) {
            history.apply(labelled(&index.to_string()), true);
        }
        assert_eq!(history.past().len(), DEFAULT_HISTORY_LIMIT + 10);
    }
}
