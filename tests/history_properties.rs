use proptest::prelude::*;
use susplay::button::{PropertyPatch, PropertySnapshot, Size, Variant};
use susplay::history::HistoryManager;

fn edit_strategy() -> impl Strategy<Value = PropertyPatch> {
    (
        proptest::option::of("[a-zA-Z ]{0,12}"),
        proptest::option::of(prop::sample::select(Variant::ALL.to_vec())),
        proptest::option::of(prop::sample::select(Size::ALL.to_vec())),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(label, variant, size, disabled)| PropertyPatch {
            label,
            variant,
            size,
            disabled,
            ..PropertyPatch::default()
        })
}

fn apply_all(history: &mut HistoryManager, edits: &[PropertyPatch]) {
    for edit in edits {
        let next = history.current().with_patch(edit);
        history.apply(next, true);
    }
}

proptest! {
    #[test]
    fn undo_n_then_redo_n_restores_current(
        edits in proptest::collection::vec(edit_strategy(), 1..30),
        depth_seed in any::<usize>(),
    ) {
        let mut history = HistoryManager::with_limit(PropertySnapshot::default(), 0);
        apply_all(&mut history, &edits);
        let original = history.current().clone();
        let depth = depth_seed % (edits.len() + 1);

        for _ in 0..depth {
            prop_assert!(history.undo());
        }
        prop_assert_eq!(history.future().len(), depth);
        for _ in 0..depth {
            prop_assert!(history.redo());
        }

        prop_assert_eq!(history.current(), &original);
        prop_assert!(history.future().is_empty());
        prop_assert_eq!(history.past().len(), edits.len());
    }

    #[test]
    fn recorded_apply_always_clears_future(
        edits in proptest::collection::vec(edit_strategy(), 1..20),
        undos in 0usize..20,
        final_edit in edit_strategy(),
    ) {
        let mut history = HistoryManager::default();
        apply_all(&mut history, &edits);
        for _ in 0..undos {
            history.undo();
        }

        let next = history.current().with_patch(&final_edit);
        history.apply(next, true);
        prop_assert!(history.future().is_empty());
    }

    #[test]
    fn bounded_history_never_exceeds_limit(
        edits in proptest::collection::vec(edit_strategy(), 0..80),
        limit in 1usize..20,
    ) {
        let mut history = HistoryManager::with_limit(PropertySnapshot::default(), limit);
        apply_all(&mut history, &edits);
        prop_assert!(history.past().len() <= limit);
        while history.undo() {}
        prop_assert!(history.future().len() <= limit);
    }
}

#[test]
fn empty_history_undo_and_redo_leave_state_unchanged() {
    let mut history = HistoryManager::default();
    let before = history.current().clone();

    assert!(!history.undo());
    assert!(!history.redo());
    assert_eq!(history.current(), &before);
    assert!(history.past().is_empty());
    assert!(history.future().is_empty());
}
