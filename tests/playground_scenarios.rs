use std::cell::Cell;
use std::rc::Rc;

use susplay::button::{PropertyPatch, Size, Variant};
use susplay::clipboard::MemoryClipboard;
use susplay::event_log::{LogClock, LogSink};
use susplay::theme::{resolve, Breakpoint, ThemeName};
use susplay::windows::PanelId;
use susplay::{Intent, Playground, PlaygroundSettings};

struct StaticClock;

impl LogClock for StaticClock {
    fn timestamp(&self) -> String {
        "09:30:00".to_string()
    }
}

fn playground() -> Playground {
    Playground::with_services(
        PlaygroundSettings::default(),
        Box::new(MemoryClipboard::default()),
        LogSink::with_clock(Box::new(StaticClock)),
    )
}

#[test]
fn default_size_edit_undo_relabel_scenario() {
    let mut playground = playground();
    let state = playground.state();
    assert_eq!(state.snapshot().label, "SusButton");
    assert_eq!(state.snapshot().variant, Variant::Primary);
    assert_eq!(state.snapshot().size, Size::M);

    playground.dispatch(PropertyPatch::size(Size::L));
    let history = playground.state().history();
    assert_eq!(history.current().size, Size::L);
    assert_eq!(history.past().len(), 1);
    assert_eq!(history.future().len(), 0);

    playground.dispatch(Intent::Undo);
    let history = playground.state().history();
    assert_eq!(history.current().size, Size::M);
    assert_eq!(history.past().len(), 0);
    assert_eq!(history.future().len(), 1);
    assert_eq!(history.future()[0].size, Size::L);

    playground.dispatch(PropertyPatch::label("X"));
    assert_eq!(playground.state().history().future().len(), 0);
}

#[test]
fn sixty_label_edits_keep_fifty_most_recent_entries() {
    let mut playground = playground();
    for index in 0..60 {
        playground.dispatch(PropertyPatch::label(format!("label {index}")));
    }

    let messages: Vec<String> = playground
        .state()
        .log()
        .entries()
        .map(|entry| entry.message.clone())
        .collect();
    assert_eq!(messages.len(), 50);
    assert!(messages[0].ends_with("→ \"label 10\""));
    assert!(messages[49].ends_with("→ \"label 59\""));
}

#[test]
fn observers_run_once_per_changing_dispatch() {
    let mut playground = playground();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    playground.subscribe(move |_, _| counter.set(counter.get() + 1));

    playground.dispatch(Intent::FocusPanel {
        panel: PanelId::Console,
    });
    playground.dispatch(Intent::Redo);
    assert_eq!(calls.get(), 0);

    playground.dispatch(Intent::TogglePanel {
        panel: PanelId::Control,
    });
    playground.dispatch(Intent::SetMeasureOverlay { enabled: true });
    assert_eq!(calls.get(), 2);
    assert_eq!(playground.state().version(), 2);
}

#[test]
fn theme_switch_changes_button_appearance() {
    let mut playground = playground();
    let light = playground.state().appearance();

    playground.dispatch(Intent::SetTheme {
        theme: ThemeName::Dark,
    });
    playground.dispatch(Intent::SetViewportWidth { width: 375 });
    let dark = playground.state().appearance();

    assert_ne!(light.background, dark.background);
    assert_eq!(light.height, 40.0);
    assert_eq!(dark.height, 44.0);
    assert_eq!(playground.state().theme().breakpoint(), Breakpoint::Mobile);
}

#[test]
fn resolver_examples_from_token_tables() {
    let tablet_missing = serde_json::json!({ "mobile": "a", "desktop": "b" });
    assert_eq!(resolve(&tablet_missing, Breakpoint::Tablet), "b");

    let all = serde_json::json!({ "mobile": "a", "tablet": "c", "desktop": "b" });
    assert_eq!(resolve(&all, Breakpoint::Tablet), "c");
}
