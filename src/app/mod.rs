//! The playground orchestrator: sole owner of all session state.

mod code_buffer;
mod intent;
mod observer;
mod view;

use crate::button::{ButtonAppearance, PropertySnapshot};
use crate::clipboard::{ClipboardBackend, WlCopyBackend};
use crate::event_log::LogSink;
use crate::history::{HistoryAction, HistoryManager, DEFAULT_HISTORY_LIMIT};
use crate::theme::{Breakpoint, ResolvedTheme, ThemeName, ThemeStore};
use crate::windows::{PanelId, WindowManager};

pub use code_buffer::CodeBuffer;
pub use intent::Intent;
pub use observer::{ChangeSet, SubscriptionId};
pub use view::{ViewOptions, LAYER_SPACING_RANGE, ROTATE_X_RANGE, ROTATE_Z_RANGE};

use observer::Subscribers;

/// Startup inputs for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaygroundSettings {
    pub theme: ThemeName,
    pub breakpoint: Breakpoint,
    pub history_limit: usize,
}

impl Default for PlaygroundSettings {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            breakpoint: Breakpoint::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Read-only view of the session handed to observers and presentation code.
#[derive(Debug)]
pub struct PlaygroundState {
    history: HistoryManager,
    windows: WindowManager,
    log: LogSink,
    theme: ThemeStore,
    view: ViewOptions,
    code: CodeBuffer,
    version: u64,
}

impl PlaygroundState {
    pub fn snapshot(&self) -> &PropertySnapshot {
        self.history.current()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn log(&self) -> &LogSink {
        &self.log
    }

    pub fn theme(&self) -> &ResolvedTheme {
        self.theme.resolved()
    }

    pub fn theme_store(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn view(&self) -> &ViewOptions {
        &self.view
    }

    pub fn code(&self) -> &CodeBuffer {
        &self.code
    }

    /// Bumped once for every dispatch that changed anything.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn appearance(&self) -> ButtonAppearance {
        ButtonAppearance::resolve(self.snapshot(), self.theme())
    }
}

pub struct Playground {
    state: PlaygroundState,
    subscribers: Subscribers,
    clipboard: Box<dyn ClipboardBackend>,
}

impl Playground {
    pub fn new(settings: PlaygroundSettings) -> Self {
        Self::with_services(
            settings,
            Box::new(WlCopyBackend::default()),
            LogSink::new(),
        )
    }

    pub fn with_services(
        settings: PlaygroundSettings,
        clipboard: Box<dyn ClipboardBackend>,
        log: LogSink,
    ) -> Self {
        let initial = PropertySnapshot::default();
        let code = CodeBuffer::new(&initial);
        tracing::debug!(?settings, "create playground session");

        Self {
            state: PlaygroundState {
                history: HistoryManager::with_limit(initial, settings.history_limit),
                windows: WindowManager::new(),
                log,
                theme: ThemeStore::new(settings.theme, settings.breakpoint),
                view: ViewOptions::default(),
                code,
                version: 0,
            },
            subscribers: Subscribers::default(),
            clipboard,
        }
    }

    pub fn state(&self) -> &PlaygroundState {
        &self.state
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&PlaygroundState, &ChangeSet) + 'static,
    ) -> SubscriptionId {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply one intent, then notify observers if anything changed.
    pub fn dispatch(&mut self, intent: impl Into<Intent>) -> ChangeSet {
        let intent = intent.into();
        tracing::debug!(?intent, "dispatch");
        let changes = self.apply_intent(intent);

        if !changes.is_empty() {
            self.state.version += 1;
            self.subscribers.notify(&self.state, &changes);
        }
        changes
    }

    fn apply_intent(&mut self, intent: Intent) -> ChangeSet {
        let mut changes = ChangeSet::default();
        let state = &mut self.state;

        match intent {
            Intent::SetProperties(patch) => {
                let next = state.snapshot().with_patch(&patch);
                self.commit_snapshot(next, "Updated", &mut changes);
            }
            Intent::Undo => self.step_history(HistoryAction::Undo, &mut changes),
            Intent::Redo => self.step_history(HistoryAction::Redo, &mut changes),
            Intent::TogglePanel { panel } => {
                if let Some(open) = state.windows.toggle(panel) {
                    let verb = if open { "Opened" } else { "Closed" };
                    state.log.record(format!("{verb} {} panel", panel.title()));
                    changes.windows = true;
                    changes.log = true;
                }
            }
            Intent::ClosePanel { panel } => {
                if state.windows.close(panel) {
                    state.log.record(format!("Closed {} panel", panel.title()));
                    changes.windows = true;
                    changes.log = true;
                }
            }
            Intent::FocusPanel { panel } => {
                changes.windows = state.windows.bring_to_front(panel);
            }
            Intent::SetMeasureOverlay { enabled } => {
                if state.view.set_measure_overlay(enabled) {
                    state
                        .log
                        .record(format!("Measurement overlay {}", on_off(enabled)));
                    changes.view = true;
                    changes.log = true;
                }
            }
            Intent::SetTokenOverlay { enabled } => {
                if state.view.set_token_overlay(enabled) {
                    state.log.record(format!("Token overlay {}", on_off(enabled)));
                    changes.view = true;
                    changes.log = true;
                }
            }
            Intent::SetLayerView { enabled } => {
                if state.view.set_layer_view(enabled) {
                    state.log.record(format!("3D layer view {}", on_off(enabled)));
                    changes.view = true;
                    changes.log = true;
                }
            }
            Intent::SetLayerSpacing { value } => {
                changes.view = state.view.set_layer_spacing(value);
            }
            Intent::SetRotateX { degrees } => {
                changes.view = state.view.set_rotate_x(degrees);
            }
            Intent::SetRotateZ { degrees } => {
                changes.view = state.view.set_rotate_z(degrees);
            }
            Intent::SetTheme { theme } => {
                if state.theme.set_theme(theme) {
                    state.log.record(format!("Theme set to {theme}"));
                    changes.theme = true;
                    changes.log = true;
                }
            }
            Intent::ToggleTheme => {
                let theme = state.theme.toggle_theme();
                state.log.record(format!("Theme set to {theme}"));
                changes.theme = true;
                changes.log = true;
            }
            Intent::SetViewportWidth { width } => {
                let breakpoint = Breakpoint::for_viewport_width(width);
                if state.theme.set_breakpoint(breakpoint) {
                    state
                        .log
                        .record(format!("Breakpoint changed to {breakpoint}"));
                    changes.theme = true;
                    changes.log = true;
                }
            }
            Intent::ButtonClicked => {
                let label = state.snapshot().label.clone();
                state.log.record(format!("\"{label}\" clicked"));
                changes.log = true;
            }
            Intent::CodeFocus => {
                changes.code = state.code.focus();
            }
            Intent::CodeBlur => {
                let snapshot = state.history.current();
                changes.code = state.code.blur(snapshot);
            }
            Intent::CodeEdit { text } => {
                if !state.code.is_focused() {
                    tracing::debug!("code edit without focus ignored");
                    return changes;
                }
                changes.code = true;
                if let Some(parsed) = state.code.edit(text) {
                    self.commit_snapshot(parsed, "Code edit updated", &mut changes);
                }
            }
            Intent::CopyCode => {
                let message = match self.clipboard.copy_text(state.code.text()) {
                    Ok(()) => "Code copied to clipboard".to_string(),
                    Err(err) => {
                        tracing::warn!("clipboard copy failed: {err}");
                        format!("Copy to clipboard failed: {err}")
                    }
                };
                state.log.record(message);
                changes.log = true;
            }
            Intent::ClearLog => {
                state.log.clear();
                state.log.record("Console cleared");
                changes.log = true;
            }
        }

        changes
    }

    /// Record `next` as a new history step. Recording always discards the redo
    /// branch, even when no field differs.
    fn commit_snapshot(&mut self, next: PropertySnapshot, verb: &str, changes: &mut ChangeSet) {
        let state = &mut self.state;
        let described = next
            .changes_from(state.snapshot())
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        state.history.apply(next, true);
        let message = if described.is_empty() {
            tracing::debug!("property edit left fields unchanged");
            format!("{verb} properties (no field changed)")
        } else {
            format!("{verb} {}", described.join("; "))
        };
        state.log.record(message);
        changes.snapshot = true;
        changes.log = true;
        changes.code |= state.code.sync(state.history.current());
    }

    fn step_history(&mut self, action: HistoryAction, changes: &mut ChangeSet) {
        let state = &mut self.state;
        if !state.history.step(action) {
            return;
        }
        state.log.record(action.applied_message());
        changes.snapshot = true;
        changes.log = true;
        changes.code |= state.code.sync(state.history.current());
    }
}

impl std::fmt::Debug for Playground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Playground")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

const fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Lookup helper for surfaces that address panels by name.
pub fn panel_intent(name: &str, make: impl FnOnce(PanelId) -> Intent) -> Option<Intent> {
    name.parse::<PanelId>().ok().map(make)
}
