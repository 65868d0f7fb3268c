use crate::app::{Intent, PlaygroundState};
use crate::windows::PanelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    Character(char),
    Digit(u8),
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShortcutModifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl ShortcutModifiers {
    pub const fn new(ctrl: bool, shift: bool) -> Self {
        Self { ctrl, shift }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    pub code_editor_focused: bool,
}

impl InputContext {
    pub fn from_state(state: &PlaygroundState) -> Self {
        Self {
            code_editor_focused: state.code().is_focused(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    TogglePanel(PanelId),
    ToggleMeasureOverlay,
    ToggleTokenOverlay,
    ToggleLayerView,
    ToggleTheme,
    BlurCodeEditor,
}

impl ShortcutAction {
    /// Toggles read the current flag so the intent states the target value.
    pub fn into_intent(self, state: &PlaygroundState) -> Intent {
        let view = state.view();
        match self {
            Self::Undo => Intent::Undo,
            Self::Redo => Intent::Redo,
            Self::TogglePanel(panel) => Intent::TogglePanel { panel },
            Self::ToggleMeasureOverlay => Intent::SetMeasureOverlay {
                enabled: !view.measure_overlay(),
            },
            Self::ToggleTokenOverlay => Intent::SetTokenOverlay {
                enabled: !view.token_overlay(),
            },
            Self::ToggleLayerView => Intent::SetLayerView {
                enabled: !view.layer_view(),
            },
            Self::ToggleTheme => Intent::ToggleTheme,
            Self::BlurCodeEditor => Intent::CodeBlur,
        }
    }
}

fn resolve_code_editor_shortcut(key: ShortcutKey) -> Option<ShortcutAction> {
    match key {
        ShortcutKey::Escape => Some(ShortcutAction::BlurCodeEditor),
        _ => None,
    }
}

fn resolve_panel_digit(digit: u8) -> Option<PanelId> {
    match digit {
        1 => Some(PanelId::Control),
        2 => Some(PanelId::Code),
        3 => Some(PanelId::Console),
        _ => None,
    }
}

fn resolve_stage_shortcut(key: ShortcutKey, modifiers: ShortcutModifiers) -> Option<ShortcutAction> {
    match (key, modifiers.ctrl, modifiers.shift) {
        (ShortcutKey::Character('z'), true, false) => Some(ShortcutAction::Undo),
        (ShortcutKey::Character('z'), true, true) | (ShortcutKey::Character('y'), true, false) => {
            Some(ShortcutAction::Redo)
        }
        (ShortcutKey::Digit(digit), true, false) => {
            resolve_panel_digit(digit).map(ShortcutAction::TogglePanel)
        }
        (ShortcutKey::Character('j'), true, false) => Some(ShortcutAction::ToggleTheme),
        (ShortcutKey::Character('m'), false, false) => Some(ShortcutAction::ToggleMeasureOverlay),
        (ShortcutKey::Character('t'), false, false) => Some(ShortcutAction::ToggleTokenOverlay),
        (ShortcutKey::Character('d'), false, false) => Some(ShortcutAction::ToggleLayerView),
        _ => None,
    }
}

/// While the code editor has focus, only Escape is claimed so the text field
/// keeps its own undo and typing.
pub fn resolve_shortcut(
    key: ShortcutKey,
    modifiers: ShortcutModifiers,
    context: InputContext,
) -> Option<ShortcutAction> {
    if context.code_editor_focused {
        return resolve_code_editor_shortcut(key);
    }

    resolve_stage_shortcut(key, modifiers)
}
