use serde::{Deserialize, Serialize};

use crate::button::PropertyPatch;
use crate::theme::ThemeName;
use crate::windows::PanelId;

/// Every request presentation surfaces can make. All state changes go through
/// [`super::Playground::dispatch`] with one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    SetProperties(PropertyPatch),
    Undo,
    Redo,
    TogglePanel { panel: PanelId },
    ClosePanel { panel: PanelId },
    FocusPanel { panel: PanelId },
    SetMeasureOverlay { enabled: bool },
    SetTokenOverlay { enabled: bool },
    SetLayerView { enabled: bool },
    SetLayerSpacing { value: f32 },
    SetRotateX { degrees: f32 },
    SetRotateZ { degrees: f32 },
    SetTheme { theme: ThemeName },
    ToggleTheme,
    SetViewportWidth { width: u32 },
    ButtonClicked,
    CodeFocus,
    CodeBlur,
    CodeEdit { text: String },
    CopyCode,
    ClearLog,
}

impl From<PropertyPatch> for Intent {
    fn from(patch: PropertyPatch) -> Self {
        Self::SetProperties(patch)
    }
}
