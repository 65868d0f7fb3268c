//! Property model for the inspected SusButton.

pub mod appearance;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use appearance::ButtonAppearance;

pub const DEFAULT_LABEL: &str = "SusButton";
pub const DEFAULT_ICON: &str = "sparkles";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to parse button properties: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Success,
    Fail,
    Ghost,
}

impl Variant {
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Success,
        Self::Fail,
        Self::Ghost,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Success => "success",
            Self::Fail => "fail",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xl,
    L,
    #[default]
    M,
    S,
    Xs,
}

impl Size {
    pub const ALL: [Self; 5] = [Self::Xl, Self::L, Self::M, Self::S, Self::Xs];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xl => "xl",
            Self::L => "l",
            Self::M => "m",
            Self::S => "s",
            Self::Xs => "xs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Radius {
    #[serde(rename = "sharp")]
    Sharp,
    #[serde(rename = "4")]
    Px4,
    #[default]
    #[serde(rename = "8")]
    Px8,
    #[serde(rename = "16")]
    Px16,
    #[serde(rename = "pill")]
    Pill,
}

impl Radius {
    pub const ALL: [Self; 5] = [Self::Sharp, Self::Px4, Self::Px8, Self::Px16, Self::Pill];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sharp => "sharp",
            Self::Px4 => "4",
            Self::Px8 => "8",
            Self::Px16 => "16",
            Self::Pill => "pill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IconPlacement {
    #[default]
    None,
    Left,
    Right,
    IconOnly,
}

impl IconPlacement {
    pub const ALL: [Self; 4] = [Self::None, Self::Left, Self::Right, Self::IconOnly];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
            Self::IconOnly => "icon-only",
        }
    }
}

/// One complete configuration of the button.
///
/// Values are never edited in place: every change builds a new snapshot
/// through [`PropertySnapshot::with_patch`]. The forced interaction flags are
/// independent here; precedence is applied by [`InteractionState::effective`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PropertySnapshot {
    pub label: String,
    #[serde(rename = "type")]
    pub variant: Variant,
    pub size: Size,
    pub radius: Radius,
    #[serde(rename = "iconPosition")]
    pub icon_placement: IconPlacement,
    pub icon: String,
    pub disabled: bool,
    pub force_hover: bool,
    pub force_focus: bool,
    pub force_active: bool,
}

impl Default for PropertySnapshot {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            variant: Variant::default(),
            size: Size::default(),
            radius: Radius::default(),
            icon_placement: IconPlacement::default(),
            icon: DEFAULT_ICON.to_string(),
            disabled: false,
            force_hover: false,
            force_focus: false,
            force_active: false,
        }
    }
}

/// Partial update emitted by control surfaces ("set field X" or "set fields {...}").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyPatch {
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub variant: Option<Variant>,
    pub size: Option<Size>,
    pub radius: Option<Radius>,
    #[serde(rename = "iconPosition")]
    pub icon_placement: Option<IconPlacement>,
    pub icon: Option<String>,
    pub disabled: Option<bool>,
    pub force_hover: Option<bool>,
    pub force_focus: Option<bool>,
    pub force_active: Option<bool>,
}

impl PropertyPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn variant(variant: Variant) -> Self {
        Self {
            variant: Some(variant),
            ..Self::default()
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn radius(radius: Radius) -> Self {
        Self {
            radius: Some(radius),
            ..Self::default()
        }
    }

    pub fn icon_placement(icon_placement: IconPlacement) -> Self {
        Self {
            icon_placement: Some(icon_placement),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: &'static str,
    pub before: String,
    pub after: String,
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} → {}", self.field, self.before, self.after)
    }
}

impl PropertySnapshot {
    pub fn with_patch(&self, patch: &PropertyPatch) -> Self {
        Self {
            label: patch.label.clone().unwrap_or_else(|| self.label.clone()),
            variant: patch.variant.unwrap_or(self.variant),
            size: patch.size.unwrap_or(self.size),
            radius: patch.radius.unwrap_or(self.radius),
            icon_placement: patch.icon_placement.unwrap_or(self.icon_placement),
            icon: patch.icon.clone().unwrap_or_else(|| self.icon.clone()),
            disabled: patch.disabled.unwrap_or(self.disabled),
            force_hover: patch.force_hover.unwrap_or(self.force_hover),
            force_focus: patch.force_focus.unwrap_or(self.force_focus),
            force_active: patch.force_active.unwrap_or(self.force_active),
        }
    }

    /// Fields that differ from `previous`, in declaration order.
    pub fn changes_from(&self, previous: &Self) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        let mut push = |field: &'static str, before: String, after: String| {
            if before != after {
                changes.push(FieldChange {
                    field,
                    before,
                    after,
                });
            }
        };

        push("label", quoted(&previous.label), quoted(&self.label));
        push(
            "type",
            previous.variant.as_str().into(),
            self.variant.as_str().into(),
        );
        push("size", previous.size.as_str().into(), self.size.as_str().into());
        push(
            "radius",
            previous.radius.as_str().into(),
            self.radius.as_str().into(),
        );
        push(
            "iconPosition",
            previous.icon_placement.as_str().into(),
            self.icon_placement.as_str().into(),
        );
        push("icon", quoted(&previous.icon), quoted(&self.icon));
        push(
            "disabled",
            previous.disabled.to_string(),
            self.disabled.to_string(),
        );
        push(
            "forceHover",
            previous.force_hover.to_string(),
            self.force_hover.to_string(),
        );
        push(
            "forceFocus",
            previous.force_focus.to_string(),
            self.force_focus.to_string(),
        );
        push(
            "forceActive",
            previous.force_active.to_string(),
            self.force_active.to_string(),
        );

        changes
    }

    /// Serialized text shown in the code panel.
    pub fn to_code(&self) -> String {
        // Only strings, unit enums and bools: serialization is infallible here.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn from_code(code: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(code)?)
    }
}

fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}

/// Interaction appearance after applying the forced-state precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Default,
    Hover,
    Focus,
    Active,
    Disabled,
}

impl InteractionState {
    /// disabled > active > focus > hover > default
    pub const fn effective(snapshot: &PropertySnapshot) -> Self {
        if snapshot.disabled {
            Self::Disabled
        } else if snapshot.force_active {
            Self::Active
        } else if snapshot.force_focus {
            Self::Focus
        } else if snapshot.force_hover {
            Self::Hover
        } else {
            Self::Default
        }
    }
}
