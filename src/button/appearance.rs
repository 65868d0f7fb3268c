use super::{IconPlacement, InteractionState, PropertySnapshot};
use crate::theme::ResolvedTheme;

/// Concrete paint values for one snapshot under one resolved theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonAppearance {
    pub state: InteractionState,
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub focus_ring: Option<String>,
    pub height: f64,
    pub padding_x: f64,
    pub font_size: f64,
    pub icon_size: f64,
    pub radius: f64,
    pub opacity: f64,
    pub show_label: bool,
    pub show_icon: bool,
}

impl ButtonAppearance {
    pub fn resolve(snapshot: &PropertySnapshot, theme: &ResolvedTheme) -> Self {
        let state = InteractionState::effective(snapshot);
        let variant = snapshot.variant.as_str();
        let size = snapshot.size.as_str();
        let color = |key: &str| {
            theme
                .token_str(&format!("colors.{variant}.{key}"))
                .unwrap_or_default()
                .to_string()
        };
        let number = |path: String| theme.token_f64(&path).unwrap_or_default();

        let background = match state {
            InteractionState::Hover => color("bgHover"),
            InteractionState::Active => color("bgActive"),
            InteractionState::Default | InteractionState::Focus | InteractionState::Disabled => {
                color("bg")
            }
        };
        let focus_ring = (state == InteractionState::Focus).then(|| {
            theme
                .token_str("colors.focusRing")
                .unwrap_or_default()
                .to_string()
        });
        let opacity = if state == InteractionState::Disabled {
            theme.token_f64("opacity.disabled").unwrap_or(1.0)
        } else {
            1.0
        };

        let icon_only = snapshot.icon_placement == IconPlacement::IconOnly;
        let height = number(format!("button.height.{size}"));
        let padding_x = if icon_only {
            // Square footprint.
            0.0
        } else {
            number(format!("button.paddingX.{size}"))
        };

        Self {
            state,
            background,
            foreground: color("fg"),
            border: color("border"),
            focus_ring,
            height,
            padding_x,
            font_size: number(format!("typography.size.{size}")),
            icon_size: number(format!("button.iconSize.{size}")),
            radius: number(format!("radius.{}", snapshot.radius.as_str())).min(height / 2.0),
            opacity,
            show_label: !icon_only,
            show_icon: snapshot.icon_placement != IconPlacement::None,
        }
    }
}
