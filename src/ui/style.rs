use serde_json::{json, Value};

/// Non-color design tokens. Entries keyed by `mobile` / `tablet` / `desktop`
/// are responsive and collapse to one value per breakpoint.
pub fn base_tokens() -> Value {
    json!({
        "spacing": {
            "xs": 4,
            "sm": 8,
            "md": { "mobile": 12, "desktop": 16 },
            "lg": { "mobile": 16, "tablet": 20, "desktop": 24 },
            "xl": { "mobile": 24, "desktop": 32 }
        },
        "typography": {
            "fontFamily": "Inter, system-ui, sans-serif",
            "weight": { "regular": 400, "medium": 500, "semibold": 600 },
            "size": {
                "xl": { "mobile": 18, "desktop": 20 },
                "l": { "mobile": 16, "desktop": 18 },
                "m": { "mobile": 15, "desktop": 16 },
                "s": 14,
                "xs": 12
            }
        },
        "button": {
            "height": {
                "xl": { "mobile": 52, "tablet": 54, "desktop": 56 },
                "l": { "mobile": 46, "desktop": 48 },
                "m": { "mobile": 44, "desktop": 40 },
                "s": 32,
                "xs": 24
            },
            "paddingX": {
                "xl": { "mobile": 24, "desktop": 28 },
                "l": { "mobile": 20, "desktop": 24 },
                "m": 16,
                "s": 12,
                "xs": 8
            },
            "iconSize": { "xl": 24, "l": 20, "m": 18, "s": 16, "xs": 14 },
            "gap": { "mobile": 6, "desktop": 8 },
            "focusRingWidth": 2
        },
        "radius": { "sharp": 0, "4": 4, "8": 8, "16": 16, "pill": 9999 },
        "motion": {
            "durationFast": "120ms",
            "durationBase": "200ms",
            "easing": "cubic-bezier(0.2, 0, 0, 1)"
        },
        "opacity": { "disabled": 0.4 },
        "stage": {
            "padding": { "mobile": 16, "tablet": 32, "desktop": 48 }
        }
    })
}
