use serde_json::{json, Value};

use super::ThemeName;

/// Color table for `name`. Every variant carries the same keys in both palettes.
pub fn palette(name: ThemeName) -> Value {
    match name {
        ThemeName::Light => light_palette(),
        ThemeName::Dark => dark_palette(),
    }
}

fn light_palette() -> Value {
    json!({
        "canvas": "#FAFAFA",
        "surface": "#FFFFFF",
        "text": "#09090B",
        "textMuted": "#52525B",
        "border": "rgba(9, 9, 11, 0.12)",
        "focusRing": "#2B63FF",
        "measure": "#E5484D",
        "tokenTag": "#7C3AED",
        "primary": variant("#2B63FF", "#1F4FE0", "#173DB3", "#FFFFFF", "#2B63FF"),
        "secondary": variant("#E4E4E7", "#D4D4D8", "#A1A1AA", "#09090B", "#D4D4D8"),
        "tertiary": variant("transparent", "rgba(43, 99, 255, 0.08)", "rgba(43, 99, 255, 0.16)", "#2B63FF", "#2B63FF"),
        "success": variant("#16A34A", "#15803D", "#166534", "#FFFFFF", "#16A34A"),
        "fail": variant("#DC2626", "#B91C1C", "#991B1B", "#FFFFFF", "#DC2626"),
        "ghost": variant("transparent", "rgba(9, 9, 11, 0.06)", "rgba(9, 9, 11, 0.12)", "#09090B", "transparent")
    })
}

fn dark_palette() -> Value {
    json!({
        "canvas": "#09090B",
        "surface": "#18181B",
        "text": "#FAFAFA",
        "textMuted": "#A1A1AA",
        "border": "rgba(250, 250, 250, 0.14)",
        "focusRing": "#7AA2FF",
        "measure": "#FF6369",
        "tokenTag": "#A78BFA",
        "primary": variant("#4C7DFF", "#6690FF", "#3366F0", "#09090B", "#4C7DFF"),
        "secondary": variant("#27272A", "#3F3F46", "#52525B", "#FAFAFA", "#3F3F46"),
        "tertiary": variant("transparent", "rgba(122, 162, 255, 0.12)", "rgba(122, 162, 255, 0.2)", "#7AA2FF", "#7AA2FF"),
        "success": variant("#22C55E", "#4ADE80", "#16A34A", "#09090B", "#22C55E"),
        "fail": variant("#EF4444", "#F87171", "#DC2626", "#09090B", "#EF4444"),
        "ghost": variant("transparent", "rgba(250, 250, 250, 0.08)", "rgba(250, 250, 250, 0.14)", "#FAFAFA", "transparent")
    })
}

fn variant(bg: &str, bg_hover: &str, bg_active: &str, fg: &str, border: &str) -> Value {
    json!({
        "bg": bg,
        "bgHover": bg_hover,
        "bgActive": bg_active,
        "fg": fg,
        "border": border
    })
}
