//! Design tokens: breakpoint resolution, light/dark palettes and the
//! memoized theme store every presentation surface reads from.

pub mod palette;
pub mod resolver;
pub mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use palette::palette;
pub use resolver::{flatten, resolve, ResolvedTokenTable};
pub use store::{ResolvedTheme, ThemeStore};

const TABLET_MIN_WIDTH: u32 = 768;
const DESKTOP_MIN_WIDTH: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Breakpoint {
    /// Reserved keys that mark a token node as responsive.
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    pub const fn for_viewport_width(width: u32) -> Self {
        if width < TABLET_MIN_WIDTH {
            Self::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown breakpoint")]
pub struct UnknownBreakpoint;

impl FromStr for Breakpoint {
    type Err = UnknownBreakpoint;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|breakpoint| breakpoint.as_str() == value)
            .ok_or(UnknownBreakpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_width_maps_to_breakpoint_buckets() {
        assert_eq!(Breakpoint::for_viewport_width(0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_viewport_width(767), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_viewport_width(768), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_viewport_width(1023), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_viewport_width(1024), Breakpoint::Desktop);
    }

    #[test]
    fn theme_name_toggles_between_light_and_dark() {
        assert_eq!(ThemeName::Light.toggled(), ThemeName::Dark);
        assert_eq!(ThemeName::Dark.toggled(), ThemeName::Light);
    }

    #[test]
    fn breakpoint_parses_reserved_names_only() {
        assert_eq!("tablet".parse::<Breakpoint>(), Ok(Breakpoint::Tablet));
        assert_eq!("watch".parse::<Breakpoint>(), Err(UnknownBreakpoint));
    }

    #[test]
    fn theme_name_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemeName::Dark).unwrap(),
            "\"dark\""
        );
        let parsed: ThemeName = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemeName::Light);
    }
}
