use serde_json::Value;

use super::{flatten, palette, resolve, Breakpoint, ResolvedTokenTable, ThemeName};
use crate::ui::base_tokens;

/// Token tree for one (theme, breakpoint) pair: the breakpoint-resolved base
/// tokens with the theme palette merged under `colors`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    name: ThemeName,
    breakpoint: Breakpoint,
    tokens: Value,
    table: ResolvedTokenTable,
}

impl ResolvedTheme {
    pub fn build(name: ThemeName, breakpoint: Breakpoint) -> Self {
        let mut tokens = resolve(&base_tokens(), breakpoint);
        if let Value::Object(map) = &mut tokens {
            map.insert("colors".to_string(), palette(name));
        }
        let table = flatten(&tokens);

        Self {
            name,
            breakpoint,
            tokens,
            table,
        }
    }

    pub fn name(&self) -> ThemeName {
        self.name
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn tokens(&self) -> &Value {
        &self.tokens
    }

    pub fn table(&self) -> &ResolvedTokenTable {
        &self.table
    }

    pub fn token(&self, path: &str) -> Option<&Value> {
        self.table.get(path)
    }

    pub fn token_f64(&self, path: &str) -> Option<f64> {
        self.token(path).and_then(Value::as_f64)
    }

    pub fn token_str(&self, path: &str) -> Option<&str> {
        self.token(path).and_then(Value::as_str)
    }
}

/// Session-scoped theme state.
///
/// The resolved theme is rebuilt only when the (theme, breakpoint) pair
/// actually changes, and is swapped in as a whole.
#[derive(Debug)]
pub struct ThemeStore {
    resolved: ResolvedTheme,
    recompute_count: u64,
}

impl ThemeStore {
    pub fn new(name: ThemeName, breakpoint: Breakpoint) -> Self {
        Self {
            resolved: ResolvedTheme::build(name, breakpoint),
            recompute_count: 1,
        }
    }

    pub fn resolved(&self) -> &ResolvedTheme {
        &self.resolved
    }

    pub fn name(&self) -> ThemeName {
        self.resolved.name
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.resolved.breakpoint
    }

    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    pub fn set_theme(&mut self, name: ThemeName) -> bool {
        self.update(name, self.breakpoint())
    }

    pub fn toggle_theme(&mut self) -> ThemeName {
        let next = self.name().toggled();
        self.update(next, self.breakpoint());
        next
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) -> bool {
        self.update(self.name(), breakpoint)
    }

    fn update(&mut self, name: ThemeName, breakpoint: Breakpoint) -> bool {
        if name == self.name() && breakpoint == self.breakpoint() {
            return false;
        }
        tracing::debug!(
            from_theme = %self.name(),
            from_breakpoint = %self.breakpoint(),
            to_theme = %name,
            to_breakpoint = %breakpoint,
            "recompute resolved theme"
        );
        self.resolved = ResolvedTheme::build(name, breakpoint);
        self.recompute_count += 1;
        true
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeName::default(), Breakpoint::default())
    }
}
