//! Open/closed and stacking state for the floating panels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Control,
    Code,
    Console,
}

impl PanelId {
    pub const ALL: [Self; 3] = [Self::Control, Self::Code, Self::Console];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Control => "control",
            Self::Code => "code",
            Self::Console => "console",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Control => "Controls",
            Self::Code => "Code",
            Self::Console => "Console",
        }
    }

    const fn initial_layout(self) -> (WindowPosition, u32) {
        match self {
            Self::Control => (WindowPosition::new(-380, -40), 1),
            Self::Code => (WindowPosition::new(380, -160), 2),
            Self::Console => (WindowPosition::new(380, 200), 3),
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown panel id")]
pub struct UnknownPanel;

impl FromStr for PanelId {
    type Err = UnknownPanel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == value)
            .ok_or(UnknownPanel)
    }
}

/// Offset from the centered stage anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    pub id: PanelId,
    pub title: &'static str,
    pub open: bool,
    pub z_order: u32,
    pub position: WindowPosition,
}

impl WindowState {
    fn initial(id: PanelId) -> Self {
        let (position, z_order) = id.initial_layout();
        Self {
            id,
            title: id.title(),
            open: true,
            z_order,
            position,
        }
    }
}

/// Fixed set of panels. Every z-order assignment is `max + 1`, so values stay
/// unique and the front window is always the single maximum.
#[derive(Debug, Clone)]
pub struct WindowManager {
    windows: Vec<WindowState>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self {
            windows: PanelId::ALL.into_iter().map(WindowState::initial).collect(),
        }
    }

    pub fn windows(&self) -> &[WindowState] {
        &self.windows
    }

    pub fn get(&self, id: PanelId) -> Option<&WindowState> {
        self.windows.iter().find(|window| window.id == id)
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.get(id).is_some_and(|window| window.open)
    }

    pub fn front(&self) -> Option<PanelId> {
        self.windows
            .iter()
            .max_by_key(|window| window.z_order)
            .map(|window| window.id)
    }

    /// Windows back to front.
    pub fn stacking_order(&self) -> Vec<PanelId> {
        let mut ordered: Vec<&WindowState> = self.windows.iter().collect();
        ordered.sort_by_key(|window| window.z_order);
        ordered.into_iter().map(|window| window.id).collect()
    }

    fn max_z_order(&self) -> u32 {
        self.windows
            .iter()
            .map(|window| window.z_order)
            .max()
            .unwrap_or(0)
    }

    /// Flip the open flag; a window that opens comes to the front. Returns the
    /// new open flag, or `None` for a panel that is not managed.
    pub fn toggle(&mut self, id: PanelId) -> Option<bool> {
        let next_z = self.max_z_order() + 1;
        let window = self.windows.iter_mut().find(|window| window.id == id)?;
        window.open = !window.open;
        if window.open {
            window.z_order = next_z;
        }
        tracing::debug!(panel = %id, open = window.open, z_order = window.z_order, "toggle panel");
        Some(window.open)
    }

    /// Close an open window. Its z-order is kept until it reopens.
    pub fn close(&mut self, id: PanelId) -> bool {
        if !self.is_open(id) {
            return false;
        }
        self.toggle(id).is_some()
    }

    pub fn open(&mut self, id: PanelId) -> bool {
        if self.get(id).is_none() || self.is_open(id) {
            return false;
        }
        self.toggle(id).is_some()
    }

    /// Returns `false` when `id` is already frontmost, so callers can skip
    /// a redundant update.
    pub fn bring_to_front(&mut self, id: PanelId) -> bool {
        let max = self.max_z_order();
        let Some(window) = self.windows.iter_mut().find(|window| window.id == id) else {
            return false;
        };
        if window.z_order == max {
            return false;
        }
        window.z_order = max + 1;
        tracing::debug!(panel = %id, z_order = window.z_order, "bring panel to front");
        true
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout_has_console_in_front() {
        let windows = WindowManager::new();
        assert_eq!(
            windows.stacking_order(),
            vec![PanelId::Control, PanelId::Code, PanelId::Console]
        );
        assert_eq!(windows.front(), Some(PanelId::Console));
        assert!(PanelId::ALL.iter().all(|id| windows.is_open(*id)));
    }

    #[test]
    fn toggle_closed_keeps_z_order_and_reopen_brings_to_front() {
        let mut windows = WindowManager::new();
        assert_eq!(windows.toggle(PanelId::Control), Some(false));
        assert_eq!(windows.get(PanelId::Control).unwrap().z_order, 1);

        assert_eq!(windows.toggle(PanelId::Control), Some(true));
        assert_eq!(windows.get(PanelId::Control).unwrap().z_order, 4);
        assert_eq!(windows.front(), Some(PanelId::Control));
    }

    #[test]
    fn bring_to_front_is_no_op_for_front_window() {
        let mut windows = WindowManager::new();
        assert!(!windows.bring_to_front(PanelId::Console));
        assert_eq!(windows.get(PanelId::Console).unwrap().z_order, 3);

        assert!(windows.bring_to_front(PanelId::Control));
        assert_eq!(windows.get(PanelId::Control).unwrap().z_order, 4);
        assert_eq!(windows.front(), Some(PanelId::Control));
    }

    #[test]
    fn close_and_open_only_act_on_state_change() {
        let mut windows = WindowManager::new();
        assert!(!windows.open(PanelId::Code));
        assert!(windows.close(PanelId::Code));
        assert!(!windows.close(PanelId::Code));
        assert!(windows.open(PanelId::Code));
        assert_eq!(windows.front(), Some(PanelId::Code));
    }

    #[test]
    fn positions_never_move() {
        let mut windows = WindowManager::new();
        let before: Vec<_> = windows.windows().iter().map(|w| w.position).collect();
        windows.toggle(PanelId::Code);
        windows.toggle(PanelId::Code);
        windows.bring_to_front(PanelId::Control);
        let after: Vec<_> = windows.windows().iter().map(|w| w.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn panel_ids_parse_from_names() {
        assert_eq!("console".parse::<PanelId>(), Ok(PanelId::Console));
        assert_eq!("inspector".parse::<PanelId>(), Err(UnknownPanel));
    }
}
