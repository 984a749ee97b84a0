//! Mobile menu open/closed state

use super::icons;

/// Visibility of the stacked mobile link panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Height class for the collapsible panel
    pub fn panel_height_class(&self) -> &'static str {
        match self {
            MenuState::Closed => "h-0",
            MenuState::Open => "h-64",
        }
    }

    /// Glyph shown on the toggle button
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            MenuState::Closed => icons::MENU,
            MenuState::Open => icons::X,
        }
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open { MenuState::Open } else { MenuState::Closed }
    }
}
