//! Theme selection state
//!
//! One state variable (the current theme id) and two transitions: open the
//! selection panel, choose one of the fixed ids. Choosing closes the panel.

use docuchat_core::ThemeId;

#[derive(Debug, Clone)]
pub struct ThemeSelector {
    current: ThemeId,
    panel_open: bool,
}

impl ThemeSelector {
    pub fn new(initial: ThemeId) -> Self {
        Self {
            current: initial,
            panel_open: false,
        }
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    /// Select a theme; closes the panel as a side effect
    pub fn choose(&mut self, theme: ThemeId) {
        self.current = theme;
        self.panel_open = false;
    }

    pub fn current(&self) -> ThemeId {
        self.current
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }
}

impl Default for ThemeSelector {
    fn default() -> Self {
        Self::new(ThemeId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choosing_a_theme_closes_the_panel() {
        let mut selector = ThemeSelector::default();
        assert_eq!(selector.current(), ThemeId::Cyberpunk);
        assert!(!selector.is_panel_open());

        selector.open_panel();
        assert!(selector.is_panel_open());

        selector.choose(ThemeId::Matrix);
        assert_eq!(selector.current(), ThemeId::Matrix);
        assert!(!selector.is_panel_open());
    }
}
