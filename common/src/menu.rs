// mobile navigation menu
//
// nav class, overlay class, the toggle's aria-expanded/glyph and body scroll locking all move in
// lockstep, so they are derived from one bool rather than toggled independently
pub const OPEN_GLYPH: &str = "\u{2715}";
pub const CLOSED_GLYPH: &str = "\u{2630}";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MenuState {
    open: bool,
}

/// Everything the page has to reflect for a given menu state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuPresentation {
    pub nav_open: bool,
    pub overlay_active: bool,
    pub aria_expanded: &'static str,
    pub glyph: &'static str,
    pub body_overflow: &'static str,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> MenuPresentation {
        self.open = !self.open;
        self.presentation()
    }

    /// Close the menu if it is open, returning the new presentation only when something changed.
    pub fn close(&mut self) -> Option<MenuPresentation> {
        self.open.then(|| self.toggle())
    }

    pub fn presentation(&self) -> MenuPresentation {
        MenuPresentation {
            nav_open: self.open,
            overlay_active: self.open,
            aria_expanded: if self.open { "true" } else { "false" },
            glyph: if self.open { OPEN_GLYPH } else { CLOSED_GLYPH },
            body_overflow: if self.open { "hidden" } else { "" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_moves_everything_together() {
        let mut menu = MenuState::default();

        let open = menu.toggle();
        assert!(menu.is_open());
        assert!(open.nav_open && open.overlay_active);
        assert_eq!(open.aria_expanded, "true");
        assert_eq!(open.glyph, "✕");
        assert_eq!(open.body_overflow, "hidden");

        let closed = menu.toggle();
        assert!(!closed.nav_open && !closed.overlay_active);
        assert_eq!(closed.aria_expanded, "false");
        assert_eq!(closed.glyph, "☰");
        assert_eq!(closed.body_overflow, "");
    }

    #[test]
    fn test_close_only_acts_when_open() {
        let mut menu = MenuState::default();
        assert_eq!(menu.close(), None);

        menu.toggle();
        let closed = menu.close();
        assert_eq!(closed.map(|p| p.nav_open), Some(false));
        assert!(!menu.is_open());
    }
}
