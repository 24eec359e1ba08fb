#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Wide screens always show the links, `open` only matters on mobile.
    pub fn list_class(self) -> &'static str {
        if self.open {
            "nav-links mobile-menu-open"
        } else {
            "nav-links"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
        assert_eq!(MenuState::default().list_class(), "nav-links");
    }

    #[test]
    fn toggling_twice_restores_state() {
        let closed = MenuState::default();
        let open = closed.toggled();
        assert!(open.is_open());
        assert_eq!(open.toggled(), closed);
    }
}
