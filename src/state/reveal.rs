//! One-way reveal of a page region.
//!
//! A region starts `Hidden` and becomes `Visible` the first time an
//! intersection report says at least [`REVEAL_THRESHOLD`] of it is on
//! screen. Later reports never hide it again.

use crate::config::{REVEAL_DURATION_SECS, REVEAL_OFFSET_PX, REVEAL_THRESHOLD};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// Starting state of a region. Without intersection reports nothing
    /// would ever reveal it, so it starts out visible.
    pub fn initial(observer_supported: bool) -> Self {
        if observer_supported {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    /// Feeds one intersection ratio into the state. Returns `true` only for
    /// the report that performs the Hidden -> Visible transition.
    pub fn observe(&mut self, ratio: f64) -> bool {
        match self {
            Visibility::Hidden if ratio >= REVEAL_THRESHOLD => {
                *self = Visibility::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    /// Inline style for the fade/slide-up variant of this state.
    pub fn style(self) -> String {
        let (opacity, offset) = match self {
            Visibility::Hidden => (0, REVEAL_OFFSET_PX),
            Visibility::Visible => (1, 0),
        };
        format!(
            "opacity: {}; transform: translateY({}px); transition: opacity {}s ease-out, transform {}s ease-out;",
            opacity, offset, REVEAL_DURATION_SECS, REVEAL_DURATION_SECS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(Visibility::default(), Visibility::Hidden);
    }

    #[test]
    fn fails_open_without_observer() {
        assert_eq!(Visibility::initial(true), Visibility::Hidden);
        assert_eq!(Visibility::initial(false), Visibility::Visible);

        let mut region = Visibility::initial(false);
        assert!(!region.observe(0.0));
        assert!(region.is_visible());
    }

    #[test]
    fn below_threshold_keeps_region_hidden() {
        let mut home = Visibility::default();
        assert!(!home.observe(0.05));
        assert_eq!(home, Visibility::Hidden);

        assert!(home.observe(0.15));
        assert_eq!(home, Visibility::Visible);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut region = Visibility::default();
        assert!(region.observe(REVEAL_THRESHOLD));
    }

    #[test]
    fn scrolling_out_never_hides_again() {
        let mut region = Visibility::default();
        region.observe(0.5);
        assert!(!region.observe(0.0));
        assert!(!region.observe(1.0));
        assert_eq!(region, Visibility::Visible);
    }

    #[test]
    fn regions_reveal_independently() {
        let mut regions = [Visibility::default(); 4];
        regions[1].observe(0.3);
        assert_eq!(
            regions,
            [Visibility::Hidden, Visibility::Visible, Visibility::Hidden, Visibility::Hidden]
        );
    }

    #[test]
    fn style_slides_up_from_offset() {
        let hidden = Visibility::Hidden.style();
        assert!(hidden.starts_with("opacity: 0; transform: translateY(50px);"));
        assert!(hidden.contains("opacity 0.8s"));

        let visible = Visibility::Visible.style();
        assert!(visible.starts_with("opacity: 1; transform: translateY(0px);"));
    }
}
