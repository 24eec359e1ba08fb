//! Mount/unmount choreography for elements that fade out before they go away.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    Absent,
    Present,
    /// Still mounted, playing the exit animation.
    Exiting,
}

impl Presence {
    pub fn show(self) -> Self {
        Presence::Present
    }

    pub fn hide(self) -> Self {
        match self {
            Presence::Absent => Presence::Absent,
            Presence::Present | Presence::Exiting => Presence::Exiting,
        }
    }

    pub fn exit_elapsed(self) -> Self {
        match self {
            Presence::Exiting => Presence::Absent,
            other => other,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != Presence::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_out_before_unmounting() {
        let p = Presence::default().show();
        assert_eq!(p, Presence::Present);
        let p = p.hide();
        assert_eq!(p, Presence::Exiting);
        assert!(p.is_mounted());
        assert_eq!(p.exit_elapsed(), Presence::Absent);
    }

    #[test]
    fn showing_again_interrupts_exit() {
        let p = Presence::Present.hide().show();
        assert_eq!(p, Presence::Present);
        assert_eq!(p.exit_elapsed(), Presence::Present);
    }

    #[test]
    fn hiding_absent_is_a_no_op() {
        assert_eq!(Presence::Absent.hide(), Presence::Absent);
        assert!(!Presence::Absent.is_mounted());
    }
}
