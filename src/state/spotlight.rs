//! Which service card, if any, currently has the pointer.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverFocus {
    card: Option<usize>,
}

impl HoverFocus {
    pub fn is_focused(self, index: usize) -> bool {
        self.card == Some(index)
    }

    /// Entering a card replaces whatever was focused before.
    pub fn enter(self, index: usize) -> Self {
        Self { card: Some(index) }
    }

    /// Any leave clears the focus, even a stale one from a card other than
    /// the focused one.
    pub fn leave(self) -> Self {
        Self::default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverAction {
    Enter(usize),
    Leave(usize),
}

impl Reducible for HoverFocus {
    type Action = HoverAction;

    fn reduce(self: Rc<Self>, action: HoverAction) -> Rc<Self> {
        let next = match action {
            HoverAction::Enter(index) => {
                debug!("Spotlight on card {}", index);
                self.enter(index)
            }
            HoverAction::Leave(index) => {
                debug!("Spotlight cleared by card {}", index);
                self.leave()
            }
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub fn overlay_text(label: &str) -> String {
    format!(
        "Learn more about our {} services and how we can help your projects succeed.",
        label.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SERVICES;

    fn apply(focus: Rc<HoverFocus>, actions: &[HoverAction]) -> Rc<HoverFocus> {
        actions.iter().fold(focus, |focus, action| focus.reduce(*action))
    }

    fn focused_count(focus: &HoverFocus) -> usize {
        (0..SERVICES.len()).filter(|&i| focus.is_focused(i)).count()
    }

    #[test]
    fn enter_shows_lowercased_label() {
        let focus = HoverFocus::default().enter(2);
        assert!(focus.is_focused(2));
        assert_eq!(
            overlay_text(SERVICES[2].label),
            "Learn more about our urban planning services and how we can help your projects succeed."
        );
    }

    #[test]
    fn enter_without_leave_moves_focus() {
        let focus = HoverFocus::default().enter(2).enter(0);
        assert!(focus.is_focused(0));
        assert!(!focus.is_focused(2));
    }

    #[test]
    fn stale_leave_clears_unrelated_focus() {
        let focus = apply(
            Rc::new(HoverFocus::default()),
            &[HoverAction::Enter(3), HoverAction::Leave(1)],
        );
        assert_eq!(*focus, HoverFocus::default());
        assert!(!focus.is_focused(3));
    }

    #[test]
    fn queued_events_apply_to_latest_focus() {
        // Several events dispatched before a re-render each see the result of
        // the previous one.
        let focus = apply(
            Rc::new(HoverFocus::default()),
            &[HoverAction::Enter(1), HoverAction::Leave(1), HoverAction::Enter(2)],
        );
        assert!(focus.is_focused(2));
    }

    #[test]
    fn unchanged_focus_keeps_same_allocation() {
        let focus = Rc::new(HoverFocus::default().enter(0));
        let next = Rc::clone(&focus).reduce(HoverAction::Enter(0));
        assert!(Rc::ptr_eq(&focus, &next));
    }

    #[test]
    fn at_most_one_card_focused_for_any_sequence() {
        let actions = [
            HoverAction::Enter(0),
            HoverAction::Enter(1),
            HoverAction::Leave(0),
            HoverAction::Enter(3),
            HoverAction::Enter(2),
            HoverAction::Leave(2),
            HoverAction::Leave(1),
            HoverAction::Enter(1),
        ];
        let mut focus = Rc::new(HoverFocus::default());
        for action in actions {
            focus = focus.reduce(action);
            assert!(focused_count(&focus) <= 1);
        }
    }
}
