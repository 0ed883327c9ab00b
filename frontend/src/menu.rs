use std::rc::Rc;

use log::debug;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Close,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Both transitions are idempotent.
    pub fn apply(self, action: MenuAction) -> MenuState {
        match action {
            MenuAction::Open => MenuState::Open,
            MenuAction::Close => MenuState::Closed,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            return self;
        }
        debug!("Menu {:?} -> {:?}", *self, next);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn open_then_close() {
        let state = MenuState::default().apply(MenuAction::Open);
        assert!(state.is_open());
        let state = state.apply(MenuAction::Close);
        assert!(!state.is_open());
    }

    #[test]
    fn repeated_actions_are_idempotent() {
        let state = MenuState::default()
            .apply(MenuAction::Open)
            .apply(MenuAction::Open);
        assert_eq!(state, MenuState::Open);
        let state = state.apply(MenuAction::Close).apply(MenuAction::Close);
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn reducer_keeps_same_rc_when_unchanged() {
        let state = Rc::new(MenuState::Open);
        let next = state.clone().reduce(MenuAction::Open);
        assert!(Rc::ptr_eq(&state, &next));
        let closed = next.reduce(MenuAction::Close);
        assert_eq!(*closed, MenuState::Closed);
    }
}
