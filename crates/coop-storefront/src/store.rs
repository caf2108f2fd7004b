//! Store - holds application state and runs the dispatch loop
//!
//! `dispatch` runs the action through the middleware chain and, unless a
//! middleware consumed it, through the root reducer. Actions middleware
//! dispatches (including from async tasks) land on the action channel; the
//! main loop drains that channel and feeds each action back through
//! `dispatch`, so every action takes the same path.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::reduce_app;
use crate::state::AppState;

pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
}

impl Store {
    pub fn new(initial_state: AppState, dispatcher: Dispatcher) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher,
        }
    }

    /// Add middleware to the store; they execute in insertion order
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through the middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce_app(self.state.clone(), &action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{GlobalAction, StatusBarAction};
    use crate::state::{AppState, NoticeTopic};
    use std::sync::mpsc;

    /// Middleware that consumes every status bar action
    struct MuteStatusBar;

    impl Middleware for MuteStatusBar {
        fn handle(&mut self, action: &Action, _: &AppState, _: &Dispatcher) -> bool {
            !matches!(action, Action::StatusBar(_))
        }
    }

    fn store() -> (Store, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (Store::new(AppState::new(), Dispatcher::new(tx)), rx)
    }

    #[test]
    fn unconsumed_actions_reach_the_reducer() {
        let (mut store, _rx) = store();
        store.dispatch(Action::Global(GlobalAction::Quit));
        assert!(!store.state().running);
    }

    #[test]
    fn consuming_middleware_stops_reduction() {
        let (mut store, _rx) = store();
        store.add_middleware(Box::new(MuteStatusBar));

        store.dispatch(Action::StatusBar(StatusBarAction::info(NoticeTopic::Cart, "hi")));
        assert!(store.state().status_bar.notices.is_empty());

        store.dispatch(Action::Global(GlobalAction::Quit));
        assert!(!store.state().running);
    }
}
