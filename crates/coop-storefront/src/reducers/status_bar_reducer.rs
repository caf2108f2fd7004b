//! Status Bar Reducer

use crate::actions::StatusBarAction;
use crate::state::StatusBarState;

/// Reduce status bar actions
pub fn reduce_status_bar(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Notify(notice) => {
            state.record(notice.clone());
        }
        StatusBarAction::Clear => {
            state.clear();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NoticeKind, NoticeTopic};

    #[test]
    fn push_appends_and_latest_is_newest() {
        let state = reduce_status_bar(
            StatusBarState::default(),
            &StatusBarAction::busy(NoticeTopic::Order, "Placing order..."),
        );
        let state = reduce_status_bar(
            state,
            &StatusBarAction::success(NoticeTopic::Order, "Order placed"),
        );

        assert_eq!(state.notices.len(), 2);
        let latest = state.latest().unwrap();
        assert_eq!(latest.kind, NoticeKind::Success);
        assert_eq!(latest.topic, NoticeTopic::Order);
        assert_eq!(latest.text, "Order placed");
    }

    #[test]
    fn history_is_bounded() {
        let mut state = StatusBarState {
            capacity: 3,
            ..Default::default()
        };
        for i in 0..5 {
            state = reduce_status_bar(
                state,
                &StatusBarAction::info(NoticeTopic::Cart, format!("m{i}")),
            );
        }
        assert_eq!(state.notices.len(), 3);
        assert_eq!(state.notices.front().unwrap().text, "m2");
    }

    #[test]
    fn clear_empties_history() {
        let state = reduce_status_bar(
            StatusBarState::default(),
            &StatusBarAction::error(NoticeTopic::Checkout, "boom"),
        );
        let state = reduce_status_bar(state, &StatusBarAction::Clear);
        assert!(state.notices.is_empty());
        assert!(state.latest().is_none());
    }
}
