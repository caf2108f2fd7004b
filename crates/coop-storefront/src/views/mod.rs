//! View layer - pure projections of [`AppState`] onto the terminal
//!
//! Views never mutate state; every interaction goes through the keyboard
//! middleware as an action. One screen is rendered at a time, with the
//! status bar pinned to the bottom row.

use crate::state::{AppState, Screen};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

mod admin;
mod cart;
mod checkout;
mod confirmation;
mod login;
mod menu;
mod orders;
mod status_bar;
mod tracking;

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    match state.screen {
        Screen::Menu => menu::render(state, chunks[0], f),
        Screen::Cart => cart::render(state, chunks[0], f),
        Screen::Checkout => checkout::render(state, chunks[0], f),
        Screen::Login => login::render(state, chunks[0], f),
        Screen::Orders => orders::render(state, chunks[0], f),
        Screen::Tracking => tracking::render(state, chunks[0], f),
        Screen::Confirmation => confirmation::render(state, chunks[0], f),
        Screen::AdminDashboard => admin::render_dashboard(state, chunks[0], f),
        Screen::AdminOrders => admin::render_orders(state, chunks[0], f),
        Screen::AdminProducts => admin::render_products(state, chunks[0], f),
    }

    status_bar::render(&state.status_bar, chunks[1], f);
}

/// Centered popup rect used by floating forms
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
