//! Global actions - not tied to any specific store slice

use crate::state::Screen;
use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation by the keyboard middleware)
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
    /// Switch to a screen; guard middleware redirects unauthenticated users
    ShowScreen(Screen),
    /// Startup: rehydrate persisted state and kick off initial fetches
    Bootstrap,
}
