use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod views;

use actions::{Action, GlobalAction};
use coop_client::HttpApiClient;
use coop_config::{AppConfig, JsonFileStore};
use dispatcher::Dispatcher;
use middleware::{
    api_middleware::ApiMiddleware, cart_middleware::CartMiddleware,
    checkout_middleware::CheckoutMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging_middleware::LoggingMiddleware, session_middleware::SessionMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    // .env is optional; it can carry COOP_API_URL during development
    dotenvy::dotenv().ok();
    logger::init()?;

    log::info!("Starting coop-storefront");

    let config = AppConfig::load();
    let api = Arc::new(HttpApiClient::new(&config.api_url));

    // Action channel: async tasks and middleware feed completions back in
    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let dispatcher = Dispatcher::new(action_tx);

    let mut store = Store::new(AppState::new(), dispatcher.clone());

    // Middleware execute in this order
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(SessionMiddleware::new(Box::new(
        JsonFileStore::new(coop_config::paths::token_path()?),
    ))));
    store.add_middleware(Box::new(CartMiddleware::new(Box::new(JsonFileStore::new(
        coop_config::paths::cart_path()?,
    )))));
    store.add_middleware(Box::new(CheckoutMiddleware::new(&config)?));
    store.add_middleware(Box::new(ApiMiddleware::new(api)?));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Rehydrate persisted state and kick off the initial fetches
    store.dispatch(Action::Global(GlobalAction::Bootstrap));

    let result = run_app(&mut terminal, &mut store, &action_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("Exiting coop-storefront");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    action_rx: &mpsc::Receiver<Action>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        // Drain completions from middleware and async tasks
        while let Ok(action) = action_rx.try_recv() {
            store.dispatch(action);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only key presses; ignore release/repeat
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
