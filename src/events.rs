//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{session::Session, types::Screen, App};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to [`handle_key`]. It uses a
/// timeout to avoid blocking the UI, then lets the session advance its walker.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    if let Some(session) = app.session.as_mut() {
        session.update();
    }

    Ok(())
}

/// Applies one key press to the application state.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') | KeyCode::Down => handle_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_up(app),
        KeyCode::Char('l') | KeyCode::Enter => handle_select(app),
        KeyCode::Char('h') | KeyCode::Esc => handle_back(app),
        _ => {}
    }
}

/// Handles downward navigation in the menus.
pub(crate) fn handle_down(app: &mut App) {
    match app.screen {
        Screen::StrategyMenu(strategy) => {
            app.screen = Screen::StrategyMenu(strategy.next());
        }
        Screen::MapMenu(index) if index + 1 < app.maps.len() => {
            app.screen = Screen::MapMenu(index + 1);
        }
        _ => {}
    }
}

/// Handles upward navigation in the menus.
pub(crate) fn handle_up(app: &mut App) {
    match app.screen {
        Screen::StrategyMenu(strategy) => {
            app.screen = Screen::StrategyMenu(strategy.previous());
        }
        Screen::MapMenu(index) => {
            app.screen = Screen::MapMenu(index.saturating_sub(1));
        }
        Screen::InGame => {}
    }
}

/// Handles selection and forward navigation.
///
/// This function confirms the highlighted strategy, starts a session on the highlighted maze, or,
/// once the walker has reached the end of the path, goes back to the strategy menu for another
/// run.
pub(crate) fn handle_select(app: &mut App) {
    match app.screen {
        Screen::StrategyMenu(strategy) => {
            app.strategy = strategy;
            app.screen = Screen::MapMenu(0);
        }
        Screen::MapMenu(index) => {
            if let Some(map) = app.maps.get(index) {
                debug!("starting {} on {:?}", app.strategy, map.key);
                app.session = Some(Session::new(map, app.strategy));
                app.screen = Screen::InGame;
            }
        }
        Screen::InGame => {
            if app.session.as_ref().is_some_and(Session::is_finished) {
                handle_back(app);
            }
        }
    }
}

/// Handles backward navigation.
///
/// This function returns from the in-game screen to the strategy menu, dropping the session, and
/// from the maze menu to the strategy menu.
pub(crate) fn handle_back(app: &mut App) {
    match app.screen {
        Screen::InGame => {
            app.session = None;
            app.screen = Screen::StrategyMenu(app.strategy);
        }
        Screen::MapMenu(_) => {
            app.screen = Screen::StrategyMenu(app.strategy);
        }
        Screen::StrategyMenu(_) => {}
    }
}
