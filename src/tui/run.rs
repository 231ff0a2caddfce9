//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: a key reader thread feeds an mpsc channel; the event
//! loop consumes from it and dispatches to the pure update function.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::catalog::Catalog;

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // List navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),

        // Category tabs
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextCategory),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevCategory),
        KeyCode::Char(c @ '1'..='9') => Some(Action::NumberKey(c as u8 - b'0')),

        // Item actions
        KeyCode::Char(' ') | KeyCode::Char('f') => Some(Action::ToggleFavorite),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                // Windows reports both press and release
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive menu until the user quits.
pub fn run(catalog: Catalog) -> io::Result<()> {
    info!(items = catalog.len(), "starting menu browser");
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(catalog);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // key reader gone
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    debug!(?action, "key action");
                    handle_action(&mut app, &action);
                }
            }
            AppEvent::Resize => {} // redrawn at the top of the loop
        }
    }

    restore_terminal()?;
    info!("menu browser closed");
    Ok(())
}

/// Feed one action through the pure update and store the result.
fn handle_action(app: &mut App, action: &Action) {
    let browser = std::mem::take(&mut app.browser);
    match update(browser, action) {
        Transition::Browse(next) => app.browser = next,
        Transition::Quit => app.should_quit = true,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn vim_keys_map_to_movement() {
        assert_eq!(map_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(map_key(key(KeyCode::Char('k'))), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::NextCategory));
        assert_eq!(map_key(key(KeyCode::Char('h'))), Some(Action::PrevCategory));
    }

    #[test]
    fn arrow_keys_map_to_movement() {
        assert_eq!(map_key(key(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Down)), Some(Action::MoveDown));
        assert_eq!(map_key(key(KeyCode::Right)), Some(Action::NextCategory));
        assert_eq!(map_key(key(KeyCode::Left)), Some(Action::PrevCategory));
    }

    #[test]
    fn tab_cycles_categories() {
        assert_eq!(map_key(key(KeyCode::Tab)), Some(Action::NextCategory));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Action::PrevCategory)
        );
    }

    #[test]
    fn space_and_f_toggle_favorite() {
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(Action::ToggleFavorite));
        assert_eq!(map_key(key(KeyCode::Char('f'))), Some(Action::ToggleFavorite));
    }

    #[test]
    fn number_keys_map_to_number_actions() {
        for n in 1..=4u8 {
            let event = key(KeyCode::Char((b'0' + n) as char));
            assert_eq!(map_key(event), Some(Action::NumberKey(n)));
        }
    }

    #[test]
    fn enter_and_esc() {
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::Enter));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Back));
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
        assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn handle_action_applies_transition() {
        let mut app = App::new(Catalog::builtin());
        handle_action(&mut app, &Action::ToggleFavorite);
        assert!(app.browser.menu.is_favorite(ItemId(1)));
        assert!(!app.should_quit);

        handle_action(&mut app, &Action::Quit);
        assert!(app.should_quit);
    }
}
