//! TUI state algebra: pure types, zero effects.
//!
//! The session state proper (filter, favorites, selection) lives in
//! [`MenuState`]. The TUI adds only a cursor over the visible items.
//! Whether the detail overlay is open is derived from the menu's
//! selection, never stored twice.

use crossterm::event::KeyEvent;

use crate::catalog::Catalog;
use crate::menu::MenuState;
use crate::types::MenuItem;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Terminal was resized; triggers a redraw.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    pub browser: Browser,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// Menu session plus the list cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Browser {
    pub menu: MenuState,
    /// Index into `menu.visible_items()`.
    pub cursor: usize,
}

/// Which surface receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Category tabs and item list.
    List,
    /// Detail overlay for the selected item.
    Detail,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up in the item list.
    MoveUp,
    /// Move cursor down in the item list.
    MoveDown,
    /// Next category tab (wraps).
    NextCategory,
    /// Previous category tab (wraps).
    PrevCategory,
    /// Jump to a category tab by position (1-based).
    NumberKey(u8),
    /// Favorite / unfavorite the focused or selected item.
    ToggleFavorite,
    /// Open the detail overlay for the focused item.
    Enter,
    /// Close the detail overlay.
    Back,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Continue with this state (may be unchanged).
    Browse(Browser),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS AND DERIVED VIEWS
// ============================================================================

impl App {
    pub fn new(catalog: Catalog) -> Self {
        App {
            browser: Browser::new(catalog),
            should_quit: false,
        }
    }
}

impl Browser {
    /// Fresh session with the cursor on the first item.
    pub fn new(catalog: Catalog) -> Self {
        Browser {
            menu: MenuState::new(catalog),
            cursor: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.menu.selected().is_some() {
            Mode::Detail
        } else {
            Mode::List
        }
    }

    /// The item under the cursor, if the visible list is non-empty.
    pub fn focused_item(&self) -> Option<&MenuItem> {
        self.menu.visible_items().get(self.cursor).copied()
    }

    /// Position of the active filter among the catalog's tabs.
    pub fn active_tab(&self) -> usize {
        self.menu
            .catalog()
            .filters()
            .iter()
            .position(|f| *f == self.menu.filter())
            .unwrap_or(0)
    }
}

impl Default for Browser {
    fn default() -> Self {
        Browser::new(Catalog::builtin())
    }
}

// ============================================================================
// TESTS
// ============================================================================
