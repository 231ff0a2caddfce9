//! Pure state transitions: (Browser, Action) → Transition.
//!
//! This is the glue between key presses and the menu's three mutators.
//! Fully testable without a terminal. Unhandled actions return the
//! current state unchanged.

use super::state::{Action, Browser, Mode, Transition};

/// Pure state transition function.
pub fn update(browser: Browser, action: &Action) -> Transition {
    if *action == Action::Quit {
        return Transition::Quit;
    }

    match browser.mode() {
        Mode::List => update_list(browser, action),
        Mode::Detail => update_detail(browser, action),
    }
}

// ============================================================================
// PER-MODE HANDLERS
// ============================================================================

/// List: cursor movement, category tabs, favorite, open detail.
fn update_list(mut browser: Browser, action: &Action) -> Transition {
    let len = browser.menu.visible_items().len();

    match action {
        Action::MoveUp => {
            browser.cursor = browser.cursor.saturating_sub(1);
        }
        Action::MoveDown => {
            browser.cursor = if len == 0 { 0 } else { (browser.cursor + 1).min(len - 1) };
        }
        Action::NextCategory => {
            let tabs = browser.menu.catalog().filters().len();
            let next = (browser.active_tab() + 1) % tabs;
            select_tab(&mut browser, next);
        }
        Action::PrevCategory => {
            let tabs = browser.menu.catalog().filters().len();
            let prev = (browser.active_tab() + tabs - 1) % tabs;
            select_tab(&mut browser, prev);
        }
        Action::NumberKey(n) => {
            if let Some(index) = (*n as usize).checked_sub(1) {
                select_tab(&mut browser, index);
            }
        }
        Action::ToggleFavorite => {
            if let Some(id) = browser.focused_item().map(|item| item.id) {
                browser.menu.toggle_favorite(id);
            }
        }
        Action::Enter => {
            if let Some(item) = browser.focused_item().cloned() {
                browser.menu.select_item(Some(&item));
            }
        }
        Action::Back | Action::Quit => {}
    }

    Transition::Browse(browser)
}

/// Detail overlay: favorite the shown item, or close.
fn update_detail(mut browser: Browser, action: &Action) -> Transition {
    match action {
        Action::ToggleFavorite => {
            if let Some(id) = browser.menu.selected() {
                browser.menu.toggle_favorite(id);
            }
        }
        Action::Back | Action::Enter => browser.menu.select_item(None),
        _ => {}
    }

    Transition::Browse(browser)
}

/// Switch to the filter tab at `index`, resetting the cursor.
/// Out-of-range indices are ignored.
fn select_tab(browser: &mut Browser, index: usize) {
    let Some(filter) = browser.menu.catalog().filters().get(index).copied() else {
        return;
    };
    if filter != browser.menu.filter() {
        browser.menu.set_category_filter(filter);
        browser.cursor = 0;
    }
}

// ============================================================================
// TESTS
// ============================================================================
