//! Listing format for the visible menu.
//!
//! Pure functions: (MenuState, OutputFormat) → String.

use serde::Serialize;

use crate::menu::MenuState;
use crate::types::{CategoryFilter, MenuItem, OutputFormat};

/// Format the items visible under the menu's active filter.
pub fn format_menu(menu: &MenuState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(menu),
        OutputFormat::Json => format_json(menu),
    }
}

/// One line per filter tab, e.g. "All (7)".
pub fn format_filters(menu: &MenuState) -> String {
    let catalog = menu.catalog();
    let mut out = String::new();
    for filter in catalog.filters() {
        let count = catalog
            .items()
            .iter()
            .filter(|item| filter.matches(item.category))
            .count();
        out.push_str(&format!("{} ({})\n", filter, count));
    }
    out
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(menu: &MenuState) -> String {
    let items = menu.visible_items();
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", menu.filter()));

    for item in &items {
        let heart = if menu.is_favorite(item.id) { " ♥" } else { "" };
        out.push_str(&format!(
            "{:<20} {:>6}{}\n",
            item.name,
            item.display_price(),
            heart
        ));
        out.push_str(&format!("  {}\n", item.description));
        if menu.filter() == CategoryFilter::All {
            out.push_str(&format!("  [{}]\n", item.category));
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "{} item{}\n",
        items.len(),
        if items.len() == 1 { "" } else { "s" }
    ));

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct Listing<'a> {
    filter: CategoryFilter,
    items: Vec<&'a MenuItem>,
}

fn format_json(menu: &MenuState) -> String {
    let listing = Listing {
        filter: menu.filter(),
        items: menu.visible_items(),
    };
    // Plain strings and integers only; serialization cannot fail
    serde_json::to_string_pretty(&listing)
        .unwrap_or_else(|e| panic!("Failed to serialize listing to JSON: {}", e))
}

// ============================================================================
// TESTS
// ============================================================================
