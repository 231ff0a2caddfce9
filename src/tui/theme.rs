//! TUI color semantics and style constants.
//!
//! Warm café palette. Pure data, consumed by the rendering layer.
//!
//! Color semantics:
//! - Amber: brand (title, active tab, prices)
//! - Rose: favorites
//! - Cyan: interactive elements (keybinding hints)
//! - Dim: de-emphasized (descriptions, image paths)

use ratatui::style::{Color, Modifier, Style};

const AMBER: Color = Color::Rgb(180, 83, 9);
const AMBER_LIGHT: Color = Color::Rgb(217, 119, 6);
const ROSE: Color = Color::Rgb(244, 63, 94);

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Favorited heart — rose.
pub const STYLE_FAVORITE: Style = Style::new().fg(ROSE).add_modifier(Modifier::BOLD);

/// Un-favorited heart.
pub const STYLE_NOT_FAVORITE: Style = Style::new().fg(Color::DarkGray);

/// Prices.
pub const STYLE_PRICE: Style = Style::new().fg(AMBER_LIGHT).add_modifier(Modifier::BOLD);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Café name in the header.
pub const STYLE_TITLE: Style = Style::new().fg(AMBER).add_modifier(Modifier::BOLD);

/// Tagline under the title.
pub const STYLE_TAGLINE: Style = Style::new().fg(AMBER_LIGHT).add_modifier(Modifier::ITALIC);

/// Active category tab.
pub const STYLE_TAB_ACTIVE: Style = Style::new()
    .fg(Color::White)
    .bg(AMBER)
    .add_modifier(Modifier::BOLD);

/// Inactive category tab.
pub const STYLE_TAB_INACTIVE: Style = Style::new().fg(AMBER);

/// Cursor row in the item list.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Detail overlay border.
pub const STYLE_OVERLAY_BORDER: Style = Style::new().fg(AMBER);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
