//! Pure rendering: map App state to ratatui widget trees.
//!
//! The list view is always drawn; the detail overlay is drawn on top of
//! it when an item is selected. Widget-building functions are pure
//! (state in, widgets out); the only effect is Frame::render_widget().

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::menu::MenuState;
use crate::types::MenuItem;

use super::state::{App, Browser, Mode};
use super::theme;

/// Café name shown in the header.
pub const CAFE_NAME: &str = "Café Aroma";
const TAGLINE: &str = "Fresh, hand-crafted, and deeply therapeutic";
const OPENING_HOURS: &str = "Open • 8:00 — 18:00";

/// Rows taken by one item in the list: name line, description, spacer.
const ITEM_HEIGHT: usize = 3;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole UI to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let browser = &app.browser;

    let chunks = Layout::vertical([
        Constraint::Length(2), // header
        Constraint::Length(2), // category tabs + spacer
        Constraint::Min(0),    // items
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_header(chunks[0].width), chunks[0]);
    frame.render_widget(render_tabs(browser), chunks[1]);
    render_items(browser, frame, chunks[2]);
    frame.render_widget(render_help(browser.mode()), chunks[3]);

    if let Some(item) = browser.menu.selected_item() {
        render_detail(&browser.menu, item, frame, area);
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title and hours on the first line, tagline on the second.
fn render_header(width: u16) -> Paragraph<'static> {
    let used = CAFE_NAME.chars().count() + OPENING_HOURS.chars().count() + 2;
    let gap = (width as usize).saturating_sub(used).max(2);

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!(" {}", CAFE_NAME), theme::STYLE_TITLE),
            Span::raw(" ".repeat(gap)),
            Span::styled(OPENING_HOURS, theme::STYLE_DIM),
        ]),
        Line::from(Span::styled(format!(" {}", TAGLINE), theme::STYLE_TAGLINE)),
    ])
}

/// Category tabs, numbered for the 1-4 shortcuts.
fn render_tabs(browser: &Browser) -> Paragraph<'static> {
    let active = browser.menu.filter();
    let mut spans = vec![Span::raw(" ")];

    for (i, filter) in browser.menu.catalog().filters().into_iter().enumerate() {
        let style = if filter == active {
            theme::STYLE_TAB_ACTIVE
        } else {
            theme::STYLE_TAB_INACTIVE
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, filter), style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans))
}

/// Help line showing available keybindings for the current mode.
fn render_help(mode: Mode) -> Paragraph<'static> {
    let help_text = match mode {
        Mode::List => {
            " [1-4/Tab] category  [j/k] move  [Space] favorite  [Enter] view  [q] quit"
        }
        Mode::Detail => " [Space] favorite  [Esc] close  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn heart(favorite: bool) -> Span<'static> {
    if favorite {
        Span::styled("♥ ", theme::STYLE_FAVORITE)
    } else {
        Span::styled("♡ ", theme::STYLE_NOT_FAVORITE)
    }
}

// ============================================================================
// ITEM LIST
// ============================================================================

fn render_items(browser: &Browser, frame: &mut Frame, area: Rect) {
    let menu = &browser.menu;
    let items = menu.visible_items();

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled("  Nothing here yet", theme::STYLE_DIM));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(items.len() * ITEM_HEIGHT);
    for (i, item) in items.iter().enumerate() {
        let title = Line::from(vec![
            Span::raw("  "),
            heart(menu.is_favorite(item.id)),
            Span::styled(item.name.clone(), theme::STYLE_IMPORTANT),
            Span::raw("  "),
            Span::styled(item.display_price(), theme::STYLE_PRICE),
            Span::styled(format!("   {}", item.image), theme::STYLE_DIM),
        ]);
        let title = if i == browser.cursor {
            title.style(theme::STYLE_CURSOR)
        } else {
            title
        };

        lines.push(title);
        lines.push(Line::from(Span::styled(
            format!("      {}", item.description),
            theme::STYLE_DIM,
        )));
        lines.push(Line::from(""));
    }

    // Keep the whole focused item on screen
    let visible_height = area.height as usize;
    let cursor_bottom = (browser.cursor + 1) * ITEM_HEIGHT;
    let scroll_offset = cursor_bottom.saturating_sub(visible_height);

    let list = Paragraph::new(lines).scroll((scroll_offset as u16, 0));
    frame.render_widget(list, area);
}

// ============================================================================
// DETAIL OVERLAY
// ============================================================================

fn render_detail(menu: &MenuState, item: &MenuItem, frame: &mut Frame, area: Rect) {
    let popup = centered(area, 56, 12);
    let favorite = menu.is_favorite(item.id);

    let lines = vec![
        Line::from(Span::styled(item.name.clone(), theme::STYLE_IMPORTANT)),
        Line::from(Span::styled(item.category.label(), theme::STYLE_DIM)),
        Line::from(""),
        Line::from(item.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Price  ", theme::STYLE_DIM),
            Span::styled(item.display_price(), theme::STYLE_PRICE),
        ]),
        Line::from(Span::styled(format!("Image  {}", item.image), theme::STYLE_DIM)),
        Line::from(""),
        Line::from(vec![
            heart(favorite),
            Span::styled(
                if favorite { "Favorited" } else { "Favorite" },
                theme::STYLE_INTERACTIVE,
            ),
        ]),
    ];

    let block = Block::bordered()
        .title(" Details ")
        .border_style(theme::STYLE_OVERLAY_BORDER);
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

// ============================================================================
// TESTS
// ============================================================================
