//! Menu session state: active filter, favorites, selected item.
//!
//! `MenuState` owns the catalog and three pieces of ephemeral state.
//! The three mutators are the only write surface; everything else is a
//! read or a derived view. Nothing here can fail.

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::types::{CategoryFilter, ItemId, MenuItem};

/// State of one browsing session over a fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    catalog: Catalog,
    filter: CategoryFilter,
    favorites: BTreeSet<ItemId>,
    selected: Option<ItemId>,
}

impl MenuState {
    /// Fresh session: filter `All`, no favorites, nothing selected.
    pub fn new(catalog: Catalog) -> Self {
        MenuState {
            catalog,
            filter: CategoryFilter::All,
            favorites: BTreeSet::new(),
            selected: None,
        }
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        debug!(%filter, "set category filter");
        self.filter = filter;
    }

    /// Flip membership of `id` in the favorite set.
    ///
    /// The id is not checked against the catalog. Returns true if the item
    /// is a favorite after the call.
    pub fn toggle_favorite(&mut self, id: ItemId) -> bool {
        let now_favorite = if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        };
        debug!(%id, favorite = now_favorite, "toggle favorite");
        now_favorite
    }

    /// Open the detail view for `item`, or close it with `None`.
    pub fn select_item(&mut self, item: Option<&MenuItem>) {
        self.selected = item.map(|i| i.id);
        debug!(selected = ?self.selected, "select item");
    }

    // ------------------------------------------------------------------------
    // Readers
    // ------------------------------------------------------------------------

    /// Items passing the active filter, in catalog order.
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        self.catalog
            .items()
            .iter()
            .filter(|item| self.filter.matches(item.category))
            .collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn favorites(&self) -> &BTreeSet<ItemId> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: ItemId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// The selected item, looked up in the catalog.
    ///
    /// None if nothing is selected, or if the selection was made with an
    /// item that is not part of this catalog.
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.selected.and_then(|id| self.catalog.get(id))
    }
}

impl Default for MenuState {
    fn default() -> Self {
        MenuState::new(Catalog::builtin())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn names(items: &[&MenuItem]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    fn all_filters() -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::All];
        filters.extend(Category::ALL.into_iter().map(CategoryFilter::Only));
        filters
    }

    #[test]
    fn new_session_has_defaults() {
        let menu = MenuState::default();
        assert_eq!(menu.filter(), CategoryFilter::All);
        assert!(menu.favorites().is_empty());
        assert_eq!(menu.selected(), None);
        assert!(menu.selected_item().is_none());
    }

    #[test]
    fn visible_items_match_filter_in_catalog_order() {
        let mut menu = MenuState::default();
        for filter in all_filters() {
            menu.set_category_filter(filter);
            let expected: Vec<&MenuItem> = menu
                .catalog()
                .items()
                .iter()
                .filter(|item| match filter {
                    CategoryFilter::All => true,
                    CategoryFilter::Only(c) => item.category == c,
                })
                .collect();
            assert_eq!(menu.visible_items(), expected, "filter {}", filter);
        }
    }

    #[test]
    fn visible_items_is_stable_across_calls() {
        let mut menu = MenuState::default();
        menu.set_category_filter(CategoryFilter::Only(Category::Pastries));
        assert_eq!(menu.visible_items(), menu.visible_items());
    }

    #[test]
    fn double_toggle_is_noop() {
        let mut menu = MenuState::default();
        menu.toggle_favorite(ItemId(5));
        let before = menu.favorites().clone();

        for id in [ItemId(1), ItemId(5), ItemId(42)] {
            menu.toggle_favorite(id);
            menu.toggle_favorite(id);
            assert_eq!(menu.favorites(), &before, "id {}", id);
        }
    }

    #[test]
    fn toggle_reports_new_membership() {
        let mut menu = MenuState::default();
        assert!(menu.toggle_favorite(ItemId(3)));
        assert!(menu.is_favorite(ItemId(3)));
        assert!(!menu.toggle_favorite(ItemId(3)));
        assert!(!menu.is_favorite(ItemId(3)));
    }

    #[test]
    fn unknown_ids_can_be_favorited() {
        let mut menu = MenuState::default();
        menu.toggle_favorite(ItemId(999));
        assert!(menu.is_favorite(ItemId(999)));
    }

    #[test]
    fn favorites_survive_filter_changes() {
        let mut menu = MenuState::default();
        menu.toggle_favorite(ItemId(6));
        menu.set_category_filter(CategoryFilter::Only(Category::Coffee));
        assert!(menu.is_favorite(ItemId(6)));
        assert!(menu.visible_items().iter().all(|i| i.id != ItemId(6)));
    }

    #[test]
    fn select_then_deselect() {
        let mut menu = MenuState::default();
        let catalog = menu.catalog().clone();
        for item in catalog.items() {
            menu.select_item(Some(item));
            assert_eq!(menu.selected(), Some(item.id));
            assert_eq!(menu.selected_item(), Some(item));
            menu.select_item(None);
            assert_eq!(menu.selected(), None);
        }
    }

    #[test]
    fn selecting_foreign_item_has_no_catalog_match() {
        let mut menu = MenuState::default();
        let foreign = MenuItem {
            id: ItemId(77),
            category: Category::Coffee,
            name: "Flat White".into(),
            price: "3.40".into(),
            description: "Not on this menu.".into(),
            image: "/coffee.jpg".into(),
        };
        menu.select_item(Some(&foreign));
        assert_eq!(menu.selected(), Some(ItemId(77)));
        assert!(menu.selected_item().is_none());
    }

    #[test]
    fn toggling_favorites_leaves_filter_and_selection_alone() {
        let mut menu = MenuState::default();
        let croissant = menu.catalog().get(ItemId(4)).unwrap().clone();
        menu.set_category_filter(CategoryFilter::Only(Category::Pastries));
        menu.select_item(Some(&croissant));

        menu.toggle_favorite(ItemId(4));
        menu.toggle_favorite(ItemId(1));

        assert_eq!(menu.filter(), CategoryFilter::Only(Category::Pastries));
        assert_eq!(menu.selected(), Some(ItemId(4)));
    }

    #[test]
    fn filter_and_selection_leave_favorites_alone() {
        let mut menu = MenuState::default();
        menu.toggle_favorite(ItemId(2));
        let latte = menu.catalog().get(ItemId(1)).unwrap().clone();

        menu.set_category_filter(CategoryFilter::Only(Category::ColdDrinks));
        menu.select_item(Some(&latte));
        menu.select_item(None);
        menu.set_category_filter(CategoryFilter::All);

        assert_eq!(menu.favorites().iter().copied().collect::<Vec<_>>(), vec![ItemId(2)]);
    }

    #[test]
    fn filter_change_leaves_selection_alone() {
        let mut menu = MenuState::default();
        let mojito = menu.catalog().get(ItemId(6)).unwrap().clone();
        menu.select_item(Some(&mojito));
        menu.set_category_filter(CategoryFilter::Only(Category::Coffee));
        assert_eq!(menu.selected(), Some(ItemId(6)));
    }

    // -- Walkthrough on the house menu --

    #[test]
    fn house_menu_walkthrough() {
        let mut menu = MenuState::default();

        // 1. Coffee only
        menu.set_category_filter(CategoryFilter::Only(Category::Coffee));
        assert_eq!(
            names(&menu.visible_items()),
            vec!["Latte", "Cappuccino", "Espresso"]
        );

        // 2. Favorite the cappuccino
        menu.toggle_favorite(ItemId(2));
        assert_eq!(menu.favorites().iter().copied().collect::<Vec<_>>(), vec![ItemId(2)]);

        // 3. And un-favorite it
        menu.toggle_favorite(ItemId(2));
        assert!(menu.favorites().is_empty());

        // 4. Open the croissant
        let croissant = menu.catalog().get(ItemId(4)).unwrap().clone();
        menu.select_item(Some(&croissant));
        assert_eq!(menu.selected_item().unwrap().name, "Almond Croissant");

        // 5. Close it
        menu.select_item(None);
        assert!(menu.selected().is_none());

        // 6. Back to everything
        menu.set_category_filter(CategoryFilter::All);
        assert_eq!(
            names(&menu.visible_items()),
            vec![
                "Latte",
                "Cappuccino",
                "Espresso",
                "Almond Croissant",
                "Red Velvet",
                "Mojito",
                "Orange Juice",
            ]
        );
    }
}
