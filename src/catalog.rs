//! The menu catalog: a fixed, validated list of items.
//!
//! A `Catalog` is built once at startup and never mutated. It is the sole
//! owner of item data; everything else refers to items by [`ItemId`].

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::types::{Category, CategoryFilter, ItemId, MenuItem};

/// Why a catalog could not be built.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog contains no items")]
    Empty,

    #[error("Duplicate item id {0} in catalog")]
    DuplicateId(ItemId),

    #[error("Failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid catalog JSON: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

/// Immutable, ordered list of menu items with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Validate and wrap `items`, preserving their order.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        Ok(Catalog { items })
    }

    /// Parse a JSON array of items.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Catalog::new(items)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Catalog::from_json_str(&json)?;
        debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The house menu.
    pub fn builtin() -> Self {
        Catalog {
            items: vec![
                item(1, Category::Coffee, "Latte", "3.20",
                    "Espresso topped with steamed milk.", "/coffee.jpg"),
                item(2, Category::Coffee, "Cappuccino", "3.50",
                    "Equal parts espresso, steamed milk, and foam.", "/coffee.jpg"),
                item(3, Category::Coffee, "Espresso", "2",
                    "A classic.", "/coffee.jpg"),
                item(4, Category::Pastries, "Almond Croissant", "2.80",
                    "Buttery croissant filled with almond paste.", "/crossaint.jpg"),
                item(5, Category::Pastries, "Red Velvet", "2.20",
                    "Light cocoa infused sponge cake, layered with frosting.", "/crossaint.jpg"),
                item(6, Category::ColdDrinks, "Mojito", "3.10",
                    "Refreshing concoction of zesty lime, cool mint, and a splash of soda.",
                    "/drink.jpg"),
                item(7, Category::ColdDrinks, "Orange Juice", "2.90",
                    "Freshly squeezed orange juice. Can't go wrong with it!", "/drink.jpg"),
            ],
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: `new` rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Categories that have at least one item, in [`Category::ALL`] order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.items.iter().any(|item| item.category == *c))
            .collect()
    }

    /// The filter tabs for this catalog: `All`, then each present category.
    pub fn filters(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories().into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

fn item(
    id: u32,
    category: Category,
    name: &str,
    price: &str,
    description: &str,
    image: &str,
) -> MenuItem {
    MenuItem {
        id: ItemId(id),
        category,
        name: name.to_string(),
        price: price.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_item(id: u32, category: Category) -> MenuItem {
        item(id, category, "Thing", "1.00", "A thing.", "/thing.jpg")
    }

    #[test]
    fn builtin_has_seven_items_in_definition_order() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
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

    #[test]
    fn builtin_passes_validation() {
        let catalog = Catalog::builtin();
        let revalidated = Catalog::new(catalog.items().to_vec()).unwrap();
        assert_eq!(revalidated, catalog);
    }

    #[test]
    fn new_rejects_empty() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let items = vec![
            sample_item(1, Category::Coffee),
            sample_item(2, Category::Coffee),
            sample_item(1, Category::Pastries),
        ];
        match Catalog::new(items) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, ItemId(1)),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(ItemId(4)).unwrap().name, "Almond Croissant");
        assert!(catalog.get(ItemId(99)).is_none());
    }

    #[test]
    fn categories_follow_fixed_order_and_skip_absent() {
        let catalog = Catalog::new(vec![
            sample_item(1, Category::ColdDrinks),
            sample_item(2, Category::Coffee),
        ])
        .unwrap();
        assert_eq!(
            catalog.categories(),
            vec![Category::Coffee, Category::ColdDrinks]
        );
    }

    #[test]
    fn filters_start_with_all() {
        let filters = Catalog::builtin().filters();
        assert_eq!(
            filters,
            vec![
                CategoryFilter::All,
                CategoryFilter::Only(Category::Coffee),
                CategoryFilter::Only(Category::Pastries),
                CategoryFilter::Only(Category::ColdDrinks),
            ]
        );
    }

    #[test]
    fn from_json_str_parses_items() {
        let json = r#"[
            {"id": 10, "category": "Coffee", "name": "Mocha", "price": "3.80",
             "description": "Chocolate and espresso.", "image": "/mocha.jpg"},
            {"id": 11, "category": "Cold Drinks", "name": "Iced Tea", "price": "2.50",
             "desc": "Brewed cold.", "img": "/tea.jpg"}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[1].category, Category::ColdDrinks);
        assert_eq!(catalog.items()[1].description, "Brewed cold.");
    }

    #[test]
    fn from_json_str_reports_parse_errors() {
        let result = Catalog::from_json_str("{ not json");
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn from_json_str_validates_ids() {
        let json = r#"[
            {"id": 1, "category": "Coffee", "name": "A", "price": "1", "description": "", "image": ""},
            {"id": 1, "category": "Coffee", "name": "B", "price": "1", "description": "", "image": ""}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::DuplicateId(ItemId(1)))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "category": "Pastries", "name": "Scone", "price": "1.90",
                 "description": "Crumbly.", "image": "/scone.jpg"}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.items()[0].name, "Scone");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        match Catalog::load(&missing) {
            Err(CatalogError::Read { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected Read error, got {:?}", other),
        }
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(CatalogError::Empty.to_string(), "Catalog contains no items");
        assert_eq!(
            CatalogError::DuplicateId(ItemId(3)).to_string(),
            "Duplicate item id #3 in catalog"
        );
    }
}
