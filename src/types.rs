//! Domain types for cafe-menu.
//!
//! Plain data: items, categories, filters. No I/O.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Catalog identifier of a menu item. Unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// ENUMS
// ============================================================================

/// The fixed set of menu categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Coffee,
    Pastries,
    #[serde(rename = "Cold Drinks")]
    ColdDrinks,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [Category::Coffee, Category::Pastries, Category::ColdDrinks];

    /// Human label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Category::Coffee => "Coffee",
            Category::Pastries => "Pastries",
            Category::ColdDrinks => "Cold Drinks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which items are visible: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Does an item of `category` pass this filter?
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive; accepts "cold drinks", "cold-drinks" and "colddrinks".
impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "all" => Ok(CategoryFilter::All),
            "coffee" => Ok(CategoryFilter::Only(Category::Coffee)),
            "pastries" => Ok(CategoryFilter::Only(Category::Pastries)),
            "colddrinks" => Ok(CategoryFilter::Only(Category::ColdDrinks)),
            _ => Err(format!(
                "Unknown category '{}' (expected one of: All, Coffee, Pastries, Cold Drinks)",
                s
            )),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

// ============================================================================
// STRUCTS
// ============================================================================

/// A single entry on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub category: Category,
    pub name: String,
    /// Display text, e.g. "3.20". Never used for arithmetic.
    pub price: String,
    #[serde(alias = "desc")]
    pub description: String,
    /// Opaque asset path.
    #[serde(alias = "img")]
    pub image: String,
}

impl MenuItem {
    /// Price as shown to the customer: "$3.20".
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
