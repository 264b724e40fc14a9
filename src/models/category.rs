//! Fixed emoji category table.

use serde::Serialize;

/// One picker category.
///
/// The set of categories is closed: every emoji record must name one of the
/// identifiers in [`CATEGORIES`], and the table order is the tab order of the
/// generated picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Identifier used in the metadata source and in CSS class names (e.g., "people")
    pub id: &'static str,
    /// Display name shown as the tab title (e.g., "Smileys & People")
    pub name: &'static str,
    /// Codepoint of the emoji shown on the tab header
    pub icon: &'static str,
}

/// All categories, in tab order.
pub const CATEGORIES: [Category; 8] = [
    Category {
        id: "people",
        name: "Smileys & People",
        icon: "1f604",
    },
    Category {
        id: "nature",
        name: "Animals & Nature",
        icon: "1f426",
    },
    Category {
        id: "food",
        name: "Food & Drink",
        icon: "1f354",
    },
    Category {
        id: "activity",
        name: "Activity",
        icon: "26bd",
    },
    Category {
        id: "travel",
        name: "Travel & Places",
        icon: "2708",
    },
    Category {
        id: "objects",
        name: "Objects",
        icon: "1f4a1",
    },
    Category {
        id: "symbols",
        name: "Symbols",
        icon: "1f523",
    },
    Category {
        id: "flags",
        name: "Flags",
        icon: "1f1ec-1f1e7",
    },
];

impl Category {
    /// Looks up a category by identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use emojigen::models::Category;
    ///
    /// assert_eq!(Category::find("food").unwrap().name, "Food & Drink");
    /// assert!(Category::find("smileys").is_none());
    /// ```
    pub fn find(id: &str) -> Option<&'static Self> {
        CATEGORIES.iter().find(|category| category.id == id)
    }

    /// Position of a category in tab order.
    pub fn index_of(id: &str) -> Option<usize> {
        CATEGORIES.iter().position(|category| category.id == id)
    }
}
