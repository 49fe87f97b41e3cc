//! Category taxonomy tables.
//!
//! The canonical vocabulary is ShutterStock's 26 categories. AdobeStock uses
//! a coarser set of 21 categories, each with a numeric code that appears in
//! its upload CSV.
//!
//! The canonical -> AdobeStock table is many-to-one. Its inverse is derived
//! once, walking the forward table in definition order and keeping the first
//! canonical category seen for each AdobeStock category. Going
//! canonical -> AdobeStock -> canonical is therefore lossy: `People` comes
//! back as `Celebrities`, `Backgrounds/Textures` as `Abstract`.

use std::collections::HashMap;

use crate::error::{Result, StockError, Taxonomy};

/// The canonical category set, in definition order
pub const CANONICAL_CATEGORIES: [&str; 26] = [
    "Abstract",
    "Animals/Wildlife",
    "Arts",
    "Backgrounds/Textures",
    "Beauty/Fashion",
    "Buildings/Landmarks",
    "Business/Finance",
    "Celebrities",
    "Education",
    "Food and drink",
    "Healthcare/Medical",
    "Holidays",
    "Industrial",
    "Interiors",
    "Miscellaneous",
    "Nature",
    "Objects",
    "Parks/Outdoor",
    "People",
    "Religion",
    "Science",
    "Signs/Symbols",
    "Sports/Recreation",
    "Technology",
    "Transportation",
    "Vintage",
];

/// AdobeStock categories and their CSV codes
pub const ADOBE_STOCK_CATEGORIES: [(&str, u8); 21] = [
    ("Animals", 1),
    ("Buildings and Architecture", 2),
    ("Business", 3),
    ("Drinks", 4),
    ("The Environment", 5),
    ("States of Mind", 6),
    ("Food", 7),
    ("Graphic Resources", 8),
    ("Hobbies and Leisure", 9),
    ("Industry", 10),
    ("Landscapes", 11),
    ("Lifestyle", 12),
    ("People", 13),
    ("Plants and Flowers", 14),
    ("Culture and Religion", 15),
    ("Science", 16),
    ("Social Issues", 17),
    ("Sports", 18),
    ("Technology", 19),
    ("Transport", 20),
    ("Travel", 21),
];

/// Canonical -> AdobeStock, in definition order. Order matters for the inverse.
static TO_ADOBE_STOCK: [(&str, &str); 26] = [
    ("Abstract", "Graphic Resources"),
    ("Animals/Wildlife", "Animals"),
    ("Arts", "Lifestyle"),
    ("Backgrounds/Textures", "Graphic Resources"),
    ("Beauty/Fashion", "Lifestyle"),
    ("Buildings/Landmarks", "Buildings and Architecture"),
    ("Business/Finance", "Business"),
    ("Celebrities", "People"),
    ("Education", "People"),
    ("Food and drink", "Food"),
    ("Healthcare/Medical", "Science"),
    ("Holidays", "Travel"),
    ("Industrial", "Industry"),
    ("Interiors", "Buildings and Architecture"),
    ("Miscellaneous", "Graphic Resources"),
    ("Nature", "Landscapes"),
    ("Objects", "Lifestyle"),
    ("Parks/Outdoor", "Buildings and Architecture"),
    ("People", "People"),
    ("Religion", "Culture and Religion"),
    ("Science", "Science"),
    ("Signs/Symbols", "Graphic Resources"),
    ("Sports/Recreation", "Sports"),
    ("Technology", "Technology"),
    ("Transportation", "Transport"),
    ("Vintage", "Culture and Religion"),
];

/// Numeric CSV code of an AdobeStock category
pub fn adobe_stock_code(adobe_stock: &str) -> Result<u8> {
    ADOBE_STOCK_CATEGORIES
        .iter()
        .find(|(name, _)| *name == adobe_stock)
        .map(|(_, code)| *code)
        .ok_or_else(|| StockError::unknown_category(adobe_stock, Taxonomy::AdobeStock))
}

/// AdobeStock category name for a numeric CSV code
pub fn adobe_stock_name(code: u8) -> Option<&'static str> {
    ADOBE_STOCK_CATEGORIES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

/// Bidirectional category mapping between the canonical and AdobeStock
/// vocabularies.
///
/// Build one with [`CategoryTable::new`] and pass it to every conversion.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    forward: HashMap<&'static str, &'static str>,
    inverse: HashMap<&'static str, &'static str>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryTable {
    /// Build the forward table and derive its first-writer-wins inverse
    pub fn new() -> Self {
        let forward: HashMap<_, _> = TO_ADOBE_STOCK.iter().copied().collect();

        let mut inverse = HashMap::new();
        for (canonical, adobe) in TO_ADOBE_STOCK.iter().copied() {
            inverse.entry(adobe).or_insert(canonical);
        }

        Self { forward, inverse }
    }

    /// Map a canonical category to its AdobeStock category
    pub fn to_adobe_stock(&self, canonical: &str) -> Result<&'static str> {
        self.forward
            .get(canonical)
            .copied()
            .ok_or_else(|| StockError::unknown_category(canonical, Taxonomy::Canonical))
    }

    /// Map an AdobeStock category back to the first canonical category that
    /// maps onto it
    pub fn to_canonical(&self, adobe_stock: &str) -> Result<&'static str> {
        self.inverse
            .get(adobe_stock)
            .copied()
            .ok_or_else(|| StockError::unknown_category(adobe_stock, Taxonomy::AdobeStock))
    }

    /// Whether `category` belongs to the canonical set
    pub fn is_canonical(&self, category: &str) -> bool {
        self.forward.contains_key(category)
    }

    /// Forward mapping in definition order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        TO_ADOBE_STOCK.iter().copied()
    }
}
