//! The generic record every conversion passes through.
//!
//! `CanonicalRecord` carries the union of all marketplace fields. Converting
//! between two marketplaces always goes marketplace -> canonical ->
//! marketplace; there are no direct shortcuts.

use std::collections::BTreeMap;

use serde_json::Value;

use super::adobe_stock::AdobeStock;
use super::getty_images::GettyImages;
use super::record::{Marketplace, MediaFile, StockRecord};
use super::shutter_stock::ShutterStock;
use crate::error::{Result, StockError, Taxonomy};
use crate::taxonomy::CategoryTable;

/// Generic stock metadata, the superset of every marketplace format
///
/// Categories use the canonical (ShutterStock) vocabulary. An empty category
/// means "unset".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalRecord {
    /// Media file name, without directory
    pub filename: String,

    /// Directory holding the media file
    pub path: String,

    pub title: String,

    pub description: String,

    /// Primary category
    pub category1: String,

    /// Secondary category
    pub category2: String,

    pub keywords: Vec<String>,

    pub country: String,

    /// Poster frame, `HH:MM:SS` or `HH:MM:SS:FF`
    pub poster_timecode: String,

    /// Model/property release documents
    pub releases: Vec<String>,

    pub editorial: bool,

    /// Sidecar keys outside the known field set, kept as read
    pub extra: BTreeMap<String, Value>,
}

impl CanonicalRecord {
    /// Create an empty record for a media file
    pub fn new(filename: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Check that both categories are unset or belong to the canonical set
    pub fn validate(&self, categories: &CategoryTable) -> Result<()> {
        for category in [&self.category1, &self.category2] {
            if !category.is_empty() && !categories.is_canonical(category) {
                return Err(StockError::unknown_category(category, Taxonomy::Canonical));
            }
        }
        Ok(())
    }

    /// Overlay the fields carried by `record` onto this one.
    ///
    /// Fields the source format does not carry keep their current value.
    pub fn fill_from(&mut self, record: &StockRecord, categories: &CategoryTable) -> Result<()> {
        match record {
            StockRecord::Generic(other) => *self = other.clone(),
            StockRecord::ShutterStock(r) => r.fill_canonical(self),
            StockRecord::AdobeStock(r) => r.fill_canonical(self, categories)?,
            StockRecord::GettyImages(r) => r.fill_canonical(self),
        }
        Ok(())
    }

    pub fn to_shutter_stock(&self) -> ShutterStock {
        ShutterStock::from_canonical(self)
    }

    /// Fails if `category1` has no AdobeStock counterpart
    pub fn to_adobe_stock(&self, categories: &CategoryTable) -> Result<AdobeStock> {
        AdobeStock::from_canonical(self, categories)
    }

    pub fn to_getty_images(&self) -> GettyImages {
        GettyImages::from_canonical(self)
    }

    /// Build the record for `target`
    pub fn to_marketplace(
        &self,
        target: Marketplace,
        categories: &CategoryTable,
    ) -> Result<StockRecord> {
        Ok(match target {
            Marketplace::ShutterStock => StockRecord::ShutterStock(self.to_shutter_stock()),
            Marketplace::AdobeStock => StockRecord::AdobeStock(self.to_adobe_stock(categories)?),
            Marketplace::GettyImages => StockRecord::GettyImages(self.to_getty_images()),
        })
    }
}

impl MediaFile for CanonicalRecord {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CanonicalRecord {
        CanonicalRecord {
            filename: "footage_filename.mov".to_string(),
            path: "/media".to_string(),
            title: "Up to 200 characters,Most important keywords first. Max 50 keywords."
                .to_string(),
            description: "A boat in the bay".to_string(),
            category1: "Holidays".to_string(),
            category2: "Transportation".to_string(),
            keywords: vec!["background".into(), "bay".into(), "boat".into()],
            country: "Turkey".to_string(),
            poster_timecode: "00:00:00".to_string(),
            releases: vec!["release1.pdf".into(), "release2.pdf".into()],
            editorial: true,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_default_is_empty() {
        let record = CanonicalRecord::default();
        assert!(record.filename.is_empty());
        assert!(record.keywords.is_empty());
        assert!(record.releases.is_empty());
        assert!(!record.editorial);
    }

    #[test]
    fn test_validate() {
        let categories = CategoryTable::new();
        assert!(sample().validate(&categories).is_ok());
        assert!(CanonicalRecord::default().validate(&categories).is_ok());

        let mut bad = sample();
        bad.category2 = "Cats".to_string();
        assert!(matches!(
            bad.validate(&categories),
            Err(StockError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_shutter_stock_round_trip_keeps_shared_fields_only() {
        let categories = CategoryTable::new();
        let original = sample();

        let shutter = StockRecord::ShutterStock(original.to_shutter_stock());
        let mut back = CanonicalRecord::default();
        back.fill_from(&shutter, &categories).unwrap();

        assert_eq!(back.filename, original.filename);
        assert_eq!(back.title, original.title);
        assert_eq!(back.category1, original.category1);
        assert_eq!(back.category2, original.category2);
        assert_eq!(back.editorial, original.editorial);
        assert_eq!(back.keywords, original.keywords);

        assert!(back.description.is_empty());
        assert!(back.country.is_empty());
        assert!(back.poster_timecode.is_empty());
        assert!(back.releases.is_empty());
    }

    #[test]
    fn test_fill_from_is_an_overlay() {
        let categories = CategoryTable::new();
        let mut record = sample();

        let getty = StockRecord::GettyImages(GettyImages {
            filename: "other.mov".to_string(),
            title: "Other".to_string(),
            ..GettyImages::default()
        });
        record.fill_from(&getty, &categories).unwrap();

        assert_eq!(record.filename, "other.mov");
        assert_eq!(record.title, "Other");
        // not carried by GettyImages
        assert_eq!(record.category1, "Holidays");
        assert!(record.editorial);
        assert_eq!(record.releases.len(), 2);
    }

    #[test]
    fn test_editorial_lost_after_passing_through_adobe_stock() {
        let categories = CategoryTable::new();
        let original = sample();

        let adobe = original.to_adobe_stock(&categories).unwrap();
        let shutter = adobe.to_shutter_stock(&categories).unwrap();

        assert!(!shutter.editorial);
        assert_eq!(shutter.category1, "Holidays");
        assert!(shutter.category2.is_empty());
    }
}
