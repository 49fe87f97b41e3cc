//! ShutterStock record format.
//!
//! ShutterStock shares the canonical category vocabulary, so conversion in
//! either direction is a plain field copy.

use super::canonical::CanonicalRecord;
use super::record::MediaFile;
use crate::csv;
use crate::error::Result;
use crate::taxonomy::CategoryTable;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShutterStock {
    pub filename: String,
    pub path: String,
    pub title: String,
    pub category1: String,
    pub category2: String,
    pub editorial: bool,
    pub keywords: Vec<String>,
}

impl ShutterStock {
    pub const CSV_HEADER: &'static str = "filename,title,keywords,category,editorial";

    /// `filename,"title","keywords","category1,category2",yes|no`
    pub fn to_csv(&self) -> String {
        let categories = format!("{},{}", self.category1, self.category2);
        csv::row([
            self.filename.clone(),
            csv::quoted(&self.title),
            csv::quoted_list(&self.keywords),
            csv::quoted(&categories),
            csv::yes_no(self.editorial).to_string(),
        ])
    }

    pub fn from_canonical(canonical: &CanonicalRecord) -> Self {
        Self {
            filename: canonical.filename.clone(),
            path: canonical.path.clone(),
            title: canonical.title.clone(),
            category1: canonical.category1.clone(),
            category2: canonical.category2.clone(),
            editorial: canonical.editorial,
            keywords: canonical.keywords.clone(),
        }
    }

    pub fn to_canonical(&self) -> CanonicalRecord {
        let mut canonical = CanonicalRecord::default();
        self.fill_canonical(&mut canonical);
        canonical
    }

    /// Copy the ShutterStock fields onto `canonical`, leaving the rest alone
    pub fn fill_canonical(&self, canonical: &mut CanonicalRecord) {
        canonical.filename = self.filename.clone();
        canonical.path = self.path.clone();
        canonical.title = self.title.clone();
        canonical.category1 = self.category1.clone();
        canonical.category2 = self.category2.clone();
        canonical.editorial = self.editorial;
        canonical.keywords = self.keywords.clone();
    }

    pub fn to_adobe_stock(&self, categories: &CategoryTable) -> Result<super::AdobeStock> {
        self.to_canonical().to_adobe_stock(categories)
    }

    pub fn to_getty_images(&self) -> super::GettyImages {
        self.to_canonical().to_getty_images()
    }
}

impl MediaFile for ShutterStock {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn path(&self) -> &str {
        &self.path
    }
}
