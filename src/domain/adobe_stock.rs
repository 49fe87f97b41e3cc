//! AdobeStock record format.
//!
//! AdobeStock has a single category from its own vocabulary, rendered in the
//! CSV as a numeric code.

use super::canonical::CanonicalRecord;
use super::record::MediaFile;
use crate::csv;
use crate::error::Result;
use crate::taxonomy::{self, CategoryTable};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdobeStock {
    pub filename: String,
    pub path: String,
    pub title: String,

    /// AdobeStock category name, empty when unset
    pub category: String,

    pub keywords: Vec<String>,
    pub releases: Vec<String>,
}

impl AdobeStock {
    pub const CSV_HEADER: &'static str = "filename,title,keywords,category,releases";

    /// `filename,"title","keywords",code,"releases"`
    ///
    /// Fails if the category has no AdobeStock code, including when unset.
    pub fn to_csv(&self) -> Result<String> {
        let code = taxonomy::adobe_stock_code(&self.category)?;
        Ok(csv::row([
            self.filename.clone(),
            csv::quoted(&self.title),
            csv::quoted_list(&self.keywords),
            code.to_string(),
            csv::quoted_list(&self.releases),
        ]))
    }

    pub fn from_canonical(
        canonical: &CanonicalRecord,
        categories: &CategoryTable,
    ) -> Result<Self> {
        let category = if canonical.category1.is_empty() {
            String::new()
        } else {
            categories.to_adobe_stock(&canonical.category1)?.to_string()
        };

        Ok(Self {
            filename: canonical.filename.clone(),
            path: canonical.path.clone(),
            title: canonical.title.clone(),
            category,
            keywords: canonical.keywords.clone(),
            releases: canonical.releases.clone(),
        })
    }

    pub fn to_canonical(&self, categories: &CategoryTable) -> Result<CanonicalRecord> {
        let mut canonical = CanonicalRecord::default();
        self.fill_canonical(&mut canonical, categories)?;
        Ok(canonical)
    }

    /// Copy the AdobeStock fields onto `canonical`, mapping the category back
    /// through the lossy inverse table
    pub fn fill_canonical(
        &self,
        canonical: &mut CanonicalRecord,
        categories: &CategoryTable,
    ) -> Result<()> {
        let category1 = if self.category.is_empty() {
            String::new()
        } else {
            categories.to_canonical(&self.category)?.to_string()
        };

        canonical.filename = self.filename.clone();
        canonical.path = self.path.clone();
        canonical.title = self.title.clone();
        canonical.keywords = self.keywords.clone();
        canonical.category1 = category1;
        canonical.releases = self.releases.clone();
        Ok(())
    }

    pub fn to_shutter_stock(&self, categories: &CategoryTable) -> Result<super::ShutterStock> {
        Ok(self.to_canonical(categories)?.to_shutter_stock())
    }

    pub fn to_getty_images(&self, categories: &CategoryTable) -> Result<super::GettyImages> {
        Ok(self.to_canonical(categories)?.to_getty_images())
    }
}

impl MediaFile for AdobeStock {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn path(&self) -> &str {
        &self.path
    }
}
