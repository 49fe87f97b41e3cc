//! GettyImages record format.

use super::canonical::CanonicalRecord;
use super::record::MediaFile;
use crate::csv;
use crate::error::Result;
use crate::taxonomy::CategoryTable;

/// Poster timecode used when none is known
pub const DEFAULT_POSTER_TIMECODE: &str = "00:00:00:00";

#[derive(Debug, Clone, PartialEq)]
pub struct GettyImages {
    pub filename: String,
    pub path: String,
    pub title: String,
    pub description: String,
    pub country: String,
    pub keywords: Vec<String>,
    pub poster_timecode: String,
}

impl Default for GettyImages {
    fn default() -> Self {
        Self {
            filename: String::new(),
            path: String::new(),
            title: String::new(),
            description: String::new(),
            country: String::new(),
            keywords: Vec::new(),
            poster_timecode: DEFAULT_POSTER_TIMECODE.to_string(),
        }
    }
}

impl GettyImages {
    pub const CSV_HEADER: &'static str =
        "file name,description,country,title,keywords,poster timecode";

    /// `filename,"description",country,"title","keywords",timecode`
    pub fn to_csv(&self) -> String {
        csv::row([
            self.filename.clone(),
            csv::quoted(&self.description),
            self.country.clone(),
            csv::quoted(&self.title),
            csv::quoted_list(&self.keywords),
            self.poster_timecode.clone(),
        ])
    }

    /// Description falls back to the title, timecode to
    /// [`DEFAULT_POSTER_TIMECODE`]
    pub fn from_canonical(canonical: &CanonicalRecord) -> Self {
        let description = if canonical.description.is_empty() {
            canonical.title.clone()
        } else {
            canonical.description.clone()
        };
        let poster_timecode = if canonical.poster_timecode.is_empty() {
            DEFAULT_POSTER_TIMECODE.to_string()
        } else {
            canonical.poster_timecode.clone()
        };

        Self {
            filename: canonical.filename.clone(),
            path: canonical.path.clone(),
            title: canonical.title.clone(),
            description,
            country: canonical.country.clone(),
            keywords: canonical.keywords.clone(),
            poster_timecode,
        }
    }

    pub fn to_canonical(&self) -> CanonicalRecord {
        let mut canonical = CanonicalRecord::default();
        self.fill_canonical(&mut canonical);
        canonical
    }

    /// Copy the GettyImages fields onto `canonical`. The title stands in for
    /// an empty description.
    pub fn fill_canonical(&self, canonical: &mut CanonicalRecord) {
        canonical.filename = self.filename.clone();
        canonical.path = self.path.clone();
        canonical.title = self.title.clone();
        canonical.description = if self.description.is_empty() {
            self.title.clone()
        } else {
            self.description.clone()
        };
        canonical.keywords = self.keywords.clone();
        canonical.country = self.country.clone();
        canonical.poster_timecode = self.poster_timecode.clone();
    }

    pub fn to_shutter_stock(&self) -> super::ShutterStock {
        self.to_canonical().to_shutter_stock()
    }

    pub fn to_adobe_stock(&self, categories: &CategoryTable) -> Result<super::AdobeStock> {
        self.to_canonical().to_adobe_stock(categories)
    }
}

impl MediaFile for GettyImages {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn path(&self) -> &str {
        &self.path
    }
}
