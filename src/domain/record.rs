//! The closed set of record formats and the marketplace targets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::adobe_stock::AdobeStock;
use super::canonical::CanonicalRecord;
use super::getty_images::GettyImages;
use super::shutter_stock::ShutterStock;
use crate::error::{Result, StockError};
use crate::taxonomy::CategoryTable;

/// A media asset on disk, located by directory and file name
pub trait MediaFile {
    fn filename(&self) -> &str;

    fn path(&self) -> &str;

    /// Sidecar name: the media file name with its extension replaced by `.json`
    fn sidecar_filename(&self) -> String {
        sidecar_filename(self.filename())
    }

    fn sidecar_full_path(&self) -> PathBuf {
        Path::new(self.path()).join(self.sidecar_filename())
    }
}

/// Derive the sidecar file name for a media file name
pub fn sidecar_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    format!("{}.json", stem)
}

/// Marketplace a record can be rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marketplace {
    ShutterStock,
    AdobeStock,
    GettyImages,
}

impl Marketplace {
    pub const ALL: [Marketplace; 3] = [
        Marketplace::ShutterStock,
        Marketplace::AdobeStock,
        Marketplace::GettyImages,
    ];

    /// Header row of this marketplace's upload CSV
    pub fn csv_header(&self) -> &'static str {
        match self {
            Marketplace::ShutterStock => ShutterStock::CSV_HEADER,
            Marketplace::AdobeStock => AdobeStock::CSV_HEADER,
            Marketplace::GettyImages => GettyImages::CSV_HEADER,
        }
    }
}

impl std::fmt::Display for Marketplace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marketplace::ShutterStock => write!(f, "ShutterStock"),
            Marketplace::AdobeStock => write!(f, "AdobeStock"),
            Marketplace::GettyImages => write!(f, "GettyImages"),
        }
    }
}

impl std::str::FromStr for Marketplace {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "shutterstock" | "shutter" => Ok(Marketplace::ShutterStock),
            "adobestock" | "adobe" => Ok(Marketplace::AdobeStock),
            "gettyimages" | "getty" => Ok(Marketplace::GettyImages),
            _ => anyhow::bail!("Unknown marketplace: {}", s),
        }
    }
}

/// Review state of a submission on a marketplace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pending => write!(f, "Pending"),
            Status::Accepted => write!(f, "Accepted"),
            Status::Rejected => write!(f, "Rejected"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "accepted" => Ok(Status::Accepted),
            "rejected" => Ok(Status::Rejected),
            _ => anyhow::bail!("Unknown status: {}", s),
        }
    }
}

/// A record in any of the supported formats
#[derive(Debug, Clone, PartialEq)]
pub enum StockRecord {
    Generic(CanonicalRecord),
    ShutterStock(ShutterStock),
    AdobeStock(AdobeStock),
    GettyImages(GettyImages),
}

impl StockRecord {
    /// Human-readable format name
    pub fn format(&self) -> &'static str {
        match self {
            StockRecord::Generic(_) => "Generic",
            StockRecord::ShutterStock(_) => "ShutterStock",
            StockRecord::AdobeStock(_) => "AdobeStock",
            StockRecord::GettyImages(_) => "GettyImages",
        }
    }

    /// Marketplace this record belongs to, `None` for the generic record
    pub fn marketplace(&self) -> Option<Marketplace> {
        match self {
            StockRecord::Generic(_) => None,
            StockRecord::ShutterStock(_) => Some(Marketplace::ShutterStock),
            StockRecord::AdobeStock(_) => Some(Marketplace::AdobeStock),
            StockRecord::GettyImages(_) => Some(Marketplace::GettyImages),
        }
    }

    /// Build a fresh canonical record from this one
    pub fn to_canonical(&self, categories: &CategoryTable) -> Result<CanonicalRecord> {
        let mut canonical = CanonicalRecord::default();
        canonical.fill_from(self, categories)?;
        Ok(canonical)
    }

    /// Convert to `target`, always through an intermediate canonical record
    pub fn convert(&self, target: Marketplace, categories: &CategoryTable) -> Result<StockRecord> {
        self.to_canonical(categories)?
            .to_marketplace(target, categories)
    }

    /// Render one CSV row. The generic record has no upload format.
    pub fn to_csv(&self) -> Result<String> {
        match self {
            StockRecord::Generic(_) => Err(StockError::Unsupported {
                operation: "to_csv",
                format: self.format(),
            }),
            StockRecord::ShutterStock(r) => Ok(r.to_csv()),
            StockRecord::AdobeStock(r) => r.to_csv(),
            StockRecord::GettyImages(r) => Ok(r.to_csv()),
        }
    }

    /// Header matching [`StockRecord::to_csv`]
    pub fn csv_header(&self) -> Result<&'static str> {
        self.marketplace()
            .map(|m| m.csv_header())
            .ok_or(StockError::Unsupported {
                operation: "csv_header",
                format: self.format(),
            })
    }

    fn media(&self) -> &dyn MediaFile {
        match self {
            StockRecord::Generic(r) => r,
            StockRecord::ShutterStock(r) => r,
            StockRecord::AdobeStock(r) => r,
            StockRecord::GettyImages(r) => r,
        }
    }
}

impl MediaFile for StockRecord {
    fn filename(&self) -> &str {
        self.media().filename()
    }

    fn path(&self) -> &str {
        self.media().path()
    }
}
