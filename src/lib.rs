//! stocker - Stock media metadata conversion
//!
//! Converts metadata between the upload formats of ShutterStock, AdobeStock
//! and GettyImages, and renders marketplace CSVs for a folder of media files
//! with JSON sidecars.
//!
//! # Architecture
//!
//! Every conversion goes through a single generic record:
//! - Marketplace records are overlaid onto a `CanonicalRecord`
//! - The canonical record is rendered into the target marketplace record
//! - Categories are remapped through an explicit `CategoryTable`
//!
//! # Modules
//!
//! - `taxonomy`: Canonical and AdobeStock category tables
//! - `domain`: Record types and conversions
//! - `csv`: Row field rendering
//! - `library`: Sidecar files, media discovery, batch CSV
//! - `config`: Configuration file and environment
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # AdobeStock CSV for a folder of media + sidecars
//! stocker csv ./media --target adobestock
//!
//! # Write a sidecar for a clip
//! stocker tag ./media/clip.mov --title "Boat" --keywords sea,boat --category1 Nature
//! ```

pub mod cli;
pub mod config;
pub mod csv;
pub mod domain;
pub mod error;
pub mod library;
pub mod taxonomy;

// Re-export main types at crate root for convenience
pub use domain::{
    AdobeStock, CanonicalRecord, GettyImages, Marketplace, MediaFile, ShutterStock, StockRecord,
};
pub use error::{StockError, Taxonomy};
pub use library::{SidecarPolicy, StockManager};
pub use taxonomy::CategoryTable;
