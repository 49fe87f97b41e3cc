//! Record types for each stock format.
//!
//! - `CanonicalRecord`: the generic superset every conversion goes through
//! - `ShutterStock`, `AdobeStock`, `GettyImages`: marketplace upload formats
//! - `StockRecord`: the closed set of all four, with any-to-any conversion

pub mod adobe_stock;
pub mod canonical;
pub mod getty_images;
pub mod record;
pub mod shutter_stock;

pub use adobe_stock::AdobeStock;
pub use canonical::CanonicalRecord;
pub use getty_images::{GettyImages, DEFAULT_POSTER_TIMECODE};
pub use record::{sidecar_filename, Marketplace, MediaFile, Status, StockRecord};
pub use shutter_stock::ShutterStock;
