//! Media library on disk.
//!
//! A library is a flat folder of media files, each with a same-stem JSON
//! sidecar holding its canonical metadata.
//!
//! # Layout
//!
//! ```text
//! media/
//! ├── some_video_1.mp4
//! ├── some_video_1.json
//! ├── some_video_2.mp4
//! └── some_video_2.json
//! ```

pub mod manager;
pub mod sidecar;

pub use manager::StockManager;
pub use sidecar::{find_media_file, to_sidecar_json, SidecarPolicy};
