//! JSON sidecar files.
//!
//! Each media asset has a `<stem>.json` file beside it holding its canonical
//! metadata:
//!
//! ```text
//! media/
//! ├── some_video_1.mp4
//! └── some_video_1.json   # title, description, categories, keywords, ...
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{CanonicalRecord, MediaFile};
use crate::error::StockError;

/// How to treat sidecar keys outside the known field set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidecarPolicy {
    /// Keep unknown keys in `CanonicalRecord::extra` and log a warning
    #[default]
    Lenient,

    /// Reject the sidecar
    Strict,
}

/// Sidecar contents as read. Absent keys leave the record untouched.
#[derive(Debug, Default, Deserialize)]
struct SidecarFields {
    title: Option<String>,
    description: Option<String>,
    category1: Option<String>,
    category2: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    keywords: Option<Vec<String>>,
    country: Option<String>,
    poster_timecode: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    releases: Option<Vec<String>>,
    editorial: Option<bool>,

    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// A present-but-null list reads as an empty list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let list: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(Some(list.unwrap_or_default()))
}

/// The fields written to a sidecar, in file order
#[derive(Debug, Serialize)]
struct SidecarView<'a> {
    title: &'a str,
    description: &'a str,
    category1: &'a str,
    category2: &'a str,
    keywords: &'a [String],
    country: &'a str,
    poster_timecode: &'a str,
    releases: &'a [String],
    editorial: bool,
}

impl<'a> From<&'a CanonicalRecord> for SidecarView<'a> {
    fn from(record: &'a CanonicalRecord) -> Self {
        Self {
            title: &record.title,
            description: &record.description,
            category1: &record.category1,
            category2: &record.category2,
            keywords: &record.keywords,
            country: &record.country,
            poster_timecode: &record.poster_timecode,
            releases: &record.releases,
            editorial: record.editorial,
        }
    }
}

/// Render a record as sidecar JSON (2-space indent, no trailing newline)
pub fn to_sidecar_json(record: &CanonicalRecord) -> Result<String> {
    serde_json::to_string_pretty(&SidecarView::from(record))
        .context("Failed to serialize sidecar JSON")
}

/// Find the media file paired with a sidecar: the first non-`.json` file in
/// the same directory whose stem equals the sidecar's stem. This is the
/// inverse of [`sidecar_filename`](crate::domain::sidecar_filename), so
/// `clip.json` pairs with `clip.mov` or `clip`, never with `clip.v2.mov`.
pub fn find_media_file(sidecar: &Path) -> Result<Option<PathBuf>> {
    let dir = match sidecar.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let stem = sidecar
        .file_stem()
        .with_context(|| format!("Invalid sidecar file name: {}", sidecar.display()))?;

    // `<stem>*` narrows the listing; the exact stem check below decides
    let pattern = Path::new(&Pattern::escape(&dir.to_string_lossy()))
        .join(format!("{}*", Pattern::escape(&stem.to_string_lossy())));

    for entry in glob::glob(&pattern.to_string_lossy()).context("Invalid media search pattern")? {
        let path = entry?;
        let is_sidecar = path
            .extension()
            .map(|ext| ext == "json")
            .unwrap_or(false);
        if is_sidecar || path.file_stem() != Some(stem) || !path.is_file() {
            continue;
        }
        return Ok(Some(path));
    }

    Ok(None)
}

impl CanonicalRecord {
    /// Load metadata from a sidecar file and attach the co-located media file.
    ///
    /// Keys present in the JSON overwrite the matching fields; absent keys
    /// leave them as they are. If no media file sits beside the sidecar,
    /// `filename` and `path` are left unchanged.
    pub fn from_file(&mut self, sidecar: impl AsRef<Path>, policy: SidecarPolicy) -> Result<()> {
        let sidecar = sidecar.as_ref();

        let content = fs::read_to_string(sidecar)
            .with_context(|| format!("Failed to read sidecar: {}", sidecar.display()))?;
        let fields: SidecarFields = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse sidecar JSON: {}", sidecar.display()))?;

        if !fields.extra.is_empty() {
            let keys: Vec<String> = fields.extra.keys().cloned().collect();
            match policy {
                SidecarPolicy::Strict => {
                    return Err(StockError::UnknownSidecarKeys {
                        path: sidecar.to_path_buf(),
                        keys,
                    }
                    .into());
                }
                SidecarPolicy::Lenient => {
                    tracing::warn!(
                        sidecar = %sidecar.display(),
                        keys = %keys.join(", "),
                        "Unknown sidecar keys kept as extra attributes"
                    );
                }
            }
        }

        self.apply(fields);

        if let Some(media) = find_media_file(sidecar)? {
            tracing::debug!(media = %media.display(), "Matched media file");
            if let Some(name) = media.file_name().and_then(|n| n.to_str()) {
                self.filename = name.to_string();
            }
            if let Some(dir) = media.parent() {
                self.path = dir.to_string_lossy().into_owned();
            }
        }

        Ok(())
    }

    /// Load metadata from the sidecar beside `path/filename`
    pub fn from_sidecar_file(&mut self, policy: SidecarPolicy) -> Result<()> {
        let sidecar = self.sidecar_full_path();
        self.from_file(sidecar, policy)
    }

    /// Write the sidecar beside `path/filename`, replacing any existing one
    pub fn to_sidecar_file(&self) -> Result<PathBuf> {
        let path = self.sidecar_full_path();
        let content = to_sidecar_json(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write sidecar: {}", path.display()))?;
        Ok(path)
    }

    fn apply(&mut self, fields: SidecarFields) {
        if let Some(title) = fields.title {
            self.title = title;
        }
        if let Some(description) = fields.description {
            self.description = description;
        }
        if let Some(category1) = fields.category1 {
            self.category1 = category1;
        }
        if let Some(category2) = fields.category2 {
            self.category2 = category2;
        }
        if let Some(keywords) = fields.keywords {
            self.keywords = keywords;
        }
        if let Some(country) = fields.country {
            self.country = country;
        }
        if let Some(poster_timecode) = fields.poster_timecode {
            self.poster_timecode = poster_timecode;
        }
        if let Some(releases) = fields.releases {
            self.releases = releases;
        }
        if let Some(editorial) = fields.editorial {
            self.editorial = editorial;
        }
        self.extra.extend(fields.extra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn media_with_sidecar(temp: &TempDir, sidecar: &str) -> (PathBuf, PathBuf) {
        let media = temp.path().join("clip.mov");
        let json = temp.path().join("clip.json");
        fs::write(&media, b"").unwrap();
        fs::write(&json, sidecar).unwrap();
        (media, json)
    }

    #[test]
    fn test_from_file_reads_fields_and_media() {
        let temp = TempDir::new().unwrap();
        let (_, json) = media_with_sidecar(
            &temp,
            r#"{"title": "Test Title", "keywords": ["keyword1", "keyword2"]}"#,
        );

        let mut record = CanonicalRecord::default();
        record.from_file(&json, SidecarPolicy::Lenient).unwrap();

        assert_eq!(record.title, "Test Title");
        assert_eq!(record.keywords, vec!["keyword1", "keyword2"]);
        assert_eq!(record.filename, "clip.mov");
        assert_eq!(record.path, temp.path().to_string_lossy());
    }

    #[test]
    fn test_absent_keys_keep_prior_values() {
        let temp = TempDir::new().unwrap();
        let (_, json) = media_with_sidecar(&temp, r#"{"title": "New"}"#);

        let mut record = CanonicalRecord {
            description: "kept".to_string(),
            editorial: true,
            ..CanonicalRecord::default()
        };
        record.from_file(&json, SidecarPolicy::Lenient).unwrap();

        assert_eq!(record.title, "New");
        assert_eq!(record.description, "kept");
        assert!(record.editorial);
    }

    #[test]
    fn test_null_keywords_become_empty() {
        let temp = TempDir::new().unwrap();
        let (_, json) = media_with_sidecar(&temp, r#"{"keywords": null, "releases": null}"#);

        let mut record = CanonicalRecord {
            keywords: vec!["old".to_string()],
            ..CanonicalRecord::default()
        };
        record.from_file(&json, SidecarPolicy::Lenient).unwrap();

        assert!(record.keywords.is_empty());
        assert!(record.releases.is_empty());
    }

    #[test]
    fn test_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let (_, json) = media_with_sidecar(&temp, r#"{"title": "T", "rating": 5}"#);

        let mut record = CanonicalRecord::default();
        record.from_file(&json, SidecarPolicy::Lenient).unwrap();
        assert_eq!(record.extra.get("rating"), Some(&Value::from(5)));

        let mut strict = CanonicalRecord::default();
        let err = strict.from_file(&json, SidecarPolicy::Strict).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StockError>(),
            Some(StockError::UnknownSidecarKeys { .. })
        ));
    }

    #[test]
    fn test_missing_media_leaves_filename_empty() {
        let temp = TempDir::new().unwrap();
        let json = temp.path().join("orphan.json");
        fs::write(&json, r#"{"title": "Orphan"}"#).unwrap();

        let mut record = CanonicalRecord::default();
        record.from_file(&json, SidecarPolicy::Lenient).unwrap();

        assert_eq!(record.title, "Orphan");
        assert!(record.filename.is_empty());
        assert!(record.path.is_empty());
    }

    #[test]
    fn test_media_match_requires_exact_stem() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("clip.v2.mov"), b"").unwrap();
        fs::write(temp.path().join("clip.v2.json"), "{}").unwrap();
        fs::write(temp.path().join("clip.json"), "{}").unwrap();

        assert_eq!(find_media_file(&temp.path().join("clip.json")).unwrap(), None);
        assert_eq!(
            find_media_file(&temp.path().join("clip.v2.json")).unwrap(),
            Some(temp.path().join("clip.v2.mov"))
        );
    }

    #[test]
    fn test_media_without_extension_matches() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("clip"), b"").unwrap();
        fs::write(temp.path().join("clip.json"), "{}").unwrap();

        assert_eq!(
            find_media_file(&temp.path().join("clip.json")).unwrap(),
            Some(temp.path().join("clip"))
        );
    }

    #[test]
    fn test_wrong_value_type_is_an_error() {
        let temp = TempDir::new().unwrap();
        let (_, json) = media_with_sidecar(&temp, r#"{"title": "T", "editorial": "yes"}"#);

        let mut record = CanonicalRecord::default();
        let err = record.from_file(&json, SidecarPolicy::Lenient).unwrap_err();

        assert!(format!("{:#}", err).contains("clip.json"));
        assert!(record.title.is_empty());
    }

    #[test]
    fn test_missing_sidecar_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut record = CanonicalRecord::default();
        assert!(record
            .from_file(temp.path().join("nope.json"), SidecarPolicy::Lenient)
            .is_err());
    }

    #[test]
    fn test_to_sidecar_file_round_trip() {
        let temp = TempDir::new().unwrap();
        let record = CanonicalRecord {
            filename: "clip.mov".to_string(),
            path: temp.path().to_string_lossy().into_owned(),
            title: "Test Title 1".to_string(),
            keywords: vec!["keyword1".to_string(), "keyword2".to_string()],
            category1: "Nature".to_string(),
            editorial: true,
            ..CanonicalRecord::default()
        };

        let written = record.to_sidecar_file().unwrap();
        assert_eq!(written, temp.path().join("clip.json"));

        let mut loaded = CanonicalRecord::new("clip.mov", temp.path().to_string_lossy());
        loaded.from_sidecar_file(SidecarPolicy::Strict).unwrap();

        assert_eq!(loaded.title, record.title);
        assert_eq!(loaded.keywords, record.keywords);
        assert_eq!(loaded.category1, record.category1);
        assert!(loaded.editorial);
    }

    #[test]
    fn test_sidecar_json_layout() {
        let record = CanonicalRecord {
            title: "Test Title 1".to_string(),
            keywords: vec!["keyword1".to_string(), "keyword2".to_string()],
            ..CanonicalRecord::default()
        };

        assert_eq!(
            to_sidecar_json(&record).unwrap(),
            r#"{
  "title": "Test Title 1",
  "description": "",
  "category1": "",
  "category2": "",
  "keywords": [
    "keyword1",
    "keyword2"
  ],
  "country": "",
  "poster_timecode": "",
  "releases": [],
  "editorial": false
}"#
        );
    }
}
