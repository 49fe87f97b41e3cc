//! Media discovery and batch CSV generation for a folder of assets.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

use super::sidecar::SidecarPolicy;
use crate::domain::{CanonicalRecord, Marketplace};
use crate::taxonomy::CategoryTable;

/// Discovers media in a flat folder and renders marketplace CSVs for it
#[derive(Debug)]
pub struct StockManager<'a> {
    /// Discovered records, in discovery order
    pub media: Vec<CanonicalRecord>,

    categories: &'a CategoryTable,
    policy: SidecarPolicy,
}

impl<'a> StockManager<'a> {
    pub fn new(categories: &'a CategoryTable) -> Self {
        Self {
            media: Vec::new(),
            categories,
            policy: SidecarPolicy::default(),
        }
    }

    /// Set how unknown sidecar keys are handled
    pub fn with_policy(mut self, policy: SidecarPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace `media` with one record per `*.json` sidecar directly inside
    /// `path`. Sidecars without a co-located media file are skipped.
    ///
    /// Returns the number of records found.
    pub fn discover_media(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if !path.is_dir() {
            anyhow::bail!("Media folder does not exist: {}", path.display());
        }

        let pattern = Path::new(&Pattern::escape(&path.to_string_lossy())).join("*.json");

        let mut media = Vec::new();
        let mut skipped = 0;

        for entry in glob::glob(&pattern.to_string_lossy()).context("Invalid sidecar pattern")? {
            let sidecar = entry?;
            if !sidecar.is_file() {
                continue;
            }

            let mut record = CanonicalRecord::default();
            record.from_file(&sidecar, self.policy)?;

            if record.filename.is_empty() {
                tracing::warn!(sidecar = %sidecar.display(), "No media file for sidecar, skipping");
                skipped += 1;
                continue;
            }

            tracing::debug!(filename = %record.filename, "Discovered media");
            media.push(record);
        }

        tracing::info!(
            path = %path.display(),
            found = media.len(),
            skipped,
            "Media discovery finished"
        );

        self.media = media;
        Ok(self.media.len())
    }

    /// Render every discovered record for `target`, one row per record after
    /// the header. Any record that fails to convert aborts the whole batch.
    pub fn generate_csv(&self, target: Marketplace) -> Result<String> {
        let mut lines = Vec::with_capacity(self.media.len() + 1);
        lines.push(target.csv_header().to_string());

        for record in &self.media {
            let row = record
                .to_marketplace(target, self.categories)
                .and_then(|converted| converted.to_csv())
                .with_context(|| format!("Failed to render {} for {}", record.filename, target))?;
            lines.push(row);
        }

        Ok(lines.join("\n"))
    }

    /// Write the CSV for `target` to `output`, replacing any existing file
    pub fn write_csv(&self, target: Marketplace, output: impl AsRef<Path>) -> Result<PathBuf> {
        let output = output.as_ref();
        let content = self.generate_csv(target)?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(output, content)
            .with_context(|| format!("Failed to write CSV: {}", output.display()))?;

        tracing::info!(
            output = %output.display(),
            rows = self.media.len(),
            marketplace = %target,
            "CSV written"
        );
        Ok(output.to_path_buf())
    }

    /// Check every discovered record against the canonical category set
    pub fn validate(&self) -> Result<()> {
        for record in &self.media {
            record
                .validate(self.categories)
                .with_context(|| format!("Invalid categories in {}", record.filename))?;
        }
        Ok(())
    }
}
