//! Command-line interface for stocker.
//!
//! Provides commands for generating marketplace CSVs from a media folder,
//! inspecting and converting sidecars, and writing sidecar metadata.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config;
use crate::domain::{CanonicalRecord, Marketplace, StockRecord};
use crate::library::{SidecarPolicy, StockManager};
use crate::taxonomy::{self, CategoryTable};

/// stocker - Stock media metadata conversion
#[derive(Parser, Debug)]
#[command(name = "stocker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a marketplace CSV for every media file in a folder
    Csv {
        /// Media folder (defaults to the configured library)
        dir: Option<PathBuf>,

        /// Target marketplace (defaults to the configured target)
        #[arg(short, long, value_enum)]
        target: Option<Target>,

        /// Write the CSV to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List media discovered in a folder
    List {
        /// Media folder (defaults to the configured library)
        dir: Option<PathBuf>,
    },

    /// Render a single sidecar as a marketplace CSV
    Convert {
        /// Sidecar JSON file
        sidecar: PathBuf,

        /// Target marketplace (defaults to the configured target)
        #[arg(short, long, value_enum)]
        target: Option<Target>,
    },

    /// Write (or overwrite) the sidecar for a media file
    Tag {
        /// Media file
        media: PathBuf,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Primary category (canonical vocabulary)
        #[arg(long, default_value = "")]
        category1: String,

        /// Secondary category (canonical vocabulary)
        #[arg(long, default_value = "")]
        category2: String,

        /// Keywords (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        keywords: Vec<String>,

        #[arg(long, default_value = "")]
        country: String,

        #[arg(long, default_value = "")]
        poster_timecode: String,

        /// Release documents (comma-separated)
        #[arg(long, value_delimiter = ',')]
        releases: Vec<String>,

        #[arg(long)]
        editorial: bool,
    },

    /// Show the category table with AdobeStock codes
    Categories,

    /// Show resolved configuration (debug)
    Config,
}

/// Marketplace for CLI (maps to Marketplace)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Target {
    /// ShutterStock
    Shutterstock,

    /// AdobeStock
    Adobestock,

    /// GettyImages
    Gettyimages,
}

impl From<Target> for Marketplace {
    fn from(t: Target) -> Self {
        match t {
            Target::Shutterstock => Marketplace::ShutterStock,
            Target::Adobestock => Marketplace::AdobeStock,
            Target::Gettyimages => Marketplace::GettyImages,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let categories = CategoryTable::new();

        match self.command {
            Commands::Csv {
                dir,
                target,
                output,
            } => generate_csv(&categories, dir, target, output),
            Commands::List { dir } => list_media(&categories, dir),
            Commands::Convert { sidecar, target } => convert_sidecar(&categories, &sidecar, target),
            Commands::Tag {
                media,
                title,
                description,
                category1,
                category2,
                keywords,
                country,
                poster_timecode,
                releases,
                editorial,
            } => {
                let record = CanonicalRecord {
                    title,
                    description,
                    category1,
                    category2,
                    keywords,
                    country,
                    poster_timecode,
                    releases,
                    editorial,
                    ..CanonicalRecord::default()
                };
                tag_media(&categories, &media, record)
            }
            Commands::Categories => show_categories(&categories),
            Commands::Config => show_config(),
        }
    }
}

fn resolve_target(target: Option<Target>) -> Result<Marketplace> {
    match target {
        Some(t) => Ok(t.into()),
        None => Ok(config::config()?.target),
    }
}

fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(d) => Ok(d),
        None => Ok(config::config()?.library.clone()),
    }
}

fn sidecar_policy() -> Result<SidecarPolicy> {
    Ok(config::config()?.sidecar_policy)
}

/// Discover a folder and print or write its CSV
fn generate_csv(
    categories: &CategoryTable,
    dir: Option<PathBuf>,
    target: Option<Target>,
    output: Option<PathBuf>,
) -> Result<()> {
    let dir = resolve_dir(dir)?;
    let target = resolve_target(target)?;

    let mut manager = StockManager::new(categories).with_policy(sidecar_policy()?);
    manager.discover_media(&dir)?;

    match output {
        Some(path) => {
            let written = manager.write_csv(target, &path)?;
            eprintln!(
                "[{} rows for {} written to {}]",
                manager.media.len(),
                target,
                written.display()
            );
        }
        None => println!("{}", manager.generate_csv(target)?),
    }

    Ok(())
}

/// List discovered media
fn list_media(categories: &CategoryTable, dir: Option<PathBuf>) -> Result<()> {
    let dir = resolve_dir(dir)?;

    let mut manager = StockManager::new(categories).with_policy(sidecar_policy()?);
    manager.discover_media(&dir)?;

    if manager.media.is_empty() {
        println!("No media with sidecars found in {}", dir.display());
        return Ok(());
    }

    let mut media: Vec<_> = manager.media.iter().collect();
    media.sort_by(|a, b| a.filename.cmp(&b.filename));

    println!("{:<30} {:<22} {:<22} {:<40}", "FILENAME", "CATEGORY 1", "CATEGORY 2", "TITLE");
    println!("{}", "-".repeat(114));

    for record in media {
        println!(
            "{:<30} {:<22} {:<22} {:<40}",
            truncate(&record.filename, 30),
            truncate(&record.category1, 22),
            truncate(&record.category2, 22),
            truncate(&record.title, 40)
        );
    }

    println!("\nTotal: {} items", manager.media.len());

    Ok(())
}

/// Print header and row for one sidecar
fn convert_sidecar(
    categories: &CategoryTable,
    sidecar: &Path,
    target: Option<Target>,
) -> Result<()> {
    let target = resolve_target(target)?;

    let mut record = CanonicalRecord::default();
    record.from_file(sidecar, sidecar_policy()?)?;
    if record.filename.is_empty() {
        tracing::warn!(sidecar = %sidecar.display(), "No media file beside sidecar");
    }

    let converted = StockRecord::Generic(record).convert(target, categories)?;
    println!("{}", target.csv_header());
    println!("{}", converted.to_csv()?);

    Ok(())
}

/// Write the sidecar for a media file
fn tag_media(categories: &CategoryTable, media: &Path, mut record: CanonicalRecord) -> Result<()> {
    if !media.is_file() {
        anyhow::bail!("Media file not found: {}", media.display());
    }

    record.filename = media
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid media file name: {}", media.display()))?
        .to_string();
    record.path = media
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    record.validate(categories)?;

    let path = record.to_sidecar_file()?;
    eprintln!("[Sidecar written to {}]", path.display());

    Ok(())
}

/// Print the taxonomy table
fn show_categories(categories: &CategoryTable) -> Result<()> {
    println!("{:<24} {:<28} {:>4}", "CANONICAL", "ADOBESTOCK", "CODE");
    println!("{}", "-".repeat(58));

    for (canonical, adobe) in categories.entries() {
        let code = taxonomy::adobe_stock_code(adobe)?;
        let marker = if categories.to_canonical(adobe)? == canonical {
            ""
        } else {
            " *"
        };
        println!("{:<24} {:<28} {:>4}{}", canonical, adobe, code, marker);
    }

    println!("\n* maps back to a different canonical category");

    Ok(())
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("stocker configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Library:     {}", cfg.library.display());
    println!("Target:      {}", cfg.target);
    println!("Sidecars:    {:?}", cfg.sidecar_policy);
    println!();
    println!("Environment overrides:");
    println!(
        "  STOCKER_LIBRARY: {}",
        std::env::var("STOCKER_LIBRARY").unwrap_or_else(|_| "(not set)".to_string())
    );
    println!(
        "  STOCKER_TARGET:  {}",
        std::env::var("STOCKER_TARGET").unwrap_or_else(|_| "(not set)".to_string())
    );

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_csv_command() {
        let cli = Cli::try_parse_from(["stocker", "csv", "media", "-t", "gettyimages"]).unwrap();
        match cli.command {
            Commands::Csv { dir, target, output } => {
                assert_eq!(dir, Some(PathBuf::from("media")));
                assert!(matches!(target, Some(Target::Gettyimages)));
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_tag_keywords() {
        let cli = Cli::try_parse_from([
            "stocker",
            "tag",
            "clip.mov",
            "--title",
            "Clip",
            "--keywords",
            "sea,boat,sky",
            "--editorial",
        ])
        .unwrap();
        match cli.command {
            Commands::Tag {
                keywords,
                editorial,
                ..
            } => {
                assert_eq!(keywords, vec!["sea", "boat", "sky"]);
                assert!(editorial);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_target_maps_to_marketplace() {
        assert_eq!(Marketplace::from(Target::Adobestock), Marketplace::AdobeStock);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title", 10), "a very ...");
    }
}
