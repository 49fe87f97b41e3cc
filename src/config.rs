//! Configuration for stocker.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (STOCKER_LIBRARY, STOCKER_TARGET)
//! 2. Config file (.stocker/config.yaml)
//! 3. Defaults (current directory, AdobeStock, lenient sidecars)
//!
//! Config file discovery:
//! - Searches current directory and parents for .stocker/config.yaml
//! - Paths in config file are relative to the project root (parent of .stocker/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::Marketplace;
use crate::library::SidecarPolicy;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    /// Media folder (relative to the project root)
    pub library: Option<String>,
    /// Default marketplace for CSV output
    pub target: Option<Marketplace>,
    #[serde(default)]
    pub sidecars: SidecarsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SidecarsConfig {
    /// Reject sidecars with unknown keys
    #[serde(default)]
    pub strict: bool,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Media folder to scan
    pub library: PathBuf,
    /// Default marketplace
    pub target: Marketplace,
    /// Unknown sidecar key handling
    pub sidecar_policy: SidecarPolicy,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            library: PathBuf::from("."),
            target: Marketplace::AdobeStock,
            sidecar_policy: SidecarPolicy::Lenient,
            config_file: None,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".stocker").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Merge a parsed config file and environment overrides onto the defaults
fn resolve(
    config: Option<(PathBuf, ConfigFile)>,
    env_library: Option<String>,
    env_target: Option<String>,
) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some((config_path, config)) = config {
        // Base directory is the parent of .stocker/ (i.e., grandparent of config.yaml)
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        if let Some(ref library) = config.library {
            resolved.library = resolve_path(base_dir, library);
        }
        if let Some(target) = config.target {
            resolved.target = target;
        }
        if config.sidecars.strict {
            resolved.sidecar_policy = SidecarPolicy::Strict;
        }
        resolved.config_file = Some(config_path);
    }

    if let Some(library) = env_library {
        resolved.library = PathBuf::from(library);
    }
    if let Some(target) = env_target {
        resolved.target = target
            .parse()
            .with_context(|| format!("Invalid STOCKER_TARGET: {}", target))?;
    }

    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config = match find_config_file() {
        Some(path) => {
            let file = load_config_file(&path)?;
            Some((path, file))
        }
        None => None,
    };

    resolve(
        config,
        std::env::var("STOCKER_LIBRARY").ok(),
        std::env::var("STOCKER_TARGET").ok(),
    )
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = resolve(None, None, None).unwrap();

        assert_eq!(config.library, PathBuf::from("."));
        assert_eq!(config.target, Marketplace::AdobeStock);
        assert_eq!(config.sidecar_policy, SidecarPolicy::Lenient);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let stocker_dir = temp.path().join(".stocker");
        std::fs::create_dir_all(&stocker_dir).unwrap();

        let config_path = stocker_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
library: ./media
target: getty_images
sidecars:
  strict: true
"#
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.library, Some("./media".to_string()));
        assert_eq!(config.target, Some(Marketplace::GettyImages));
        assert!(config.sidecars.strict);

        let resolved = resolve(Some((config_path.clone(), config)), None, None).unwrap();
        assert_eq!(resolved.library, temp.path().join("./media"));
        assert_eq!(resolved.target, Marketplace::GettyImages);
        assert_eq!(resolved.sidecar_policy, SidecarPolicy::Strict);
        assert_eq!(resolved.config_file, Some(config_path));
    }

    #[test]
    fn test_env_overrides_file() {
        let config = ConfigFile {
            version: "1.0".to_string(),
            library: Some("/from/file".to_string()),
            target: Some(Marketplace::GettyImages),
            sidecars: SidecarsConfig::default(),
        };

        let resolved = resolve(
            Some((PathBuf::from("/project/.stocker/config.yaml"), config)),
            Some("/from/env".to_string()),
            Some("shutterstock".to_string()),
        )
        .unwrap();

        assert_eq!(resolved.library, PathBuf::from("/from/env"));
        assert_eq!(resolved.target, Marketplace::ShutterStock);
    }

    #[test]
    fn test_invalid_env_target() {
        assert!(resolve(None, None, Some("pond5".to_string())).is_err());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/subdir")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }
}
