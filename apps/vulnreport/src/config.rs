//! Configuration discovery and effective reporter settings.
//!
//! Reads `vulnreport.toml|yaml|yml` from the project root (or closest
//! ancestor) and merges it with caller overrides into an `Effective` config.
//! Defaults:
//! - `verbosity`: `info`
//! - `cyclonedx.version`: `1.4`
//!
//! Overrides precedence: caller > config file > defaults.

use crate::error::{Error, Result};
use crate::models::{CycloneDxVersion, VerbosityLevel};
use crate::reporter::CycloneDxReporter;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const CONFIG_TOML: &str = "vulnreport.toml";
const CONFIG_YAML: [&str; 2] = ["vulnreport.yaml", "vulnreport.yml"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// Root configuration loaded from `vulnreport.toml|yaml`.
pub struct ReporterConfig {
    /// Minimum level printed to the diagnostics stream
    pub verbosity: Option<String>,
    pub cyclonedx: Option<CycloneDxCfg>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// `[cyclonedx]` section.
pub struct CycloneDxCfg {
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Fully-resolved settings after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub config_found: bool,
    pub verbosity: VerbosityLevel,
    pub format: CycloneDxVersion,
}

impl Effective {
    /// Build the run's reporter over the given sinks.
    pub fn reporter<R: Write, D: Write>(
        &self,
        results: R,
        diagnostics: D,
    ) -> CycloneDxReporter<R, D> {
        CycloneDxReporter::new(results, diagnostics, self.format, self.verbosity)
    }
}

/// Walk upward from `start` to find the project root.
///
/// Stops at the first directory holding a config file or a `.git` entry.
pub fn detect_root(start: &Path) -> PathBuf {
    let found = start.ancestors().find(|dir| {
        dir.join(CONFIG_TOML).exists()
            || CONFIG_YAML.iter().any(|y| dir.join(y).exists())
            || dir.join(".git").exists()
    });
    found.unwrap_or(start).to_path_buf()
}

/// Load `ReporterConfig` from `root`, preferring TOML over YAML.
///
/// Returns `Ok(None)` when no config file exists.
pub fn load_config(root: &Path) -> Result<Option<ReporterConfig>> {
    let toml_path = root.join(CONFIG_TOML);
    if toml_path.exists() {
        let s = read(&toml_path)?;
        let cfg = toml::from_str(&s).map_err(|e| parse_error(&toml_path, e.to_string()))?;
        log::debug!("loaded config from {}", toml_path.display());
        return Ok(Some(cfg));
    }
    for yml in CONFIG_YAML {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            let cfg = serde_yaml::from_str(&s).map_err(|e| parse_error(&p, e.to_string()))?;
            log::debug!("loaded config from {}", p.display());
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        log::warn!("failed to read config file {}: {}", path.display(), source);
        Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn parse_error(path: &Path, message: String) -> Error {
    log::warn!("ignoring unusable config {}: {}", path.display(), message);
    Error::ConfigParse {
        path: path.to_path_buf(),
        message,
    }
}

/// Resolve `Effective` by merging overrides, discovered config, and defaults.
pub fn resolve_effective(
    start: Option<&Path>,
    verbosity: Option<VerbosityLevel>,
    format: Option<CycloneDxVersion>,
) -> Result<Effective> {
    let root = detect_root(start.unwrap_or(Path::new(".")));
    let loaded = load_config(&root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let verbosity = match verbosity {
        Some(v) => v,
        None => cfg
            .verbosity
            .as_deref()
            .map(str::parse::<VerbosityLevel>)
            .transpose()?
            .unwrap_or_default(),
    };

    let format = match format {
        Some(f) => f,
        None => cfg
            .cyclonedx
            .as_ref()
            .and_then(|c| c.version.as_deref())
            .map(str::parse::<CycloneDxVersion>)
            .transpose()?
            .unwrap_or_default(),
    };

    if !config_found {
        log::debug!("no config under {}; using defaults", root.display());
    }

    Ok(Effective {
        root,
        config_found,
        verbosity,
        format,
    })
}
