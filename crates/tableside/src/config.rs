//! Runtime configuration.
//!
//! Sources, later ones winning: built-in defaults, the TOML file named by
//! `TABLESIDE_CONFIG` (default `tableside.toml`, optional), then the
//! `TABLESIDE_TAX_BPS` and `TABLESIDE_SNAPSHOT_DIR` environment variables.
//! `main` loads `.env` first, so those can live there too.

use crate::errors::{Error, Result};
use crate::model::{LoyaltyProgram, TransitionPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_PATH_VAR: &str = "TABLESIDE_CONFIG";
pub const TAX_BPS_VAR: &str = "TABLESIDE_TAX_BPS";
pub const SNAPSHOT_DIR_VAR: &str = "TABLESIDE_SNAPSHOT_DIR";
pub const DEFAULT_CONFIG_PATH: &str = "tableside.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Sales tax in basis points (800 = 8%).
    pub tax_rate_bps: u32,
    /// Directory for cart snapshots; in-memory when unset.
    pub snapshot_dir: Option<PathBuf>,
    pub transition_policy: TransitionPolicy,
    /// Per-room buffer of the live order feed.
    pub event_capacity: usize,
    /// Delay between steps of the simulated progression.
    pub demo_step_ms: u64,
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
    pub loyalty: LoyaltyProgram,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tax_rate_bps: 800,
            snapshot_dir: None,
            transition_policy: TransitionPolicy::Enforced,
            event_capacity: 64,
            demo_step_ms: 500,
            log_level: "info".to_string(),
            loyalty: LoyaltyProgram::default(),
        }
    }
}

impl AppConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(format!("Failed to parse TOML: {e}")))
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Attempting to load configuration from: {:?}", path);
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents)
                .map_err(|e| Error::Config(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(Error::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))),
        }
    }

    /// Applies environment overrides through `lookup`.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(raw) = lookup(TAX_BPS_VAR) {
            self.tax_rate_bps = raw
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("{TAX_BPS_VAR}={raw:?}: {e}")))?;
        }
        if let Some(dir) = lookup(SNAPSHOT_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            self.snapshot_dir = Some(PathBuf::from(dir));
        }
        Ok(self)
    }
}

/// Loads the configuration from the file and the process environment.
pub fn load() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    AppConfig::from_file(Path::new(&path))?.apply_overrides(|key| std::env::var(key).ok())
}
