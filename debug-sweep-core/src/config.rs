// config module - resolves defaults, the optional toml file and cli flags

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::SweepArgs;

/// dart source files
pub const DEFAULT_EXTENSION: &str = ".dart";
/// the logger call stripped when no marker is configured
pub const DEFAULT_MARKER: &str = "EVLogger.debug";

/// contents of a sweep config file, every key optional
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub extension: Option<String>,
    pub marker: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

/// fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub root: PathBuf,
    pub extension: String,
    pub marker: String,
    pub verbose: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            verbose: false,
        }
    }
}

impl SweepConfig {
    /// defaults, then the config file (if `--config` was given), then cli flags
    pub fn resolve(args: &SweepArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(file, args)
    }

    fn merge(file: FileConfig, args: &SweepArgs) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            root: args.path.clone().or(file.root).unwrap_or(defaults.root),
            extension: args
                .extension
                .clone()
                .or(file.extension)
                .unwrap_or(defaults.extension),
            marker: args.marker.clone().or(file.marker).unwrap_or(defaults.marker),
            verbose: args.verbose,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // an empty suffix would match (and rewrite) every file in the tree
        if self.extension.is_empty() {
            bail!("extension must not be empty");
        }
        if self.marker.trim().is_empty() {
            bail!("marker must not be empty");
        }
        Ok(())
    }
}
