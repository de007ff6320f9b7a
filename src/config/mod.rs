// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the songdb driver.
//!
//! Settings are read from YAML or TOML, chosen by file extension. Every
//! field has a default, so an empty file is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::database::DatabaseKind;
use crate::song::Song;

/// Driver configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverConfig {
    /// Storage kind for new databases
    #[serde(default)]
    pub kind: DatabaseKind,
    /// Initial capacity hint
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Song file read by the demo
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Song file written by the demo
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Artist whose songs the demo moves into a separate database
    #[serde(default = "default_artist_filter")]
    pub artist_filter: String,
    /// Songs added before the input file is read
    #[serde(default)]
    pub seed: Vec<Song>,
    /// Default tracing filter, used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_capacity() -> usize {
    5
}
fn default_artist_filter() -> String {
    "Hoshimachi Suisei".to_string()
}
fn default_log_filter() -> String {
    "songdb=info".to_string()
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            kind: DatabaseKind::default(),
            capacity: default_capacity(),
            input: None,
            output: None,
            artist_filter: default_artist_filter(),
            seed: Vec::new(),
            log_filter: default_log_filter(),
        }
    }
}

impl DriverConfig {
    /// Load a configuration from a `.yaml`, `.yml` or `.toml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            Some("toml") => Self::from_toml(&contents),
            _ => bail!("Unsupported config format: {:?}", path),
        }
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }
}
