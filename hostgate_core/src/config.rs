//! Contains definitions of the gate configuration file and the data
//! directory that holds it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::reservation::RawReservations;

/// Embed colour used when the configuration doesn't set one
pub const DEFAULT_WEBHOOK_COLOR: u32 = 16711680;

/// Errors that could happen when loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {1}: {0}")]
    IoError(std::io::Error, PathBuf),
    #[error("Parse error in {1}: {0}")]
    ParseError(json5::Error, PathBuf),
}

/// The directory holding the configuration and message files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("gate.json5")
    }

    pub fn message_file(&self, language: &str) -> PathBuf {
        self.root.join(format!("messages_{}.json5", language))
    }
}

/// Outbound webhook settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub enabled: bool,
    pub url: String,
    pub color: u32,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            color: DEFAULT_WEBHOOK_COLOR,
        }
    }
}

impl WebhookConfig {
    /// Whether a notification should actually be sent
    pub fn is_active(&self) -> bool {
        self.enabled && !self.url.is_empty()
    }
}

/// The gate configuration file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GateConfig {
    pub enabled: bool,
    pub debug: bool,
    pub lang: String,
    pub allowed_domains: Vec<String>,
    pub reserved_uuid: Option<RawReservations>,
    pub webhook: WebhookConfig,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
            lang: "en".to_string(),
            allowed_domains: vec!["example.net".to_string()],
            reserved_uuid: None,
            webhook: WebhookConfig::default(),
        }
    }
}

impl GateConfig {
    /// The configuration file shipped with the crate
    pub const DEFAULT_RESOURCE: &'static str = include_str!("../resources/gate.json5");

    /// Load configuration from a file
    pub fn try_load(filename: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let filename = filename.as_ref();
        let text = fs::read_to_string(filename)
            .map_err(|e| ConfigError::IoError(e, filename.to_owned()))?;
        json5::from_str(&text).map_err(|e| ConfigError::ParseError(e, filename.to_owned()))
    }

    /// Load the configuration from the data directory, writing out the
    /// shipped default if there is no file yet.
    ///
    /// Any error reading the file results in the default configuration.
    pub fn load(data_dir: &DataDirectory) -> Self {
        let path = data_dir.config_file();

        if !path.exists() {
            write_default_resource(&path, Some(Self::DEFAULT_RESOURCE));
        }

        match Self::try_load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error=%e, "Couldn't load gate configuration; using defaults");
                Self::default()
            }
        }
    }
}

/// Copy a shipped default resource to `path`.
///
/// Neither a missing resource nor a failed write is an error; the caller will
/// simply find no file when it tries to read it.
pub(crate) fn write_default_resource(path: &Path, contents: Option<&str>) {
    let Some(contents) = contents else {
        tracing::debug!(path=%path.display(), "No default resource available");
        return;
    };

    let result = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| fs::write(path, contents));

    if let Err(e) = result {
        tracing::debug!(path=%path.display(), error=%e, "Couldn't write default resource");
    }
}
