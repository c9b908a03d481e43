use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing_core::LevelFilter;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinLogTarget {
    Stdout,
    Stderr,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum LogTarget {
    File { filename: PathBuf },
    Builtin(BuiltinLogTarget),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct LogEntry {
    pub target: LogTarget,
    #[serde(default)]
    pub modules: Vec<String>,
    pub level: Option<LogLevel>,
}

/// Where log output goes, and how much of it
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Directory that file targets are written to
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
    pub default_level: Option<LogLevel>,
    #[serde(default)]
    pub module_levels: HashMap<String, LogLevel>,
    pub targets: Vec<LogEntry>,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

#[derive(Debug, Error)]
pub enum LoggingConfigError {
    #[error("I/O error on {1}: {0}")]
    IoError(std::io::Error, PathBuf),
    #[error("Parse error in {1}: {0}")]
    ParseError(json5::Error, PathBuf),
}

impl LoggingConfig {
    /// Info-level logging to standard error, used when no logging config is given
    pub fn console() -> Self {
        Self {
            dir: default_log_dir(),
            default_level: Some(LogLevel::Info),
            module_levels: HashMap::new(),
            targets: vec![LogEntry {
                target: LogTarget::Builtin(BuiltinLogTarget::Stderr),
                modules: Vec::new(),
                level: Some(LogLevel::Info),
            }],
        }
    }

    pub fn load_file(filename: impl AsRef<Path>) -> Result<Self, LoggingConfigError> {
        let filename = filename.as_ref();
        let text = std::fs::read_to_string(filename)
            .map_err(|e| LoggingConfigError::IoError(e, filename.to_owned()))?;
        json5::from_str(&text).map_err(|e| LoggingConfigError::ParseError(e, filename.to_owned()))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(arg: LogLevel) -> LevelFilter {
        match arg {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}
