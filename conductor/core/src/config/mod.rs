//! TOML Configuration File Support
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/wizai/wizai.toml`
//! (typically `~/.config/wizai/wizai.toml`).
//!
//! # Configuration Priority
//!
//! Highest first:
//! 1. CLI arguments ([`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [flow]
//! pacing_delay_ms = 2000
//! nickname_max_chars = 10
//!
//! [export]
//! output_dir = "/home/me/Documents"
//! page_width_mm = 210
//! page_height_mm = 297
//! render_width = 72
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::export::{PageGeometry, PageHeight};
use crate::validation::DEFAULT_NICKNAME_MAX_CHARS;

/// Default time the processing screen stays up
pub const DEFAULT_PACING_DELAY_MS: u64 = 2000;

/// Default export render width in terminal columns
pub const DEFAULT_RENDER_WIDTH: u16 = 72;

const ENV_PACING_MS: &str = "WIZAI_PACING_MS";
const ENV_NICKNAME_MAX: &str = "WIZAI_NICKNAME_MAX";
const ENV_EXPORT_DIR: &str = "WIZAI_EXPORT_DIR";
const ENV_PAGE_HEIGHT_MM: &str = "WIZAI_PAGE_HEIGHT_MM";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// `[flow]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowToml {
    /// How long the processing screen stays up, in milliseconds
    pub pacing_delay_ms: Option<u64>,

    /// Maximum nickname length in characters
    pub nickname_max_chars: Option<usize>,
}

/// `[export]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportToml {
    /// Directory exported documents are written to
    pub output_dir: Option<PathBuf>,

    /// Page width in millimetres
    pub page_width_mm: Option<u32>,

    /// Fixed page height in millimetres (omit to fit content)
    pub page_height_mm: Option<u32>,

    /// Width the report is rendered at, in terminal columns
    pub render_width: Option<u16>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WizaiToml {
    /// Flow configuration section
    pub flow: FlowToml,

    /// Export configuration section
    pub export: ExportToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved configuration
#[derive(Clone, Debug)]
pub struct QuizConfig {
    /// Processing screen duration
    pub pacing_delay: Duration,

    /// Maximum nickname length in characters
    pub nickname_max_chars: usize,

    /// Where exported documents go
    pub export_dir: PathBuf,

    /// Page layout for exports
    pub page: PageGeometry,

    /// Export render width in columns
    pub render_width: u16,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            pacing_delay: Duration::from_millis(DEFAULT_PACING_DELAY_MS),
            nickname_max_chars: DEFAULT_NICKNAME_MAX_CHARS,
            export_dir: default_export_dir(),
            page: PageGeometry::default(),
            render_width: DEFAULT_RENDER_WIDTH,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl QuizConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Reject values the quiz cannot run with
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nickname_max_chars == 0 {
            return Err(ConfigError::ValidationError(
                "nickname_max_chars must be at least 1".to_string(),
            ));
        }
        if self.page.width_mm == 0 {
            return Err(ConfigError::ValidationError(
                "page_width_mm must be at least 1".to_string(),
            ));
        }
        if self.page.height == PageHeight::Fixed(0) {
            return Err(ConfigError::ValidationError(
                "page_height_mm must be at least 1".to_string(),
            ));
        }
        if self.render_width < 20 {
            return Err(ConfigError::ValidationError(format!(
                "render_width {} is too narrow (min: 20)",
                self.render_width
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/wizai/wizai.toml` or
/// `~/.config/wizai/wizai.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wizai").join("wizai.toml"))
}

/// Default export directory: the user's documents folder, else home, else cwd
#[must_use]
pub fn default_export_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load configuration from all sources with proper priority
///
/// CLI overrides are not handled here; apply [`ConfigOverrides`] after.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if
/// the merged values are invalid. A missing config file is not an error.
pub fn load_config() -> Result<QuizConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path, then the process environment
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<QuizConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration, reading environment overrides through `env`
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or if the merged values fail [`QuizConfig::validate`].
pub fn load_config_with_env<F>(path: Option<PathBuf>, env: F) -> Result<QuizConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = QuizConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: WizaiToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);
    config.validate()?;

    Ok(config)
}

fn apply_toml_config(config: &mut QuizConfig, toml: &WizaiToml) {
    if let Some(ms) = toml.flow.pacing_delay_ms {
        config.pacing_delay = Duration::from_millis(ms);
    }
    if let Some(max) = toml.flow.nickname_max_chars {
        config.nickname_max_chars = max;
    }

    if let Some(ref dir) = toml.export.output_dir {
        config.export_dir = dir.clone();
    }
    if let Some(width) = toml.export.page_width_mm {
        config.page.width_mm = width;
    }
    if let Some(height) = toml.export.page_height_mm {
        config.page.height = PageHeight::Fixed(height);
    }
    if let Some(width) = toml.export.render_width {
        config.render_width = width;
    }
}

fn apply_env_config<F>(config: &mut QuizConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(ms) = env(ENV_PACING_MS).and_then(|v| v.parse::<u64>().ok()) {
        config.pacing_delay = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(max) = env(ENV_NICKNAME_MAX).and_then(|v| v.parse::<usize>().ok()) {
        config.nickname_max_chars = max;
        config.source = ConfigSource::Env;
    }
    if let Some(dir) = env(ENV_EXPORT_DIR).filter(|v| !v.is_empty()) {
        config.export_dir = PathBuf::from(dir);
        config.source = ConfigSource::Env;
    }
    if let Some(height) = env(ENV_PAGE_HEIGHT_MM).and_then(|v| v.parse::<u32>().ok()) {
        config.page.height = PageHeight::Fixed(height);
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Export directory override
    pub export_dir: Option<PathBuf>,

    /// Pacing delay override (milliseconds)
    pub pacing_delay_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set export directory override
    #[must_use]
    pub fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = Some(dir);
        self
    }

    /// Set pacing delay override
    #[must_use]
    pub fn with_pacing_delay_ms(mut self, ms: u64) -> Self {
        self.pacing_delay_ms = Some(ms);
        self
    }

    /// Apply overrides to a configuration
    pub fn apply(&self, config: &mut QuizConfig) {
        if self.export_dir.is_some() || self.pacing_delay_ms.is_some() {
            config.source = ConfigSource::Cli;
        }

        if let Some(ref dir) = self.export_dir {
            config.export_dir = dir.clone();
        }

        if let Some(ms) = self.pacing_delay_ms {
            config.pacing_delay = Duration::from_millis(ms);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
