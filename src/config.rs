//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::experiment::ConfidenceLevel;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub experiment: ExperimentConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub compliance: ComplianceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A/B test analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExperimentConfig {
    /// Confidence a treatment needs to be declared the winner (90 or 95)
    #[serde(default = "default_winner_confidence")]
    pub winner_confidence: u8,

    /// Arms below this many visitors are flagged as underpowered
    #[serde(default = "default_min_visitors")]
    pub min_visitors_per_variant: u64,
}

fn default_winner_confidence() -> u8 {
    95
}

fn default_min_visitors() -> u64 {
    100
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            winner_confidence: default_winner_confidence(),
            min_visitors_per_variant: default_min_visitors(),
        }
    }
}

impl ExperimentConfig {
    /// Winner threshold as a confidence level
    ///
    /// Anything other than 90 means the strict 95% level.
    pub fn required_confidence(&self) -> ConfidenceLevel {
        match self.winner_confidence {
            90 => ConfidenceLevel::Ninety,
            95 => ConfidenceLevel::NinetyFive,
            other => {
                tracing::warn!(
                    winner_confidence = other,
                    "Unsupported winner confidence, using 95"
                );
                ConfidenceLevel::NinetyFive
            }
        }
    }
}

/// Content generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Variations per request, clamped to 1..=3
    #[serde(default = "default_max_variations")]
    pub max_variations: usize,

    /// Seed for illustrative metrics; random when unset
    #[serde(default)]
    pub seed: Option<u64>,

    /// Image style used when a creative request names none
    #[serde(default = "default_image_style")]
    pub image_style: String,
}

fn default_max_variations() -> usize {
    3
}

fn default_image_style() -> String {
    "modern".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_variations: default_max_variations(),
            seed: None,
            image_style: default_image_style(),
        }
    }
}

/// Compliance rule thresholds
#[derive(Debug, Clone, Deserialize)]
pub struct ComplianceConfig {
    #[serde(default = "default_facebook_limit")]
    pub facebook_char_limit: usize,

    #[serde(default = "default_linkedin_limit")]
    pub linkedin_char_limit: usize,

    /// Exclamation marks tolerated in Google Ads copy
    #[serde(default = "default_max_exclamations")]
    pub max_exclamations: usize,

    #[serde(default = "default_instagram_hashtags")]
    pub instagram_max_hashtags: usize,

    /// Hashtags in a social post before a density advisory
    #[serde(default = "default_social_hashtags")]
    pub social_hashtag_advisory: usize,

    /// All-caps words before a readability advisory
    #[serde(default = "default_shouting_threshold")]
    pub shouting_word_threshold: usize,
}

fn default_facebook_limit() -> usize {
    2200
}

fn default_linkedin_limit() -> usize {
    3000
}

fn default_max_exclamations() -> usize {
    1
}

fn default_instagram_hashtags() -> usize {
    30
}

fn default_social_hashtags() -> usize {
    10
}

fn default_shouting_threshold() -> usize {
    3
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            facebook_char_limit: default_facebook_limit(),
            linkedin_char_limit: default_linkedin_limit(),
            max_exclamations: default_max_exclamations(),
            instagram_max_hashtags: default_instagram_hashtags(),
            social_hashtag_advisory: default_social_hashtags(),
            shouting_word_threshold: default_shouting_threshold(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("beacon").join("config.toml")),
            Some(PathBuf::from("/etc/beacon/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("BEACON_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("BEACON_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(seed) = lookup("BEACON_SEED") {
            match seed.parse() {
                Ok(s) => self.generator.seed = Some(s),
                Err(_) => tracing::warn!(value = %seed, "Ignoring non-numeric BEACON_SEED"),
            }
        }
        if let Some(max) = lookup("BEACON_MAX_VARIATIONS") {
            if let Ok(m) = max.parse() {
                self.generator.max_variations = m;
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Beacon Configuration
#
# Environment variables override these settings:
# - BEACON_LOG_LEVEL
# - BEACON_LOG_FORMAT
# - BEACON_SEED
# - BEACON_MAX_VARIATIONS

[experiment]
# Confidence a variant needs to be declared the winner: 90 or 95
winner_confidence = 95

# Arms with fewer visitors are flagged as underpowered
min_visitors_per_variant = 100

[generator]
# Variations returned per request (1-3)
max_variations = 3

# Fixed seed for illustrative metrics (omit for random)
# seed = 42

# Image style used when a creative request names none
image_style = "modern"

[compliance]
facebook_char_limit = 2200
linkedin_char_limit = 3000

# Exclamation marks allowed in Google Ads copy
max_exclamations = 1

instagram_max_hashtags = 30

# Hashtags in a social post before a density advisory
social_hashtag_advisory = 10

# All-caps words before a readability advisory
shouting_word_threshold = 3

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
