use anyhow::Context;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Location, UserPreferences};
use crate::error::ConfigError;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub location: LocationConfig,

    #[serde(default)]
    pub preferences: UserPreferences,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            providers: ProvidersConfig::default(),
            location: LocationConfig::default(),
            preferences: UserPreferences::default(),
        }
    }
}

// ── Provider credentials ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub openweather_api_key: Option<String>,
    /// NewsAPI key
    #[serde(default)]
    pub news_api_key: Option<String>,
    /// OpenAI API key (optional, enables AI enhancement)
    #[serde(default)]
    pub openai_api_key: Option<String>,
}

// ── Default location ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

fn default_latitude() -> f64 {
    48.8566
}

fn default_longitude() -> f64 {
    2.3522
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            city: Some("Paris".to_string()),
            country: Some("France".to_string()),
        }
    }
}

impl LocationConfig {
    pub fn to_location(&self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            city: self.city.clone(),
            country: self.country.clone(),
        }
    }
}

// ── Loading, overrides, persistence ───────────────────────────────

impl Config {
    pub fn load_or_init() -> anyhow::Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let app_dir = home.join(".morninghelper");
        let config_path = app_dir.join("config.toml");

        if !app_dir.exists() {
            fs::create_dir_all(&app_dir).context("Failed to create .morninghelper directory")?;
        }

        if config_path.exists() {
            let mut config = Self::load_from(&config_path)?;
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        } else {
            let mut config = Self {
                config_path: config_path.clone(),
                ..Self::default()
            };
            config.save()?;
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
    }

    /// Load from an explicit path without touching the home directory.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        // Weather key: MORNINGHELPER_OPENWEATHER_API_KEY or OPENWEATHER_API_KEY
        if let Ok(key) = std::env::var("MORNINGHELPER_OPENWEATHER_API_KEY")
            .or_else(|_| std::env::var("OPENWEATHER_API_KEY"))
        {
            if !key.is_empty() {
                self.providers.openweather_api_key = Some(key);
            }
        }

        // News key: MORNINGHELPER_NEWS_API_KEY or NEWS_API_KEY
        if let Ok(key) = std::env::var("MORNINGHELPER_NEWS_API_KEY")
            .or_else(|_| std::env::var("NEWS_API_KEY"))
        {
            if !key.is_empty() {
                self.providers.news_api_key = Some(key);
            }
        }

        // OpenAI key: MORNINGHELPER_OPENAI_API_KEY or OPENAI_API_KEY
        if let Ok(key) = std::env::var("MORNINGHELPER_OPENAI_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
        {
            if !key.is_empty() {
                self.providers.openai_api_key = Some(key);
            }
        }

        // Temperature threshold: MORNINGHELPER_TEMPERATURE_THRESHOLD
        if let Ok(threshold_str) = std::env::var("MORNINGHELPER_TEMPERATURE_THRESHOLD") {
            if let Ok(threshold) = threshold_str.parse::<i32>() {
                self.preferences.temperature_threshold = threshold;
            }
        }
    }

    /// Reject values no rule engine is prepared for. Runs once at load time
    /// so the engines can trust their inputs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.preferences.temperature_threshold;
        if !(0..=30).contains(&threshold) {
            return Err(ConfigError::Validation(format!(
                "temperature_threshold must be between 0 and 30, got {threshold}"
            )));
        }
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
