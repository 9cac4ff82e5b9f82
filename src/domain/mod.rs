pub mod accessory;
pub mod clothing;
pub mod news;
pub mod suggestion;
pub mod weather;

pub use accessory::AccessoryType;
pub use clothing::ClothingType;
pub use news::{NewsCategory, NewsHeadline, NewsSummary};
pub use suggestion::{
    AccessorySuggestion, ClothingSuggestion, LocationDisplay, MorningSuggestions,
    SuggestionContext, TransportSuggestion,
};
pub use weather::{ForecastPoint, WeatherCondition, WeatherSnapshot};

use serde::{Deserialize, Serialize};

// ─── Location ───────────────────────────────────────────────────────────────

/// A geographic point, optionally annotated with display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city: None,
            country: None,
        }
    }
}

// ─── User preferences ───────────────────────────────────────────────────────

/// Snapshot of the user's suggestion settings, read once per orchestration
/// call. The settings store owns persistence; the core never mutates this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Temperature (°C) below which "cold" rules activate. Valid range [0,30],
    /// enforced at the config boundary, not by the rule engines.
    #[serde(default = "default_temperature_threshold")]
    pub temperature_threshold: i32,
    #[serde(default = "default_true")]
    pub ai_suggestions_enabled: bool,
    #[serde(default = "default_true")]
    pub news_enabled: bool,
}

fn default_temperature_threshold() -> i32 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            temperature_threshold: default_temperature_threshold(),
            ai_suggestions_enabled: true,
            news_enabled: true,
        }
    }
}
