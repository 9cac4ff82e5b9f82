use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Location;

// ─── Conditions ─────────────────────────────────────────────────────────────

/// Closed set of weather conditions the rule engines understand.
///
/// Provider clients are responsible for mapping their own condition codes
/// into this enumeration; open strings never reach the engines.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    HeavyRain,
    Drizzle,
    Snow,
    Sleet,
    Thunderstorm,
    Fog,
    Wind,
    Hot,
    Freezing,
}

impl WeatherCondition {
    /// French display label, as shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Ciel dégagé",
            Self::Cloudy => "Nuageux",
            Self::Rain => "Pluie",
            Self::HeavyRain => "Pluie forte",
            Self::Drizzle => "Bruine",
            Self::Snow => "Neige",
            Self::Sleet => "Neige fondue",
            Self::Thunderstorm => "Orage",
            Self::Fog => "Brouillard",
            Self::Wind => "Vent fort",
            Self::Hot => "Très chaud",
            Self::Freezing => "Gel / Verglas",
        }
    }
}

// ─── Observations ───────────────────────────────────────────────────────────

/// Current conditions at a location, produced fresh per orchestration call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub timestamp: DateTime<Utc>,
    /// Integer-rounded °C.
    pub temperature: i32,
    pub condition: WeatherCondition,
    /// Provider's free-text description ("pluie modérée", ...).
    pub description: String,
    pub will_rain: bool,
    pub will_snow: bool,
    /// 0–100.
    pub rain_probability: u8,
    /// 0–100.
    pub snow_probability: u8,
    /// Relative humidity, 0–100.
    pub humidity: u8,
    /// km/h, rounded.
    pub wind_speed_kmh: i32,
}

/// One hour-bucketed forecast entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub temperature: i32,
    pub condition: WeatherCondition,
    pub will_rain: bool,
    pub will_snow: bool,
    pub rain_probability: u8,
}
