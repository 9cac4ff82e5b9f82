use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::cache::TtlCache;
use super::http_client::{build_provider_client, DATA_PROVIDER_TIMEOUT_SECS};
use super::WeatherProvider;
use crate::domain::{ForecastPoint, Location, WeatherCondition, WeatherSnapshot};
use crate::error::WeatherError;
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
/// Weather responses are reusable for an hour.
const WEATHER_CACHE_TTL: Duration = Duration::from_secs(3600);

// ─── Wire models ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    coord: OwmCoord,
    weather: Vec<OwmWeather>,
    main: OwmMain,
    wind: OwmWind,
    rain: Option<OwmPrecipitation>,
    snow: Option<OwmPrecipitation>,
    dt: i64,
    sys: OwmSys,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwmCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    id: u32,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

/// Precipitation payload. Only its presence is consulted; the per-window
/// volumes are ignored.
#[derive(Debug, Deserialize)]
struct OwmPrecipitation {}

#[derive(Debug, Deserialize)]
struct OwmSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    weather: Vec<OwmWeather>,
    #[serde(default)]
    pop: f64,
    rain: Option<OwmPrecipitation>,
    snow: Option<OwmPrecipitation>,
}

// ─── Provider ───────────────────────────────────────────────────────────────

/// OpenWeatherMap client (current weather + 5-day/3-hour forecast).
pub struct OpenWeatherMapProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    current_cache: TtlCache<WeatherSnapshot>,
    forecast_cache: TtlCache<Vec<ForecastPoint>>,
}

impl OpenWeatherMapProvider {
    pub fn new(api_key: Option<&str>) -> Self {
        Self {
            client: build_provider_client(DATA_PROVIDER_TIMEOUT_SECS),
            api_key: api_key.map(str::to_string),
            base_url: DEFAULT_BASE_URL.to_string(),
            current_cache: TtlCache::new(WEATHER_CACHE_TTL),
            forecast_cache: TtlCache::new(WEATHER_CACHE_TTL),
        }
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_key(&self) -> Result<&str, WeatherError> {
        self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)
    }

    /// Map OpenWeatherMap condition codes into the closed enumeration.
    /// <https://openweathermap.org/weather-conditions>
    fn map_condition(code: u32) -> WeatherCondition {
        match code {
            200..=299 => WeatherCondition::Thunderstorm,
            300..=399 => WeatherCondition::Drizzle,
            502..=599 => WeatherCondition::HeavyRain,
            500..=501 => WeatherCondition::Rain,
            611 | 612 | 613 | 615 | 616 => WeatherCondition::Sleet,
            600..=699 => WeatherCondition::Snow,
            700..=799 => WeatherCondition::Fog,
            800 => WeatherCondition::Clear,
            801.. => WeatherCondition::Cloudy,
            _ => WeatherCondition::Clear,
        }
    }

    fn snapshot_from_response(response: OwmCurrentResponse) -> WeatherSnapshot {
        let (condition, description) = response
            .weather
            .first()
            .map(|w| (Self::map_condition(w.id), w.description.clone()))
            .unwrap_or((WeatherCondition::Clear, String::new()));

        let will_rain = response.rain.is_some();
        let will_snow = response.snow.is_some();

        WeatherSnapshot {
            location: Location {
                latitude: response.coord.lat,
                longitude: response.coord.lon,
                city: Some(response.name),
                country: response.sys.country,
            },
            timestamp: Utc
                .timestamp_opt(response.dt, 0)
                .single()
                .unwrap_or_else(Utc::now),
            temperature: response.main.temp.round() as i32,
            condition,
            description,
            will_rain,
            will_snow,
            // The current-weather endpoint has no probability field; presence
            // of a precipitation payload is treated as a strong signal.
            rain_probability: if will_rain { 80 } else { 0 },
            snow_probability: if will_snow { 80 } else { 0 },
            humidity: response.main.humidity,
            wind_speed_kmh: (response.wind.speed * 3.6).round() as i32,
        }
    }

    fn forecast_point(item: OwmForecastItem) -> ForecastPoint {
        let condition = item
            .weather
            .first()
            .map(|w| Self::map_condition(w.id))
            .unwrap_or(WeatherCondition::Clear);

        ForecastPoint {
            timestamp: Utc
                .timestamp_opt(item.dt, 0)
                .single()
                .unwrap_or_else(Utc::now),
            temperature: item.main.temp.round() as i32,
            condition,
            will_rain: item.rain.is_some(),
            will_snow: item.snow.is_some(),
            rain_probability: (item.pop * 100.0).round().clamp(0.0, 100.0) as u8,
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> anyhow::Result<T> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WeatherError::Request {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::Decode(e.to_string()).into())
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMapProvider {
    async fn current_weather(&self, location: &Location) -> anyhow::Result<WeatherSnapshot> {
        let cache_key = format!("current_{}_{}", location.latitude, location.longitude);
        if let Some(snapshot) = self.current_cache.get(&cache_key) {
            return Ok(snapshot);
        }

        let api_key = self.api_key()?;
        tracing::info!(
            lat = location.latitude,
            lon = location.longitude,
            "fetching current weather"
        );

        let url = format!("{}/weather", self.base_url);
        let response: OwmCurrentResponse = self
            .get_json(
                &url,
                &[
                    ("lat", location.latitude.to_string()),
                    ("lon", location.longitude.to_string()),
                    ("appid", api_key.to_string()),
                    ("units", "metric".to_string()),
                    ("lang", "fr".to_string()),
                ],
            )
            .await?;

        let snapshot = Self::snapshot_from_response(response);
        self.current_cache.put(cache_key, snapshot.clone());
        Ok(snapshot)
    }

    async fn forecast(
        &self,
        location: &Location,
        hours: u32,
    ) -> anyhow::Result<Vec<ForecastPoint>> {
        let cache_key = format!(
            "forecast_{}_{}_{}",
            location.latitude, location.longitude, hours
        );
        if let Some(points) = self.forecast_cache.get(&cache_key) {
            return Ok(points);
        }

        let api_key = self.api_key()?;
        tracing::info!(
            lat = location.latitude,
            lon = location.longitude,
            hours,
            "fetching forecast"
        );

        let url = format!("{}/forecast", self.base_url);
        let response: OwmForecastResponse = self
            .get_json(
                &url,
                &[
                    ("lat", location.latitude.to_string()),
                    ("lon", location.longitude.to_string()),
                    ("appid", api_key.to_string()),
                    ("units", "metric".to_string()),
                    ("lang", "fr".to_string()),
                ],
            )
            .await?;

        // The API returns 3-hour buckets for 5 days; keep only the window.
        let now = Utc::now();
        let end: DateTime<Utc> = now + chrono::Duration::hours(i64::from(hours));
        let points: Vec<ForecastPoint> = response
            .list
            .into_iter()
            .map(Self::forecast_point)
            .filter(|p| p.timestamp >= now && p.timestamp <= end)
            .collect();

        self.forecast_cache.put(cache_key, points.clone());
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thunderstorm_codes_map() {
        assert_eq!(
            OpenWeatherMapProvider::map_condition(212),
            WeatherCondition::Thunderstorm
        );
    }

    #[test]
    fn rain_splits_into_light_and_heavy() {
        assert_eq!(OpenWeatherMapProvider::map_condition(500), WeatherCondition::Rain);
        assert_eq!(OpenWeatherMapProvider::map_condition(501), WeatherCondition::Rain);
        assert_eq!(
            OpenWeatherMapProvider::map_condition(502),
            WeatherCondition::HeavyRain
        );
        assert_eq!(
            OpenWeatherMapProvider::map_condition(531),
            WeatherCondition::HeavyRain
        );
    }

    #[test]
    fn sleet_codes_are_carved_out_of_snow() {
        for code in [611, 612, 613, 615, 616] {
            assert_eq!(
                OpenWeatherMapProvider::map_condition(code),
                WeatherCondition::Sleet
            );
        }
        assert_eq!(OpenWeatherMapProvider::map_condition(600), WeatherCondition::Snow);
        assert_eq!(OpenWeatherMapProvider::map_condition(622), WeatherCondition::Snow);
    }

    #[test]
    fn atmosphere_clear_and_clouds_map() {
        assert_eq!(OpenWeatherMapProvider::map_condition(741), WeatherCondition::Fog);
        assert_eq!(OpenWeatherMapProvider::map_condition(800), WeatherCondition::Clear);
        assert_eq!(OpenWeatherMapProvider::map_condition(804), WeatherCondition::Cloudy);
    }

    #[test]
    fn snapshot_rounds_and_converts_units() {
        let json = r#"{
            "coord": {"lat": 48.85, "lon": 2.35},
            "weather": [{"id": 500, "main": "Rain", "description": "pluie légère"}],
            "main": {"temp": 11.6, "humidity": 82},
            "wind": {"speed": 5.0},
            "rain": {"1h": 0.5},
            "dt": 1700000000,
            "sys": {"country": "FR"},
            "name": "Paris"
        }"#;
        let response: OwmCurrentResponse = serde_json::from_str(json).unwrap();
        let snapshot = OpenWeatherMapProvider::snapshot_from_response(response);

        assert_eq!(snapshot.temperature, 12);
        assert_eq!(snapshot.wind_speed_kmh, 18); // 5 m/s -> 18 km/h
        assert!(snapshot.will_rain);
        assert!(!snapshot.will_snow);
        assert_eq!(snapshot.rain_probability, 80);
        assert_eq!(snapshot.condition, WeatherCondition::Rain);
        assert_eq!(snapshot.location.city.as_deref(), Some("Paris"));
    }

    #[test]
    fn forecast_point_uses_pop_for_probability() {
        let json = r#"{
            "dt": 1700000000,
            "main": {"temp": 3.2, "humidity": 90},
            "weather": [{"id": 600, "main": "Snow", "description": "neige"}],
            "pop": 0.65,
            "snow": {"3h": 1.2}
        }"#;
        let item: OwmForecastItem = serde_json::from_str(json).unwrap();
        let point = OpenWeatherMapProvider::forecast_point(item);

        assert_eq!(point.temperature, 3);
        assert_eq!(point.rain_probability, 65);
        assert!(point.will_snow);
        assert_eq!(point.condition, WeatherCondition::Snow);
    }

    #[test]
    fn precipitation_presence_is_enough_to_flag_rain() {
        // Some stations report an empty rain object with no volume keys.
        let json = r#"{
            "coord": {"lat": 48.85, "lon": 2.35},
            "weather": [{"id": 500, "main": "Rain", "description": "pluie légère"}],
            "main": {"temp": 10.0, "humidity": 80},
            "wind": {"speed": 3.0},
            "rain": {},
            "dt": 1700000000,
            "sys": {"country": "FR"},
            "name": "Paris"
        }"#;
        let response: OwmCurrentResponse = serde_json::from_str(json).unwrap();
        let snapshot = OpenWeatherMapProvider::snapshot_from_response(response);
        assert!(snapshot.will_rain);
        assert_eq!(snapshot.rain_probability, 80);
    }

    #[tokio::test]
    async fn current_weather_fails_without_key() {
        let provider = OpenWeatherMapProvider::new(None);
        let err = provider
            .current_weather(&Location::new(48.85, 2.35))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("OPENWEATHER_API_KEY"));
    }
}
