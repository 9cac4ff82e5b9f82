//! Shared in-memory provider fakes for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use morninghelper::domain::news::NEWS_DISCLAIMER;
use morninghelper::domain::{
    ForecastPoint, Location, NewsCategory, NewsHeadline, NewsSummary, WeatherCondition,
    WeatherSnapshot,
};
use morninghelper::providers::{AiEnhancer, NewsProvider, WeatherProvider};

pub fn paris() -> Location {
    let mut location = Location::new(48.8566, 2.3522);
    location.city = Some("Paris".to_string());
    location.country = Some("France".to_string());
    location
}

pub fn snapshot(temperature: i32, condition: WeatherCondition) -> WeatherSnapshot {
    WeatherSnapshot {
        location: paris(),
        timestamp: Utc::now(),
        temperature,
        condition,
        description: "conditions de test".to_string(),
        will_rain: matches!(
            condition,
            WeatherCondition::Rain | WeatherCondition::HeavyRain | WeatherCondition::Drizzle
        ),
        will_snow: matches!(condition, WeatherCondition::Snow | WeatherCondition::Sleet),
        rain_probability: 0,
        snow_probability: 0,
        humidity: 60,
        wind_speed_kmh: 10,
    }
}

pub fn headline(title: &str, relevance: f64, category: NewsCategory) -> NewsHeadline {
    NewsHeadline {
        title: title.to_string(),
        source: "AFP".to_string(),
        url: "https://example.org/article".to_string(),
        published_at: Utc::now(),
        relevance,
        category,
    }
}

// ── Weather ──────────────────────────────────────────────────────

/// Weather fake returning a fixed snapshot, or failing every call.
pub struct StubWeather {
    pub snapshot: Option<WeatherSnapshot>,
    pub forecast: Vec<ForecastPoint>,
    pub calls: AtomicUsize,
}

impl StubWeather {
    pub fn ok(snapshot: WeatherSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            forecast: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            snapshot: None,
            forecast: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn current_weather(&self, _location: &Location) -> anyhow::Result<WeatherSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.snapshot
            .clone()
            .ok_or_else(|| anyhow::anyhow!("weather service unavailable"))
    }

    async fn forecast(
        &self,
        _location: &Location,
        _hours: u32,
    ) -> anyhow::Result<Vec<ForecastPoint>> {
        if self.snapshot.is_none() {
            anyhow::bail!("weather service unavailable");
        }
        Ok(self.forecast.clone())
    }
}

// ── News ─────────────────────────────────────────────────────────

pub struct StubNews {
    pub headlines: Option<Vec<NewsHeadline>>,
}

impl StubNews {
    pub fn ok(headlines: Vec<NewsHeadline>) -> Self {
        Self {
            headlines: Some(headlines),
        }
    }

    pub fn failing() -> Self {
        Self { headlines: None }
    }
}

#[async_trait]
impl NewsProvider for StubNews {
    async fn important_news(&self, _location: &Location) -> anyhow::Result<Vec<NewsHeadline>> {
        self.headlines
            .clone()
            .ok_or_else(|| anyhow::anyhow!("news service unavailable"))
    }

    async fn news_summary(
        &self,
        location: &Location,
        max_headlines: usize,
    ) -> anyhow::Result<NewsSummary> {
        let mut headlines = self.important_news(location).await?;
        headlines.truncate(max_headlines);
        let sources = headlines.iter().map(|h| h.source.clone()).collect();
        Ok(NewsSummary {
            summary: format!("{} actualité(s).", headlines.len()),
            headlines,
            ai_generated: false,
            sources,
            generated_at: Utc::now(),
            disclaimer: NEWS_DISCLAIMER.to_string(),
        })
    }
}

// ── AI ───────────────────────────────────────────────────────────

/// Enhancer fake: echoes a canned tip, or fails every call.
pub struct StubEnhancer {
    pub fail: bool,
}

#[async_trait]
impl AiEnhancer for StubEnhancer {
    async fn enhance_clothing(
        &self,
        _base_reason: &str,
        _weather: &WeatherSnapshot,
    ) -> anyhow::Result<String> {
        if self.fail {
            anyhow::bail!("model unavailable");
        }
        Ok("Conseil vestimentaire du modèle.".to_string())
    }

    async fn enhance_accessories(
        &self,
        _base_reason: &str,
        _weather: &WeatherSnapshot,
    ) -> anyhow::Result<String> {
        if self.fail {
            anyhow::bail!("model unavailable");
        }
        Ok("Conseil accessoire du modèle.".to_string())
    }

    async fn summarize_news(&self, headlines: &[NewsHeadline]) -> anyhow::Result<String> {
        if self.fail {
            anyhow::bail!("model unavailable");
        }
        Ok(format!("Résumé de {} titres.", headlines.len()))
    }
}
