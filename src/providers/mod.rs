pub mod cache;
pub mod http_client;
pub mod newsapi;
pub mod openai;
pub mod openweathermap;

pub use newsapi::NewsApiProvider;
pub use openai::OpenAiEnhancer;
pub use openweathermap::OpenWeatherMapProvider;

use async_trait::async_trait;

use crate::domain::{ForecastPoint, Location, NewsHeadline, NewsSummary, WeatherSnapshot};

// ─── Provider seams ─────────────────────────────────────────────────────────
//
// The orchestrator only ever sees these traits, so tests can run it against
// in-memory fakes and the HTTP clients stay swappable.

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a location. Temperature is integer °C.
    async fn current_weather(&self, location: &Location) -> anyhow::Result<WeatherSnapshot>;

    /// Hour-bucketed forecast covering the next `hours` hours.
    async fn forecast(&self, location: &Location, hours: u32)
        -> anyhow::Result<Vec<ForecastPoint>>;
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Ranked morning-relevant headlines for a location, most relevant first.
    async fn important_news(&self, location: &Location) -> anyhow::Result<Vec<NewsHeadline>>;

    /// Digest of at most `max_headlines` headlines with a templated summary.
    async fn news_summary(
        &self,
        location: &Location,
        max_headlines: usize,
    ) -> anyhow::Result<NewsSummary>;
}

/// Optional capability: a language model producing one supplementary sentence.
/// The orchestrator must work with this entirely absent.
#[async_trait]
pub trait AiEnhancer: Send + Sync {
    async fn enhance_clothing(
        &self,
        base_reason: &str,
        weather: &WeatherSnapshot,
    ) -> anyhow::Result<String>;

    async fn enhance_accessories(
        &self,
        base_reason: &str,
        weather: &WeatherSnapshot,
    ) -> anyhow::Result<String>;

    async fn summarize_news(&self, headlines: &[NewsHeadline]) -> anyhow::Result<String>;
}
