use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::cache::TtlCache;
use super::http_client::{build_provider_client, DATA_PROVIDER_TIMEOUT_SECS};
use super::NewsProvider;
use crate::domain::news::NEWS_DISCLAIMER;
use crate::domain::{Location, NewsHeadline, NewsSummary};
use crate::engine::news as ranker;
use crate::error::NewsError;
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
/// News responses are reusable for six hours.
const NEWS_CACHE_TTL: Duration = Duration::from_secs(21_600);
/// Morning keyword query sent to NewsAPI.
const MORNING_KEYWORDS: &str = "grève OR alerte OR perturbation OR transport OR météo OR sécurité";
const PAGE_SIZE: u32 = 20;

// ─── Wire models ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
struct NewsApiResponse {
    #[serde(rename = "totalResults")]
    total_results: u32,
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Clone, Deserialize)]
struct NewsApiArticle {
    source: NewsApiSource,
    title: String,
    #[serde(default)]
    description: Option<String>,
    url: String,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
struct NewsApiSource {
    name: String,
}

// ─── Provider ───────────────────────────────────────────────────────────────

/// NewsAPI client: top headlines for the location's country, with an
/// `everything` search fallback when the country feed has nothing relevant.
pub struct NewsApiProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    cache: TtlCache<Vec<NewsHeadline>>,
}

impl NewsApiProvider {
    pub fn new(api_key: Option<&str>) -> Self {
        Self {
            client: build_provider_client(DATA_PROVIDER_TIMEOUT_SECS),
            api_key: api_key.map(str::to_string),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache: TtlCache::new(NEWS_CACHE_TTL),
        }
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_key(&self) -> Result<&str, NewsError> {
        self.api_key.as_deref().ok_or(NewsError::MissingApiKey)
    }

    /// NewsAPI country code for a location: explicit country name first,
    /// otherwise coarse coordinate boxes, France as the default.
    fn country_code(location: &Location) -> String {
        if let Some(country) = &location.country {
            let code = country.to_lowercase();
            return match code.as_str() {
                "france" | "fr" => "fr".to_string(),
                "united kingdom" | "gb" | "uk" => "gb".to_string(),
                "united states" | "us" | "usa" => "us".to_string(),
                "germany" | "de" => "de".to_string(),
                "spain" | "es" => "es".to_string(),
                "italy" | "it" => "it".to_string(),
                _ => code,
            };
        }

        let (lat, lon) = (location.latitude, location.longitude);
        if (41.0..=51.0).contains(&lat) && (-5.0..=10.0).contains(&lon) {
            "fr".to_string()
        } else if (50.0..=59.0).contains(&lat) && (-8.0..=2.0).contains(&lon) {
            "gb".to_string()
        } else if (25.0..=49.0).contains(&lat) && (-125.0..=-65.0).contains(&lon) {
            "us".to_string()
        } else {
            "fr".to_string()
        }
    }

    fn language_code(country: &str) -> &'static str {
        match country {
            "fr" => "fr",
            "gb" | "us" => "en",
            "de" => "de",
            "es" => "es",
            "it" => "it",
            _ => "en",
        }
    }

    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> anyhow::Result<NewsApiResponse> {
        let api_key = self.api_key()?;
        let mut query = query.to_vec();
        query.push(("apiKey", api_key.to_string()));

        let response = self.client.get(url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NewsError::Request {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        response
            .json::<NewsApiResponse>()
            .await
            .map_err(|e| NewsError::Decode(e.to_string()).into())
    }

    async fn top_headlines(&self, country: &str) -> anyhow::Result<NewsApiResponse> {
        let url = format!("{}/top-headlines", self.base_url);
        self.get_json(
            &url,
            &[
                ("country", country.to_string()),
                ("q", MORNING_KEYWORDS.to_string()),
                ("pageSize", PAGE_SIZE.to_string()),
            ],
        )
        .await
    }

    async fn search_everything(&self, language: &str) -> anyhow::Result<NewsApiResponse> {
        let url = format!("{}/everything", self.base_url);
        let now = Utc::now();
        let yesterday = now - chrono::Duration::days(1);
        self.get_json(
            &url,
            &[
                ("q", MORNING_KEYWORDS.to_string()),
                ("language", language.to_string()),
                ("from", yesterday.to_rfc3339()),
                ("to", now.to_rfc3339()),
                ("sortBy", "publishedAt".to_string()),
                ("pageSize", PAGE_SIZE.to_string()),
            ],
        )
        .await
    }

    fn to_headlines(response: NewsApiResponse) -> Vec<NewsHeadline> {
        let mut headlines: Vec<NewsHeadline> = response
            .articles
            .into_iter()
            .map(|article| {
                let description = article.description.unwrap_or_default();
                NewsHeadline {
                    relevance: ranker::relevance(&article.title, &description),
                    category: ranker::categorize(&article.title, &description),
                    title: article.title,
                    source: article.source.name,
                    url: article.url,
                    published_at: article.published_at,
                }
            })
            .collect();

        headlines.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        headlines
    }
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    async fn important_news(&self, location: &Location) -> anyhow::Result<Vec<NewsHeadline>> {
        let country = Self::country_code(location);
        let cache_key = format!("news_{country}");
        if let Some(headlines) = self.cache.get(&cache_key) {
            return Ok(headlines);
        }

        tracing::info!(%country, "fetching morning headlines");

        let response = self.top_headlines(&country).await?;
        let response = if response.total_results > 0 {
            response
        } else {
            // Country feed had nothing; widen to a language-filtered search
            // over the last 24 hours.
            let language = Self::language_code(&country);
            self.search_everything(language).await?
        };

        let headlines = Self::to_headlines(response);
        self.cache.put(cache_key, headlines.clone());
        Ok(headlines)
    }

    async fn news_summary(
        &self,
        location: &Location,
        max_headlines: usize,
    ) -> anyhow::Result<NewsSummary> {
        let mut headlines = self.important_news(location).await?;
        headlines.truncate(max_headlines);

        let summary = ranker::basic_summary(&headlines);

        let mut sources: Vec<String> = Vec::new();
        for headline in &headlines {
            if !sources.contains(&headline.source) {
                sources.push(headline.source.clone());
            }
        }

        Ok(NewsSummary {
            headlines,
            summary,
            ai_generated: false,
            sources,
            generated_at: Utc::now(),
            disclaimer: NEWS_DISCLAIMER.to_string(),
        })
    }
}
