use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::http_client::{build_provider_client, AI_PROVIDER_TIMEOUT_SECS};
use super::AiEnhancer;
use crate::domain::{NewsHeadline, WeatherSnapshot};
use crate::error::AiError;
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Tips are one sentence; no need for a large completion budget.
const MAX_TOKENS: u32 = 150;
const TEMPERATURE: f64 = 0.7;

// ─── Wire models ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

// ─── Enhancer ───────────────────────────────────────────────────────────────

/// OpenAI chat-completions enhancer: one short supplementary sentence per
/// suggestion. Callers treat any error as "enhancement unavailable" and keep
/// the rule-based output.
pub struct OpenAiEnhancer {
    /// Pre-computed `"Bearer <key>"` header value.
    cached_auth_header: Option<String>,
    client: Client,
    base_url: String,
    model: String,
}

impl OpenAiEnhancer {
    pub fn new(api_key: Option<&str>) -> Self {
        Self {
            cached_auth_header: api_key.map(|k| format!("Bearer {k}")),
            client: build_provider_client(AI_PROVIDER_TIMEOUT_SECS),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    fn clothing_prompt(base_reason: &str, weather: &WeatherSnapshot) -> String {
        format!(
            "Tu es un assistant qui donne des conseils pratiques vestimentaires.\n\n\
             Contexte :\n\
             - Température : {}°C\n\
             - Météo : {}\n\
             - Suggestion de base : {}\n\n\
             Consigne : Améliore cette suggestion en ajoutant UN conseil pratique et court \
             (1 phrase max, 15-20 mots).\n\
             Ton : Pratique, amical.\n\
             Format : Une seule phrase, sans intro ni conclusion.",
            weather.temperature, weather.description, base_reason
        )
    }

    fn accessory_prompt(base_reason: &str, weather: &WeatherSnapshot) -> String {
        format!(
            "Tu es un assistant qui donne des conseils pratiques.\n\n\
             Contexte :\n\
             - Météo : {}\n\
             - Température : {}°C\n\
             - Suggestion de base : {}\n\n\
             Consigne : Ajoute UN conseil pratique très court (1 phrase, 15-20 mots max).\n\
             Ton : Pratique, amical.\n\
             Format : Une seule phrase.",
            weather.description, weather.temperature, base_reason
        )
    }

    fn news_prompt(headlines: &[NewsHeadline]) -> String {
        let titles = headlines
            .iter()
            .take(10)
            .enumerate()
            .map(|(idx, h)| format!("{}. {}", idx + 1, h.title))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Tu es un assistant qui résume les actualités importantes pour quelqu'un qui se \
             prépare le matin.\n\n\
             Articles du jour :\n{titles}\n\n\
             Consigne : Résume en 2-3 phrases courtes les informations les plus importantes qui \
             pourraient impacter la journée d'une personne (grèves, alertes, perturbations \
             transport, événements majeurs).\n\
             Ton : Factuel, concis, utile.\n\
             Format : Texte direct sans introduction.",
        )
    }

    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let auth_header = self
            .cached_auth_header
            .as_ref()
            .ok_or(AiError::MissingApiKey)?;

        let request = self.build_request(prompt);
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", auth_header)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AiError::Request {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let chat_response: ChatResponse = response.json().await?;
        let text = chat_response
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AiError::EmptyResponse)?;

        Ok(text.to_string())
    }
}

#[async_trait]
impl AiEnhancer for OpenAiEnhancer {
    async fn enhance_clothing(
        &self,
        base_reason: &str,
        weather: &WeatherSnapshot,
    ) -> anyhow::Result<String> {
        self.complete(&Self::clothing_prompt(base_reason, weather))
            .await
    }

    async fn enhance_accessories(
        &self,
        base_reason: &str,
        weather: &WeatherSnapshot,
    ) -> anyhow::Result<String> {
        self.complete(&Self::accessory_prompt(base_reason, weather))
            .await
    }

    async fn summarize_news(&self, headlines: &[NewsHeadline]) -> anyhow::Result<String> {
        if headlines.is_empty() {
            return Ok("Aucune actualité importante ce matin.".to_string());
        }
        self.complete(&Self::news_prompt(headlines)).await
    }
}
