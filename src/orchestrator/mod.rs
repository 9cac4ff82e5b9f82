//! Morning suggestion orchestration.
//!
//! Fans out the clothing, accessory and news pipelines concurrently against
//! live provider data, applies optional AI enhancement, and assembles one
//! composite result that tolerates partial failure.

pub mod settle;

use std::sync::Arc;

use chrono::Utc;

use crate::domain::suggestion::{AI_CONFIDENCE, RULE_CONFIDENCE};
use crate::domain::{
    AccessorySuggestion, ClothingSuggestion, ClothingType, Location, LocationDisplay,
    MorningSuggestions, NewsSummary, SuggestionContext, TransportSuggestion, UserPreferences,
};
use crate::engine::{self, news as news_ranker};
use crate::providers::{AiEnhancer, NewsProvider, WeatherProvider};

/// Hours of forecast consulted by the accessory pipeline.
const FORECAST_WINDOW_HOURS: u32 = 12;
/// Default digest size.
const MAX_HEADLINES: usize = 10;

/// Coordinates the suggestion pipelines.
///
/// The AI enhancer is an optional capability: the orchestrator works
/// correctly with it entirely absent.
pub struct SuggestionOrchestrator {
    weather: Arc<dyn WeatherProvider>,
    news: Arc<dyn NewsProvider>,
    enhancer: Option<Arc<dyn AiEnhancer>>,
}

impl SuggestionOrchestrator {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        news: Arc<dyn NewsProvider>,
        enhancer: Option<Arc<dyn AiEnhancer>>,
    ) -> Self {
        Self {
            weather,
            news,
            enhancer,
        }
    }

    /// Generate the full morning digest.
    ///
    /// The three pipelines settle independently: a provider failure in one
    /// degrades that suggestion to its documented default (confidence 0) and
    /// never aborts the others. Only a failure outside the pipelines
    /// propagates to the caller.
    pub async fn generate_morning_suggestions(
        &self,
        location: &Location,
        settings: &UserPreferences,
        use_ai: bool,
    ) -> crate::error::Result<MorningSuggestions> {
        let context = SuggestionContext {
            location: location.clone(),
            timestamp: Utc::now(),
            settings: *settings,
        };
        let ai_active = use_ai && settings.ai_suggestions_enabled;

        let news_pipeline = async {
            if settings.news_enabled {
                Some(self.news_suggestion(&context, ai_active).await)
            } else {
                None
            }
        };

        let (clothing_outcome, accessories_outcome, news_outcome) = tokio::join!(
            self.clothing_suggestion(&context, ai_active),
            self.accessory_suggestion(&context, ai_active),
            news_pipeline,
        );

        let clothing = settle::or_default(clothing_outcome, "clothing", default_clothing);
        let accessories = settle::or_default(accessories_outcome, "accessories", default_accessories);
        let news = news_outcome.and_then(|outcome| settle::or_omit(outcome, "news"));

        Ok(MorningSuggestions {
            clothing,
            accessories,
            transport: TransportSuggestion::placeholder(),
            news,
            generated_at: Utc::now(),
            location: LocationDisplay::from_location(location),
        })
    }

    /// Clothing pipeline: weather snapshot → rule engine → optional AI tip.
    pub async fn clothing_suggestion(
        &self,
        context: &SuggestionContext,
        use_ai: bool,
    ) -> anyhow::Result<ClothingSuggestion> {
        let weather = self.weather.current_weather(&context.location).await?;
        let decision = engine::decide_clothing(
            weather.temperature,
            context.settings.temperature_threshold,
            weather.will_rain,
            weather.will_snow,
            weather.condition,
        );

        let mut suggestion = ClothingSuggestion {
            recommended_types: decision.types,
            primary_type: decision.primary,
            reason: decision.reason,
            temperature: weather.temperature,
            weather_condition: weather.description.clone(),
            ai_enhanced_tip: None,
            confidence: RULE_CONFIDENCE,
        };

        if use_ai {
            if let Some(enhancer) = &self.enhancer {
                match enhancer.enhance_clothing(&suggestion.reason, &weather).await {
                    Ok(tip) => {
                        suggestion.ai_enhanced_tip = Some(tip);
                        suggestion.confidence = AI_CONFIDENCE;
                    }
                    Err(error) => {
                        // Enhancement is never fatal to the pipeline.
                        tracing::warn!(%error, "clothing enhancement failed, keeping base suggestion");
                    }
                }
            }
        }

        Ok(suggestion)
    }

    /// Accessory pipeline: snapshot + forecast → rule engine → optional AI tip.
    pub async fn accessory_suggestion(
        &self,
        context: &SuggestionContext,
        use_ai: bool,
    ) -> anyhow::Result<AccessorySuggestion> {
        let weather = self.weather.current_weather(&context.location).await?;
        let forecast = self
            .weather
            .forecast(&context.location, FORECAST_WINDOW_HOURS)
            .await?;

        let decision = engine::decide_accessories(
            weather.temperature,
            context.settings.temperature_threshold,
            weather.will_rain,
            weather.will_snow,
            weather.condition,
            &forecast,
        );

        let mut suggestion = AccessorySuggestion {
            recommended_items: decision.all(),
            essential_items: decision.essential,
            optional_items: decision.optional,
            reason: decision.reason,
            weather_condition: weather.description.clone(),
            ai_enhanced_tip: None,
            confidence: RULE_CONFIDENCE,
        };

        if use_ai {
            if let Some(enhancer) = &self.enhancer {
                match enhancer
                    .enhance_accessories(&suggestion.reason, &weather)
                    .await
                {
                    Ok(tip) => {
                        suggestion.ai_enhanced_tip = Some(tip);
                        suggestion.confidence = AI_CONFIDENCE;
                    }
                    Err(error) => {
                        tracing::warn!(%error, "accessory enhancement failed, keeping base suggestion");
                    }
                }
            }
        }

        Ok(suggestion)
    }

    /// News pipeline: digest → optional AI re-rank and summary.
    pub async fn news_suggestion(
        &self,
        context: &SuggestionContext,
        use_ai: bool,
    ) -> anyhow::Result<NewsSummary> {
        let mut summary = self
            .news
            .news_summary(&context.location, MAX_HEADLINES)
            .await?;

        if use_ai && !summary.headlines.is_empty() {
            if let Some(enhancer) = &self.enhancer {
                let relevant = news_ranker::filter_morning_relevant(summary.headlines.clone());
                let to_summarize = &relevant[..relevant.len().min(MAX_HEADLINES)];
                match enhancer.summarize_news(to_summarize).await {
                    Ok(text) => {
                        summary.headlines = relevant;
                        summary.summary = text;
                        summary.ai_generated = true;
                    }
                    Err(error) => {
                        tracing::warn!(%error, "news summarization failed, keeping templated summary");
                    }
                }
            }
        }

        Ok(summary)
    }
}

// ─── Fallback defaults ──────────────────────────────────────────────────────

/// Safe clothing default when the weather provider is unavailable.
fn default_clothing() -> ClothingSuggestion {
    ClothingSuggestion {
        recommended_types: vec![ClothingType::LightJacket],
        primary_type: ClothingType::LightJacket,
        reason: "Impossible de récupérer la météo. Prévoyez une veste légère par précaution."
            .to_string(),
        temperature: 15,
        weather_condition: "Inconnu".to_string(),
        ai_enhanced_tip: None,
        confidence: 0.0,
    }
}

/// Safe accessory default when the weather provider is unavailable.
fn default_accessories() -> AccessorySuggestion {
    AccessorySuggestion {
        recommended_items: Vec::new(),
        essential_items: Vec::new(),
        optional_items: Vec::new(),
        reason: "Impossible de récupérer la météo.".to_string(),
        weather_condition: "Inconnu".to_string(),
        ai_enhanced_tip: None,
        confidence: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clothing_default_keeps_primary_in_types() {
        let fallback = default_clothing();
        assert!(fallback.recommended_types.contains(&fallback.primary_type));
        assert_eq!(fallback.confidence, 0.0);
        assert!(fallback.reason.contains("Impossible de récupérer la météo"));
    }

    #[test]
    fn accessory_default_is_empty_with_zero_confidence() {
        let fallback = default_accessories();
        assert!(fallback.recommended_items.is_empty());
        assert!(fallback.essential_items.is_empty());
        assert!(fallback.optional_items.is_empty());
        assert_eq!(fallback.confidence, 0.0);
    }
}
