use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Fixed disclaimer attached to every news summary. The headlines come from
/// third-party sources and are not fact-checked by this application.
pub const NEWS_DISCLAIMER: &str = "📰 Sources Externes\n\nLes actualités proviennent de sources \
tierces (NewsAPI) et sont résumées par IA. Leur véracité n'est pas vérifiée par MorningHelper.\n\n\
Pour des informations fiables, consultez directement les sources officielles et médias reconnus.";

// ─── Categories ─────────────────────────────────────────────────────────────

/// Closed set of morning-relevant news categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NewsCategory {
    Strike,
    Alert,
    Weather,
    Security,
    Transport,
    Other,
}

impl NewsCategory {
    /// Categories that are boosted when building a morning digest.
    pub fn is_morning_priority(self) -> bool {
        matches!(
            self,
            Self::Strike | Self::Alert | Self::Transport | Self::Weather
        )
    }

    /// French display label, as shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Strike => "Grève",
            Self::Alert => "Alerte",
            Self::Weather => "Météo",
            Self::Security => "Sécurité",
            Self::Transport => "Transport",
            Self::Other => "Autre",
        }
    }
}

// ─── Headlines & summaries ──────────────────────────────────────────────────

/// One ranked headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsHeadline {
    pub title: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    /// Morning-relevance score in [0,1].
    pub relevance: f64,
    pub category: NewsCategory,
}

/// Ranked digest handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSummary {
    pub headlines: Vec<NewsHeadline>,
    pub summary: String,
    pub ai_generated: bool,
    /// Distinct source names, in headline order.
    pub sources: Vec<String>,
    pub generated_at: DateTime<Utc>,
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&NewsCategory::Strike).unwrap();
        assert_eq!(json, "\"strike\"");
    }

    #[test]
    fn priority_categories_match_morning_digest() {
        assert!(NewsCategory::Strike.is_morning_priority());
        assert!(NewsCategory::Alert.is_morning_priority());
        assert!(NewsCategory::Transport.is_morning_priority());
        assert!(NewsCategory::Weather.is_morning_priority());
        assert!(!NewsCategory::Security.is_morning_priority());
        assert!(!NewsCategory::Other.is_morning_priority());
    }
}
