use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccessoryType, ClothingType, Location, NewsSummary, UserPreferences};

/// Fixed disclaimer attached to AI-enhanced suggestions.
pub const AI_DISCLAIMER: &str = "⚠️ Avertissement\n\nLes suggestions fournies par l'intelligence \
artificielle sont purement indicatives et ne constituent pas des conseils professionnels.\n\n\
L'exactitude et l'exhaustivité des informations ne sont pas garanties.\n\nVous restez seul \
responsable de vos décisions et actions.\n\nEn cas de conditions météorologiques extrêmes, \
consultez les alertes officielles de Météo France / autorités locales.";

/// Confidence attached to plain rule-based output.
pub const RULE_CONFIDENCE: f64 = 0.9;
/// Confidence once an AI tip has been attached.
pub const AI_CONFIDENCE: f64 = 0.95;

// ─── Context ────────────────────────────────────────────────────────────────

/// Shared input for one orchestration call.
#[derive(Debug, Clone)]
pub struct SuggestionContext {
    pub location: Location,
    pub timestamp: DateTime<Utc>,
    pub settings: UserPreferences,
}

// ─── Per-pipeline outputs ───────────────────────────────────────────────────

/// Clothing recommendation, immutable once built.
///
/// Invariant: `primary_type` is always a member of `recommended_types`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingSuggestion {
    pub recommended_types: Vec<ClothingType>,
    pub primary_type: ClothingType,
    pub reason: String,
    /// °C the decision was computed from.
    pub temperature: i32,
    pub weather_condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_enhanced_tip: Option<String>,
    /// 0.9 rule-based, 0.95 AI-enhanced, 0 for the fallback default.
    pub confidence: f64,
}

/// Accessory recommendation.
///
/// `essential_items` and `optional_items` are disjoint by construction;
/// `recommended_items` is their de-duplicated union, essentials first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessorySuggestion {
    pub recommended_items: Vec<AccessoryType>,
    pub essential_items: Vec<AccessoryType>,
    pub optional_items: Vec<AccessoryType>,
    pub reason: String,
    pub weather_condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_enhanced_tip: Option<String>,
    pub confidence: f64,
}

/// Intentional placeholder: transport suggestions are not implemented yet and
/// are always emitted disabled rather than silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportSuggestion {
    pub recommended: Vec<String>,
    pub discouraged: Vec<String>,
    pub reason: String,
    pub confidence: f64,
}

impl TransportSuggestion {
    pub fn placeholder() -> Self {
        Self {
            recommended: Vec::new(),
            discouraged: Vec::new(),
            reason: "Service de transport en cours de développement".to_string(),
            confidence: 0.0,
        }
    }
}

// ─── Composite output ───────────────────────────────────────────────────────

/// Display fields for the location header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDisplay {
    pub city: String,
    pub country: String,
}

impl LocationDisplay {
    /// Generic placeholders when the input location lacks display names.
    pub fn from_location(location: &Location) -> Self {
        Self {
            city: location
                .city
                .clone()
                .unwrap_or_else(|| "Votre ville".to_string()),
            country: location
                .country
                .clone()
                .unwrap_or_else(|| "Votre pays".to_string()),
        }
    }
}

/// Top-level aggregate, built once per orchestration call and discarded on
/// every refresh. It has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorningSuggestions {
    pub clothing: ClothingSuggestion,
    pub accessories: AccessorySuggestion,
    pub transport: TransportSuggestion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news: Option<NewsSummary>,
    pub generated_at: DateTime<Utc>,
    pub location: LocationDisplay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_placeholder_is_disabled() {
        let transport = TransportSuggestion::placeholder();
        assert!(transport.recommended.is_empty());
        assert!(transport.discouraged.is_empty());
        assert_eq!(transport.confidence, 0.0);
        assert!(transport.reason.contains("en cours de développement"));
    }

    #[test]
    fn location_display_defaults_to_generic_placeholders() {
        let display = LocationDisplay::from_location(&Location::new(48.85, 2.35));
        assert_eq!(display.city, "Votre ville");
        assert_eq!(display.country, "Votre pays");
    }

    #[test]
    fn location_display_keeps_provided_names() {
        let mut location = Location::new(48.85, 2.35);
        location.city = Some("Paris".to_string());
        location.country = Some("France".to_string());
        let display = LocationDisplay::from_location(&location);
        assert_eq!(display.city, "Paris");
        assert_eq!(display.country, "France");
    }
}
