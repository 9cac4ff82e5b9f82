//! Terminal rendering of suggestions, in French.

use std::fmt::Write;

use crate::domain::suggestion::AI_DISCLAIMER;
use crate::domain::{
    AccessorySuggestion, ClothingSuggestion, MorningSuggestions, NewsSummary,
};

pub fn render_morning(suggestions: &MorningSuggestions) -> String {
    let mut out = String::new();
    let city = &suggestions.location.city;

    let _ = writeln!(out, "☀️  Bonjour ! Voici votre matinée à {city}");
    let _ = writeln!(
        out,
        "   Généré à {}",
        suggestions.generated_at.format("%H:%M UTC")
    );
    let _ = writeln!(out);

    out.push_str(&render_clothing(&suggestions.clothing));
    out.push('\n');
    out.push_str(&render_accessories(&suggestions.accessories));

    if let Some(news) = &suggestions.news {
        out.push('\n');
        out.push_str(&render_news(news));
    }

    out
}

pub fn render_clothing(suggestion: &ClothingSuggestion) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "👕 Vêtements ({}°C, {})",
        suggestion.temperature, suggestion.weather_condition
    );
    let _ = writeln!(out, "   {}", suggestion.reason);

    let names: Vec<&str> = suggestion
        .recommended_types
        .iter()
        .map(|t| t.label())
        .collect();
    let _ = writeln!(out, "   Recommandé : {}", names.join(", "));

    if let Some(tip) = &suggestion.ai_enhanced_tip {
        let _ = writeln!(out, "   💡 {tip}");
        let _ = writeln!(out, "   {AI_DISCLAIMER}");
    }
    out
}

pub fn render_accessories(suggestion: &AccessorySuggestion) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🎒 Accessoires ({})", suggestion.weather_condition);
    let _ = writeln!(out, "   {}", suggestion.reason);

    if !suggestion.essential_items.is_empty() {
        let names: Vec<&str> = suggestion.essential_items.iter().map(|a| a.label()).collect();
        let _ = writeln!(out, "   Indispensables : {}", names.join(", "));
    }
    if !suggestion.optional_items.is_empty() {
        let names: Vec<&str> = suggestion.optional_items.iter().map(|a| a.label()).collect();
        let _ = writeln!(out, "   Optionnels : {}", names.join(", "));
    }
    if suggestion.essential_items.is_empty() && suggestion.optional_items.is_empty() {
        let _ = writeln!(out, "   Aucun accessoire particulier aujourd'hui.");
    }

    if let Some(tip) = &suggestion.ai_enhanced_tip {
        let _ = writeln!(out, "   💡 {tip}");
        let _ = writeln!(out, "   {AI_DISCLAIMER}");
    }
    out
}

pub fn render_news(summary: &NewsSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📰 Actualités du matin");
    let _ = writeln!(out, "   {}", summary.summary);

    for headline in &summary.headlines {
        let _ = writeln!(
            out,
            "   [{}] {} ({})",
            headline.category.label(),
            headline.title,
            headline.source
        );
    }

    if summary.headlines.is_empty() {
        let _ = writeln!(out, "   Rien de notable ce matin.");
    }

    let _ = writeln!(out, "   {}", summary.disclaimer);
    out
}
