use crate::domain::{NewsCategory, NewsHeadline};

/// Every matched high-priority keyword adds this much.
const HIGH_PRIORITY_BOOST: f64 = 0.3;
/// Every matched medium-priority keyword adds this much.
const MEDIUM_PRIORITY_BOOST: f64 = 0.2;
/// Score every headline starts from.
const BASE_SCORE: f64 = 0.5;
/// Headlines at or below this relevance are dropped from the morning digest.
const RELEVANCE_FLOOR: f64 = 0.5;

/// French/English keywords that make a headline urgent for the morning.
const HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    "grève",
    "strike",
    "alerte",
    "alert",
    "perturbation",
    "disruption",
    "fermeture",
    "closure",
    "annulation",
    "cancelled",
];

/// Keywords that make a headline situationally useful.
const MEDIUM_PRIORITY_KEYWORDS: &[&str] = &[
    "transport",
    "métro",
    "metro",
    "bus",
    "train",
    "route",
    "road",
    "météo",
    "weather",
    "trafic",
    "traffic",
];

/// Score a headline's morning relevance in [0,1].
///
/// Case-insensitive substring matching over `title + description`; base 0.5,
/// +0.3 per high-priority keyword, +0.2 per medium-priority keyword, clamped
/// at 1.0.
pub fn relevance(title: &str, description: &str) -> f64 {
    let text = format!("{title} {description}").to_lowercase();

    let mut score = BASE_SCORE;
    for keyword in HIGH_PRIORITY_KEYWORDS {
        if text.contains(keyword) {
            score += HIGH_PRIORITY_BOOST;
        }
    }
    for keyword in MEDIUM_PRIORITY_KEYWORDS {
        if text.contains(keyword) {
            score += MEDIUM_PRIORITY_BOOST;
        }
    }

    score.min(1.0)
}

/// Categorize a headline.
///
/// Fixed-priority ladder: strike > alert > weather > security > transport >
/// other. First match wins, independent of the relevance score.
pub fn categorize(title: &str, description: &str) -> NewsCategory {
    let text = format!("{title} {description}").to_lowercase();

    if text.contains("grève") || text.contains("strike") {
        return NewsCategory::Strike;
    }
    if text.contains("alerte")
        || text.contains("alert")
        || text.contains("warning")
        || text.contains("avertissement")
    {
        return NewsCategory::Alert;
    }
    if text.contains("météo") || text.contains("weather") {
        return NewsCategory::Weather;
    }
    if text.contains("sécurité")
        || text.contains("security")
        || text.contains("attentat")
        || text.contains("attack")
    {
        return NewsCategory::Security;
    }
    if text.contains("transport")
        || text.contains("métro")
        || text.contains("metro")
        || text.contains("bus")
        || text.contains("train")
    {
        return NewsCategory::Transport;
    }

    NewsCategory::Other
}

/// Keep headlines worth showing in a morning digest, most urgent first.
///
/// Drops anything with relevance ≤ 0.5, then sorts by (priority category,
/// relevance) descending. Priority categories: strike, alert, transport,
/// weather.
pub fn filter_morning_relevant(headlines: Vec<NewsHeadline>) -> Vec<NewsHeadline> {
    let mut relevant: Vec<NewsHeadline> = headlines
        .into_iter()
        .filter(|h| h.relevance > RELEVANCE_FLOOR)
        .collect();

    relevant.sort_by(|a, b| {
        let a_priority = u8::from(a.category.is_morning_priority());
        let b_priority = u8::from(b.category.is_morning_priority());
        b_priority.cmp(&a_priority).then(
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    relevant
}

/// Templated (non-AI) digest line: per-category counts in French.
pub fn basic_summary(headlines: &[NewsHeadline]) -> String {
    if headlines.is_empty() {
        return "Aucune actualité importante ce matin.".to_string();
    }

    let count = |category: NewsCategory| headlines.iter().filter(|h| h.category == category).count();

    let mut parts = Vec::new();
    let strikes = count(NewsCategory::Strike);
    if strikes > 0 {
        parts.push(format!("{strikes} grève(s) ou perturbation(s) signalée(s)"));
    }
    let transport = count(NewsCategory::Transport);
    if transport > 0 {
        parts.push(format!("{transport} info(s) transport"));
    }
    let alerts = count(NewsCategory::Alert);
    if alerts > 0 {
        parts.push(format!("{alerts} alerte(s)"));
    }
    let weather = count(NewsCategory::Weather);
    if weather > 0 {
        parts.push(format!("{weather} info(s) météo"));
    }

    if parts.is_empty() {
        format!("{} actualité(s) ce matin.", headlines.len())
    } else {
        format!("{}.", parts.join(", "))
    }
}

/// Whether any headline is worth an immediate heads-up.
pub fn has_important_news(headlines: &[NewsHeadline]) -> bool {
    headlines.iter().any(|h| h.relevance > 0.7)
}

/// Critical subset: strikes, alerts and security incidents with very high
/// relevance.
pub fn critical_news(headlines: &[NewsHeadline]) -> Vec<NewsHeadline> {
    headlines
        .iter()
        .filter(|h| {
            matches!(
                h.category,
                NewsCategory::Strike | NewsCategory::Alert | NewsCategory::Security
            ) && h.relevance > 0.8
        })
        .cloned()
        .collect()
}
