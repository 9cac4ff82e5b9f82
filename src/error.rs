use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `MorningHelper`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum HelperError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Weather provider ────────────────────────────────────────────────
    #[error("weather: {0}")]
    Weather(#[from] WeatherError),

    // ── News provider ───────────────────────────────────────────────────
    #[error("news: {0}")]
    News(#[from] NewsError),

    // ── AI enhancer ─────────────────────────────────────────────────────
    #[error("ai: {0}")]
    Ai(#[from] AiError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Weather provider errors ────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("OpenWeatherMap API key not set. Set OPENWEATHER_API_KEY or edit config.toml.")]
    MissingApiKey,

    #[error("weather request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    #[error("weather response decode failed: {0}")]
    Decode(String),
}

// ─── News provider errors ───────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("NewsAPI key not set. Set NEWS_API_KEY or edit config.toml.")]
    MissingApiKey,

    #[error("news request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    #[error("news response decode failed: {0}")]
    Decode(String),
}

// ─── AI enhancer errors ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AiError {
    #[error("OpenAI API key not set. Set OPENAI_API_KEY or edit config.toml.")]
    MissingApiKey,

    #[error("ai request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    #[error("ai returned no completion text")]
    EmptyResponse,
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, HelperError>;
