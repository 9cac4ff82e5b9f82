use std::sync::Arc;

use anyhow::{bail, Result};
use chrono::Utc;
use tracing::info;

use crate::app::render;
use crate::cli::{Cli, Commands, ConfigCommands};
use crate::config::Config;
use crate::domain::{Location, SuggestionContext};
use crate::orchestrator::SuggestionOrchestrator;
use crate::providers::{NewsApiProvider, OpenAiEnhancer, OpenWeatherMapProvider};

/// Build the orchestrator from the active configuration. The AI enhancer is
/// only wired in when a key is present.
fn build_orchestrator(config: &Config) -> SuggestionOrchestrator {
    let weather = Arc::new(OpenWeatherMapProvider::new(
        config.providers.openweather_api_key.as_deref(),
    ));
    let news = Arc::new(NewsApiProvider::new(
        config.providers.news_api_key.as_deref(),
    ));
    let enhancer = config
        .providers
        .openai_api_key
        .as_deref()
        .map(|key| Arc::new(OpenAiEnhancer::new(Some(key))) as Arc<dyn crate::providers::AiEnhancer>);

    SuggestionOrchestrator::new(weather, news, enhancer)
}

/// Resolve the effective location: configured default, then CLI overrides.
fn resolve_location(cli: &Cli, config: &Config) -> Location {
    let mut location = config.location.to_location();
    if let Some(lat) = cli.lat {
        location.latitude = lat;
    }
    if let Some(lon) = cli.lon {
        location.longitude = lon;
    }
    if let Some(city) = &cli.city {
        location.city = Some(city.clone());
    }
    if let Some(country) = &cli.country {
        location.country = Some(country.clone());
    }
    location
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let location = resolve_location(&cli, &config);
    let use_ai = !cli.no_ai;
    let as_json = cli.json;

    match cli.command.unwrap_or(Commands::Morning) {
        Commands::Morning => {
            let orchestrator = build_orchestrator(&config);
            let suggestions = orchestrator
                .generate_morning_suggestions(&location, &config.preferences, use_ai)
                .await?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                print!("{}", render::render_morning(&suggestions));
            }
        }

        Commands::Clothing => {
            let orchestrator = build_orchestrator(&config);
            let context = SuggestionContext {
                location,
                timestamp: Utc::now(),
                settings: config.preferences,
            };
            let suggestion = orchestrator.clothing_suggestion(&context, use_ai).await?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&suggestion)?);
            } else {
                print!("{}", render::render_clothing(&suggestion));
            }
        }

        Commands::Accessories => {
            let orchestrator = build_orchestrator(&config);
            let context = SuggestionContext {
                location,
                timestamp: Utc::now(),
                settings: config.preferences,
            };
            let suggestion = orchestrator.accessory_suggestion(&context, use_ai).await?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&suggestion)?);
            } else {
                print!("{}", render::render_accessories(&suggestion));
            }
        }

        Commands::News { max } => {
            let news = NewsApiProvider::new(config.providers.news_api_key.as_deref());
            use crate::providers::NewsProvider;
            let summary = news.news_summary(&location, max).await?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render::render_news(&summary));
            }
        }

        Commands::Config { config_command } => match config_command {
            ConfigCommands::Show => {
                println!("{}", redacted_toml(&config)?);
            }
            ConfigCommands::Set { key, value } => {
                let mut config = config;
                apply_config_set(&mut config, &key, &value)?;
                config.validate()?;
                config.save()?;
                info!(%key, "configuration updated");
                println!("{key} = {value}");
            }
        },
    }

    Ok(())
}

/// Serialized config with credentials blanked for display.
fn redacted_toml(config: &Config) -> Result<String> {
    let mut shown = config.clone();
    for key in [
        &mut shown.providers.openweather_api_key,
        &mut shown.providers.news_api_key,
        &mut shown.providers.openai_api_key,
    ] {
        if key.is_some() {
            *key = Some("***".to_string());
        }
    }
    Ok(toml::to_string_pretty(&shown)?)
}

fn apply_config_set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "temperature_threshold" => {
            config.preferences.temperature_threshold = value
                .parse()
                .map_err(|_| anyhow::anyhow!("expected an integer for {key}, got {value:?}"))?;
        }
        "ai_suggestions_enabled" => {
            config.preferences.ai_suggestions_enabled = parse_bool(key, value)?;
        }
        "news_enabled" => {
            config.preferences.news_enabled = parse_bool(key, value)?;
        }
        "latitude" => {
            config.location.latitude = value
                .parse()
                .map_err(|_| anyhow::anyhow!("expected a number for {key}, got {value:?}"))?;
        }
        "longitude" => {
            config.location.longitude = value
                .parse()
                .map_err(|_| anyhow::anyhow!("expected a number for {key}, got {value:?}"))?;
        }
        "city" => config.location.city = Some(value.to_string()),
        "country" => config.location.country = Some(value.to_string()),
        _ => bail!(
            "unknown config key {key:?} (expected temperature_threshold, \
             ai_suggestions_enabled, news_enabled, latitude, longitude, city or country)"
        ),
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => bail!("expected true/false for {key}, got {value:?}"),
    }
}
