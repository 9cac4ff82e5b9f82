use clap::{Parser, Subcommand};

/// `MorningHelper` - Weather-aware morning assistant for your terminal.
#[derive(Parser, Debug)]
#[command(name = "morninghelper")]
#[command(version)]
#[command(about = "Clothing, accessory and news suggestions for your morning.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Latitude override (defaults to the configured location)
    #[arg(long, global = true)]
    pub lat: Option<f64>,

    /// Longitude override (defaults to the configured location)
    #[arg(long, global = true)]
    pub lon: Option<f64>,

    /// City name shown in the digest header
    #[arg(long, global = true)]
    pub city: Option<String>,

    /// Country used for news selection
    #[arg(long, global = true)]
    pub country: Option<String>,

    /// Skip AI enhancement even when an OpenAI key is configured
    #[arg(long, global = true)]
    pub no_ai: bool,

    /// Emit the result as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full morning digest: clothing, accessories and news (default)
    Morning,

    /// Clothing suggestion only
    Clothing,

    /// Accessory suggestion only
    Accessories,

    /// Morning news digest only
    News {
        /// Maximum number of headlines to include
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Inspect or edit the configuration
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the active configuration (API keys redacted)
    Show,

    /// Set a configuration value and persist it
    Set {
        /// Key to set (temperature_threshold, ai_suggestions_enabled,
        /// news_enabled, latitude, longitude, city, country)
        key: String,
        /// New value
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_has_no_flag_conflicts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_tracks_the_package_version() {
        assert_eq!(
            Cli::command().get_version(),
            Some(env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["morninghelper"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_ai);
        assert!(!cli.json);
    }

    #[test]
    fn location_overrides_parse() {
        let cli = Cli::parse_from([
            "morninghelper",
            "clothing",
            "--lat",
            "45.76",
            "--lon",
            "4.83",
            "--city",
            "Lyon",
        ]);
        assert_eq!(cli.lat, Some(45.76));
        assert_eq!(cli.lon, Some(4.83));
        assert_eq!(cli.city.as_deref(), Some("Lyon"));
        assert!(matches!(cli.command, Some(Commands::Clothing)));
    }

    #[test]
    fn news_max_defaults_to_ten() {
        let cli = Cli::parse_from(["morninghelper", "news"]);
        match cli.command {
            Some(Commands::News { max }) => assert_eq!(max, 10),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_set_parses_key_value() {
        let cli = Cli::parse_from(["morninghelper", "config", "set", "temperature_threshold", "8"]);
        match cli.command {
            Some(Commands::Config {
                config_command: ConfigCommands::Set { key, value },
            }) => {
                assert_eq!(key, "temperature_threshold");
                assert_eq!(value, "8");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
