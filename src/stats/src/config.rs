//! Configuration for race statistics reporting.

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "ciclismo_stats=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Summary configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Editions shorter than this are listed in the summary
    #[serde(default = "default_distance_threshold_km")]
    pub distance_threshold_km: u32,
    /// Teams to report average stages won for
    #[serde(default)]
    pub teams: Vec<String>,
}

fn default_distance_threshold_km() -> u32 {
    3500
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            distance_threshold_km: default_distance_threshold_km(),
            teams: Vec::new(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

impl AppConfig {
    /// Load configuration from environment and config file
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from("ciclismo")
    }

    /// Load configuration, reading the optional file `name` (any supported extension)
    pub fn load_from(name: &str) -> anyhow::Result<Self> {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(name).required(false))
            // Override with environment variables (CICLISMO_SUMMARY__TEAMS=a,b, etc.)
            .add_source(
                config::Environment::with_prefix("CICLISMO")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("summary.teams")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
