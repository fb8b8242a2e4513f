use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Artificial delay added to API responses, mimicking a remote backend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatencyConfig {
    /// Lower bound in milliseconds
    #[serde(default)]
    pub min_ms: u64,
    /// Upper bound in milliseconds; 0 disables the delay
    #[serde(default)]
    pub max_ms: u64,
}

impl LatencyConfig {
    pub fn is_enabled(&self) -> bool {
        self.max_ms > 0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Seed the product catalogue from the bundled fixture
    #[serde(default = "default_true")]
    pub seed_products: bool,
    /// Start the template store with the built-in templates
    #[serde(default = "default_true")]
    pub seed_templates: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_true() -> bool {
    true
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8082)?
            .set_default("latency.min_ms", 0)?
            .set_default("latency.max_ms", 0)?
            .set_default("catalog.seed_products", true)?
            .set_default("catalog.seed_templates", true)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER__HOST, SERVER__PORT, SERVER__CORS_ORIGINS, LATENCY__MAX_MS, etc.
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_products: true,
            seed_templates: true,
        }
    }
}
