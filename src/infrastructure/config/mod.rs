mod settings;

pub use settings::{CatalogConfig, LatencyConfig, ServerConfig, Settings};
