use shipping_cache::CacheConfig;
use shipping_database::DatabaseConfig;
use shipping_models::DEFAULT_STORE_CODE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database: DatabaseConfig,
    /// Role lookups are cached only when Redis is configured
    pub cache: Option<CacheConfig>,
    pub default_store_code: String,
    pub run_migrations: bool,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            default_store_code: std::env::var("DEFAULT_STORE_CODE")
                .unwrap_or_else(|_| DEFAULT_STORE_CODE.to_string()),
            run_migrations: std::env::var("RUN_MIGRATIONS")
                .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
            log_format: match std::env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
        }
    }
}
