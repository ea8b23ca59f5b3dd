// --- File: crates/mentorlink_config/src/lib.rs ---
pub mod models;

pub use models::{
    AppConfig, AvailabilityConfig, BookingConfig, NotificationConfig, ServerConfig,
};

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;

static DOTENV: OnceCell<()> = OnceCell::new();

/// Load `.env` exactly once per process; later calls are no-ops.
pub fn ensure_dotenv_loaded() {
    DOTENV.get_or_init(|| {
        dotenv::dotenv().ok();
    });
}

/// Loads the unified application configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. built-in defaults (`127.0.0.1:8080`)
/// 2. `config/default.{yml,toml,json}` (optional)
/// 3. `config/{RUN_ENV}.{yml,toml,json}` (optional)
/// 4. environment variables with the `APP` prefix and `__` separators,
///    e.g. `APP_SERVER__PORT=9090`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());
    tracing::debug!("Loading configuration for RUN_ENV={}", run_env);

    Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080_i64)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}
