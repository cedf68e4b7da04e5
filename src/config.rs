use crate::errors::{PricerError, PricerResult};
use crate::models::ForwardConvention;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub log_level: String,
    pub strict_opt_type: bool,
    pub forward_convention: ForwardConvention,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            log_level: "info".to_string(),
            strict_opt_type: false,
            forward_convention: ForwardConvention::Legacy,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> PricerResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup, so tests don't touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> PricerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let server_port = var_or("SERVER_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| PricerError::Config(format!("SERVER_PORT: {e}")))?;

        let strict_opt_type = parse_bool(&var_or("STRICT_OPT_TYPE", "false"))
            .ok_or_else(|| PricerError::Config("STRICT_OPT_TYPE: expected true or false".into()))?;

        let forward_convention = var_or("FORWARD_CONVENTION", "legacy")
            .parse::<ForwardConvention>()
            .map_err(|e| PricerError::Config(format!("FORWARD_CONVENTION: {e}")))?;

        Ok(Self {
            server_host: var_or("SERVER_HOST", "0.0.0.0"),
            server_port,
            log_level: var_or("LOG_LEVEL", "info"),
            strict_opt_type,
            forward_convention,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
