use crate::config::AppConfig;
use crate::models::black_scholes::BlackScholes;
use std::sync::Arc;

/// Shared, read-only state handed to every request. Built once at startup;
/// nothing in here is mutated afterwards, so handlers need no locks.
pub struct AppState {
    pub pricer: BlackScholes,
    pub strict_opt_type: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Arc<Self> {
        Arc::new(Self {
            pricer: BlackScholes::new(config.forward_convention),
            strict_opt_type: config.strict_opt_type,
        })
    }
}
