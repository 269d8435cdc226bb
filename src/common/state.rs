// Application state shared across all modules

use super::config::Config;

/// Application state handed to handlers through an `Extension`
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub version: &'static str,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
