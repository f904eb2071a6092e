//! Runtime configuration of the frontend.
//!
//! Values are derived from `window.location`; a few of them can be overridden
//! through the query string, e.g. `?api=http://10.0.0.5:3000&log=debug`.

use serde::Deserialize;

/// Порт бэкенда по умолчанию
pub const DEFAULT_BACKEND_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    /// Base URL for REST calls, without trailing slash
    pub api_base: String,
    pub log_level: log::Level,
}

#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    api: Option<String>,
    log: Option<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base: format!("http://127.0.0.1:{}", DEFAULT_BACKEND_PORT),
            log_level: log::Level::Debug,
        }
    }
}

impl FrontendConfig {
    /// Build the configuration for the current page.
    ///
    /// Falls back to defaults when there is no window (unit tests, workers).
    pub fn from_window() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::default(),
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        let search = location.search().unwrap_or_default();
        Self::from_parts(&protocol, &hostname, &search)
    }

    pub fn from_parts(protocol: &str, hostname: &str, search: &str) -> Self {
        let overrides: QueryOverrides =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        let api_base = overrides
            .api
            .map(|api| api.trim_end_matches('/').to_string())
            .filter(|api| !api.is_empty())
            .unwrap_or_else(|| format!("{}//{}:{}", protocol, hostname, DEFAULT_BACKEND_PORT));

        let log_level = overrides
            .log
            .and_then(|level| level.parse::<log::Level>().ok())
            .unwrap_or(log::Level::Debug);

        Self {
            api_base,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_location() {
        let config = FrontendConfig::from_parts("https:", "stock.local", "");
        assert_eq!(config.api_base, "https://stock.local:3000");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_query_overrides() {
        let config =
            FrontendConfig::from_parts("http:", "localhost", "?api=http://10.0.0.5:8080/&log=warn");
        assert_eq!(config.api_base, "http://10.0.0.5:8080");
        assert_eq!(config.log_level, log::Level::Warn);
    }

    #[test]
    fn test_bad_log_level_keeps_default() {
        let config = FrontendConfig::from_parts("http:", "localhost", "?log=loud&active=a003_stock");
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(config.api_base, "http://localhost:3000");
    }
}
