//! Application configuration

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the SQLite database file
    pub database_path: String,
    /// Path of the audit trail file
    pub audit_log_path: String,
    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: "claims.db".to_string(),
            audit_log_path: "audit.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `CLAIMS_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("CLAIMS"))
            .build()?
            .try_deserialize()
    }

    /// Loads from environment, falling back to defaults
    pub fn load() -> Self {
        Self::from_env().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.database_path, "claims.db");
        assert_eq!(config.audit_log_path, "audit.log");
        assert_eq!(config.log_level, "info");
    }
}
