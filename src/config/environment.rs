//! Configuración de variables de entorno
//!
//! Este módulo resuelve, una sola vez al arrancar, el directorio base de la
//! aplicación y la URL del almacén. El valor resultante se pasa
//! explícitamente a quien lo necesite.

use crate::utils::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use tracing::Level;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub base_dir: PathBuf,
    pub database_url: String,
    pub log_level: Level,
}

impl EnvironmentConfig {
    /// Construir la configuración a partir de las variables de entorno
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración con una fuente de variables arbitraria
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("AUTOGEST_ENV").unwrap_or_else(|| "development".to_string());
        let base_dir = PathBuf::from(lookup("AUTOGEST_BASE_DIR").unwrap_or_else(|| ".".to_string()));

        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ => format!(
                "sqlite://{}",
                base_dir.join("database").join("autogest.db").display()
            ),
        };

        let log_level = match lookup("AUTOGEST_LOG_LEVEL") {
            Some(level) => level.parse::<Level>().map_err(|_| {
                AppError::Configuration(format!("AUTOGEST_LOG_LEVEL inválido: {}", level))
            })?,
            None => Level::INFO,
        };

        Ok(Self {
            environment,
            base_dir,
            database_url,
            log_level,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppResult<EnvironmentConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.base_dir, PathBuf::from("."));
        assert!(config.database_url.starts_with("sqlite://"));
        assert!(config.database_url.ends_with("autogest.db"));
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            ("AUTOGEST_ENV", "production"),
            ("AUTOGEST_BASE_DIR", "/srv/autogest"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("AUTOGEST_LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.base_dir, PathBuf::from("/srv/autogest"));
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_invalid_log_level() {
        let error = config_from(&[("AUTOGEST_LOG_LEVEL", "chatty")]).unwrap_err();
        assert!(matches!(error, AppError::Configuration(_)));
    }
}
