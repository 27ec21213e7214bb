//! Configuración de base de datos
//!
//! Este módulo crea el pool de SQLx contra SQLite. El almacén se usa en
//! proceso con una sola conexión compartida: se adquiere al arrancar y se
//! libera al cerrar.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: Duration::from_secs(30),
        }
    }

    /// Configuración para un almacén en memoria (pruebas)
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    /// Crear el pool de una sola conexión
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
    }
}
