//! Conexión al almacén SQLite
//!
//! La conexión es un recurso único del proceso: se abre al arrancar,
//! se comparte por clonación del pool y se cierra una vez al terminar.

use crate::config::database::DatabaseConfig;
use crate::database::schema;
use crate::utils::errors::{database_error, AppResult};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Abrir el almacén y asegurar que el esquema exista
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        info!("Conectando al almacén: {}", config.url);

        let pool = config
            .create_pool()
            .await
            .map_err(|e| database_error("Error connecting to store", e))?;

        let connection = Self { pool };
        connection.initialize_schema().await?;
        Ok(connection)
    }

    /// Crear las tablas si no existen (idempotente)
    pub async fn initialize_schema(&self) -> AppResult<()> {
        for statement in schema::STATEMENTS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| database_error("Error creating schema", e))?;
        }

        debug!("Esquema verificado");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Liberar la conexión compartida
    pub async fn close(self) {
        self.pool.close().await;
        info!("Conexión al almacén cerrada");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_initialization_is_idempotent() {
        let connection = DatabaseConnection::new(&DatabaseConfig::in_memory())
            .await
            .unwrap();
        connection.initialize_schema().await.unwrap();

        let (tables,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('vehicles', 'customers', 'sales')",
        )
        .fetch_one(connection.pool())
        .await
        .unwrap();

        assert_eq!(tables, 3);
        connection.close().await;
    }
}
