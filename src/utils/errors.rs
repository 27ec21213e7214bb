//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema. Los controladores
//! nunca lanzan pánicos a través de su frontera pública: toda operación
//! devuelve un `AppResult`.

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Asset error: {0}")]
    Asset(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Campo que causó el rechazo, si es un error de validación
    pub fn invalid_field(&self) -> Option<&'static str> {
        match self {
            AppError::Validation(errors) => errors.field_errors().keys().next().copied(),
            _ => None,
        }
    }

    /// Mensaje legible para el usuario final
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(errors) => errors
                .field_errors()
                .values()
                .flat_map(|list| list.iter())
                .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Datos inválidos".to_string()),
            AppError::Database(msg)
            | AppError::Conflict(msg)
            | AppError::NotFound(msg)
            | AppError::Asset(msg)
            | AppError::Document(msg)
            | AppError::Configuration(msg) => msg.clone(),
        }
    }

    /// Errores del almacén (conectividad o restricciones)
    pub fn is_persistence(&self) -> bool {
        matches!(self, AppError::Database(_) | AppError::Conflict(_))
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación de un solo campo
pub fn validation_error(field: &'static str, error: ValidationError) -> AppError {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} con id {} no encontrado", resource, id))
}

/// Traduce un error de sqlx, separando las violaciones de llave foránea
pub fn database_error(context: &str, error: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_foreign_key_violation()
            || db_error.message().contains("FOREIGN KEY constraint failed")
        {
            return AppError::Conflict(format!("{}: violación de integridad referencial", context));
        }
    }

    tracing::error!("{}: {}", context, error);
    AppError::Database(format!("{}: {}", context, error))
}
