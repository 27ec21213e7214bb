//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! de campos y formato de montos.

pub mod errors;
pub mod format;
pub mod validation;

pub use errors::{AppError, AppResult};
