//! AutoGest: inventario de vehículos, clientes y ventas de una agencia
//!
//! El núcleo se organiza en capas:
//!
//! - `controllers`: validan, adjuntan imágenes y persisten (única capa que usa la interfaz)
//! - `repositories`: CRUD y búsqueda contra el almacén SQLite
//! - `services`: imágenes y rutas, estadísticas de ventas, documentos imprimibles
//! - `utils`: errores, validación de campos y formato de montos

pub mod config;
pub mod controllers;
pub mod database;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use utils::errors::{AppError, AppResult};
