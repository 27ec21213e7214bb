//! Módulo de base de datos
//!
//! Maneja la conexión y el esquema del almacén SQLite

pub mod connection;
pub mod schema;

pub use connection::DatabaseConnection;
