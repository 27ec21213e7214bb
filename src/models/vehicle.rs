//! Modelo de Vehicle
//!
//! Mapea la tabla `vehicles`. El identificador y la fecha de registro los
//! asigna el almacén; `image` guarda solo el nombre del archivo dentro del
//! directorio de imágenes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::path::PathBuf;

/// Vehículo tal como está almacenado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i64,
    pub price: f64,
    pub color: String,
    pub transmission: String,
    pub fuel: String,
    pub image: Option<String>,
    pub registered_at: NaiveDateTime,
}

/// Campos mutables de un vehículo ya validados
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub brand: String,
    pub model: String,
    pub year: i64,
    pub price: f64,
    pub color: String,
    pub transmission: String,
    pub fuel: String,
}

/// Formulario de vehículo: año y precio llegan como texto
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleForm {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub price: String,
    pub color: String,
    pub transmission: String,
    pub fuel: String,
    /// Ruta de la imagen original a copiar al directorio de imágenes
    pub image_path: Option<PathBuf>,
}
