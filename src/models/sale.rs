//! Modelo de Sale
//!
//! Una venta siempre se lee unida con los datos de su auto y su cliente
//! (`SaleDetail`), de modo que quien la consulta no necesita una segunda
//! ida al almacén.

use crate::utils::format::format_currency;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Venta unida con los campos de presentación del auto y del cliente.
///
/// Los campos unidos llevan el prefijo `vehicle_` o `customer_`
/// (`vehicle_brand` es la marca del auto, `customer_name` el nombre del
/// cliente). Al deserializar también se aceptan `auto_marca` y `cliente_nombre`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SaleDetail {
    pub id: i64,
    pub vehicle_id: i64,
    pub customer_id: i64,
    pub amount: f64,
    pub payment_method: String,
    pub sold_at: NaiveDateTime,

    #[serde(alias = "auto_marca")]
    pub vehicle_brand: String,
    pub vehicle_model: String,
    pub vehicle_year: i64,
    pub vehicle_color: String,
    pub vehicle_image: Option<String>,
    pub vehicle_price: f64,
    pub vehicle_transmission: String,
    pub vehicle_fuel: String,

    #[serde(alias = "cliente_nombre")]
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub customer_address: Option<String>,
}

/// Campos de una venta ya validados
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub vehicle_id: i64,
    pub customer_id: i64,
    pub amount: f64,
    pub payment_method: String,
    /// Si es `None` se asigna la hora local actual
    pub sold_at: Option<NaiveDateTime>,
}

/// Formulario de venta: el monto llega como texto
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaleForm {
    pub vehicle_id: i64,
    pub customer_id: i64,
    pub amount: String,
    pub payment_method: String,
    pub sold_at: Option<NaiveDateTime>,
}

/// Estadísticas sobre todos los montos de venta.
///
/// Sin ventas, `count` es 0 y el resto de campos es `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SaleStatistics {
    pub count: i64,
    pub total: Option<f64>,
    pub average: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
}

impl SaleStatistics {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn display_total(&self) -> String {
        format_currency(self.total)
    }

    pub fn display_average(&self) -> String {
        format_currency(self.average)
    }

    pub fn display_max(&self) -> String {
        format_currency(self.max)
    }

    pub fn display_min(&self) -> String {
        format_currency(self.min)
    }
}
