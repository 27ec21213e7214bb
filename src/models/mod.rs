//! Modelos del sistema
//!
//! Este módulo contiene los registros que mapean a las tablas del almacén,
//! los datos ya validados que reciben los repositorios y los formularios
//! tal como los envía la interfaz.

pub mod customer;
pub mod sale;
pub mod vehicle;

pub use customer::{Customer, CustomerForm, NewCustomer};
pub use sale::{NewSale, SaleDetail, SaleForm, SaleStatistics};
pub use vehicle::{NewVehicle, Vehicle, VehicleForm};
