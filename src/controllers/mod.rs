//! Controladores
//!
//! Punto de entrada de cada entidad para quien usa el núcleo (la interfaz):
//! validar, adjuntar la imagen cuando corresponde y persistir. Ninguna
//! operación pública entra en pánico; todas devuelven un `AppResult`.

pub mod customer_controller;
pub mod sale_controller;
pub mod vehicle_controller;

pub use customer_controller::CustomerController;
pub use sale_controller::SaleController;
pub use vehicle_controller::VehicleController;
