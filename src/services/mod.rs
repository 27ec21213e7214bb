//! Services module
//!
//! Servicios de apoyo a los controladores: imágenes y rutas, estadísticas
//! de ventas y documentos imprimibles.

pub mod asset_service;
pub mod document_service;
pub mod sales_aggregator;

pub use asset_service::{AssetManager, PathManager};
pub use document_service::{DocumentRenderer, DocumentService, JsonDocumentRenderer};
pub use sales_aggregator::SalesAggregator;
