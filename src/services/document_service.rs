//! Documentos imprimibles
//!
//! El núcleo no compone páginas: arma el registro completo (auto, venta
//! unida o lista de clientes), elige el nombre del archivo de salida y se lo
//! entrega a un `DocumentRenderer`.

use crate::models::customer::Customer;
use crate::models::sale::SaleDetail;
use crate::models::vehicle::Vehicle;
use crate::services::asset_service::AssetManager;
use crate::utils::errors::{AppError, AppResult};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Registro completo que recibe el renderizador
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Document<'a> {
    VehicleSheet {
        vehicle: &'a Vehicle,
        image_path: Option<PathBuf>,
    },
    SaleReceipt {
        sale: &'a SaleDetail,
        image_path: Option<PathBuf>,
    },
    CustomerList {
        customers: &'a [Customer],
    },
}

/// Colaborador externo que produce el artefacto imprimible
pub trait DocumentRenderer {
    /// Extensión de los archivos que produce, sin punto
    fn extension(&self) -> &'static str;

    fn render(&self, document: &Document<'_>, output: &Path) -> AppResult<()>;
}

/// Renderizador que vuelca el registro como JSON legible
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentRenderer;

impl DocumentRenderer for JsonDocumentRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &Document<'_>, output: &Path) -> AppResult<()> {
        let contents = serde_json::to_vec_pretty(document)
            .map_err(|e| AppError::Document(e.to_string()))?;
        fs::write(output, contents).map_err(|e| AppError::Document(e.to_string()))
    }
}

pub struct DocumentService<R> {
    assets: AssetManager,
    renderer: R,
}

impl<R: DocumentRenderer> DocumentService<R> {
    pub fn new(assets: AssetManager, renderer: R) -> Self {
        Self { assets, renderer }
    }

    /// Ficha técnica de un vehículo
    pub fn vehicle_sheet(&self, vehicle: &Vehicle) -> AppResult<PathBuf> {
        let filename = format!(
            "vehicle_{}_{}_{}.{}",
            vehicle.id,
            sanitize(&vehicle.brand),
            sanitize(&vehicle.model),
            self.renderer.extension()
        );
        let image_path = vehicle.image.as_deref().and_then(|name| self.assets.resolve(name));

        self.write(&filename, &Document::VehicleSheet { vehicle, image_path })
    }

    /// Comprobante de una venta ya unida con su auto y su cliente
    pub fn sale_receipt(&self, sale: &SaleDetail) -> AppResult<PathBuf> {
        let filename = format!("sale_{}.{}", sale.id, self.renderer.extension());
        let image_path = sale
            .vehicle_image
            .as_deref()
            .and_then(|name| self.assets.resolve(name));

        self.write(&filename, &Document::SaleReceipt { sale, image_path })
    }

    pub fn customer_list(&self, customers: &[Customer]) -> AppResult<PathBuf> {
        let filename = format!("customer_list.{}", self.renderer.extension());
        self.write(&filename, &Document::CustomerList { customers })
    }

    fn write(&self, filename: &str, document: &Document<'_>) -> AppResult<PathBuf> {
        let output = self
            .assets
            .paths()
            .output_path(filename)
            .map_err(|e| AppError::Document(e.to_string()))?;

        self.renderer.render(document, &output)?;
        info!("📄 Documento generado en {}", output.display());
        Ok(output)
    }
}

/// Reemplaza lo que no sea alfanumérico o guion por `_`
fn sanitize(component: &str) -> String {
    component
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::asset_service::PathManager;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use tempfile::TempDir;

    fn vehicle(image: Option<&str>) -> Vehicle {
        Vehicle {
            id: 7,
            brand: "Toyota".to_string(),
            model: "Corolla Cross".to_string(),
            year: 2023,
            price: 18000.0,
            color: "Blue".to_string(),
            transmission: "Manual".to_string(),
            fuel: "Gasoline".to_string(),
            image: image.map(str::to_string),
            registered_at: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        kinds: RefCell<Vec<String>>,
    }

    impl DocumentRenderer for RecordingRenderer {
        fn extension(&self) -> &'static str {
            "pdf"
        }

        fn render(&self, document: &Document<'_>, output: &Path) -> AppResult<()> {
            let kind = match document {
                Document::VehicleSheet { image_path, .. } => {
                    format!("vehicle:{}", image_path.is_some())
                }
                Document::SaleReceipt { .. } => "sale".to_string(),
                Document::CustomerList { customers } => format!("customers:{}", customers.len()),
            };
            self.kinds.borrow_mut().push(kind);
            fs::write(output, b"%PDF").map_err(|e| AppError::Document(e.to_string()))
        }
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Corolla Cross"), "Corolla_Cross");
        assert_eq!(sanitize("C/HR"), "C_HR");
        assert_eq!(sanitize("Mercedes-Benz"), "Mercedes-Benz");
    }

    #[test]
    fn test_vehicle_sheet_with_json_renderer() {
        let base = TempDir::new().unwrap();
        let service = DocumentService::new(
            AssetManager::new(PathManager::new(base.path())),
            JsonDocumentRenderer,
        );

        let output = service.vehicle_sheet(&vehicle(None)).unwrap();
        assert_eq!(
            output.file_name().unwrap().to_str().unwrap(),
            "vehicle_7_Toyota_Corolla_Cross.json"
        );

        let json: serde_json::Value =
            serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
        assert_eq!(json["kind"], "vehicle_sheet");
        assert_eq!(json["vehicle"]["brand"], "Toyota");
        assert!(json["image_path"].is_null());
    }

    #[test]
    fn test_missing_image_is_not_resolved() {
        let base = TempDir::new().unwrap();
        let renderer = RecordingRenderer::default();
        let service = DocumentService::new(
            AssetManager::new(PathManager::new(base.path())),
            renderer,
        );

        let output = service.vehicle_sheet(&vehicle(Some("gone.jpg"))).unwrap();
        assert!(output.ends_with("vehicle_7_Toyota_Corolla_Cross.pdf"));

        service.customer_list(&[]).unwrap();
        assert_eq!(
            *service.renderer.kinds.borrow(),
            vec!["vehicle:false".to_string(), "customers:0".to_string()]
        );
    }
}
