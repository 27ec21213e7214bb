#![allow(dead_code)]

use autogest::config::DatabaseConfig;
use autogest::controllers::{CustomerController, SaleController, VehicleController};
use autogest::database::DatabaseConnection;
use autogest::models::{CustomerForm, SaleForm, VehicleForm};
use autogest::services::{AssetManager, PathManager};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestContext {
    pub base: TempDir,
    pub uploads: TempDir,
    pub connection: DatabaseConnection,
    pub assets: AssetManager,
    pub vehicles: VehicleController,
    pub customers: CustomerController,
    pub sales: SaleController,
}

impl TestContext {
    /// Escribe un archivo de origen fuera del directorio de imágenes
    pub fn upload(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.uploads.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

pub async fn setup() -> TestContext {
    let base = TempDir::new().unwrap();
    let uploads = TempDir::new().unwrap();

    let connection = DatabaseConnection::new(&DatabaseConfig::in_memory())
        .await
        .unwrap();
    let pool = connection.pool().clone();
    let assets = AssetManager::new(PathManager::new(base.path()));

    TestContext {
        vehicles: VehicleController::new(pool.clone(), assets.clone()),
        customers: CustomerController::new(pool.clone()),
        sales: SaleController::new(pool),
        base,
        uploads,
        connection,
        assets,
    }
}

pub fn vehicle_form(brand: &str, model: &str, color: &str) -> VehicleForm {
    VehicleForm {
        brand: brand.to_string(),
        model: model.to_string(),
        year: "2023".to_string(),
        price: "18000".to_string(),
        color: color.to_string(),
        transmission: "Manual".to_string(),
        fuel: "Gasoline".to_string(),
        image_path: None,
    }
}

pub fn corolla() -> VehicleForm {
    vehicle_form("Toyota", "Corolla", "Blue")
}

pub fn customer_form(name: &str, phone: Option<&str>, email: Option<&str>) -> CustomerForm {
    CustomerForm {
        name: name.to_string(),
        phone: phone.map(str::to_string),
        email: email.map(str::to_string),
        address: None,
    }
}

pub fn sale_form(vehicle_id: i64, customer_id: i64, amount: &str) -> SaleForm {
    SaleForm {
        vehicle_id,
        customer_id,
        amount: amount.to_string(),
        payment_method: "Cash".to_string(),
        sold_at: None,
    }
}
