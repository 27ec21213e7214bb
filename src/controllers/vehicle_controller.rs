use crate::models::vehicle::{NewVehicle, Vehicle, VehicleForm};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::asset_service::AssetManager;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{validate_number, validate_required, validate_year};
use sqlx::SqlitePool;
use tracing::{info, warn};

pub struct VehicleController {
    repository: VehicleRepository,
    assets: AssetManager,
}

impl VehicleController {
    pub fn new(pool: SqlitePool, assets: AssetManager) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
            assets,
        }
    }

    /// Valida el formulario; se detiene en el primer campo inválido
    pub fn validate(form: &VehicleForm) -> AppResult<NewVehicle> {
        validate_required(Some(form.brand.as_str()), "Marca")
            .map_err(|e| validation_error("brand", e))?;
        validate_required(Some(form.model.as_str()), "Modelo")
            .map_err(|e| validation_error("model", e))?;
        let year = validate_year(&form.year).map_err(|e| validation_error("year", e))?;
        let price = validate_number(&form.price, "Precio", Some(0.0), None)
            .map_err(|e| validation_error("price", e))?;
        validate_required(Some(form.color.as_str()), "Color")
            .map_err(|e| validation_error("color", e))?;

        Ok(NewVehicle {
            brand: form.brand.trim().to_string(),
            model: form.model.trim().to_string(),
            year,
            price,
            color: form.color.trim().to_string(),
            transmission: form.transmission.trim().to_string(),
            fuel: form.fuel.trim().to_string(),
        })
    }

    pub async fn create(&self, form: VehicleForm) -> AppResult<i64> {
        let vehicle = Self::validate(&form).map_err(|e| {
            warn!("Vehículo rechazado: {}", e.user_message());
            e
        })?;

        // Una imagen que no se pudo copiar no impide guardar el vehículo
        let image = self.assets.store_image(form.image_path.as_deref());

        let id = self.repository.create(&vehicle, image.as_deref()).await?;
        info!("✅ Vehículo {} creado: {} {}", id, vehicle.brand, vehicle.model);
        Ok(id)
    }

    /// Reemplaza el vehículo; la imagen solo cambia si se pudo copiar una nueva
    pub async fn update(&self, id: i64, form: VehicleForm) -> AppResult<String> {
        let vehicle = Self::validate(&form).map_err(|e| {
            warn!("Actualización del vehículo {} rechazada: {}", id, e.user_message());
            e
        })?;

        // Sin vehículo no se copia la imagen
        self.repository.get_by_id(id).await?;
        let image = self.assets.store_image(form.image_path.as_deref());

        let message = self.repository.update(id, &vehicle, image.as_deref()).await?;
        info!("Vehículo {} actualizado", id);
        Ok(message)
    }

    pub async fn get_all(&self) -> AppResult<Vec<Vehicle>> {
        self.repository.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Vehicle> {
        self.repository.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<String> {
        let message = self.repository.delete(id).await?;
        info!("Vehículo {} eliminado", id);
        Ok(message)
    }

    pub async fn search(&self, term: &str) -> AppResult<Vec<Vehicle>> {
        self.repository.search(term).await
    }
}
