use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::repositories::matches_term;
use crate::utils::errors::{database_error, not_found_error, AppError, AppResult};
use sqlx::SqlitePool;
use tracing::debug;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserta un vehículo y devuelve el id asignado
    pub async fn create(&self, vehicle: &NewVehicle, image: Option<&str>) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO vehicles (brand, model, year, price, color, transmission, fuel, image)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.price)
        .bind(&vehicle.color)
        .bind(&vehicle.transmission)
        .bind(&vehicle.fuel)
        .bind(image)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("Error creating vehicle", e))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_all(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles ORDER BY registered_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("Error listing vehicles", e))?;

        debug!("{} vehículos listados", vehicles.len());
        Ok(vehicles)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Vehicle> {
        sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Error finding vehicle", e))?
            .ok_or_else(|| not_found_error("Vehículo", id))
    }

    /// Reemplaza todos los campos mutables. Sin imagen nueva se conserva la actual.
    pub async fn update(
        &self,
        id: i64,
        vehicle: &NewVehicle,
        image: Option<&str>,
    ) -> AppResult<String> {
        let result = sqlx::query(
            r#"
            UPDATE vehicles
            SET brand = ?, model = ?, year = ?, price = ?, color = ?,
                transmission = ?, fuel = ?, image = COALESCE(?, image)
            WHERE id = ?
            "#,
        )
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.price)
        .bind(&vehicle.color)
        .bind(&vehicle.transmission)
        .bind(&vehicle.fuel)
        .bind(image)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("Error updating vehicle", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Vehículo", id));
        }

        Ok("Vehículo actualizado exitosamente".to_string())
    }

    pub async fn delete(&self, id: i64) -> AppResult<String> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match database_error("Error deleting vehicle", e) {
                AppError::Conflict(_) => AppError::Conflict(
                    "No se puede eliminar el vehículo porque tiene ventas registradas".to_string(),
                ),
                other => other,
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Vehículo", id));
        }

        Ok("Vehículo eliminado exitosamente".to_string())
    }

    /// Busca por marca, modelo o color (subcadena, sin distinguir mayúsculas).
    /// El plegado se hace aquí porque `LOWER` de SQLite solo cubre ASCII.
    pub async fn search(&self, term: &str) -> AppResult<Vec<Vehicle>> {
        let needle = term.to_lowercase();

        let vehicles: Vec<Vehicle> = self
            .get_all()
            .await?
            .into_iter()
            .filter(|v| {
                matches_term(
                    &[Some(v.brand.as_str()), Some(v.model.as_str()), Some(v.color.as_str())],
                    &needle,
                )
            })
            .collect();

        debug!("{} vehículos coinciden con '{}'", vehicles.len(), term);
        Ok(vehicles)
    }
}
