use crate::models::sale::{NewSale, SaleDetail, SaleStatistics};
use crate::utils::errors::{database_error, not_found_error, AppResult};
use chrono::Local;
use sqlx::SqlitePool;
use tracing::debug;

/// Vista unida: columnas de la venta más los campos de presentación del auto y del cliente
const SALE_DETAIL_SELECT: &str = r#"
    SELECT s.id, s.vehicle_id, s.customer_id, s.amount, s.payment_method, s.sold_at,
           v.brand AS vehicle_brand, v.model AS vehicle_model, v.year AS vehicle_year,
           v.color AS vehicle_color, v.image AS vehicle_image, v.price AS vehicle_price,
           v.transmission AS vehicle_transmission, v.fuel AS vehicle_fuel,
           c.name AS customer_name, c.phone AS customer_phone,
           c.email AS customer_email, c.address AS customer_address
    FROM sales s
    INNER JOIN vehicles v ON s.vehicle_id = v.id
    INNER JOIN customers c ON s.customer_id = c.id
"#;

pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserta una venta; sin fecha explícita se usa la hora local actual
    pub async fn create(&self, sale: &NewSale) -> AppResult<i64> {
        let sold_at = sale.sold_at.unwrap_or_else(|| Local::now().naive_local());

        let result = sqlx::query(
            r#"
            INSERT INTO sales (vehicle_id, customer_id, amount, payment_method, sold_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(sale.vehicle_id)
        .bind(sale.customer_id)
        .bind(sale.amount)
        .bind(&sale.payment_method)
        .bind(sold_at)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("Error creating sale", e))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_all(&self) -> AppResult<Vec<SaleDetail>> {
        let query = format!("{} ORDER BY s.sold_at DESC, s.id DESC", SALE_DETAIL_SELECT);

        sqlx::query_as::<_, SaleDetail>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Error listing sales", e))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<SaleDetail> {
        let query = format!("{} WHERE s.id = ?", SALE_DETAIL_SELECT);

        sqlx::query_as::<_, SaleDetail>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Error finding sale", e))?
            .ok_or_else(|| not_found_error("Venta", id))
    }

    /// Ventas de un cliente, de la más reciente a la más antigua
    pub async fn get_by_customer(&self, customer_id: i64) -> AppResult<Vec<SaleDetail>> {
        let query = format!(
            "{} WHERE s.customer_id = ? ORDER BY s.sold_at DESC, s.id DESC",
            SALE_DETAIL_SELECT
        );

        sqlx::query_as::<_, SaleDetail>(&query)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Error listing customer sales", e))
    }

    /// Reemplaza la venta; la fecha solo cambia si se indica una nueva
    pub async fn update(&self, id: i64, sale: &NewSale) -> AppResult<String> {
        let result = sqlx::query(
            r#"
            UPDATE sales
            SET vehicle_id = ?, customer_id = ?, amount = ?, payment_method = ?,
                sold_at = COALESCE(?, sold_at)
            WHERE id = ?
            "#,
        )
        .bind(sale.vehicle_id)
        .bind(sale.customer_id)
        .bind(sale.amount)
        .bind(&sale.payment_method)
        .bind(sale.sold_at)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("Error updating sale", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Venta", id));
        }

        Ok("Venta actualizada exitosamente".to_string())
    }

    pub async fn delete(&self, id: i64) -> AppResult<String> {
        let result = sqlx::query("DELETE FROM sales WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Error deleting sale", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Venta", id));
        }

        Ok("Venta eliminada exitosamente".to_string())
    }

    /// Conteo, suma, promedio, máximo y mínimo de los montos
    pub async fn statistics(&self) -> AppResult<SaleStatistics> {
        let statistics = sqlx::query_as::<_, SaleStatistics>(
            r#"
            SELECT COUNT(*) AS count,
                   SUM(amount) AS total,
                   AVG(amount) AS average,
                   MAX(amount) AS "max",
                   MIN(amount) AS "min"
            FROM sales
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Error computing sale statistics", e))?;

        debug!("Estadísticas de ventas: {:?}", statistics);
        Ok(statistics)
    }
}
