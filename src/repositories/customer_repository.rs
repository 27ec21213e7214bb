use crate::models::customer::{Customer, NewCustomer};
use crate::repositories::matches_term;
use crate::utils::errors::{database_error, not_found_error, AppError, AppResult};
use sqlx::SqlitePool;

pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, customer: &NewCustomer) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO customers (name, phone, email, address) VALUES (?, ?, ?, ?)",
        )
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.email)
        .bind(&customer.address)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("Error creating customer", e))?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_all(&self) -> AppResult<Vec<Customer>> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY name ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Error listing customers", e))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Error finding customer", e))?
            .ok_or_else(|| not_found_error("Cliente", id))
    }

    pub async fn update(&self, id: i64, customer: &NewCustomer) -> AppResult<String> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?, phone = ?, email = ?, address = ?
            WHERE id = ?
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("Error updating customer", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Cliente", id));
        }

        Ok("Cliente actualizado exitosamente".to_string())
    }

    pub async fn delete(&self, id: i64) -> AppResult<String> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match database_error("Error deleting customer", e) {
                AppError::Conflict(_) => AppError::Conflict(
                    "No se puede eliminar el cliente porque tiene ventas registradas".to_string(),
                ),
                other => other,
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Cliente", id));
        }

        Ok("Cliente eliminado exitosamente".to_string())
    }

    /// Busca por nombre, teléfono o correo (subcadena, sin distinguir mayúsculas)
    pub async fn search(&self, term: &str) -> AppResult<Vec<Customer>> {
        let needle = term.to_lowercase();

        Ok(self
            .get_all()
            .await?
            .into_iter()
            .filter(|c| {
                matches_term(
                    &[Some(c.name.as_str()), c.phone.as_deref(), c.email.as_deref()],
                    &needle,
                )
            })
            .collect())
    }
}
