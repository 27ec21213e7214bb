use crate::models::customer::{Customer, CustomerForm, NewCustomer};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{non_blank, validate_email, validate_phone, validate_required};
use sqlx::SqlitePool;
use tracing::{info, warn};

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    /// Valida el formulario. Los campos opcionales en blanco se guardan vacíos.
    pub fn validate(form: &CustomerForm) -> AppResult<NewCustomer> {
        validate_required(Some(form.name.as_str()), "Nombre")
            .map_err(|e| validation_error("name", e))?;
        validate_phone(form.phone.as_deref()).map_err(|e| validation_error("phone", e))?;
        validate_email(form.email.as_deref()).map_err(|e| validation_error("email", e))?;

        Ok(NewCustomer {
            name: form.name.trim().to_string(),
            phone: non_blank(form.phone.as_deref()).map(str::to_string),
            email: non_blank(form.email.as_deref()).map(str::to_string),
            address: non_blank(form.address.as_deref()).map(str::to_string),
        })
    }

    pub async fn create(&self, form: CustomerForm) -> AppResult<i64> {
        let customer = Self::validate(&form).map_err(|e| {
            warn!("Cliente rechazado: {}", e.user_message());
            e
        })?;

        let id = self.repository.create(&customer).await?;
        info!("✅ Cliente {} creado: {}", id, customer.name);
        Ok(id)
    }

    pub async fn update(&self, id: i64, form: CustomerForm) -> AppResult<String> {
        let customer = Self::validate(&form).map_err(|e| {
            warn!("Actualización del cliente {} rechazada: {}", id, e.user_message());
            e
        })?;

        let message = self.repository.update(id, &customer).await?;
        info!("Cliente {} actualizado", id);
        Ok(message)
    }

    pub async fn get_all(&self) -> AppResult<Vec<Customer>> {
        self.repository.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Customer> {
        self.repository.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<String> {
        let message = self.repository.delete(id).await?;
        info!("Cliente {} eliminado", id);
        Ok(message)
    }

    pub async fn search(&self, term: &str) -> AppResult<Vec<Customer>> {
        self.repository.search(term).await
    }
}
