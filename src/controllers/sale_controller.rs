use crate::models::sale::{NewSale, SaleDetail, SaleForm, SaleStatistics};
use crate::repositories::sale_repository::SaleRepository;
use crate::services::sales_aggregator::SalesAggregator;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{validate_number, validate_positive_id, validate_required};
use sqlx::SqlitePool;
use tracing::{info, warn};

pub struct SaleController {
    repository: SaleRepository,
    aggregator: SalesAggregator,
}

impl SaleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: SaleRepository::new(pool.clone()),
            aggregator: SalesAggregator::new(pool),
        }
    }

    /// Valida el formulario; las referencias deben ser enteros positivos
    pub fn validate(form: &SaleForm) -> AppResult<NewSale> {
        let vehicle_id = validate_positive_id(form.vehicle_id, "Auto", "Debe seleccionar un auto")
            .map_err(|e| validation_error("vehicle_id", e))?;
        let customer_id =
            validate_positive_id(form.customer_id, "Cliente", "Debe seleccionar un cliente")
                .map_err(|e| validation_error("customer_id", e))?;
        let amount = validate_number(&form.amount, "Monto", Some(0.0), None)
            .map_err(|e| validation_error("amount", e))?;
        validate_required(Some(form.payment_method.as_str()), "Método de pago")
            .map_err(|e| validation_error("payment_method", e))?;

        Ok(NewSale {
            vehicle_id,
            customer_id,
            amount,
            payment_method: form.payment_method.trim().to_string(),
            sold_at: form.sold_at,
        })
    }

    pub async fn create(&self, form: SaleForm) -> AppResult<i64> {
        let sale = Self::validate(&form).map_err(|e| {
            warn!("Venta rechazada: {}", e.user_message());
            e
        })?;

        let id = self.repository.create(&sale).await?;
        info!(
            "✅ Venta {} registrada: auto {} para cliente {}",
            id, sale.vehicle_id, sale.customer_id
        );
        Ok(id)
    }

    pub async fn update(&self, id: i64, form: SaleForm) -> AppResult<String> {
        let sale = Self::validate(&form).map_err(|e| {
            warn!("Actualización de la venta {} rechazada: {}", id, e.user_message());
            e
        })?;

        let message = self.repository.update(id, &sale).await?;
        info!("Venta {} actualizada", id);
        Ok(message)
    }

    pub async fn get_all(&self) -> AppResult<Vec<SaleDetail>> {
        self.repository.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<SaleDetail> {
        self.repository.get_by_id(id).await
    }

    pub async fn get_by_customer(&self, customer_id: i64) -> AppResult<Vec<SaleDetail>> {
        self.repository.get_by_customer(customer_id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<String> {
        let message = self.repository.delete(id).await?;
        info!("Venta {} eliminada", id);
        Ok(message)
    }

    pub async fn statistics(&self) -> AppResult<SaleStatistics> {
        self.aggregator.statistics().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SaleForm {
        SaleForm {
            vehicle_id: 1,
            customer_id: 2,
            amount: "18000".to_string(),
            payment_method: "Cash".to_string(),
            sold_at: None,
        }
    }

    #[test]
    fn test_valid_form() {
        let sale = SaleController::validate(&form()).unwrap();
        assert_eq!(sale.vehicle_id, 1);
        assert_eq!(sale.customer_id, 2);
        assert_eq!(sale.amount, 18000.0);
        assert_eq!(sale.sold_at, None);
    }

    #[test]
    fn test_references_must_be_positive() {
        let mut invalid = form();
        invalid.vehicle_id = 0;
        invalid.customer_id = -1;

        let error = SaleController::validate(&invalid).unwrap_err();
        assert_eq!(error.invalid_field(), Some("vehicle_id"));
        assert_eq!(error.user_message(), "Debe seleccionar un auto");

        let mut invalid = form();
        invalid.customer_id = 0;
        let error = SaleController::validate(&invalid).unwrap_err();
        assert_eq!(error.invalid_field(), Some("customer_id"));
    }

    #[test]
    fn test_amount_and_payment_method() {
        let mut invalid = form();
        invalid.amount = "mucho".to_string();
        assert_eq!(
            SaleController::validate(&invalid).unwrap_err().invalid_field(),
            Some("amount")
        );

        let mut invalid = form();
        invalid.payment_method = " ".to_string();
        assert_eq!(
            SaleController::validate(&invalid).unwrap_err().invalid_field(),
            Some("payment_method")
        );
    }
}
