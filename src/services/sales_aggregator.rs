//! Estadísticas de ventas
//!
//! Un almacén sin ventas no es un error: se devuelve `count = 0` y el resto
//! de valores vacíos, que la presentación muestra como `$0.00`.

use crate::models::sale::SaleStatistics;
use crate::repositories::sale_repository::SaleRepository;
use crate::utils::errors::AppResult;
use sqlx::SqlitePool;
use tracing::info;

pub struct SalesAggregator {
    repository: SaleRepository,
}

impl SalesAggregator {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: SaleRepository::new(pool),
        }
    }

    pub async fn statistics(&self) -> AppResult<SaleStatistics> {
        let statistics = self.repository.statistics().await?;

        if statistics.is_empty() {
            info!("Sin ventas registradas");
            return Ok(SaleStatistics::default());
        }

        info!(
            "📊 {} ventas, total {}",
            statistics.count,
            statistics.display_total()
        );
        Ok(statistics)
    }
}
