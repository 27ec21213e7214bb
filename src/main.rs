use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info};

use autogest::config::{DatabaseConfig, EnvironmentConfig};
use autogest::controllers::{CustomerController, SaleController, VehicleController};
use autogest::database::DatabaseConnection;
use autogest::services::{AssetManager, DocumentService, JsonDocumentRenderer, PathManager};
use autogest::AppResult;

enum Command {
    Summary,
    VehicleSheet(i64),
    SaleReceipt(i64),
    CustomerList,
}

fn parse_command(args: &[String]) -> Result<Command> {
    let id = |value: Option<&String>| -> Result<i64> {
        let value = value.ok_or_else(|| anyhow::anyhow!("Falta el id"))?;
        value
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("Id inválido: {}", value))
    };

    match args.first().map(String::as_str) {
        None | Some("summary") => Ok(Command::Summary),
        Some("vehicle-sheet") => Ok(Command::VehicleSheet(id(args.get(1))?)),
        Some("sale-receipt") => Ok(Command::SaleReceipt(id(args.get(1))?)),
        Some("customer-list") => Ok(Command::CustomerList),
        Some(other) => Err(anyhow::anyhow!(
            "Comando desconocido: {} (summary | vehicle-sheet <id> | sale-receipt <id> | customer-list)",
            other
        )),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 AutoGest - Gestión de Venta de Autos ({})", config.environment);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_command(&args)?;

    let paths = PathManager::new(&config.base_dir);
    paths.ensure_directories()?;

    let connection = match DatabaseConnection::new(&DatabaseConfig::new(&config.database_url)).await {
        Ok(connection) => connection,
        Err(e) => {
            error!("❌ Error conectando al almacén: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let assets = AssetManager::new(paths);
    let outcome = run(command, &connection, assets).await;
    connection.close().await;

    if let Err(e) = outcome {
        error!("❌ {}", e.user_message());
        return Err(e.into());
    }

    Ok(())
}

async fn run(command: Command, connection: &DatabaseConnection, assets: AssetManager) -> AppResult<()> {
    let pool = connection.pool().clone();
    let vehicles = VehicleController::new(pool.clone(), assets.clone());
    let customers = CustomerController::new(pool.clone());
    let sales = SaleController::new(pool);
    let documents = DocumentService::new(assets, JsonDocumentRenderer);

    match command {
        Command::Summary => {
            let vehicle_count = vehicles.get_all().await?.len();
            let customer_count = customers.get_all().await?.len();
            let statistics = sales.statistics().await?;

            info!("Vehículos registrados: {}", vehicle_count);
            info!("Clientes registrados: {}", customer_count);
            info!("Total de ventas: {}", statistics.count);
            info!("Monto total: {}", statistics.display_total());
            info!("Venta promedio: {}", statistics.display_average());
            info!("Venta mayor: {}", statistics.display_max());
            info!("Venta menor: {}", statistics.display_min());
        }
        Command::VehicleSheet(id) => {
            let vehicle = vehicles.get_by_id(id).await?;
            documents.vehicle_sheet(&vehicle)?;
        }
        Command::SaleReceipt(id) => {
            let sale = sales.get_by_id(id).await?;
            documents.sale_receipt(&sale)?;
        }
        Command::CustomerList => {
            let all = customers.get_all().await?;
            documents.customer_list(&all)?;
        }
    }

    Ok(())
}
