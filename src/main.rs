use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use fuel_tracker::config::environment::EnvironmentConfig;
use fuel_tracker::repositories::MemoryStore;
use fuel_tracker::routes::create_router;
use fuel_tracker::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Configuración inválida: {}", e))?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("⛽ Fuel Tracker - API de consumo de combustible");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    let server_url = config.server_url();
    let list_endpoints = config.is_development();
    let app = create_router(AppState::new(MemoryStore::new(), config));

    info!("🌐 Servidor iniciando en http://{}", server_url);
    if list_endpoints {
        info!("🔍 Endpoints disponibles:");
        info!("   GET  /health - Health check");
        info!("🚗 Vehicle:");
        info!("   POST   /api/vehicle - Crear vehículo");
        info!("   GET    /api/vehicle - Listar vehículos");
        info!("   GET    /api/vehicle/:id - Obtener vehículo");
        info!("   PUT    /api/vehicle/:id - Actualizar vehículo");
        info!("   DELETE /api/vehicle/:id - Eliminar vehículo y sus repostajes");
        info!("⛽ Refuel:");
        info!("   POST   /api/vehicle/:id/refuels - Registrar repostaje");
        info!("   GET    /api/vehicle/:id/refuels - Historial con consumo");
        info!("   GET    /api/vehicle/:id/stats - Estadísticas del vehículo");
        info!("   GET    /api/refuel/:id - Obtener repostaje");
        info!("   DELETE /api/refuel/:id - Eliminar repostaje");
        info!("📍 Station:");
        info!("   GET    /api/station - Listar estaciones");
        info!("   GET    /api/station/:id - Obtener estación");
        info!("   PUT    /api/station/:id - Renombrar estación");
    }

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
