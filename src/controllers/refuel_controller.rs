use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use super::vehicle_controller::load_owned_vehicle;
use crate::dto::common_dto::ApiResponse;
use crate::dto::refuel_dto::CreateRefuelRequest;
use crate::models::{EnrichedRefuelEvent, NewRefuel, RefuelEvent, VehicleStats};
use crate::repositories::{MemoryStore, RefuelRepository, VehicleRepository};
use crate::services::fuel_report_service::{self, RefuelOrder, VehicleReport};
use crate::utils::errors::{bad_request_error, validation_error, AppResult};
use crate::utils::validation::{normalize_station_name, resolve_liters, validate_positive_amount};

pub struct RefuelController {
    vehicles: VehicleRepository,
    refuels: RefuelRepository,
}

impl RefuelController {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            vehicles: VehicleRepository::new(store.clone()),
            refuels: RefuelRepository::new(store),
        }
    }

    /// Registra un repostaje. La comprobación del odómetro, la resolución
    /// de la estación y la inserción ocurren juntas en el repositorio.
    pub async fn create(
        &self,
        owner_id: Uuid,
        vehicle_id: Uuid,
        request: CreateRefuelRequest,
    ) -> AppResult<ApiResponse<RefuelEvent>> {
        request.validate()?;

        let station_name = normalize_station_name(&request.station_name)
            .ok_or_else(|| validation_error("station_name", "La estación es requerida"))?;

        validate_positive_amount(request.total_value)
            .map_err(|_| validation_error("total_value", "El valor total debe ser positivo"))?;
        if let Some(price) = request.price_per_liter {
            validate_positive_amount(price).map_err(|_| {
                validation_error("price_per_liter", "El precio por litro debe ser positivo")
            })?;
        }

        let liters = resolve_liters(request.liters, request.total_value, request.price_per_liter)
            .ok_or_else(|| {
                bad_request_error("Liters must be positive, or derivable from total_value and price_per_liter")
            })?;

        let refuel = self
            .refuels
            .create(NewRefuel {
                vehicle_id,
                owner_id,
                date: request.date.unwrap_or_else(Utc::now),
                current_odometer: request.current_odometer,
                liters,
                price_per_liter: request.price_per_liter,
                total_value: request.total_value,
                station_name,
            })
            .await?;

        info!(
            "⛽ Repostaje {} registrado: {} km, {:.2} L en '{}'",
            refuel.id, refuel.current_odometer, refuel.liters, refuel.station_name
        );

        Ok(ApiResponse::success_with_message(
            refuel,
            "Repostaje registrado exitosamente".to_string(),
        ))
    }

    /// Recalcula el informe completo del vehículo a partir de todos sus repostajes
    pub async fn report(&self, owner_id: Uuid, vehicle_id: Uuid) -> AppResult<VehicleReport> {
        let vehicle = load_owned_vehicle(&self.vehicles, vehicle_id, owner_id).await?;
        let raw = self.refuels.find_by_vehicle(vehicle.id, owner_id).await?;
        debug!("🔄 Recalculando informe de {} con {} repostajes", vehicle.id, raw.len());

        Ok(fuel_report_service::build_report(raw, vehicle.initial_odometer))
    }

    pub async fn list(
        &self,
        owner_id: Uuid,
        vehicle_id: Uuid,
        order: RefuelOrder,
    ) -> AppResult<Vec<EnrichedRefuelEvent>> {
        let report = self.report(owner_id, vehicle_id).await?;
        Ok(fuel_report_service::ordered(report.refuels, order))
    }

    pub async fn stats(&self, owner_id: Uuid, vehicle_id: Uuid) -> AppResult<VehicleStats> {
        Ok(self.report(owner_id, vehicle_id).await?.stats)
    }

    pub async fn get_by_id(&self, owner_id: Uuid, refuel_id: Uuid) -> AppResult<RefuelEvent> {
        self.refuels.find_owned(refuel_id, owner_id).await
    }

    pub async fn delete(&self, owner_id: Uuid, refuel_id: Uuid) -> AppResult<RefuelEvent> {
        let refuel = self.refuels.delete(refuel_id, owner_id).await?;
        info!("🗑️ Repostaje {} eliminado", refuel.id);
        Ok(refuel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::vehicle_controller::VehicleController;
    use crate::dto::vehicle_dto::CreateVehicleRequest;
    use crate::utils::errors::AppError;
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;

    async fn setup(initial_odometer: i64) -> (MemoryStore, Uuid, Uuid) {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let vehicle = VehicleController::new(store.clone())
            .create(
                owner,
                CreateVehicleRequest {
                    name: "Gol".to_string(),
                    plate: "ABC1D23".to_string(),
                    initial_odometer,
                },
            )
            .await
            .unwrap()
            .data
            .unwrap();
        (store, owner, vehicle.id)
    }

    fn request(odometer: i64, liters: f64, station: &str, day: i64) -> CreateRefuelRequest {
        CreateRefuelRequest {
            date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::days(day)),
            current_odometer: odometer,
            liters: Some(liters),
            price_per_liter: None,
            total_value: Decimal::new(20000, 2),
            station_name: station.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_resolves_station_by_trimmed_name() {
        let (store, owner, vehicle_id) = setup(10000).await;
        let controller = RefuelController::new(store);

        let first = controller
            .create(owner, vehicle_id, request(10400, 40.0, "Posto Shell", 0))
            .await
            .unwrap()
            .data
            .unwrap();
        let second = controller
            .create(owner, vehicle_id, request(10800, 32.0, "  Posto Shell  ", 7))
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(first.station_id, second.station_id);
        assert_eq!(second.station_name, "Posto Shell");
    }

    #[tokio::test]
    async fn test_create_computes_liters_from_price() {
        let (store, owner, vehicle_id) = setup(10000).await;
        let controller = RefuelController::new(store);

        let mut req = request(10400, 0.0, "Posto BR", 0);
        req.liters = None;
        req.total_value = Decimal::new(30000, 2);
        req.price_per_liter = Some(Decimal::new(600, 2));

        let refuel = controller.create(owner, vehicle_id, req).await.unwrap().data.unwrap();
        assert_eq!(refuel.liters, 50.0);
    }

    #[tokio::test]
    async fn test_create_rejects_odometer_not_increasing() {
        let (store, owner, vehicle_id) = setup(10000).await;
        let controller = RefuelController::new(store);

        let at_initial = controller
            .create(owner, vehicle_id, request(10000, 40.0, "Posto BR", 0))
            .await;
        assert!(matches!(at_initial, Err(AppError::BadRequest(_))));

        controller
            .create(owner, vehicle_id, request(10400, 40.0, "Posto BR", 0))
            .await
            .unwrap();

        let behind = controller
            .create(owner, vehicle_id, request(10300, 40.0, "Posto BR", 1))
            .await;
        assert!(matches!(behind, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_liters_and_price() {
        let (store, owner, vehicle_id) = setup(10000).await;
        let controller = RefuelController::new(store);

        let mut req = request(10400, 0.0, "Posto BR", 0);
        req.liters = None;
        let result = controller.create(owner, vehicle_id, req).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let mut req = request(10400, 40.0, "Posto BR", 0);
        req.total_value = Decimal::ZERO;
        let result = controller.create(owner, vehicle_id, req).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_stats_after_two_refuels() {
        let (store, owner, vehicle_id) = setup(10000).await;
        let controller = RefuelController::new(store);

        controller
            .create(owner, vehicle_id, request(10400, 40.0, "Posto A", 0))
            .await
            .unwrap();
        controller
            .create(owner, vehicle_id, request(10800, 32.0, "Posto A", 7))
            .await
            .unwrap();

        let stats = controller.stats(owner, vehicle_id).await.unwrap();
        assert_eq!(stats.total_refuels, 2);
        assert_eq!(stats.overall_economy, 11.11);
        assert_eq!(stats.station_averages[0].average, 12.5);

        let history = controller.list(owner, vehicle_id, RefuelOrder::Date).await.unwrap();
        assert_eq!(history[0].refuel.current_odometer, 10800);
        assert_eq!(history[0].economy, 12.5);
    }

    #[tokio::test]
    async fn test_create_for_other_owner_is_forbidden() {
        let (store, _owner, vehicle_id) = setup(10000).await;
        let controller = RefuelController::new(store.clone());

        let result = controller
            .create(Uuid::new_v4(), vehicle_id, request(10400, 40.0, "Posto A", 0))
            .await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert!(store.read().await.stations.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_checks_owner() {
        let (store, owner, vehicle_id) = setup(10000).await;
        let controller = RefuelController::new(store);

        let refuel = controller
            .create(owner, vehicle_id, request(10400, 40.0, "Posto A", 0))
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(controller.get_by_id(owner, refuel.id).await.unwrap(), refuel);
        let result = controller.get_by_id(Uuid::new_v4(), refuel.id).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_stats_for_other_owner_is_forbidden() {
        let (store, _owner, vehicle_id) = setup(10000).await;
        let controller = RefuelController::new(store);

        let result = controller.stats(Uuid::new_v4(), vehicle_id).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
