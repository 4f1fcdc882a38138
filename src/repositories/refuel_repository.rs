use tracing::debug;
use uuid::Uuid;

use super::memory_store::MemoryStore;
use crate::models::{NewRefuel, RefuelEvent};
use crate::services::fuel_report_service::minimum_next_odometer;
use crate::utils::errors::{bad_request_error, forbidden_error, not_found_error, AppError};
use crate::utils::validation::normalize_station_name;

pub struct RefuelRepository {
    store: MemoryStore,
}

impl RefuelRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Inserta el repostaje en una única sección de escritura: comprueba el
    /// vehículo y el odómetro mínimo, resuelve la estación por nombre y lo
    /// guarda. Si algo falla no queda ninguna estación creada.
    pub async fn create(&self, new_refuel: NewRefuel) -> Result<RefuelEvent, AppError> {
        let station_name = normalize_station_name(&new_refuel.station_name)
            .ok_or_else(|| bad_request_error("Station name must not be empty"))?;

        let mut data = self.store.write().await;

        let vehicle = data
            .vehicles
            .get(&new_refuel.vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", &new_refuel.vehicle_id.to_string()))?;

        if !vehicle.belongs_to(new_refuel.owner_id) {
            return Err(forbidden_error("add refuel", "the vehicle belongs to another user"));
        }

        let minimum = minimum_next_odometer(
            data.refuels.values().filter(|r| r.vehicle_id == vehicle.id),
            vehicle.initial_odometer,
        );
        if new_refuel.current_odometer <= minimum {
            return Err(bad_request_error(&format!(
                "El odómetro debe ser mayor que {} km",
                minimum
            )));
        }

        let station = data.resolve_station(new_refuel.owner_id, &station_name);
        let refuel = RefuelEvent::new(new_refuel, &station);
        data.refuels.insert(refuel.id, refuel.clone());
        debug!("💾 Repostaje {} guardado (mínimo previo {} km)", refuel.id, minimum);

        Ok(refuel)
    }

    /// Repostaje del usuario; falla si pertenece a otro
    pub async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<RefuelEvent, AppError> {
        let data = self.store.read().await;

        let refuel = data
            .refuels
            .get(&id)
            .ok_or_else(|| not_found_error("Refuel", &id.to_string()))?;

        if refuel.owner_id != owner_id {
            return Err(forbidden_error("access refuel", "it belongs to another user"));
        }

        Ok(refuel.clone())
    }

    /// Conjunto completo de repostajes de un vehículo, por odómetro ascendente
    pub async fn find_by_vehicle(
        &self,
        vehicle_id: Uuid,
        owner_id: Uuid,
    ) -> Result<Vec<RefuelEvent>, AppError> {
        let data = self.store.read().await;
        let mut refuels: Vec<RefuelEvent> = data
            .refuels
            .values()
            .filter(|r| r.vehicle_id == vehicle_id && r.owner_id == owner_id)
            .cloned()
            .collect();
        refuels.sort_by_key(|r| r.current_odometer);

        Ok(refuels)
    }

    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<RefuelEvent, AppError> {
        let mut data = self.store.write().await;

        let refuel = data
            .refuels
            .get(&id)
            .ok_or_else(|| not_found_error("Refuel", &id.to_string()))?;

        if refuel.owner_id != owner_id {
            return Err(forbidden_error("delete refuel", "it belongs to another user"));
        }

        data.refuels
            .remove(&id)
            .ok_or_else(|| not_found_error("Refuel", &id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vehicle;
    use crate::repositories::vehicle_repository::VehicleRepository;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn new_refuel(vehicle: &Vehicle, odometer: i64, station: &str) -> NewRefuel {
        NewRefuel {
            vehicle_id: vehicle.id,
            owner_id: vehicle.owner_id,
            date: Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap() + Duration::hours(odometer),
            current_odometer: odometer,
            liters: 35.0,
            price_per_liter: Some(Decimal::new(589, 2)),
            total_value: Decimal::new(20615, 2),
            station_name: station.to_string(),
        }
    }

    async fn setup(initial_odometer: i64) -> (MemoryStore, RefuelRepository, Vehicle) {
        let store = MemoryStore::new();
        let vehicle = VehicleRepository::new(store.clone())
            .create(Uuid::new_v4(), "Gol".to_string(), "GOL0001".to_string(), initial_odometer)
            .await
            .unwrap();
        let repository = RefuelRepository::new(store.clone());
        (store, repository, vehicle)
    }

    #[tokio::test]
    async fn test_create_requires_vehicle() {
        let (store, repository, vehicle) = setup(0).await;
        let mut missing = new_refuel(&vehicle, 1000, "Posto Shell");
        missing.vehicle_id = Uuid::new_v4();

        let result = repository.create(missing).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(store.read().await.stations.is_empty());
    }

    #[tokio::test]
    async fn test_create_resolves_station_by_trimmed_name() {
        let (store, repository, vehicle) = setup(0).await;

        let first = repository
            .create(new_refuel(&vehicle, 400, "Posto Shell"))
            .await
            .unwrap();
        let second = repository
            .create(new_refuel(&vehicle, 800, "  Posto Shell "))
            .await
            .unwrap();

        assert_eq!(first.station_id, second.station_id);
        assert_eq!(second.station_name, "Posto Shell");
        assert_eq!(store.read().await.stations.len(), 1);

        let blank = repository.create(new_refuel(&vehicle, 1200, "   ")).await;
        assert!(matches!(blank, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_create_rejected_odometer_leaves_no_station() {
        let (store, repository, vehicle) = setup(10000).await;

        let other_owner = NewRefuel {
            owner_id: Uuid::new_v4(),
            ..new_refuel(&vehicle, 10400, "Posto Ale")
        };
        let result = repository.create(other_owner).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        let result = repository.create(new_refuel(&vehicle, 10000, "Posto Ale")).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let data = store.read().await;
        assert!(data.stations.is_empty());
        assert!(data.refuels.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_keep_odometer_increasing() {
        let (store, repository, vehicle) = setup(10000).await;
        let repository = std::sync::Arc::new(repository);

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repository = repository.clone();
                let refuel = new_refuel(&vehicle, 10400, &format!("Posto {}", i));
                tokio::spawn(async move { repository.create(refuel).await })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }

        // solo uno puede superar el mínimo; los rechazados no crean estación
        assert_eq!(accepted, 1);
        let data = store.read().await;
        assert_eq!(data.refuels.len(), 1);
        assert_eq!(data.stations.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_vehicle_is_scoped_and_sorted() {
        let store = MemoryStore::new();
        let vehicles = VehicleRepository::new(store.clone());
        let repository = RefuelRepository::new(store);
        let owner = Uuid::new_v4();

        let gol = vehicles
            .create(owner, "Gol".to_string(), "GOL0001".to_string(), 10000)
            .await
            .unwrap();
        let uno = vehicles
            .create(owner, "Uno".to_string(), "UNO0001".to_string(), 0)
            .await
            .unwrap();

        // fechas crecientes con el odómetro, como se registran en la práctica
        for odometer in [10400, 10800, 11200] {
            repository.create(new_refuel(&gol, odometer, "Posto A")).await.unwrap();
        }
        repository.create(new_refuel(&uno, 300, "Posto A")).await.unwrap();

        let refuels = repository.find_by_vehicle(gol.id, owner).await.unwrap();
        let odometers: Vec<i64> = refuels.iter().map(|r| r.current_odometer).collect();
        assert_eq!(odometers, vec![10400, 10800, 11200]);

        assert!(repository
            .find_by_vehicle(gol.id, Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_find_and_delete_check_owner() {
        let (_store, repository, vehicle) = setup(10000).await;
        let owner = vehicle.owner_id;
        let refuel = repository
            .create(new_refuel(&vehicle, 10400, "Posto A"))
            .await
            .unwrap();

        assert_eq!(repository.find_owned(refuel.id, owner).await.unwrap(), refuel);
        let result = repository.find_owned(refuel.id, Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        let result = repository.delete(refuel.id, Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        let deleted = repository.delete(refuel.id, owner).await.unwrap();
        assert_eq!(deleted.id, refuel.id);
        let missing = repository.find_owned(refuel.id, owner).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
