use tracing::info;
use uuid::Uuid;

use super::memory_store::MemoryStore;
use crate::models::Vehicle;
use crate::utils::errors::{bad_request_error, forbidden_error, not_found_error, AppError};

/// Cambios parciales de un vehículo
#[derive(Debug, Default, Clone)]
pub struct VehicleChanges {
    pub name: Option<String>,
    pub plate: Option<String>,
    pub initial_odometer: Option<i64>,
}

pub struct VehicleRepository {
    store: MemoryStore,
}

impl VehicleRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        name: String,
        plate: String,
        initial_odometer: i64,
    ) -> Result<Vehicle, AppError> {
        let mut data = self.store.write().await;

        if data.plate_taken(owner_id, &plate, None) {
            return Err(plate_conflict(&plate));
        }

        let vehicle = Vehicle::new(owner_id, name, plate, initial_odometer);
        data.vehicles.insert(vehicle.id, vehicle.clone());

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let data = self.store.read().await;
        Ok(data.vehicles.get(&id).cloned())
    }

    /// Vehículos del usuario, los más recientes primero
    pub async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let data = self.store.read().await;
        let mut vehicles: Vec<Vehicle> = data
            .vehicles
            .values()
            .filter(|v| v.belongs_to(owner_id))
            .cloned()
            .collect();
        vehicles.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        changes: VehicleChanges,
    ) -> Result<Vehicle, AppError> {
        let mut data = self.store.write().await;

        let vehicle = data
            .vehicles
            .get(&id)
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        if !vehicle.belongs_to(owner_id) {
            return Err(forbidden_error("update vehicle", "it belongs to another user"));
        }

        if let Some(plate) = &changes.plate {
            if data.plate_taken(owner_id, plate, Some(id)) {
                return Err(plate_conflict(plate));
            }
        }

        // los repostajes ya registrados deben seguir por encima del odómetro inicial
        if let Some(initial_odometer) = changes.initial_odometer {
            if let Some(lowest) = data
                .refuels
                .values()
                .filter(|r| r.vehicle_id == id)
                .map(|r| r.current_odometer)
                .min()
            {
                if lowest <= initial_odometer {
                    return Err(bad_request_error(&format!(
                        "El odómetro inicial debe ser menor que {} km, el primer repostaje registrado",
                        lowest
                    )));
                }
            }
        }

        let vehicle = data
            .vehicles
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        if let Some(name) = changes.name {
            vehicle.name = name;
        }
        if let Some(plate) = changes.plate {
            vehicle.plate = plate;
        }
        if let Some(initial_odometer) = changes.initial_odometer {
            vehicle.initial_odometer = initial_odometer;
        }

        Ok(vehicle.clone())
    }

    /// Elimina el vehículo y todos sus repostajes; devuelve cuántos repostajes se eliminaron
    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<usize, AppError> {
        let mut data = self.store.write().await;

        let vehicle = data
            .vehicles
            .get(&id)
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        if !vehicle.belongs_to(owner_id) {
            return Err(forbidden_error("delete vehicle", "it belongs to another user"));
        }

        data.vehicles.remove(&id);

        let before = data.refuels.len();
        data.refuels
            .retain(|_, refuel| !(refuel.vehicle_id == id && refuel.owner_id == owner_id));
        let removed = before - data.refuels.len();

        info!("🗑️ Vehículo {} eliminado junto con {} repostajes", id, removed);
        Ok(removed)
    }
}

fn plate_conflict(plate: &str) -> AppError {
    AppError::Conflict(format!("Ya existe un vehículo con la matrícula {}", plate))
}
