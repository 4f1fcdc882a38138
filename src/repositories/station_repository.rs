use tracing::info;
use uuid::Uuid;

use super::memory_store::MemoryStore;
use crate::models::FuelStation;
use crate::utils::errors::{bad_request_error, forbidden_error, not_found_error, AppError};
use crate::utils::validation::normalize_station_name;

pub struct StationRepository {
    store: MemoryStore,
}

impl StationRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Estación del usuario; falla si pertenece a otro
    pub async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<FuelStation, AppError> {
        let data = self.store.read().await;

        let station = data
            .stations
            .get(&id)
            .ok_or_else(|| not_found_error("Station", &id.to_string()))?;

        if station.owner_id != owner_id {
            return Err(forbidden_error("access station", "it belongs to another user"));
        }

        Ok(station.clone())
    }

    /// Estaciones del usuario ordenadas por nombre
    pub async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<FuelStation>, AppError> {
        let data = self.store.read().await;
        let mut stations: Vec<FuelStation> = data
            .stations
            .values()
            .filter(|s| s.owner_id == owner_id)
            .cloned()
            .collect();
        stations.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(stations)
    }

    /// Renombra la estación y propaga el nuevo nombre a todos los repostajes
    /// que la referencian. Devuelve la estación y el número de repostajes tocados.
    pub async fn rename(
        &self,
        id: Uuid,
        owner_id: Uuid,
        new_name: &str,
    ) -> Result<(FuelStation, usize), AppError> {
        let new_name = normalize_station_name(new_name)
            .ok_or_else(|| bad_request_error("Station name must not be empty"))?;

        let mut data = self.store.write().await;

        let station = data
            .stations
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Station", &id.to_string()))?;

        if station.owner_id != owner_id {
            return Err(forbidden_error("rename station", "it belongs to another user"));
        }

        station.name = new_name.clone();
        let station = station.clone();

        let mut updated = 0;
        for refuel in data
            .refuels
            .values_mut()
            .filter(|r| r.station_id == id && r.owner_id == owner_id)
        {
            refuel.station_name = new_name.clone();
            updated += 1;
        }

        info!("✏️ Estación {} renombrada a '{}' ({} repostajes)", id, new_name, updated);
        Ok((station, updated))
    }
}
