//! Almacenamiento en memoria
//!
//! Sustituye al pool de base de datos: un único `RwLock` protege vehículos,
//! estaciones y repostajes, de forma que las operaciones en cascada
//! (eliminar vehículo, renombrar estación) se aplican en una sola sección
//! de escritura.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;
use uuid::Uuid;

use crate::models::{FuelStation, RefuelEvent, Vehicle};

#[derive(Debug, Default)]
pub struct StoreData {
    pub vehicles: HashMap<Uuid, Vehicle>,
    pub stations: HashMap<Uuid, FuelStation>,
    pub refuels: HashMap<Uuid, RefuelEvent>,
}

impl StoreData {
    /// Indica si el usuario ya tiene otro vehículo con esa matrícula
    pub fn plate_taken(&self, owner_id: Uuid, plate: &str, except: Option<Uuid>) -> bool {
        self.vehicles
            .values()
            .any(|v| v.belongs_to(owner_id) && v.plate == plate && Some(v.id) != except)
    }

    /// Devuelve la estación del usuario con ese nombre exacto, creándola si
    /// todavía no existe. `name` debe llegar ya recortado.
    pub fn resolve_station(&mut self, owner_id: Uuid, name: &str) -> FuelStation {
        if let Some(existing) = self
            .stations
            .values()
            .find(|s| s.owner_id == owner_id && s.name == name)
        {
            return existing.clone();
        }

        let station = FuelStation::new(owner_id, name.to_string());
        self.stations.insert(station.id, station.clone());
        info!("⛽ Nueva estación '{}' para el usuario {}", station.name, owner_id);

        station
    }
}

/// Handle clonable al almacenamiento compartido
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.inner.write().await
    }
}
