//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle. Un vehículo es el agregado dueño
//! de sus repostajes: al eliminarlo se eliminan también todos sus refuels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vehículo registrado por un usuario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub plate: String,
    /// Lectura del odómetro a partir de la cual se empieza a registrar
    pub initial_odometer: i64,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(owner_id: Uuid, name: String, plate: String, initial_odometer: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            plate,
            initial_odometer,
            created_at: Utc::now(),
        }
    }

    pub fn belongs_to(&self, owner_id: Uuid) -> bool {
        self.owner_id == owner_id
    }
}
