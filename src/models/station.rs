//! Modelo de FuelStation
//!
//! Las estaciones se deduplican por nombre exacto (recortado) por usuario.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FuelStation {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl FuelStation {
    pub fn new(owner_id: Uuid, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            created_at: Utc::now(),
        }
    }
}
