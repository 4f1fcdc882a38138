use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::FuelStation;

// Request para renombrar una estación
#[derive(Debug, Deserialize, Validate)]
pub struct RenameStationRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

// Response de estación
#[derive(Debug, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<FuelStation> for StationResponse {
    fn from(station: FuelStation) -> Self {
        Self {
            id: station.id,
            name: station.name,
            created_at: station.created_at,
        }
    }
}

// Response del renombrado con la cascada aplicada
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameStationResponse {
    pub station: StationResponse,
    pub updated_refuels: usize,
}
