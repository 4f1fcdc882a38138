use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Vehicle;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 20))]
    pub plate: String,

    #[validate(range(min = 0))]
    pub initial_odometer: i64,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub plate: Option<String>,

    #[validate(range(min = 0))]
    pub initial_odometer: Option<i64>,
}

// Response de vehículo
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub plate: String,
    pub initial_odometer: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            owner_id: vehicle.owner_id,
            name: vehicle.name,
            plate: vehicle.plate,
            initial_odometer: vehicle.initial_odometer,
            created_at: vehicle.created_at,
        }
    }
}

// Response de eliminación con la cascada aplicada
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteVehicleResponse {
    pub id: Uuid,
    pub removed_refuels: usize,
}
