use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, DeleteVehicleResponse, UpdateVehicleRequest, VehicleResponse,
};
use crate::models::Vehicle;
use crate::repositories::{MemoryStore, VehicleChanges, VehicleRepository};
use crate::utils::errors::{forbidden_error, validation_error, AppError, AppResult};
use crate::utils::validation::{normalize_plate, validate_not_empty};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            repository: VehicleRepository::new(store),
        }
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        validate_not_empty(&request.name)
            .map_err(|_| validation_error("name", "El nombre es requerido"))?;
        let name = request.name.trim().to_string();
        let plate = normalize_plate(&request.plate)
            .ok_or_else(|| validation_error("plate", "La matrícula es requerida"))?;

        let vehicle = self
            .repository
            .create(owner_id, name, plate, request.initial_odometer)
            .await?;
        info!("🚗 Vehículo {} creado ({})", vehicle.id, vehicle.plate);

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<VehicleResponse> {
        Ok(load_owned_vehicle(&self.repository, id, owner_id).await?.into())
    }

    pub async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.repository.find_by_owner(owner_id).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        let name = match request.name {
            Some(name) => {
                validate_not_empty(&name)
                    .map_err(|_| validation_error("name", "El nombre es requerido"))?;
                Some(name.trim().to_string())
            }
            None => None,
        };
        let plate = match request.plate {
            Some(plate) => Some(
                normalize_plate(&plate)
                    .ok_or_else(|| validation_error("plate", "La matrícula es requerida"))?,
            ),
            None => None,
        };

        let vehicle = self
            .repository
            .update(
                id,
                owner_id,
                VehicleChanges {
                    name,
                    plate,
                    initial_odometer: request.initial_odometer,
                },
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<DeleteVehicleResponse> {
        let removed_refuels = self.repository.delete(id, owner_id).await?;
        Ok(DeleteVehicleResponse { id, removed_refuels })
    }
}

/// Carga un vehículo comprobando que pertenece al usuario
pub(crate) async fn load_owned_vehicle(
    repository: &VehicleRepository,
    id: Uuid,
    owner_id: Uuid,
) -> AppResult<Vehicle> {
    let vehicle = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

    if !vehicle.belongs_to(owner_id) {
        return Err(forbidden_error(
            "access vehicle",
            "No tienes permiso para acceder a este vehículo",
        ));
    }

    Ok(vehicle)
}
