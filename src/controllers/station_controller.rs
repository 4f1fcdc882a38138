use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::station_dto::{RenameStationRequest, RenameStationResponse, StationResponse};
use crate::repositories::{MemoryStore, StationRepository};
use crate::utils::errors::AppResult;

pub struct StationController {
    repository: StationRepository,
}

impl StationController {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            repository: StationRepository::new(store),
        }
    }

    pub async fn get_by_id(&self, id: Uuid, owner_id: Uuid) -> AppResult<StationResponse> {
        Ok(self.repository.find_owned(id, owner_id).await?.into())
    }

    pub async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<StationResponse>> {
        let stations = self.repository.find_by_owner(owner_id).await?;
        Ok(stations.into_iter().map(StationResponse::from).collect())
    }

    /// Renombra la estación; el nuevo nombre se propaga a sus repostajes
    pub async fn rename(
        &self,
        id: Uuid,
        owner_id: Uuid,
        request: RenameStationRequest,
    ) -> AppResult<ApiResponse<RenameStationResponse>> {
        request.validate()?;

        let (station, updated_refuels) = self.repository.rename(id, owner_id, &request.name).await?;

        Ok(ApiResponse::success_with_message(
            RenameStationResponse {
                station: station.into(),
                updated_refuels,
            },
            "Estación actualizada exitosamente".to_string(),
        ))
    }
}
