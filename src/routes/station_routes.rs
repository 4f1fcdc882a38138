use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::station_controller::StationController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::station_dto::{RenameStationRequest, RenameStationResponse, StationResponse};
use crate::middleware::OwnerId;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_station_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stations))
        .route("/:id", get(get_station).put(rename_station))
}

async fn get_station(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<Json<StationResponse>, AppError> {
    let controller = StationController::new(state.store.clone());
    let response = controller.get_by_id(id, owner_id).await?;
    Ok(Json(response))
}

async fn list_stations(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
) -> Result<Json<Vec<StationResponse>>, AppError> {
    let controller = StationController::new(state.store.clone());
    let response = controller.list_by_owner(owner_id).await?;
    Ok(Json(response))
}

async fn rename_station(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
    Json(request): Json<RenameStationRequest>,
) -> Result<Json<ApiResponse<RenameStationResponse>>, AppError> {
    let controller = StationController::new(state.store.clone());
    let response = controller.rename(id, owner_id, request).await?;
    Ok(Json(response))
}
