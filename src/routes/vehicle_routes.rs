use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::refuel_controller::RefuelController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::refuel_dto::{CreateRefuelRequest, RefuelListQuery};
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, DeleteVehicleResponse, UpdateVehicleRequest, VehicleResponse,
};
use crate::middleware::OwnerId;
use crate::models::{EnrichedRefuelEvent, RefuelEvent, VehicleStats};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/:id/refuels", get(list_refuels).post(create_refuel))
        .route("/:id/stats", get(vehicle_stats))
}

async fn create_vehicle(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.create(owner_id, request).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.get_by_id(id, owner_id).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.list_by_owner(owner_id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.update(id, owner_id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteVehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.delete(id, owner_id).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Vehículo eliminado exitosamente".to_string(),
    )))
}

async fn create_refuel(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateRefuelRequest>,
) -> Result<Json<ApiResponse<RefuelEvent>>, AppError> {
    let controller = RefuelController::new(state.store.clone());
    let response = controller.create(owner_id, id, request).await?;
    Ok(Json(response))
}

async fn list_refuels(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
    Query(query): Query<RefuelListQuery>,
) -> Result<Json<Vec<EnrichedRefuelEvent>>, AppError> {
    let controller = RefuelController::new(state.store.clone());
    let response = controller
        .list(owner_id, id, query.order.unwrap_or_default())
        .await?;
    Ok(Json(response))
}

async fn vehicle_stats(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleStats>, AppError> {
    let controller = RefuelController::new(state.store.clone());
    let response = controller.stats(owner_id, id).await?;
    Ok(Json(response))
}
