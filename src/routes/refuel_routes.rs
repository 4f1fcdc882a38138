use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::refuel_controller::RefuelController;
use crate::dto::common_dto::ApiResponse;
use crate::middleware::OwnerId;
use crate::models::RefuelEvent;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_refuel_router() -> Router<AppState> {
    Router::new().route("/:id", get(get_refuel).delete(delete_refuel))
}

async fn get_refuel(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<Json<RefuelEvent>, AppError> {
    let controller = RefuelController::new(state.store.clone());
    let refuel = controller.get_by_id(owner_id, id).await?;
    Ok(Json(refuel))
}

async fn delete_refuel(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RefuelEvent>>, AppError> {
    let controller = RefuelController::new(state.store.clone());
    let refuel = controller.delete(owner_id, id).await?;
    Ok(Json(ApiResponse::success_with_message(
        refuel,
        "Repostaje eliminado exitosamente".to_string(),
    )))
}
