//! Consumer CRUD endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};

use consumers_core::ConsumerId;

use crate::commands::consumer::{ConsumerResponse, CreateConsumerCommand, UpdateConsumerCommand};
use crate::error::AppError;
use crate::services::ConsumerService;
use crate::state::AppState;

/// `POST /api/consumers`
///
/// Creates a consumer and returns 201 with a Location header.
pub async fn create(
    State(state): State<AppState>,
    Json(cmd): Json<CreateConsumerCommand>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ConsumerResponse>), AppError> {
    let service = ConsumerService::new(state.consumers());
    let consumer = service.create(&cmd).await?;

    let location = format!("/api/consumers/{}", consumer.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(consumer),
    ))
}

/// `GET /api/consumers/{id}`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ConsumerId>,
) -> Result<Json<ConsumerResponse>, AppError> {
    let service = ConsumerService::new(state.consumers());
    let consumer = service.get(id).await?;
    Ok(Json(consumer))
}

/// `PUT /api/consumers/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ConsumerId>,
    Json(cmd): Json<UpdateConsumerCommand>,
) -> Result<Json<ConsumerResponse>, AppError> {
    let service = ConsumerService::new(state.consumers());
    let consumer = service.update(id, &cmd).await?;
    Ok(Json(consumer))
}

/// `DELETE /api/consumers/{id}`
///
/// Returns 204 on success. Addresses owned by the consumer are removed
/// by the database cascade.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<ConsumerId>,
) -> Result<StatusCode, AppError> {
    let service = ConsumerService::new(state.consumers());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
