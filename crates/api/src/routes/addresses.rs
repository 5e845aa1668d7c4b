//! Address CRUD endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};

use consumers_core::{AddressId, ConsumerId};

use crate::commands::address::{AddressResponse, CreateAddressCommand, UpdateAddressCommand};
use crate::error::AppError;
use crate::services::AddressService;
use crate::state::AppState;

/// `POST /api/addresses`
///
/// Creates an address for an existing consumer and returns 201 with a
/// Location header.
pub async fn create(
    State(state): State<AppState>,
    Json(cmd): Json<CreateAddressCommand>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<AddressResponse>), AppError> {
    let service = AddressService::new(state.addresses(), state.consumers());
    let address = service.create(&cmd).await?;

    let location = format!("/api/addresses/{}", address.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(address),
    ))
}

/// `GET /api/addresses/{id}`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<AddressId>,
) -> Result<Json<AddressResponse>, AppError> {
    let service = AddressService::new(state.addresses(), state.consumers());
    let address = service.get(id).await?;
    Ok(Json(address))
}

/// `GET /api/addresses/consumer/{consumer_id}`
///
/// Lists a consumer's addresses, oldest first. An unknown consumer
/// yields an empty list.
pub async fn list_by_consumer(
    State(state): State<AppState>,
    Path(consumer_id): Path<ConsumerId>,
) -> Result<Json<Vec<AddressResponse>>, AppError> {
    let service = AddressService::new(state.addresses(), state.consumers());
    let addresses = service.list_by_consumer(consumer_id).await?;
    Ok(Json(addresses))
}

/// `PUT /api/addresses`
///
/// Updates the address identified by the id in the request body.
pub async fn update(
    State(state): State<AppState>,
    Json(cmd): Json<UpdateAddressCommand>,
) -> Result<Json<AddressResponse>, AppError> {
    let service = AddressService::new(state.addresses(), state.consumers());
    let address = service.update(&cmd).await?;
    Ok(Json(address))
}

/// `DELETE /api/addresses/{id}`
///
/// Returns 204 on success.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<AddressId>,
) -> Result<StatusCode, AppError> {
    let service = AddressService::new(state.addresses(), state.consumers());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
