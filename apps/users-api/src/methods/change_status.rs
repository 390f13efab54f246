use axum::{
    extract::{Path, State},
    Json,
};

use crate::authn::BearerToken;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{require_id, ClientResponse};
use crate::methods::routes::{USERS_DISABLE_PATH, USERS_ENABLE_PATH};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = USERS_ENABLE_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User enabled", body = ClientResponse),
        (status = 400, description = "Missing id or user already enabled"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to enable this user"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn enable_client(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
) -> Result<Json<ClientResponse>, ApiError> {
    let session = state.authenticate(&token).await?;
    let id = require_id(&id)?;

    state
        .users
        .enable_client(&session, &id)
        .await
        .map(|client| Json(ClientResponse::from(client)))
        .map_err(|e| handle_service_error(e, &state.env, "enable_client"))
}

#[utoipa::path(
    post,
    path = USERS_DISABLE_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User disabled", body = ClientResponse),
        (status = 400, description = "Missing id or user already disabled"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to disable this user"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn disable_client(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
) -> Result<Json<ClientResponse>, ApiError> {
    let session = state.authenticate(&token).await?;
    let id = require_id(&id)?;

    state
        .users
        .disable_client(&session, &id)
        .await
        .map(|client| Json(ClientResponse::from(client)))
        .map_err(|e| handle_service_error(e, &state.env, "disable_client"))
}
