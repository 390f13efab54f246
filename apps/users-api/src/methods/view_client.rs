use axum::{
    extract::{Path, State},
    Json,
};

use crate::authn::BearerToken;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{require_id, ClientResponse};
use crate::methods::routes::{USERS_BY_ID_PATH, USERS_PROFILE_PATH};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USERS_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = ClientResponse),
        (status = 400, description = "Missing user id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to view this user"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn view_client(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
) -> Result<Json<ClientResponse>, ApiError> {
    let session = state.authenticate(&token).await?;
    let id = require_id(&id)?;

    state
        .users
        .view_client(&session, &id)
        .await
        .map(|client| Json(ClientResponse::from(client)))
        .map_err(|e| handle_service_error(e, &state.env, "view_client"))
}

#[utoipa::path(
    get,
    path = USERS_PROFILE_PATH,
    tag = "users",
    responses(
        (status = 200, description = "Profile of the caller", body = ClientResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn view_profile(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<ClientResponse>, ApiError> {
    let session = state.authenticate(&token).await?;

    state
        .users
        .view_profile(&session)
        .await
        .map(|client| Json(ClientResponse::from(client)))
        .map_err(|e| handle_service_error(e, &state.env, "view_profile"))
}
