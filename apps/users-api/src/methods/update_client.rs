use axum::{
    extract::{Path, State},
    Json,
};

use crate::authn::BearerToken;
use crate::decode::JsonBody;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{
    ClientResponse, UpdateClientIdentityRequest, UpdateClientRequest, UpdateClientRoleRequest,
    UpdateClientTagsRequest,
};
use crate::methods::routes::{USERS_BY_ID_PATH, USERS_IDENTITY_PATH, USERS_ROLE_PATH, USERS_TAGS_PATH};
use crate::state::AppState;

#[utoipa::path(
    patch,
    path = USERS_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "User updated", body = ClientResponse),
        (status = 400, description = "Missing id or invalid body"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to update this user"),
        (status = 415, description = "Body is not JSON"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_client(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
    JsonBody(mut req): JsonBody<UpdateClientRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    req.id = id;
    let session = state.authenticate(&token).await?;
    req.validate()?;

    state
        .users
        .update_client(&session, req.into_client())
        .await
        .map(|client| Json(ClientResponse::from(client)))
        .map_err(|e| handle_service_error(e, &state.env, "update_client"))
}

#[utoipa::path(
    patch,
    path = USERS_TAGS_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateClientTagsRequest,
    responses(
        (status = 200, description = "Tags replaced", body = ClientResponse),
        (status = 400, description = "Missing id or invalid body"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to update this user"),
        (status = 415, description = "Body is not JSON"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_client_tags(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
    JsonBody(mut req): JsonBody<UpdateClientTagsRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    req.id = id;
    let session = state.authenticate(&token).await?;
    req.validate()?;

    state
        .users
        .update_client_tags(&session, req.into_client())
        .await
        .map(|client| Json(ClientResponse::from(client)))
        .map_err(|e| handle_service_error(e, &state.env, "update_client_tags"))
}

#[utoipa::path(
    patch,
    path = USERS_IDENTITY_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateClientIdentityRequest,
    responses(
        (status = 200, description = "Identity changed", body = ClientResponse),
        (status = 400, description = "Missing id or identity"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to update this user"),
        (status = 409, description = "Identity already taken"),
        (status = 415, description = "Body is not JSON"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_client_identity(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
    JsonBody(mut req): JsonBody<UpdateClientIdentityRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    req.id = id;
    let session = state.authenticate(&token).await?;
    req.validate()?;

    state
        .users
        .update_client_identity(&session, req.id.trim(), &req.identity)
        .await
        .map(|client| Json(ClientResponse::from(client)))
        .map_err(|e| handle_service_error(e, &state.env, "update_client_identity"))
}

#[utoipa::path(
    patch,
    path = USERS_ROLE_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateClientRoleRequest,
    responses(
        (status = 200, description = "Role changed", body = ClientResponse),
        (status = 400, description = "Missing id or invalid role"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to change roles"),
        (status = 415, description = "Body is not JSON"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_client_role(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
    JsonBody(mut req): JsonBody<UpdateClientRoleRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    req.id = id;
    let session = state.authenticate(&token).await?;
    let client = req.validate()?;

    state
        .users
        .update_client_role(&session, client)
        .await
        .map(|client| Json(ClientResponse::from(client)))
        .map_err(|e| handle_service_error(e, &state.env, "update_client_role"))
}
