use axum::{extract::State, Json};

use crate::authn::BearerToken;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{ClientResponse, PaginatedResponse};
use crate::methods::routes::{USERS_PATH, USERS_SEARCH_PATH};
use crate::query::{validate_search, ListQuery};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USERS_PATH,
    tag = "users",
    params(
        ("offset" = Option<u64>, Query, description = "Number of items to skip"),
        ("limit" = Option<u64>, Query, description = "Page size, at most 100"),
        ("name" = Option<String>, Query, description = "Filter by name"),
        ("status" = Option<String>, Query, description = "enabled, disabled or all"),
        ("tag" = Option<String>, Query, description = "Comma-separated tags"),
        ("metadata" = Option<String>, Query, description = "JSON object to match"),
        ("permission" = Option<String>, Query, description = "Required permission"),
        ("list_perms" = Option<bool>, Query, description = "Include permissions"),
        ("identity" = Option<String>, Query, description = "Filter by identity"),
        ("order" = Option<String>, Query, description = "Order field"),
        ("dir" = Option<String>, Query, description = "asc or desc"),
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedResponse<ClientResponse>),
        (status = 400, description = "Invalid or repeated query parameter"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_clients(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    ListQuery(page): ListQuery,
) -> Result<Json<PaginatedResponse<ClientResponse>>, ApiError> {
    let session = state.authenticate(&token).await?;

    state
        .users
        .list_clients(&session, page)
        .await
        .map(|page| Json(PaginatedResponse::from(page)))
        .map_err(|e| handle_service_error(e, &state.env, "list_clients"))
}

#[utoipa::path(
    get,
    path = USERS_SEARCH_PATH,
    tag = "users",
    params(
        ("name" = Option<String>, Query, description = "Name to search, at least 3 characters"),
        ("id" = Option<String>, Query, description = "User ID to search"),
        ("offset" = Option<u64>, Query, description = "Number of items to skip"),
        ("limit" = Option<u64>, Query, description = "Page size, at most 100"),
        ("order" = Option<String>, Query, description = "Order field"),
        ("dir" = Option<String>, Query, description = "asc or desc"),
    ),
    responses(
        (status = 200, description = "Matching users", body = PaginatedResponse<ClientResponse>),
        (status = 400, description = "Empty, short or malformed search query"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn search_users(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    ListQuery(page): ListQuery,
) -> Result<Json<PaginatedResponse<ClientResponse>>, ApiError> {
    let session = state.authenticate(&token).await?;
    validate_search(&page)?;

    state
        .users
        .search_users(&session, page)
        .await
        .map(|page| Json(PaginatedResponse::from(page)))
        .map_err(|e| handle_service_error(e, &state.env, "search_users"))
}
