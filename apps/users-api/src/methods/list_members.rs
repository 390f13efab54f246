use axum::{
    extract::{Path, State},
    Json,
};
use users_lib::{MemberScope, PageRequest, ScopeKind};

use crate::authn::BearerToken;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{require_id, ClientResponse, PaginatedResponse};
use crate::methods::routes::{
    CHANNEL_MEMBERS_PATH, DOMAIN_MEMBERS_PATH, GROUP_MEMBERS_PATH, THING_MEMBERS_PATH,
};
use crate::query::MembersQuery;
use crate::state::AppState;

/// Lists the users related to `scope_id` of kind `kind` within a domain.
/// Every member route funnels through here.
pub async fn list_members(
    state: &AppState,
    token: &str,
    domain_id: &str,
    kind: ScopeKind,
    scope_id: &str,
    page: PageRequest,
) -> Result<Json<PaginatedResponse<ClientResponse>>, ApiError> {
    let session = state.authenticate(token).await?;
    let domain_id = require_id(domain_id)?;
    let scope = MemberScope::new(kind, require_id(scope_id)?);

    state
        .users
        .list_members(&session.with_domain(&domain_id), scope, page)
        .await
        .map(|page| Json(PaginatedResponse::from(page)))
        .map_err(|e| handle_service_error(e, &state.env, "list_members"))
}

#[utoipa::path(
    get,
    path = GROUP_MEMBERS_PATH,
    tag = "members",
    params(
        ("domain_id" = String, Path, description = "Domain ID"),
        ("group_id" = String, Path, description = "Group ID"),
    ),
    responses(
        (status = 200, description = "Members of the group", body = PaginatedResponse<ClientResponse>),
        (status = 400, description = "Invalid query or missing id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_group_members(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path((domain_id, group_id)): Path<(String, String)>,
    MembersQuery(page): MembersQuery,
) -> Result<Json<PaginatedResponse<ClientResponse>>, ApiError> {
    list_members(&state, &token, &domain_id, ScopeKind::Groups, &group_id, page).await
}

#[utoipa::path(
    get,
    path = CHANNEL_MEMBERS_PATH,
    tag = "members",
    params(
        ("domain_id" = String, Path, description = "Domain ID"),
        ("channel_id" = String, Path, description = "Channel ID"),
    ),
    responses(
        (status = 200, description = "Members of the channel", body = PaginatedResponse<ClientResponse>),
        (status = 400, description = "Invalid query or missing id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_channel_members(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path((domain_id, channel_id)): Path<(String, String)>,
    MembersQuery(page): MembersQuery,
) -> Result<Json<PaginatedResponse<ClientResponse>>, ApiError> {
    list_members(&state, &token, &domain_id, ScopeKind::Channels, &channel_id, page).await
}

#[utoipa::path(
    get,
    path = THING_MEMBERS_PATH,
    tag = "members",
    params(
        ("domain_id" = String, Path, description = "Domain ID"),
        ("thing_id" = String, Path, description = "Thing ID"),
    ),
    responses(
        (status = 200, description = "Members of the thing", body = PaginatedResponse<ClientResponse>),
        (status = 400, description = "Invalid query or missing id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_thing_members(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path((domain_id, thing_id)): Path<(String, String)>,
    MembersQuery(page): MembersQuery,
) -> Result<Json<PaginatedResponse<ClientResponse>>, ApiError> {
    list_members(&state, &token, &domain_id, ScopeKind::Things, &thing_id, page).await
}

#[utoipa::path(
    get,
    path = DOMAIN_MEMBERS_PATH,
    tag = "members",
    params(
        ("domain_id" = String, Path, description = "Domain ID"),
    ),
    responses(
        (status = 200, description = "Members of the domain", body = PaginatedResponse<ClientResponse>),
        (status = 400, description = "Invalid query or missing id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_domain_members(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(domain_id): Path<String>,
    MembersQuery(page): MembersQuery,
) -> Result<Json<PaginatedResponse<ClientResponse>>, ApiError> {
    list_members(&state, &token, &domain_id, ScopeKind::Domains, &domain_id, page).await
}
