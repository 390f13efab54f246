use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use users_lib::{MemberKind, Session};

use crate::authn::BearerToken;
use crate::constants::PARENT_GROUP_RELATION;
use crate::decode::RelationBody;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{require_id, AssignGroupsRequest, AssignUsersRequest};
use crate::methods::routes::{
    GROUP_GROUPS_ASSIGN_PATH, GROUP_GROUPS_UNASSIGN_PATH, GROUP_USERS_ASSIGN_PATH,
    GROUP_USERS_UNASSIGN_PATH,
};
use crate::state::AppState;

#[derive(Debug, Clone, Copy)]
enum Change {
    Assign,
    Unassign,
}

struct Relation<'a> {
    name: &'a str,
    member_kind: MemberKind,
    member_ids: Vec<String>,
}

async fn apply(
    state: &AppState,
    session: Session,
    domain_id: &str,
    group_id: &str,
    relation: Relation<'_>,
    change: Change,
) -> Result<StatusCode, ApiError> {
    let session = session.with_domain(domain_id);
    let groups = &state.groups;
    let (result, status, operation) = match change {
        Change::Assign => (
            groups
                .assign(&session, group_id, relation.name, relation.member_kind, relation.member_ids)
                .await,
            StatusCode::CREATED,
            "assign",
        ),
        Change::Unassign => (
            groups
                .unassign(&session, group_id, relation.name, relation.member_kind, relation.member_ids)
                .await,
            StatusCode::NO_CONTENT,
            "unassign",
        ),
    };

    result
        .map(|_| status)
        .map_err(|e| handle_service_error(e, &state.env, operation))
}

async fn change_users(
    state: AppState,
    token: String,
    (domain_id, group_id): (String, String),
    req: AssignUsersRequest,
    change: Change,
) -> Result<StatusCode, ApiError> {
    let session = state.authenticate(&token).await?;
    let domain_id = require_id(&domain_id)?;
    let group_id = require_id(&group_id)?;
    req.validate()?;

    let AssignUsersRequest { relation: name, user_ids } = req;
    let relation = Relation {
        name: &name,
        member_kind: MemberKind::Users,
        member_ids: user_ids,
    };
    apply(&state, session, &domain_id, &group_id, relation, change).await
}

async fn change_groups(
    state: AppState,
    token: String,
    (domain_id, group_id): (String, String),
    req: AssignGroupsRequest,
    change: Change,
) -> Result<StatusCode, ApiError> {
    let session = state.authenticate(&token).await?;
    let domain_id = require_id(&domain_id)?;
    let group_id = require_id(&group_id)?;
    req.validate()?;

    let relation = Relation {
        name: PARENT_GROUP_RELATION,
        member_kind: MemberKind::Groups,
        member_ids: req.group_ids,
    };
    apply(&state, session, &domain_id, &group_id, relation, change).await
}

#[utoipa::path(
    post,
    path = GROUP_USERS_ASSIGN_PATH,
    tag = "groups",
    params(
        ("domain_id" = String, Path, description = "Domain ID"),
        ("group_id" = String, Path, description = "Group ID"),
    ),
    request_body = AssignUsersRequest,
    responses(
        (status = 201, description = "Users assigned"),
        (status = 400, description = "Missing relation, ids or malformed body"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to change this group"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn assign_users(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(ids): Path<(String, String)>,
    RelationBody(req): RelationBody<AssignUsersRequest>,
) -> Result<StatusCode, ApiError> {
    change_users(state, token, ids, req, Change::Assign).await
}

#[utoipa::path(
    post,
    path = GROUP_USERS_UNASSIGN_PATH,
    tag = "groups",
    params(
        ("domain_id" = String, Path, description = "Domain ID"),
        ("group_id" = String, Path, description = "Group ID"),
    ),
    request_body = AssignUsersRequest,
    responses(
        (status = 204, description = "Users unassigned"),
        (status = 400, description = "Missing relation, ids or malformed body"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to change this group"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn unassign_users(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(ids): Path<(String, String)>,
    RelationBody(req): RelationBody<AssignUsersRequest>,
) -> Result<StatusCode, ApiError> {
    change_users(state, token, ids, req, Change::Unassign).await
}

#[utoipa::path(
    post,
    path = GROUP_GROUPS_ASSIGN_PATH,
    tag = "groups",
    params(
        ("domain_id" = String, Path, description = "Domain ID"),
        ("group_id" = String, Path, description = "Parent group ID"),
    ),
    request_body = AssignGroupsRequest,
    responses(
        (status = 201, description = "Groups assigned"),
        (status = 400, description = "Missing ids or malformed body"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to change this group"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn assign_groups(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(ids): Path<(String, String)>,
    RelationBody(req): RelationBody<AssignGroupsRequest>,
) -> Result<StatusCode, ApiError> {
    change_groups(state, token, ids, req, Change::Assign).await
}

#[utoipa::path(
    post,
    path = GROUP_GROUPS_UNASSIGN_PATH,
    tag = "groups",
    params(
        ("domain_id" = String, Path, description = "Domain ID"),
        ("group_id" = String, Path, description = "Parent group ID"),
    ),
    request_body = AssignGroupsRequest,
    responses(
        (status = 204, description = "Groups unassigned"),
        (status = 400, description = "Missing ids or malformed body"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to change this group"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn unassign_groups(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(ids): Path<(String, String)>,
    RelationBody(req): RelationBody<AssignGroupsRequest>,
) -> Result<StatusCode, ApiError> {
    change_groups(state, token, ids, req, Change::Unassign).await
}
