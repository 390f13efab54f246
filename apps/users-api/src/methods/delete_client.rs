use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::authn::BearerToken;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::require_id;
use crate::methods::routes::USERS_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    delete,
    path = USERS_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Missing user id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not allowed to delete this user"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_client(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let session = state.authenticate(&token).await?;
    let id = require_id(&id)?;

    state
        .users
        .delete_client(&session, &id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_client"))
}
