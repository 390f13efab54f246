use axum::{extract::State, Json};

use crate::authn::BearerToken;
use crate::decode::JsonBody;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{ClientResponse, UpdateClientSecretRequest};
use crate::methods::routes::USERS_SECRET_PATH;
use crate::state::AppState;

#[utoipa::path(
    patch,
    path = USERS_SECRET_PATH,
    tag = "users",
    request_body = UpdateClientSecretRequest,
    responses(
        (status = 200, description = "Secret changed", body = ClientResponse),
        (status = 400, description = "Missing or weak password"),
        (status = 401, description = "Missing token or wrong old secret"),
        (status = 415, description = "Body is not JSON"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_client_secret(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    JsonBody(req): JsonBody<UpdateClientSecretRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    let session = state.authenticate(&token).await?;
    req.validate(&state.config.password_policy)?;

    state
        .users
        .update_client_secret(&session, &req.old_secret, &req.new_secret)
        .await
        .map(|client| Json(ClientResponse::from(client)))
        .map_err(|e| handle_service_error(e, &state.env, "update_client_secret"))
}
