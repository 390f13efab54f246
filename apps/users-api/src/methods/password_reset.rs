use axum::{
    extract::State,
    http::{header::REFERER, HeaderMap, StatusCode},
    Json,
};

use crate::decode::JsonBody;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{MessageResponse, PasswordResetRequest, ResetSecretRequest};
use crate::methods::routes::{PASSWORD_RESET_PATH, PASSWORD_RESET_REQUEST_PATH};
use crate::state::AppState;

const RESET_LINK_SENT: &str = "Email with reset link is sent";

#[utoipa::path(
    post,
    path = PASSWORD_RESET_REQUEST_PATH,
    tag = "password",
    request_body = PasswordResetRequest,
    params(
        ("Referer" = String, Header, description = "Host the reset link points to")
    ),
    responses(
        (status = 201, description = "Reset link sent", body = MessageResponse),
        (status = 400, description = "Missing email or referer"),
        (status = 404, description = "No user with this email"),
        (status = 415, description = "Body is not JSON"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn password_reset_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(mut req): JsonBody<PasswordResetRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    req.host = headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    req.validate()?;

    state
        .users
        .generate_reset_token(&req.email, &req.host)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "password_reset_request"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            msg: RESET_LINK_SENT.to_string(),
        }),
    ))
}

/// Authenticated by the reset token carried in the body.
#[utoipa::path(
    put,
    path = PASSWORD_RESET_PATH,
    tag = "password",
    request_body = ResetSecretRequest,
    responses(
        (status = 201, description = "Password reset"),
        (status = 400, description = "Missing, mismatched or weak password"),
        (status = 401, description = "Missing or invalid reset token"),
        (status = 415, description = "Body is not JSON"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn password_reset(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ResetSecretRequest>,
) -> Result<StatusCode, ApiError> {
    let session = state.authenticate(&req.token).await?;
    req.validate(&state.config.password_policy)?;

    state
        .users
        .reset_secret(&session, &req.password)
        .await
        .map(|_| StatusCode::CREATED)
        .map_err(|e| handle_service_error(e, &state.env, "password_reset"))
}
