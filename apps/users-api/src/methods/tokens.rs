use axum::{extract::State, http::StatusCode, Json};

use crate::authn::BearerToken;
use crate::decode::JsonBody;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{IssueTokenRequest, RefreshTokenRequest, TokenResponse};
use crate::methods::routes::{TOKENS_ISSUE_PATH, TOKENS_REFRESH_PATH};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = TOKENS_ISSUE_PATH,
    tag = "tokens",
    request_body = IssueTokenRequest,
    responses(
        (status = 201, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Malformed body or missing field"),
        (status = 401, description = "Wrong credentials"),
        (status = 415, description = "Body is not JSON"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn issue_token(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<IssueTokenRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    req.validate()?;

    state
        .users
        .issue_token(&req.identity, &req.secret, &req.domain_id)
        .await
        .map(|token| (StatusCode::CREATED, Json(TokenResponse::from(token))))
        .map_err(|e| handle_service_error(e, &state.env, "issue_token"))
}

/// The bearer token is both the credential and the refresh token.
#[utoipa::path(
    post,
    path = TOKENS_REFRESH_PATH,
    tag = "tokens",
    request_body = RefreshTokenRequest,
    responses(
        (status = 201, description = "Token refreshed", body = TokenResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Missing or invalid refresh token"),
        (status = 415, description = "Body is not JSON"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    JsonBody(req): JsonBody<RefreshTokenRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let session = state.authenticate(&token).await?;

    state
        .users
        .refresh_token(&session, &token, &req.domain_id)
        .await
        .map(|token| (StatusCode::CREATED, Json(TokenResponse::from(token))))
        .map_err(|e| handle_service_error(e, &state.env, "refresh_token"))
}
