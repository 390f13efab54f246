use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::authn::BearerToken;
use crate::decode::JsonBody;
use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{ClientResponse, RegisterClientRequest};
use crate::methods::routes::{USERS_PATH, USERS_REGISTER_PATH};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = USERS_REGISTER_PATH,
    tag = "users",
    request_body = RegisterClientRequest,
    responses(
        (status = 201, description = "User registered", body = ClientResponse),
        (status = 400, description = "Malformed body or invalid client"),
        (status = 401, description = "Missing or invalid token"),
        (status = 409, description = "Identity already taken"),
        (status = 415, description = "Body is not JSON"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn register_client(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    JsonBody(req): JsonBody<RegisterClientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.authenticate(&token).await?;
    req.validate(&state.config.password_policy)?;

    let client = state
        .users
        .register_client(&session, req.into_client(), state.config.self_register)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "register_client"))?;

    let location = format!("{}/{}", USERS_PATH, client.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(ClientResponse::from(client)),
    ))
}
