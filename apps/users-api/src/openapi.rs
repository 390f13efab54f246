use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::error::ErrorResponse;
use crate::methods::entities::{
    AssignGroupsRequest, AssignUsersRequest, ClientResponse, CredentialsRequest,
    IssueTokenRequest, MessageResponse, PaginatedResponse, PasswordResetRequest,
    RefreshTokenRequest, RegisterClientRequest, ResetSecretRequest, TokenResponse,
    UpdateClientIdentityRequest, UpdateClientRequest, UpdateClientRoleRequest,
    UpdateClientSecretRequest, UpdateClientTagsRequest,
};
use crate::methods::{
    change_status, delete_client, group_relations, health_check, list_clients, list_members,
    password_reset, register_client, tokens, update_client, update_client_secret, view_client,
};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        register_client::register_client,
        view_client::view_client,
        view_client::view_profile,
        list_clients::list_clients,
        list_clients::search_users,
        update_client::update_client,
        update_client::update_client_tags,
        update_client::update_client_identity,
        update_client::update_client_role,
        update_client_secret::update_client_secret,
        change_status::enable_client,
        change_status::disable_client,
        delete_client::delete_client,
        tokens::issue_token,
        tokens::refresh_token,
        password_reset::password_reset_request,
        password_reset::password_reset,
        list_members::list_group_members,
        list_members::list_channel_members,
        list_members::list_thing_members,
        list_members::list_domain_members,
        group_relations::assign_users,
        group_relations::unassign_users,
        group_relations::assign_groups,
        group_relations::unassign_groups,
        health_check::health_check,
    ),
    components(schemas(
        RegisterClientRequest, CredentialsRequest, UpdateClientRequest, UpdateClientTagsRequest,
        UpdateClientIdentityRequest, UpdateClientRoleRequest, UpdateClientSecretRequest,
        ClientResponse, PaginatedResponse<ClientResponse>,
        IssueTokenRequest, RefreshTokenRequest, TokenResponse,
        PasswordResetRequest, ResetSecretRequest, MessageResponse,
        AssignUsersRequest, AssignGroupsRequest, ErrorResponse
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "tokens", description = "Token issuance"),
        (name = "password", description = "Password reset flow"),
        (name = "members", description = "Users related to groups, channels, things and domains"),
        (name = "groups", description = "Group membership changes"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
