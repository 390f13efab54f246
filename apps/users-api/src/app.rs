use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::methods::change_status::{disable_client, enable_client};
use crate::methods::delete_client::delete_client;
use crate::methods::group_relations::{assign_groups, assign_users, unassign_groups, unassign_users};
use crate::methods::health_check::health_check;
use crate::methods::list_clients::{list_clients, search_users};
use crate::methods::list_members::{
    list_channel_members, list_domain_members, list_group_members, list_thing_members,
};
use crate::methods::password_reset::{password_reset, password_reset_request};
use crate::methods::register_client::register_client;
use crate::methods::routes::{
    CHANNEL_MEMBERS_PATH, DOMAIN_MEMBERS_PATH, GROUP_GROUPS_ASSIGN_PATH,
    GROUP_GROUPS_UNASSIGN_PATH, GROUP_MEMBERS_PATH, GROUP_USERS_ASSIGN_PATH,
    GROUP_USERS_UNASSIGN_PATH, PASSWORD_RESET_PATH, PASSWORD_RESET_REQUEST_PATH,
    SERVICE_HEALTH_PATH, THING_MEMBERS_PATH, TOKENS_ISSUE_PATH, TOKENS_REFRESH_PATH,
    USERS_BY_ID_PATH, USERS_DISABLE_PATH, USERS_ENABLE_PATH, USERS_IDENTITY_PATH, USERS_PATH,
    USERS_PROFILE_PATH, USERS_REGISTER_PATH, USERS_ROLE_PATH, USERS_SEARCH_PATH,
    USERS_SECRET_PATH, USERS_TAGS_PATH,
};
use crate::methods::tokens::{issue_token, refresh_token};
use crate::methods::update_client::{
    update_client, update_client_identity, update_client_role, update_client_tags,
};
use crate::methods::update_client_secret::update_client_secret;
use crate::methods::view_client::{view_client, view_profile};
use crate::state::AppState;

/// Route table without middleware. The binary layers the middleware stack
/// and docs on top; tests drive this directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Users
        .route(USERS_REGISTER_PATH, post(register_client))
        .route(USERS_PATH, get(list_clients))
        .route(USERS_PROFILE_PATH, get(view_profile))
        .route(USERS_SEARCH_PATH, get(search_users))
        .route(USERS_SECRET_PATH, patch(update_client_secret))
        .route(
            USERS_BY_ID_PATH,
            get(view_client).patch(update_client).delete(delete_client),
        )
        .route(USERS_TAGS_PATH, patch(update_client_tags))
        .route(USERS_IDENTITY_PATH, patch(update_client_identity))
        .route(USERS_ROLE_PATH, patch(update_client_role))
        .route(USERS_ENABLE_PATH, post(enable_client))
        .route(USERS_DISABLE_PATH, post(disable_client))
        // Tokens and passwords
        .route(TOKENS_ISSUE_PATH, post(issue_token))
        .route(TOKENS_REFRESH_PATH, post(refresh_token))
        .route(PASSWORD_RESET_REQUEST_PATH, post(password_reset_request))
        .route(PASSWORD_RESET_PATH, put(password_reset))
        // Members
        .route(GROUP_MEMBERS_PATH, get(list_group_members))
        .route(CHANNEL_MEMBERS_PATH, get(list_channel_members))
        .route(THING_MEMBERS_PATH, get(list_thing_members))
        .route(DOMAIN_MEMBERS_PATH, get(list_domain_members))
        // Group relations
        .route(GROUP_USERS_ASSIGN_PATH, post(assign_users))
        .route(GROUP_USERS_UNASSIGN_PATH, post(unassign_users))
        .route(GROUP_GROUPS_ASSIGN_PATH, post(assign_groups))
        .route(GROUP_GROUPS_UNASSIGN_PATH, post(unassign_groups))
        // Service
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .with_state(state)
}
