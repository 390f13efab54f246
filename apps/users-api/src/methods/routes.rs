// Users
pub const USERS_PATH: &str = "/users";
pub const USERS_REGISTER_PATH: &str = "/users/";
pub const USERS_BY_ID_PATH: &str = "/users/{id}";
pub const USERS_PROFILE_PATH: &str = "/users/profile";
pub const USERS_SEARCH_PATH: &str = "/users/search";
pub const USERS_SECRET_PATH: &str = "/users/secret";
pub const USERS_TAGS_PATH: &str = "/users/{id}/tags";
pub const USERS_IDENTITY_PATH: &str = "/users/{id}/identity";
pub const USERS_ROLE_PATH: &str = "/users/{id}/role";
pub const USERS_ENABLE_PATH: &str = "/users/{id}/enable";
pub const USERS_DISABLE_PATH: &str = "/users/{id}/disable";

// Tokens and passwords (no session required for issue and reset-request)
pub const TOKENS_ISSUE_PATH: &str = "/users/tokens/issue";
pub const TOKENS_REFRESH_PATH: &str = "/users/tokens/refresh";
pub const PASSWORD_RESET_REQUEST_PATH: &str = "/password/reset-request";
pub const PASSWORD_RESET_PATH: &str = "/password/reset";

// Members of a relation scope
pub const GROUP_MEMBERS_PATH: &str = "/{domain_id}/groups/{group_id}/users";
pub const CHANNEL_MEMBERS_PATH: &str = "/{domain_id}/channels/{channel_id}/users";
pub const THING_MEMBERS_PATH: &str = "/{domain_id}/things/{thing_id}/users";
pub const DOMAIN_MEMBERS_PATH: &str = "/{domain_id}/users";

// Group relations
pub const GROUP_USERS_ASSIGN_PATH: &str = "/{domain_id}/groups/{group_id}/users/assign";
pub const GROUP_USERS_UNASSIGN_PATH: &str = "/{domain_id}/groups/{group_id}/users/unassign";
pub const GROUP_GROUPS_ASSIGN_PATH: &str = "/{domain_id}/groups/{group_id}/groups/assign";
pub const GROUP_GROUPS_UNASSIGN_PATH: &str = "/{domain_id}/groups/{group_id}/groups/unassign";

// Service routes
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const SERVICE_DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/api-doc/openapi.json";
