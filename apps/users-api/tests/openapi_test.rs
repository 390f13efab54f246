use utoipa::OpenApi;

use users_api::openapi::ApiDoc;

#[test]
fn test_openapi_spec_has_all_endpoints() {
    let spec = ApiDoc::openapi();
    let paths = spec.paths.paths;

    for path in [
        "/users/",
        "/users",
        "/users/{id}",
        "/users/profile",
        "/users/search",
        "/users/secret",
        "/users/{id}/tags",
        "/users/{id}/identity",
        "/users/{id}/role",
        "/users/{id}/enable",
        "/users/{id}/disable",
        "/users/tokens/issue",
        "/users/tokens/refresh",
        "/password/reset-request",
        "/password/reset",
        "/{domain_id}/groups/{group_id}/users",
        "/{domain_id}/channels/{channel_id}/users",
        "/{domain_id}/things/{thing_id}/users",
        "/{domain_id}/users",
        "/{domain_id}/groups/{group_id}/users/assign",
        "/{domain_id}/groups/{group_id}/users/unassign",
        "/{domain_id}/groups/{group_id}/groups/assign",
        "/{domain_id}/groups/{group_id}/groups/unassign",
        "/health",
    ] {
        assert!(paths.contains_key(path), "Missing {path} path");
    }

    let by_id = paths.get("/users/{id}").unwrap();
    assert!(by_id.get.is_some(), "Missing GET /users/{{id}}");
    assert!(by_id.patch.is_some(), "Missing PATCH /users/{{id}}");
    assert!(by_id.delete.is_some(), "Missing DELETE /users/{{id}}");

    assert!(paths.get("/password/reset").unwrap().put.is_some());
}

#[test]
fn test_openapi_spec_has_schemas_and_bearer_scheme() {
    let spec = ApiDoc::openapi();
    let components = spec.components.expect("components should be present");

    for schema in [
        "RegisterClientRequest",
        "ClientResponse",
        "TokenResponse",
        "ResetSecretRequest",
        "AssignUsersRequest",
        "ErrorResponse",
    ] {
        assert!(components.schemas.contains_key(schema), "Missing {schema} schema");
    }
    assert!(components.security_schemes.contains_key("bearer_auth"));

    let json = spec_json();
    assert!(json.contains("\"bearer\""));
}

fn spec_json() -> String {
    ApiDoc::openapi()
        .to_pretty_json()
        .expect("Failed to generate OpenAPI JSON")
}
