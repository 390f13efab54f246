mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;

use support::*;
use users_lib::{ServiceError, Token};

fn token() -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: Some("refresh".to_string()),
        access_type: "Bearer".to_string(),
    }
}

// ==================== ISSUE TOKEN ====================

#[tokio::test]
async fn test_issue_token_skips_authentication() {
    let mut users = MockUsers::new();
    users
        .expect_issue_token()
        .withf(|identity, secret, domain| {
            identity == "alice@example.com" && secret == "12345678" && domain == DOMAIN_ID
        })
        .times(1)
        .returning(|_, _, _| Ok(token()));

    let (status, body) = TestRequest::new(Method::POST, "/users/tokens/issue")
        .json(json!({ "identity": "alice@example.com", "secret": "12345678", "domainID": DOMAIN_ID }))
        .send(app(users, MockGroups::new(), unused_authn()))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["access_token"], "access");
    assert_eq!(body["refresh_token"], "refresh");
}

#[tokio::test]
async fn test_issue_token_malformed_body() {
    let (status, body) = TestRequest::new(Method::POST, "/users/tokens/issue")
        .raw(Some(JSON), "{\"identity\":")
        .send(app(MockUsers::new(), MockGroups::new(), unused_authn()))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "validation_error");
}

#[tokio::test]
async fn test_issue_token_missing_fields() {
    let bodies = [
        json!({ "identity": "", "secret": "12345678", "domain_id": DOMAIN_ID }),
        json!({ "identity": "alice@example.com", "secret": "", "domain_id": DOMAIN_ID }),
        json!({ "identity": "alice@example.com", "secret": "12345678", "domain_id": "" }),
    ];

    for body in bodies {
        let (status, _) = TestRequest::new(Method::POST, "/users/tokens/issue")
            .json(body.clone())
            .send(app(MockUsers::new(), MockGroups::new(), unused_authn()))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }
}

#[tokio::test]
async fn test_issue_token_wrong_credentials() {
    let mut users = MockUsers::new();
    users
        .expect_issue_token()
        .returning(|_, _, _| Err(ServiceError::Authentication));

    let (status, body) = TestRequest::new(Method::POST, "/users/tokens/issue")
        .json(json!({ "identity": "alice@example.com", "secret": "wrong", "domain_id": DOMAIN_ID }))
        .send(app(users, MockGroups::new(), unused_authn()))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "authentication_failed");
}

#[tokio::test]
async fn test_issue_token_xml() {
    let (status, _) = TestRequest::new(Method::POST, "/users/tokens/issue")
        .raw(Some("application/xml"), "<token/>")
        .send(app(MockUsers::new(), MockGroups::new(), unused_authn()))
        .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// ==================== REFRESH TOKEN ====================

#[tokio::test]
async fn test_refresh_token_uses_header_token() {
    let mut users = MockUsers::new();
    users
        .expect_refresh_token()
        .withf(|session, refresh, domain| {
            session.user_id == USER_ID && refresh == VALID_TOKEN && domain == DOMAIN_ID
        })
        .times(1)
        .returning(|_, _, _| Ok(token()));

    let (status, body) = TestRequest::new(Method::POST, "/users/tokens/refresh")
        .token(VALID_TOKEN)
        .json(json!({ "domain_id": DOMAIN_ID }))
        .send(users_app(users))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["access_type"], "Bearer");
}

#[tokio::test]
async fn test_refresh_token_empty_token() {
    let (status, body) = TestRequest::new(Method::POST, "/users/tokens/refresh")
        .json(json!({ "domain_id": DOMAIN_ID }))
        .send(app(MockUsers::new(), MockGroups::new(), unused_authn()))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "missing_bearer_token");
}

// ==================== PASSWORD RESET REQUEST ====================

#[tokio::test]
async fn test_password_reset_request() {
    let mut users = MockUsers::new();
    users
        .expect_generate_reset_token()
        .withf(|email, host| email == "alice@example.com" && host == "https://ui.example.com")
        .times(1)
        .returning(|_, _| Ok(()));

    let (status, body) = TestRequest::new(Method::POST, "/password/reset-request")
        .referer("https://ui.example.com")
        .json(json!({ "email": "alice@example.com", "host": "ignored" }))
        .send(app(users, MockGroups::new(), unused_authn()))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["msg"], "Email with reset link is sent");
}

#[tokio::test]
async fn test_password_reset_request_requires_referer_and_email() {
    let cases = [
        (None, json!({ "email": "alice@example.com" })),
        (Some("https://ui.example.com"), json!({ "email": "" })),
    ];

    for (referer, body) in cases {
        let mut request = TestRequest::new(Method::POST, "/password/reset-request").json(body.clone());
        if let Some(referer) = referer {
            request = request.referer(referer);
        }
        let (status, response) = request
            .send(app(MockUsers::new(), MockGroups::new(), unused_authn()))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(error_code(&response), "validation_error", "{body}");
    }
}

#[tokio::test]
async fn test_password_reset_request_unknown_email() {
    let mut users = MockUsers::new();
    users
        .expect_generate_reset_token()
        .returning(|_, _| Err(ServiceError::NotFound));

    let (status, _) = TestRequest::new(Method::POST, "/password/reset-request")
        .referer("https://ui.example.com")
        .json(json!({ "email": "nobody@example.com" }))
        .send(app(users, MockGroups::new(), unused_authn()))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_password_reset_request_missing_content_type() {
    let (status, _) = TestRequest::new(Method::POST, "/password/reset-request")
        .referer("https://ui.example.com")
        .raw(None, "{\"email\":\"alice@example.com\"}")
        .send(app(MockUsers::new(), MockGroups::new(), unused_authn()))
        .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// ==================== PASSWORD RESET ====================

#[tokio::test]
async fn test_password_reset() {
    let mut users = MockUsers::new();
    users
        .expect_reset_secret()
        .withf(|session, secret| session.user_id == USER_ID && secret == "newpassword")
        .times(1)
        .returning(|_, _| Ok(()));

    let (status, body) = TestRequest::new(Method::PUT, "/password/reset")
        .json(json!({ "token": VALID_TOKEN, "password": "newpassword", "confirm_password": "newpassword" }))
        .send(users_app(users))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_password_reset_rules() {
    let cases = [
        (json!({ "token": "", "password": "newpassword", "confirm_password": "newpassword" }), StatusCode::UNAUTHORIZED, "missing_bearer_token"),
        (json!({ "token": INVALID_TOKEN, "password": "newpassword", "confirm_password": "newpassword" }), StatusCode::UNAUTHORIZED, "authentication_failed"),
        (json!({ "token": VALID_TOKEN, "password": "weak", "confirm_password": "weak" }), StatusCode::BAD_REQUEST, "password_format"),
        (json!({ "token": VALID_TOKEN, "password": "", "confirm_password": "" }), StatusCode::BAD_REQUEST, "missing_password"),
        (json!({ "token": VALID_TOKEN, "password": "newpassword", "confirm_password": "otherpassword" }), StatusCode::BAD_REQUEST, "validation_error"),
    ];

    for (body, expected, code) in cases {
        let (status, response) = TestRequest::new(Method::PUT, "/password/reset")
            .json(body.clone())
            .send(users_app(MockUsers::new()))
            .await;

        assert_eq!(status, expected, "{body}");
        assert_eq!(error_code(&response), code, "{body}");
    }
}
