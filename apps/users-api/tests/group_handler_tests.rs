mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;

use support::*;
use users_lib::{MemberKind, ServiceError};

fn groups_app(groups: MockGroups) -> axum::Router {
    app(MockUsers::new(), groups, authn())
}

// ==================== USERS IN GROUPS ====================

#[tokio::test]
async fn test_assign_users_without_content_type() {
    let mut groups = MockGroups::new();
    groups
        .expect_assign()
        .withf(|session, group_id, relation, kind, ids| {
            session.domain_id == "d1"
                && session.domain_user_id == format!("d1_{USER_ID}")
                && group_id == "g1"
                && relation == "member"
                && *kind == MemberKind::Users
                && ids == &vec!["u1".to_string(), "u2".to_string()]
        })
        .times(1)
        .returning(|_, _, _, _, _| Ok(()));

    let body = json!({ "relation": "member", "user_ids": ["u1", "u2"] }).to_string();
    let (status, response) = TestRequest::new(Method::POST, "/d1/groups/g1/users/assign")
        .token(VALID_TOKEN)
        .raw(None, &body)
        .send(groups_app(groups))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(response.is_null());
}

#[tokio::test]
async fn test_unassign_users() {
    let mut groups = MockGroups::new();
    groups
        .expect_unassign()
        .withf(|_, group_id, _, kind, _| group_id == "g1" && *kind == MemberKind::Users)
        .times(1)
        .returning(|_, _, _, _, _| Ok(()));

    let (status, _) = TestRequest::new(Method::POST, "/d1/groups/g1/users/unassign")
        .token(VALID_TOKEN)
        .json(json!({ "relation": "member", "user_ids": ["u1"] }))
        .send(groups_app(groups))
        .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_assign_users_rejects_bad_requests() {
    let cases = [
        json!({ "relation": "", "user_ids": ["u1"] }),
        json!({ "relation": "member", "user_ids": [] }),
        json!({ "relation": "member", "user_ids": "u1" }),
    ];

    for body in cases {
        let (status, response) = TestRequest::new(Method::POST, "/d1/groups/g1/users/assign")
            .token(VALID_TOKEN)
            .json(body.clone())
            .send(groups_app(MockGroups::new()))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(error_code(&response), "validation_error", "{body}");
    }
}

#[tokio::test]
async fn test_assign_users_foreign_content_type() {
    let (status, _) = TestRequest::new(Method::POST, "/d1/groups/g1/users/assign")
        .token(VALID_TOKEN)
        .raw(Some("text/plain"), "{}")
        .send(groups_app(MockGroups::new()))
        .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_assign_users_forbidden() {
    let mut groups = MockGroups::new();
    groups
        .expect_assign()
        .returning(|_, _, _, _, _| Err(ServiceError::Authorization));

    let (status, _) = TestRequest::new(Method::POST, "/d1/groups/g1/users/assign")
        .token(VALID_TOKEN)
        .json(json!({ "relation": "member", "user_ids": ["u1"] }))
        .send(groups_app(groups))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_assign_users_empty_token() {
    let (status, response) = TestRequest::new(Method::POST, "/d1/groups/g1/users/assign")
        .json(json!({ "relation": "member", "user_ids": ["u1"] }))
        .send(app(MockUsers::new(), MockGroups::new(), unused_authn()))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response), "missing_bearer_token");
}

#[tokio::test]
async fn test_assign_users_empty_group_id() {
    let (status, response) = TestRequest::new(Method::POST, "/d1/groups//users/assign")
        .token(VALID_TOKEN)
        .json(json!({ "relation": "member", "user_ids": ["u1"] }))
        .send(groups_app(MockGroups::new()))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response), "missing_id");
}

// ==================== GROUPS IN GROUPS ====================

#[tokio::test]
async fn test_assign_groups_uses_parent_relation() {
    let mut groups = MockGroups::new();
    groups
        .expect_assign()
        .withf(|_, group_id, relation, kind, ids| {
            group_id == "g1"
                && relation == "parent_group"
                && *kind == MemberKind::Groups
                && ids.len() == 1
        })
        .times(1)
        .returning(|_, _, _, _, _| Ok(()));

    let (status, _) = TestRequest::new(Method::POST, "/d1/groups/g1/groups/assign")
        .token(VALID_TOKEN)
        .json(json!({ "group_ids": ["g2"] }))
        .send(groups_app(groups))
        .await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_unassign_groups() {
    let mut groups = MockGroups::new();
    groups
        .expect_unassign()
        .withf(|_, _, _, kind, _| *kind == MemberKind::Groups)
        .times(1)
        .returning(|_, _, _, _, _| Ok(()));

    let (status, _) = TestRequest::new(Method::POST, "/d1/groups/g1/groups/unassign")
        .token(VALID_TOKEN)
        .json(json!({ "group_ids": ["g2"] }))
        .send(groups_app(groups))
        .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_assign_groups_empty_list() {
    let (status, response) = TestRequest::new(Method::POST, "/d1/groups/g1/groups/assign")
        .token(VALID_TOKEN)
        .json(json!({ "group_ids": [] }))
        .send(groups_app(MockGroups::new()))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response), "validation_error");
}
