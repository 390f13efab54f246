#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mockall::mock;
use serde_json::Value;
use tower::ServiceExt;

use users_api::config::ApiConfig;
use users_api::{build_router, AppState};
use users_lib::{
    Authenticator, Client, ClientsPage, Credentials, GroupsService, MemberKind, MemberScope,
    MembersPage, PageRequest, ServiceError, Session, Token, UsersService,
};

pub const VALID_TOKEN: &str = "valid";
pub const INVALID_TOKEN: &str = "invalid";
pub const USER_ID: &str = "bb7edb32-2eac-4aad-aebe-ed96fe073879";
pub const DOMAIN_ID: &str = "5f1c9a0e-7c3d-4d4b-9a47-2a8b2a0f7e11";
pub const JSON: &str = "application/json";

// ==================== MOCKS ====================

mock! {
    pub Users {}

    #[async_trait]
    impl UsersService for Users {
        async fn register_client(&self, session: &Session, client: Client, self_register: bool) -> Result<Client, ServiceError>;
        async fn view_client(&self, session: &Session, id: &str) -> Result<Client, ServiceError>;
        async fn view_profile(&self, session: &Session) -> Result<Client, ServiceError>;
        async fn list_clients(&self, session: &Session, page: PageRequest) -> Result<ClientsPage, ServiceError>;
        async fn search_users(&self, session: &Session, page: PageRequest) -> Result<ClientsPage, ServiceError>;
        async fn update_client(&self, session: &Session, client: Client) -> Result<Client, ServiceError>;
        async fn update_client_tags(&self, session: &Session, client: Client) -> Result<Client, ServiceError>;
        async fn update_client_identity(&self, session: &Session, id: &str, identity: &str) -> Result<Client, ServiceError>;
        async fn update_client_secret(&self, session: &Session, old_secret: &str, new_secret: &str) -> Result<Client, ServiceError>;
        async fn update_client_role(&self, session: &Session, client: Client) -> Result<Client, ServiceError>;
        async fn enable_client(&self, session: &Session, id: &str) -> Result<Client, ServiceError>;
        async fn disable_client(&self, session: &Session, id: &str) -> Result<Client, ServiceError>;
        async fn delete_client(&self, session: &Session, id: &str) -> Result<(), ServiceError>;
        async fn generate_reset_token(&self, email: &str, host: &str) -> Result<(), ServiceError>;
        async fn send_password_reset(&self, host: &str, email: &str, user: &str, token: &str) -> Result<(), ServiceError>;
        async fn reset_secret(&self, session: &Session, secret: &str) -> Result<(), ServiceError>;
        async fn issue_token(&self, identity: &str, secret: &str, domain_id: &str) -> Result<Token, ServiceError>;
        async fn refresh_token(&self, session: &Session, refresh_token: &str, domain_id: &str) -> Result<Token, ServiceError>;
        async fn list_members(&self, session: &Session, scope: MemberScope, page: PageRequest) -> Result<MembersPage, ServiceError>;
    }
}

mock! {
    pub Groups {}

    #[async_trait]
    impl GroupsService for Groups {
        async fn assign(&self, session: &Session, group_id: &str, relation: &str, member_kind: MemberKind, member_ids: Vec<String>) -> Result<(), ServiceError>;
        async fn unassign(&self, session: &Session, group_id: &str, relation: &str, member_kind: MemberKind, member_ids: Vec<String>) -> Result<(), ServiceError>;
    }
}

mock! {
    pub Authn {}

    #[async_trait]
    impl Authenticator for Authn {
        async fn authenticate(&self, token: &str) -> Result<Session, ServiceError>;
    }
}

// ==================== TEST HELPERS ====================

pub fn session() -> Session {
    Session {
        user_id: USER_ID.to_string(),
        domain_id: DOMAIN_ID.to_string(),
        domain_user_id: format!("{}_{}", DOMAIN_ID, USER_ID),
        super_admin: false,
    }
}

pub fn client() -> Client {
    Client {
        id: USER_ID.to_string(),
        name: "alice".to_string(),
        tags: vec!["tag1".to_string()],
        credentials: Credentials {
            identity: "alice@example.com".to_string(),
            secret: "12345678".to_string(),
        },
        ..Default::default()
    }
}

/// Authenticator accepting `VALID_TOKEN` and rejecting anything else.
pub fn authn() -> MockAuthn {
    let mut authn = MockAuthn::new();
    authn
        .expect_authenticate()
        .withf(|token| token == VALID_TOKEN)
        .returning(|_| Ok(session()));
    authn
        .expect_authenticate()
        .withf(|token| token != VALID_TOKEN)
        .returning(|_| Err(ServiceError::Authentication));
    authn
}

/// Authenticator that must not be consulted.
pub fn unused_authn() -> MockAuthn {
    let mut authn = MockAuthn::new();
    authn.expect_authenticate().never();
    authn
}

pub fn app(users: MockUsers, groups: MockGroups, authn: MockAuthn) -> Router {
    app_with_config(users, groups, authn, ApiConfig::default())
}

pub fn app_with_config(
    users: MockUsers,
    groups: MockGroups,
    authn: MockAuthn,
    config: ApiConfig,
) -> Router {
    build_router(AppState {
        users: Arc::new(users),
        groups: Arc::new(groups),
        authn: Arc::new(authn),
        config,
        env: "test".to_string(),
    })
}

pub fn users_app(users: MockUsers) -> Router {
    app(users, MockGroups::new(), authn())
}

pub struct TestRequest {
    method: Method,
    uri: String,
    token: Option<String>,
    content_type: Option<String>,
    referer: Option<String>,
    body: String,
}

impl TestRequest {
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            token: None,
            content_type: None,
            referer: None,
            body: String::new(),
        }
    }

    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.content_type = Some(JSON.to_string());
        self.body = body.to_string();
        self
    }

    pub fn raw(mut self, content_type: Option<&str>, body: &str) -> Self {
        self.content_type = content_type.map(str::to_string);
        self.body = body.to_string();
        self
    }

    pub fn referer(mut self, referer: &str) -> Self {
        self.referer = Some(referer.to_string());
        self
    }

    pub fn build(self) -> Request<Body> {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if let Some(token) = self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(content_type) = self.content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        if let Some(referer) = self.referer {
            builder = builder.header(header::REFERER, referer);
        }
        builder.body(Body::from(self.body)).unwrap()
    }

    /// Sends the request and returns status plus decoded JSON body
    /// (`Value::Null` when the body is empty).
    pub async fn send(self, app: Router) -> (StatusCode, Value) {
        let response = app.oneshot(self.build()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

pub fn error_code(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}
