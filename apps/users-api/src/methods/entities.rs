use serde::{Deserialize, Serialize};
use users_lib::{Client, ClientsPage, Credentials, Metadata, Role, Status, Token};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::config::PasswordPolicy;
use crate::error::ApiError;

/// Trimmed path identifier, or `MissingId` when blank.
pub fn require_id(id: &str) -> Result<String, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::MissingId);
    }
    Ok(id.to_string())
}

fn check_fields<T: Validate>(value: &T) -> Result<(), ApiError> {
    value
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))
}

fn check_new_secret(secret: &str, policy: &PasswordPolicy) -> Result<(), ApiError> {
    if secret.is_empty() {
        return Err(ApiError::MissingPass);
    }
    if !policy.accepts(secret) {
        return Err(ApiError::PasswordFormat(policy.min_length));
    }
    Ok(())
}

fn require_field(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("missing {field}")));
    }
    Ok(())
}

// ==================== USERS ====================

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub secret: String,
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct RegisterClientRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    #[validate(length(max = 1024, message = "name exceeds 1024 characters"))]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub credentials: CredentialsRequest,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub metadata: Metadata,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl RegisterClientRequest {
    pub fn validate(&self, policy: &PasswordPolicy) -> Result<(), ApiError> {
        if let Some(id) = self.id.as_deref().filter(|id| !id.is_empty()) {
            Uuid::parse_str(id)
                .map_err(|_| ApiError::Validation(format!("invalid client id: {id}")))?;
        }
        check_fields(self)?;
        require_field(&self.credentials.identity, "identity")?;
        check_new_secret(&self.credentials.secret, policy)?;
        match self.status() {
            Some(Ok(Status::All)) | Some(Err(_)) => return Err(ApiError::InvalidStatus),
            _ => {}
        }
        if let Some(Err(_)) = self.role() {
            return Err(ApiError::InvalidRole);
        }
        Ok(())
    }

    fn status(&self) -> Option<Result<Status, ApiError>> {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().map_err(|_| ApiError::InvalidStatus))
    }

    fn role(&self) -> Option<Result<Role, ApiError>> {
        self.role
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(|r| r.parse().map_err(|_| ApiError::InvalidRole))
    }

    pub fn into_client(self) -> Client {
        let status = self.status().and_then(Result::ok).unwrap_or_default();
        let role = self.role().and_then(Result::ok).unwrap_or_default();
        Client {
            id: self.id.unwrap_or_default(),
            name: self.name,
            tags: self.tags,
            credentials: Credentials {
                identity: self.credentials.identity,
                secret: self.credentials.secret,
            },
            metadata: self.metadata,
            status,
            role,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateClientRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    #[validate(length(max = 1024, message = "name exceeds 1024 characters"))]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub metadata: Metadata,
}

impl UpdateClientRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_id(&self.id)?;
        check_fields(self)
    }

    pub fn into_client(self) -> Client {
        Client {
            id: self.id.trim().to_string(),
            name: self.name,
            metadata: self.metadata,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateClientTagsRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl UpdateClientTagsRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_id(&self.id).map(|_| ())
    }

    pub fn into_client(self) -> Client {
        Client {
            id: self.id.trim().to_string(),
            tags: self.tags,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateClientIdentityRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub identity: String,
}

impl UpdateClientIdentityRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_id(&self.id)?;
        require_field(&self.identity, "identity")
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateClientRoleRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub role: String,
}

impl UpdateClientRoleRequest {
    /// Checks the request and resolves the target client.
    pub fn validate(&self) -> Result<Client, ApiError> {
        let id = require_id(&self.id)?;
        let role = self
            .role
            .parse::<Role>()
            .map_err(|_| ApiError::InvalidRole)?;
        Ok(Client {
            id,
            role,
            ..Default::default()
        })
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateClientSecretRequest {
    #[serde(default)]
    pub old_secret: String,
    #[serde(default)]
    pub new_secret: String,
}

impl UpdateClientSecretRequest {
    pub fn validate(&self, policy: &PasswordPolicy) -> Result<(), ApiError> {
        if self.old_secret.is_empty() {
            return Err(ApiError::MissingPass);
        }
        check_new_secret(&self.new_secret, policy)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub identity: String,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    #[schema(value_type = Object)]
    pub metadata: Metadata,
    #[schema(value_type = String, example = "enabled")]
    pub status: Status,
    #[schema(value_type = String, example = "user")]
    pub role: Role,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        ClientResponse {
            id: client.id,
            name: client.name,
            tags: client.tags,
            identity: client.credentials.identity,
            metadata: client.metadata,
            status: client.status,
            role: client.role,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
    pub users: Vec<T>,
}

impl<T> From<ClientsPage> for PaginatedResponse<T>
where
    T: From<Client>,
{
    fn from(page: ClientsPage) -> Self {
        PaginatedResponse {
            total: page.total,
            offset: page.offset,
            limit: page.limit,
            users: page.items.into_iter().map(T::from).collect(),
        }
    }
}

// ==================== TOKENS & PASSWORDS ====================

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct IssueTokenRequest {
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default, alias = "domainID")]
    pub domain_id: String,
}

impl IssueTokenRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_field(&self.identity, "identity")?;
        if self.secret.is_empty() {
            return Err(ApiError::MissingPass);
        }
        require_field(&self.domain_id, "domain id")
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct RefreshTokenRequest {
    #[serde(default, alias = "domainID")]
    pub domain_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub access_type: String,
}

impl From<Token> for TokenResponse {
    fn from(token: Token) -> Self {
        TokenResponse {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            access_type: token.access_type,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct PasswordResetRequest {
    #[serde(default)]
    pub email: String,
    /// Taken from the `Referer` header; any body value is ignored.
    #[serde(skip)]
    pub host: String,
}

impl PasswordResetRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_field(&self.email, "email")?;
        require_field(&self.host, "host")
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ResetSecretRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl ResetSecretRequest {
    pub fn validate(&self, policy: &PasswordPolicy) -> Result<(), ApiError> {
        if self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(ApiError::MissingPass);
        }
        if self.password != self.confirm_password {
            return Err(ApiError::Validation(
                "password and confirm password do not match".to_string(),
            ));
        }
        check_new_secret(&self.password, policy)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

// ==================== GROUP RELATIONS ====================

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AssignUsersRequest {
    #[serde(default)]
    pub relation: String,
    #[serde(default)]
    pub user_ids: Vec<String>,
}

impl AssignUsersRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_field(&self.relation, "relation")?;
        if self.user_ids.is_empty() {
            return Err(ApiError::Validation("empty user id list".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AssignGroupsRequest {
    #[serde(default)]
    pub group_ids: Vec<String>,
}

impl AssignGroupsRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.group_ids.is_empty() {
            return Err(ApiError::Validation("empty group id list".to_string()));
        }
        Ok(())
    }
}
