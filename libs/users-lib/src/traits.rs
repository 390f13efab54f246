use async_trait::async_trait;

use crate::entities::{Client, ClientsPage, MemberKind, MemberScope, MembersPage, Token};
use crate::errors_service::ServiceError;
use crate::page::PageRequest;
use crate::session::Session;

/// Business operations on users. Authorization decisions live behind this
/// boundary; callers only pass the session through.
#[async_trait]
pub trait UsersService: Send + Sync {
    async fn register_client(
        &self,
        session: &Session,
        client: Client,
        self_register: bool,
    ) -> Result<Client, ServiceError>;
    async fn view_client(&self, session: &Session, id: &str) -> Result<Client, ServiceError>;
    async fn view_profile(&self, session: &Session) -> Result<Client, ServiceError>;
    async fn list_clients(
        &self,
        session: &Session,
        page: PageRequest,
    ) -> Result<ClientsPage, ServiceError>;
    async fn search_users(
        &self,
        session: &Session,
        page: PageRequest,
    ) -> Result<ClientsPage, ServiceError>;
    async fn update_client(&self, session: &Session, client: Client) -> Result<Client, ServiceError>;
    async fn update_client_tags(
        &self,
        session: &Session,
        client: Client,
    ) -> Result<Client, ServiceError>;
    async fn update_client_identity(
        &self,
        session: &Session,
        id: &str,
        identity: &str,
    ) -> Result<Client, ServiceError>;
    async fn update_client_secret(
        &self,
        session: &Session,
        old_secret: &str,
        new_secret: &str,
    ) -> Result<Client, ServiceError>;
    async fn update_client_role(
        &self,
        session: &Session,
        client: Client,
    ) -> Result<Client, ServiceError>;
    async fn enable_client(&self, session: &Session, id: &str) -> Result<Client, ServiceError>;
    async fn disable_client(&self, session: &Session, id: &str) -> Result<Client, ServiceError>;
    async fn delete_client(&self, session: &Session, id: &str) -> Result<(), ServiceError>;
    async fn generate_reset_token(&self, email: &str, host: &str) -> Result<(), ServiceError>;
    async fn send_password_reset(
        &self,
        host: &str,
        email: &str,
        user: &str,
        token: &str,
    ) -> Result<(), ServiceError>;
    async fn reset_secret(&self, session: &Session, secret: &str) -> Result<(), ServiceError>;
    async fn issue_token(
        &self,
        identity: &str,
        secret: &str,
        domain_id: &str,
    ) -> Result<Token, ServiceError>;
    async fn refresh_token(
        &self,
        session: &Session,
        refresh_token: &str,
        domain_id: &str,
    ) -> Result<Token, ServiceError>;
    async fn list_members(
        &self,
        session: &Session,
        scope: MemberScope,
        page: PageRequest,
    ) -> Result<MembersPage, ServiceError>;
}

#[async_trait]
pub trait GroupsService: Send + Sync {
    async fn assign(
        &self,
        session: &Session,
        group_id: &str,
        relation: &str,
        member_kind: MemberKind,
        member_ids: Vec<String>,
    ) -> Result<(), ServiceError>;
    async fn unassign(
        &self,
        session: &Session,
        group_id: &str,
        relation: &str,
        member_kind: MemberKind,
        member_ids: Vec<String>,
    ) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<Session, ServiceError>;
}
