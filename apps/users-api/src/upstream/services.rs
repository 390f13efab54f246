use async_trait::async_trait;
use serde_json::json;
use users_lib::{
    Authenticator, Client, ClientsPage, GroupsService, MemberKind, MemberScope, MembersPage,
    PageRequest, ServiceError, Session, Token, UsersService,
};

use super::client::UpstreamClient;

/// Users collaborator reached over HTTP. Each operation is a POST to
/// `/clients/<operation>` carrying the session and the arguments.
pub struct RemoteUsersService {
    client: UpstreamClient,
}

impl RemoteUsersService {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UsersService for RemoteUsersService {
    async fn register_client(
        &self,
        session: &Session,
        client: Client,
        self_register: bool,
    ) -> Result<Client, ServiceError> {
        let body = json!({ "session": session, "client": client, "self_register": self_register });
        Ok(self.client.call(&["clients", "register"], None, &body).await?)
    }

    async fn view_client(&self, session: &Session, id: &str) -> Result<Client, ServiceError> {
        let body = json!({ "session": session, "id": id });
        Ok(self.client.call(&["clients", "view"], None, &body).await?)
    }

    async fn view_profile(&self, session: &Session) -> Result<Client, ServiceError> {
        let body = json!({ "session": session });
        Ok(self.client.call(&["clients", "profile"], None, &body).await?)
    }

    async fn list_clients(
        &self,
        session: &Session,
        page: PageRequest,
    ) -> Result<ClientsPage, ServiceError> {
        let body = json!({ "session": session, "page": page });
        Ok(self.client.call(&["clients", "list"], None, &body).await?)
    }

    async fn search_users(
        &self,
        session: &Session,
        page: PageRequest,
    ) -> Result<ClientsPage, ServiceError> {
        let body = json!({ "session": session, "page": page });
        Ok(self.client.call(&["clients", "search"], None, &body).await?)
    }

    async fn update_client(&self, session: &Session, client: Client) -> Result<Client, ServiceError> {
        let body = json!({ "session": session, "client": client });
        Ok(self.client.call(&["clients", "update"], None, &body).await?)
    }

    async fn update_client_tags(
        &self,
        session: &Session,
        client: Client,
    ) -> Result<Client, ServiceError> {
        let body = json!({ "session": session, "client": client });
        Ok(self.client.call(&["clients", "update-tags"], None, &body).await?)
    }

    async fn update_client_identity(
        &self,
        session: &Session,
        id: &str,
        identity: &str,
    ) -> Result<Client, ServiceError> {
        let body = json!({ "session": session, "id": id, "identity": identity });
        Ok(self.client.call(&["clients", "update-identity"], None, &body).await?)
    }

    async fn update_client_secret(
        &self,
        session: &Session,
        old_secret: &str,
        new_secret: &str,
    ) -> Result<Client, ServiceError> {
        let body = json!({ "session": session, "old_secret": old_secret, "new_secret": new_secret });
        Ok(self.client.call(&["clients", "update-secret"], None, &body).await?)
    }

    async fn update_client_role(
        &self,
        session: &Session,
        client: Client,
    ) -> Result<Client, ServiceError> {
        let body = json!({ "session": session, "client": client });
        Ok(self.client.call(&["clients", "update-role"], None, &body).await?)
    }

    async fn enable_client(&self, session: &Session, id: &str) -> Result<Client, ServiceError> {
        let body = json!({ "session": session, "id": id });
        Ok(self.client.call(&["clients", "enable"], None, &body).await?)
    }

    async fn disable_client(&self, session: &Session, id: &str) -> Result<Client, ServiceError> {
        let body = json!({ "session": session, "id": id });
        Ok(self.client.call(&["clients", "disable"], None, &body).await?)
    }

    async fn delete_client(&self, session: &Session, id: &str) -> Result<(), ServiceError> {
        let body = json!({ "session": session, "id": id });
        Ok(self.client.call_empty(&["clients", "delete"], None, &body).await?)
    }

    async fn generate_reset_token(&self, email: &str, host: &str) -> Result<(), ServiceError> {
        let body = json!({ "email": email, "host": host });
        Ok(self.client.call_empty(&["password", "reset-token"], None, &body).await?)
    }

    async fn send_password_reset(
        &self,
        host: &str,
        email: &str,
        user: &str,
        token: &str,
    ) -> Result<(), ServiceError> {
        let body = json!({ "host": host, "email": email, "user": user });
        Ok(self.client.call_empty(&["password", "send-reset"], Some(token), &body).await?)
    }

    async fn reset_secret(&self, session: &Session, secret: &str) -> Result<(), ServiceError> {
        let body = json!({ "session": session, "secret": secret });
        Ok(self.client.call_empty(&["password", "reset"], None, &body).await?)
    }

    async fn issue_token(
        &self,
        identity: &str,
        secret: &str,
        domain_id: &str,
    ) -> Result<Token, ServiceError> {
        let body = json!({ "identity": identity, "secret": secret, "domain_id": domain_id });
        Ok(self.client.call(&["tokens", "issue"], None, &body).await?)
    }

    async fn refresh_token(
        &self,
        session: &Session,
        refresh_token: &str,
        domain_id: &str,
    ) -> Result<Token, ServiceError> {
        let body = json!({ "session": session, "domain_id": domain_id });
        Ok(self.client.call(&["tokens", "refresh"], Some(refresh_token), &body).await?)
    }

    async fn list_members(
        &self,
        session: &Session,
        scope: MemberScope,
        page: PageRequest,
    ) -> Result<MembersPage, ServiceError> {
        let body = json!({ "session": session, "scope": scope, "page": page });
        Ok(self.client.call(&["clients", "members"], None, &body).await?)
    }
}

pub struct RemoteGroupsService {
    client: UpstreamClient,
}

impl RemoteGroupsService {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    async fn change(
        &self,
        operation: &str,
        session: &Session,
        group_id: &str,
        relation: &str,
        member_kind: MemberKind,
        member_ids: Vec<String>,
    ) -> Result<(), ServiceError> {
        let body = json!({
            "session": session,
            "relation": relation,
            "member_kind": member_kind,
            "member_ids": member_ids,
        });
        Ok(self
            .client
            .call_empty(&["groups", group_id, operation], None, &body)
            .await?)
    }
}

#[async_trait]
impl GroupsService for RemoteGroupsService {
    async fn assign(
        &self,
        session: &Session,
        group_id: &str,
        relation: &str,
        member_kind: MemberKind,
        member_ids: Vec<String>,
    ) -> Result<(), ServiceError> {
        self.change("assign", session, group_id, relation, member_kind, member_ids)
            .await
    }

    async fn unassign(
        &self,
        session: &Session,
        group_id: &str,
        relation: &str,
        member_kind: MemberKind,
        member_ids: Vec<String>,
    ) -> Result<(), ServiceError> {
        self.change("unassign", session, group_id, relation, member_kind, member_ids)
            .await
    }
}

/// Resolves bearer tokens against the auth service.
pub struct RemoteAuthenticator {
    client: UpstreamClient,
}

impl RemoteAuthenticator {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Authenticator for RemoteAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<Session, ServiceError> {
        Ok(self.client.call(&["authenticate"], Some(token), &json!({})).await?)
    }
}
