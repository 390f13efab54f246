use std::sync::Arc;

use users_lib::{Authenticator, GroupsService, Session, UsersService};

use crate::authn;
use crate::config::ApiConfig;
use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UsersService>,
    pub groups: Arc<dyn GroupsService>,
    pub authn: Arc<dyn Authenticator>,
    pub config: ApiConfig,
    pub env: String,
}

impl AppState {
    pub async fn authenticate(&self, token: &str) -> Result<Session, ApiError> {
        authn::authenticate(self.authn.as_ref(), token).await
    }
}
