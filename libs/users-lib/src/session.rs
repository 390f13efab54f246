use serde::{Deserialize, Serialize};

/// Authenticated identity resolved from a bearer token. Lives for one request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    #[serde(default)]
    pub domain_id: String,
    #[serde(default)]
    pub domain_user_id: String,
    #[serde(default)]
    pub super_admin: bool,
}

impl Session {
    /// Rescopes the session to the domain named in the request path.
    pub fn with_domain(self, domain_id: &str) -> Self {
        Session {
            domain_user_id: format!("{}_{}", domain_id, self.user_id),
            domain_id: domain_id.to_string(),
            ..self
        }
    }
}
