use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors_service::ServiceError;

/// Free-form JSON object attached to a client.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Enabled,
    Disabled,
    /// Filter wildcard, never a stored state.
    All,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Enabled => "enabled",
            Status::Disabled => "disabled",
            Status::All => "all",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enabled" => Ok(Status::Enabled),
            "disabled" => Ok(Status::Disabled),
            "all" => Ok(Status::All),
            _ => Err(ServiceError::InvalidStatus),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(ServiceError::InvalidRole),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub identity: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secret: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Client {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub access_type: String,
}

/// Offset-based page of results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
    pub items: Vec<T>,
}

pub type ClientsPage = Page<Client>;
pub type MembersPage = Page<Client>;

/// Kind of entity whose members are being listed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Groups,
    Channels,
    Things,
    Domains,
}

impl ScopeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Groups => "groups",
            ScopeKind::Channels => "channels",
            ScopeKind::Things => "things",
            ScopeKind::Domains => "domains",
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relation scope for member listing: the entity kind plus its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberScope {
    pub kind: ScopeKind,
    pub id: String,
}

impl MemberScope {
    pub fn new(kind: ScopeKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }
}

/// Kind of member being attached to a group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Users,
    Groups,
}

/// Splits a comma-separated tag list, dropping blanks and duplicates.
pub fn parse_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values() {
        assert_eq!("enabled".parse::<Status>().unwrap(), Status::Enabled);
        assert_eq!("Disabled".parse::<Status>().unwrap(), Status::Disabled);
        assert_eq!("all".parse::<Status>().unwrap(), Status::All);
        assert!(matches!("frozen".parse::<Status>(), Err(ServiceError::InvalidStatus)));
    }

    #[test]
    fn role_rejects_unknown_values() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!(matches!("invalid".parse::<Role>(), Err(ServiceError::InvalidRole)));
    }

    #[test]
    fn client_secret_is_not_serialized_when_empty() {
        let client = Client {
            id: "c1".to_string(),
            credentials: Credentials {
                identity: "a@b.c".to_string(),
                secret: String::new(),
            },
            ..Default::default()
        };
        let json = serde_json::to_value(&client).unwrap();
        assert!(json["credentials"].get("secret").is_none());
        assert_eq!(json["status"], "enabled");
    }

    #[test]
    fn parse_tags_trims_and_dedups() {
        let tags = parse_tags(" a,b,,a , c");
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
