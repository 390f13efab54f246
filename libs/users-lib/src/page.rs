use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::{Metadata, Status};
use crate::errors_service::ServiceError;

pub const MAX_LIMIT_SIZE: u64 = 100;
pub const DEFAULT_LIMIT: u64 = 10;
pub const DEFAULT_OFFSET: u64 = 0;
pub const DEFAULT_ORDER: &str = "updated_at";
pub const DEFAULT_PERMISSION: &str = "view";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => f.write_str("asc"),
            Direction::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for Direction {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(ServiceError::Validation(format!(
                "invalid order direction: {other}"
            ))),
        }
    }
}

/// Filter and pagination parameters for list, search and member queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub permission: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    pub order: String,
    pub dir: Direction,
    pub list_perms: bool,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
            id: None,
            name: None,
            status: Status::Enabled,
            tags: BTreeSet::new(),
            metadata: None,
            permission: DEFAULT_PERMISSION.to_string(),
            identity: None,
            order: DEFAULT_ORDER.to_string(),
            dir: Direction::Asc,
            list_perms: false,
        }
    }
}
