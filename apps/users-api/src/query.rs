use std::collections::HashMap;

use axum::{extract::FromRequestParts, http::request::Parts};
use users_lib::{parse_tags, Direction, Metadata, PageRequest, Status, MAX_LIMIT_SIZE};

use crate::constants::MIN_SEARCH_NAME_LENGTH;
use crate::error::ApiError;

pub const OFFSET_KEY: &str = "offset";
pub const LIMIT_KEY: &str = "limit";
pub const ID_KEY: &str = "id";
pub const NAME_KEY: &str = "name";
pub const STATUS_KEY: &str = "status";
pub const TAG_KEY: &str = "tag";
pub const METADATA_KEY: &str = "metadata";
pub const PERMISSION_KEY: &str = "permission";
pub const LIST_PERMS_KEY: &str = "list_perms";
pub const IDENTITY_KEY: &str = "identity";
pub const ORDER_KEY: &str = "order";
pub const DIR_KEY: &str = "dir";

/// What a repeated occurrence of a single-valued key is reported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    InvalidQueryParams,
    Validation,
}

#[derive(Debug, Clone, Default)]
pub struct QueryParser {
    overrides: Vec<(&'static str, DuplicatePolicy)>,
}

impl QueryParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser used by member listings, where a repeated `list_perms` is a
    /// plain validation failure.
    pub fn members() -> Self {
        Self::new().with_duplicate_policy(LIST_PERMS_KEY, DuplicatePolicy::Validation)
    }

    pub fn with_duplicate_policy(mut self, key: &'static str, policy: DuplicatePolicy) -> Self {
        self.overrides.retain(|(k, _)| *k != key);
        self.overrides.push((key, policy));
        self
    }

    fn duplicate_policy(&self, key: &str) -> DuplicatePolicy {
        self.overrides
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, policy)| *policy)
            .unwrap_or(DuplicatePolicy::InvalidQueryParams)
    }

    pub fn parse(&self, raw: Option<&str>) -> Result<PageRequest, ApiError> {
        let values = QueryValues::new(self, raw.unwrap_or_default());
        let defaults = PageRequest::default();

        let limit = values.number(LIMIT_KEY, defaults.limit)?;
        if limit > MAX_LIMIT_SIZE {
            return Err(ApiError::Validation(format!(
                "limit exceeds maximum of {MAX_LIMIT_SIZE}"
            )));
        }

        let status = match values.single(STATUS_KEY)? {
            Some(s) => s
                .parse::<Status>()
                .map_err(|_| ApiError::Validation(format!("invalid status: {s}")))?,
            None => defaults.status,
        };

        let dir = match values.single(DIR_KEY)? {
            Some(d) => d
                .parse::<Direction>()
                .map_err(|e| ApiError::Validation(e.to_string()))?,
            None => defaults.dir,
        };

        let metadata = values.single(METADATA_KEY)?.map(parse_metadata).transpose()?;

        Ok(PageRequest {
            offset: values.number(OFFSET_KEY, defaults.offset)?,
            limit,
            id: values.string(ID_KEY)?,
            name: values.string(NAME_KEY)?,
            status,
            tags: values.single(TAG_KEY)?.map(parse_tags).unwrap_or_default(),
            metadata,
            permission: values.string(PERMISSION_KEY)?.unwrap_or(defaults.permission),
            identity: values.string(IDENTITY_KEY)?,
            order: values.string(ORDER_KEY)?.unwrap_or(defaults.order),
            dir,
            list_perms: values.boolean(LIST_PERMS_KEY, defaults.list_perms)?,
        })
    }
}

fn parse_metadata(raw: &str) -> Result<Metadata, ApiError> {
    serde_json::from_str::<Metadata>(raw)
        .map_err(|e| ApiError::Validation(format!("metadata must be a JSON object: {e}")))
}

/// Search needs a name or an id, and names need a minimum length.
pub fn validate_search(page: &PageRequest) -> Result<(), ApiError> {
    match (&page.name, &page.id) {
        (None, None) => Err(ApiError::EmptySearchQuery),
        (Some(name), _) if name.chars().count() < MIN_SEARCH_NAME_LENGTH => {
            Err(ApiError::LenSearchQuery(MIN_SEARCH_NAME_LENGTH))
        }
        _ => Ok(()),
    }
}

struct QueryValues<'a> {
    parser: &'a QueryParser,
    values: HashMap<String, Vec<String>>,
}

impl<'a> QueryValues<'a> {
    fn new(parser: &'a QueryParser, raw: &str) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            values.entry(key.into_owned()).or_default().push(value.into_owned());
        }
        Self { parser, values }
    }

    /// Single non-empty value for `key`, failing on repeats.
    fn single(&self, key: &str) -> Result<Option<&str>, ApiError> {
        match self.values.get(key).map(Vec::as_slice) {
            None | Some([]) => Ok(None),
            Some([value]) => Ok(Some(value.as_str()).filter(|v| !v.is_empty())),
            Some(_) => {
                let message = format!("query parameter '{key}' given more than once");
                Err(match self.parser.duplicate_policy(key) {
                    DuplicatePolicy::InvalidQueryParams => ApiError::InvalidQueryParams(message),
                    DuplicatePolicy::Validation => ApiError::Validation(message),
                })
            }
        }
    }

    fn string(&self, key: &str) -> Result<Option<String>, ApiError> {
        Ok(self.single(key)?.map(str::to_string))
    }

    fn number(&self, key: &str, default: u64) -> Result<u64, ApiError> {
        match self.single(key)? {
            Some(v) => v
                .parse()
                .map_err(|_| ApiError::Validation(format!("{key} must be a non-negative integer"))),
            None => Ok(default),
        }
    }

    fn boolean(&self, key: &str, default: bool) -> Result<bool, ApiError> {
        match self.single(key)? {
            Some(v) => v
                .parse()
                .map_err(|_| ApiError::Validation(format!("{key} must be a boolean"))),
            None => Ok(default),
        }
    }
}

/// Filters for `GET /users`.
#[derive(Debug, Clone)]
pub struct ListQuery(pub PageRequest);

impl<S: Send + Sync> FromRequestParts<S> for ListQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        QueryParser::new().parse(parts.uri.query()).map(ListQuery)
    }
}

/// Filters for member listings under a relation scope.
#[derive(Debug, Clone)]
pub struct MembersQuery(pub PageRequest);

impl<S: Send + Sync> FromRequestParts<S> for MembersQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        QueryParser::members().parse(parts.uri.query()).map(MembersQuery)
    }
}
