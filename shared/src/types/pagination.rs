//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};
use std::fmt;

/// Page size used when the caller supplies none, zero or a negative value
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Largest page size a caller can request
pub const MAX_PAGE_LIMIT: u32 = 100;

/// A page size that is always within `1..=MAX_PAGE_LIMIT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageLimit(u32);

impl PageLimit {
    /// Clamp a raw requested limit
    ///
    /// Non-positive values fall back to [`DEFAULT_PAGE_LIMIT`], values above
    /// [`MAX_PAGE_LIMIT`] are capped.
    pub fn new(requested: i64) -> Self {
        if requested <= 0 {
            Self(DEFAULT_PAGE_LIMIT)
        } else if requested > MAX_PAGE_LIMIT as i64 {
            Self(MAX_PAGE_LIMIT)
        } else {
            Self(requested as u32)
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Limit as i64 for SQL queries
    pub fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self(DEFAULT_PAGE_LIMIT)
    }
}

impl From<Option<i64>> for PageLimit {
    fn from(value: Option<i64>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}

/// Sort direction over the account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Asc)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

/// Cursor pagination parameters as they arrive on the query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CursorPagination {
    /// Identifier of the last item of the previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    /// Requested page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Ascending order by identifier, newest first otherwise
    #[serde(default)]
    pub sort_asc: bool,
}

impl CursorPagination {
    /// Cursor with blank values treated as absent
    pub fn cursor(&self) -> Option<&str> {
        self.cursor
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    pub fn limit(&self) -> PageLimit {
        PageLimit::from(self.limit)
    }

    pub fn order(&self) -> SortOrder {
        SortOrder::from_ascending(self.sort_asc)
    }
}
