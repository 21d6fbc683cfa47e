//! Query for cursor-paginated account listing.

use acct_shared::types::{CursorPagination, PageLimit, SortOrder};

use crate::domain::entities::account::AccountId;
use crate::errors::ValidationError;

/// Validated listing query
///
/// The cursor row itself is never part of the page: ascending pages start
/// strictly after it, descending pages strictly before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListAccountsQuery {
    pub cursor: Option<AccountId>,
    pub limit: PageLimit,
    pub order: SortOrder,
}

impl ListAccountsQuery {
    pub fn new(cursor: Option<AccountId>, limit: PageLimit, order: SortOrder) -> Self {
        Self {
            cursor,
            limit,
            order,
        }
    }

    /// Build from raw query-string parameters
    ///
    /// A blank cursor means start of range; any other cursor must parse as an
    /// account identifier.
    pub fn from_pagination(params: &CursorPagination) -> Result<Self, ValidationError> {
        let cursor = params
            .cursor()
            .map(|raw| AccountId::parse(raw).map_err(|_| ValidationError::InvalidCursor))
            .transpose()?;

        Ok(Self::new(cursor, params.limit(), params.order()))
    }

    /// Whether an identifier lies past the cursor in the query's direction
    pub fn is_after_cursor(&self, id: &AccountId) -> bool {
        match (&self.cursor, self.order) {
            (None, _) => true,
            (Some(cursor), SortOrder::Asc) => id > cursor,
            (Some(cursor), SortOrder::Desc) => id < cursor,
        }
    }
}
