//! Listing-parameter validation for the articles collection.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the HTTP layer and the repository layer. Raw query-string values
//! are validated here; translating the validated enums into SQL text is
//! the repository's job.

use crate::error::CoreError;

/// Default number of articles per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Limit value meaning "no LIMIT clause".
pub const UNBOUNDED: i64 = 0;

/// Columns the articles collection may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Topic,
    Author,
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    /// Parse a raw `sort_by` value against the allow-list.
    ///
    /// `None` falls back to `created_at`.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw {
            None => Ok(Self::CreatedAt),
            Some("title") => Ok(Self::Title),
            Some("topic") => Ok(Self::Topic),
            Some("author") => Ok(Self::Author),
            Some("created_at") => Ok(Self::CreatedAt),
            Some("votes") => Ok(Self::Votes),
            Some("comment_count") => Ok(Self::CommentCount),
            Some(other) => Err(CoreError::InvalidSortColumn(other.to_string())),
        }
    }
}

/// Sort direction for the articles collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a raw `order` value.
    ///
    /// `None` falls back to descending.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw {
            None => Ok(Self::Desc),
            Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(other) => Err(CoreError::InvalidSortOrder(other.to_string())),
        }
    }
}

/// Parse a raw `limit` value.
///
/// `None` falls back to [`DEFAULT_PAGE_SIZE`]. A limit of 0 means
/// unbounded; negative values are rejected.
pub fn parse_limit(raw: Option<&str>) -> Result<i64, CoreError> {
    match raw {
        None => Ok(DEFAULT_PAGE_SIZE),
        Some(raw) => {
            let limit: i64 = raw.parse().map_err(|_| CoreError::MalformedListParam)?;
            if limit < 0 {
                return Err(CoreError::ListParamOutOfRange);
            }
            Ok(limit)
        }
    }
}

/// Parse a raw `p` (page number) value.
///
/// `None` falls back to page 1. Pages are 1-based; zero and negative
/// values are rejected so the computed offset can never go negative.
pub fn parse_page(raw: Option<&str>) -> Result<i64, CoreError> {
    match raw {
        None => Ok(1),
        Some(raw) => {
            let page: i64 = raw.parse().map_err(|_| CoreError::MalformedListParam)?;
            if page < 1 {
                return Err(CoreError::ListParamOutOfRange);
            }
            Ok(page)
        }
    }
}

/// Row offset for a 1-based page number.
pub fn page_offset(limit: i64, page: i64) -> i64 {
    limit * (page - 1)
}
