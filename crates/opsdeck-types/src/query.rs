use crate::{Error, Result, Role, Status, User};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rows per page. Fixed for the whole console; not part of the shareable
/// representation.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sentinel for a role/status filter that matches every record.
pub const MATCH_ALL: &str = "all";

/// An immutable snapshot of the users-view query.
///
/// `page` is 1-based and always at least 1. `role` and `status` are `None`
/// for the match-all sentinel. Snapshots are replaced wholesale on every
/// change, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub search: String,
    pub role: Option<Role>,
    pub status: Option<Status>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            role: None,
            status: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Zero-based offset of the first row on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// Flat string-keyed representation for bookmarking and sharing.
    ///
    /// Fields at their defaults are omitted; [`QueryParams::from_pairs`]
    /// restores them.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search".to_string(), self.search.clone()));
        }
        if let Some(role) = self.role {
            pairs.push(("role".to_string(), role.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.to_string()));
        }
        if self.page > 1 {
            pairs.push(("page".to_string(), self.page.to_string()));
        }
        pairs
    }

    /// Rebuild a snapshot from a flat string mapping.
    ///
    /// Missing keys take their defaults (`search=""`, `role=all`,
    /// `status=all`, `page=1`); unknown keys are ignored. A page of zero or
    /// an unknown role/status token is an `InvalidArgument` error.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key {
                "search" => params.search = value.to_string(),
                "role" => params.role = parse_filter(value)?,
                "status" => params.status = parse_filter(value)?,
                "page" => {
                    let page: usize = value.parse().map_err(|_| {
                        Error::InvalidArgument(format!("page must be a positive integer: {:?}", value))
                    })?;
                    if page == 0 {
                        return Err(Error::InvalidArgument("page must be >= 1".to_string()));
                    }
                    params.page = page;
                }
                _ => {}
            }
        }
        Ok(params)
    }
}

fn parse_filter<T: FromStr<Err = Error>>(value: &str) -> Result<Option<T>> {
    if value == MATCH_ALL {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// One page of directory results plus the filtered total.
///
/// `total` counts every record matching the filters, not just the rows on
/// this page. An empty page with `total == 0` is a normal answer, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: usize,
}
