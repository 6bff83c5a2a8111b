use crate::{Error, Result};
use opsdeck_types::{QueryParams, Role, Status};

/// Owns the committed query snapshot and applies user intents to it.
///
/// Every mutation replaces the snapshot wholesale and returns the new value
/// for publication, so readers never observe a half-applied change. Search
/// and filter edits force the page back to 1; a narrower result set must not
/// leave the view stranded past its last page.
#[derive(Debug, Clone)]
pub struct QueryState {
    params: QueryParams,
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            params: QueryParams::new().page_size(page_size),
        }
    }

    /// Start from an existing snapshot, e.g. one decoded from a share link.
    pub fn from_params(params: QueryParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn snapshot(&self) -> QueryParams {
        self.params.clone()
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> QueryParams {
        self.params.search = search.into();
        self.params.page = 1;
        self.snapshot()
    }

    pub fn set_role(&mut self, role: Option<Role>) -> QueryParams {
        self.params.role = role;
        self.params.page = 1;
        self.snapshot()
    }

    pub fn set_status(&mut self, status: Option<Status>) -> QueryParams {
        self.params.status = status;
        self.params.page = 1;
        self.snapshot()
    }

    /// Jump to a page. `page` is 1-based; callers clamp to the known page
    /// range first, so a zero here is a programming error, not a user one.
    pub fn set_page(&mut self, page: usize) -> Result<QueryParams> {
        if page == 0 {
            return Err(Error::Schema(opsdeck_types::Error::InvalidArgument(
                "page must be >= 1".to_string(),
            )));
        }
        self.params.page = page;
        Ok(self.snapshot())
    }
}
