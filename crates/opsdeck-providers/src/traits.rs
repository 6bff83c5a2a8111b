use crate::Result;
use opsdeck_types::{QueryParams, UserPage};

/// A paged source of user records.
///
/// `query` runs the full filter/paginate pipeline for one snapshot: filters
/// first, then a `(page-1) * page_size` slice, with `total` reporting the
/// filtered count. Calls may take arbitrary time and may fail; callers must
/// not assume responses arrive in issue order. There is no cancellation
/// surface, so an abandoned call simply runs to completion.
pub trait UserDirectory: Send + Sync + std::fmt::Debug {
    /// Stable registry name for this directory.
    fn name(&self) -> &str;

    /// Fetch one page of users matching `params`.
    fn query(&self, params: &QueryParams) -> Result<UserPage>;
}
