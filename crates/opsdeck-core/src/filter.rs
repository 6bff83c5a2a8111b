use opsdeck_types::{QueryParams, User};

/// Reference filter predicate shared by the in-memory directory and test
/// fixtures.
///
/// Search matches case-insensitively against name or email. Role and status
/// are exact matches when set and pass everything when absent. All clauses
/// combine with AND.
pub fn matches(user: &User, params: &QueryParams) -> bool {
    matches_search(user, &params.search)
        && params.role.is_none_or(|role| user.role == role)
        && params.status.is_none_or(|status| user.status == status)
}

fn matches_search(user: &User, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
}
