use crate::{Result, UserDirectory};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use opsdeck_types::{QueryParams, Role, Status, User, UserPage};
use std::time::Duration;

/// Simulated network delay applied to every query.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

static SEED_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        seed("1", "Alice Johnson", "alice@example.com", Role::Admin, Status::Active, (2024, 1, 15)),
        seed("2", "Bob Smith", "bob@example.com", Role::User, Status::Active, (2024, 2, 20)),
        seed("3", "Carol Williams", "carol@example.com", Role::User, Status::Inactive, (2024, 1, 10)),
        seed("4", "David Brown", "david@example.com", Role::Viewer, Status::Pending, (2024, 3, 5)),
        seed("5", "Emma Davis", "emma@example.com", Role::Admin, Status::Active, (2024, 1, 1)),
        seed("6", "Frank Miller", "frank@example.com", Role::User, Status::Active, (2024, 2, 14)),
        seed("7", "Grace Lee", "grace@example.com", Role::User, Status::Active, (2024, 3, 10)),
        seed("8", "Henry Wilson", "henry@example.com", Role::Viewer, Status::Inactive, (2024, 1, 20)),
        seed("9", "Iris Chen", "iris@example.com", Role::User, Status::Active, (2024, 2, 28)),
        seed("10", "Jack Martinez", "jack@example.com", Role::Admin, Status::Pending, (2024, 3, 15)),
        seed("11", "Karen Taylor", "karen@example.com", Role::User, Status::Active, (2024, 2, 5)),
        seed("12", "Leo Anderson", "leo@example.com", Role::User, Status::Active, (2024, 1, 25)),
    ]
});

fn seed(id: &str, name: &str, email: &str, role: Role, status: Status, ymd: (i32, u32, u32)) -> User {
    let (year, month, day) = ymd;
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        join_date: NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid"),
    }
}

/// The seeded demo dataset, in directory order.
pub fn seed_users() -> Vec<User> {
    SEED_USERS.clone()
}

/// In-memory user directory: a fixed dataset behind an artificial delay.
///
/// Deterministic for a given params value, which makes repeated queries with
/// identical snapshots return identical pages.
#[derive(Debug)]
pub struct MemoryDirectory {
    users: Vec<User>,
    latency: Duration,
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            users: seed_users(),
            latency,
        }
    }

    /// Serve a caller-supplied dataset instead of the seeded one.
    pub fn with_users(users: Vec<User>, latency: Duration) -> Self {
        Self { users, latency }
    }
}

impl UserDirectory for MemoryDirectory {
    fn name(&self) -> &str {
        "memory"
    }

    fn query(&self, params: &QueryParams) -> Result<UserPage> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        let filtered: Vec<&User> = self
            .users
            .iter()
            .filter(|user| opsdeck_core::filter::matches(user, params))
            .collect();
        let total = filtered.len();

        let users = filtered
            .into_iter()
            .skip(params.offset())
            .take(params.page_size)
            .cloned()
            .collect();

        Ok(UserPage { users, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> MemoryDirectory {
        MemoryDirectory::with_latency(Duration::ZERO)
    }

    #[test]
    fn test_first_page_of_unfiltered_dataset() {
        let page = directory().query(&QueryParams::new()).unwrap();

        assert_eq!(page.users.len(), 10);
        assert_eq!(page.total, 12);
        assert_eq!(page.users[0].name, "Alice Johnson");
        assert_eq!(page.users[9].name, "Jack Martinez");
    }

    #[test]
    fn test_second_page_holds_the_remainder() {
        let page = directory().query(&QueryParams::new().page(2)).unwrap();

        assert_eq!(page.users.len(), 2);
        assert_eq!(page.total, 12);
        assert_eq!(page.users[0].name, "Karen Taylor");
        assert_eq!(page.users[1].name, "Leo Anderson");
    }

    #[test]
    fn test_page_past_the_end_is_empty_but_keeps_total() {
        let page = directory().query(&QueryParams::new().page(5)).unwrap();

        assert!(page.users.is_empty());
        assert_eq!(page.total, 12);
    }

    #[test]
    fn test_search_matches_single_user_case_insensitively() {
        let page = directory().query(&QueryParams::new().search("GrAcE")).unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.users[0].name, "Grace Lee");
    }

    #[test]
    fn test_role_and_status_filters_compose() {
        let params = QueryParams::new().role(Role::Admin).status(Status::Pending);
        let page = directory().query(&params).unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.users[0].name, "Jack Martinez");
    }

    #[test]
    fn test_no_match_is_an_empty_success() {
        let page = directory().query(&QueryParams::new().search("zzz-no-match")).unwrap();

        assert!(page.users.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_total_reflects_filtered_count_not_page_length() {
        let page = directory().query(&QueryParams::new().role(Role::User)).unwrap();

        assert_eq!(page.total, 7);
        assert_eq!(page.users.len(), 7);
    }

    #[test]
    fn test_identical_params_return_identical_pages() {
        let dir = directory();
        let params = QueryParams::new().search("a").page(1);

        let first = dir.query(&params).unwrap();
        let second = dir.query(&params).unwrap();
        assert_eq!(first, second);
    }
}
