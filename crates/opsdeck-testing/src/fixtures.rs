//! Canned data for directory and controller tests.

use opsdeck_types::{User, UserPage};

/// The seeded demo dataset, in directory order (12 users).
pub fn demo_users() -> Vec<User> {
    opsdeck_providers::seed_users()
}

/// Look up a seeded user by exact name.
pub fn demo_user(name: &str) -> User {
    demo_users()
        .into_iter()
        .find(|user| user.name == name)
        .unwrap_or_else(|| panic!("no seeded user named {:?}", name))
}

/// Build a page from a slice of the demo dataset with an explicit total.
pub fn demo_page(range: std::ops::Range<usize>, total: usize) -> UserPage {
    UserPage {
        users: demo_users()[range].to_vec(),
        total,
    }
}
