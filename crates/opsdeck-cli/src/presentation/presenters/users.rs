use crate::presentation::view_models::{FilterSummary, UserRow, UsersListViewModel};
use opsdeck_core::pagination;
use opsdeck_types::{QueryParams, User, UserPage};

/// Build the one-shot users listing from a query snapshot and its result
/// page. Pure; safe to call on every render.
pub fn build_list_view_model(params: &QueryParams, page: &UserPage) -> UsersListViewModel {
    let view = pagination::present(page.total, params.page_size, params.page);

    UsersListViewModel {
        users: page.users.iter().map(user_row).collect(),
        total: page.total,
        page: view.current_page,
        total_pages: view.total_pages,
        has_prev: view.has_prev,
        has_next: view.has_next,
        range: view.row_range(params.page_size, page.total),
        applied: FilterSummary {
            search: (!params.search.is_empty()).then(|| params.search.clone()),
            role: params.role.map(|role| role.to_string()),
            status: params.status.map(|status| status.to_string()),
        },
        share: opsdeck_core::share::encode(params),
    }
}

pub fn user_row(user: &User) -> UserRow {
    UserRow {
        id: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.to_string(),
        status: user.status.to_string(),
        join_date: user.join_date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_providers::seed_users;

    fn page(users: Vec<User>, total: usize) -> UserPage {
        UserPage { users, total }
    }

    #[test]
    fn test_full_first_page() {
        let users = seed_users();
        let params = QueryParams::new();
        let vm = build_list_view_model(&params, &page(users[..10].to_vec(), 12));

        assert_eq!(vm.users.len(), 10);
        assert_eq!(vm.total, 12);
        assert_eq!(vm.total_pages, 2);
        assert!(vm.has_next);
        assert!(!vm.has_prev);
        assert_eq!(vm.range, Some((1, 10)));
        assert_eq!(vm.share, "");
    }

    #[test]
    fn test_last_page_flags() {
        let users = seed_users();
        let params = QueryParams::new().page(2);
        let vm = build_list_view_model(&params, &page(users[10..].to_vec(), 12));

        assert_eq!(vm.users.len(), 2);
        assert!(!vm.has_next);
        assert!(vm.has_prev);
        assert_eq!(vm.range, Some((11, 12)));
        assert_eq!(vm.share, "page=2");
    }

    #[test]
    fn test_empty_result() {
        let params = QueryParams::new().search("zzz-no-match");
        let vm = build_list_view_model(&params, &page(vec![], 0));

        assert!(vm.users.is_empty());
        assert_eq!(vm.total_pages, 0);
        assert_eq!(vm.range, None);
        assert_eq!(vm.applied.search.as_deref(), Some("zzz-no-match"));

        let rendered = vm.to_string();
        assert!(rendered.contains("No users found."));
    }

    #[test]
    fn test_rows_carry_display_strings() {
        let users = seed_users();
        let vm = build_list_view_model(&QueryParams::new(), &page(users[..1].to_vec(), 12));

        let row = &vm.users[0];
        assert_eq!(row.name, "Alice Johnson");
        assert_eq!(row.role, "admin");
        assert_eq!(row.status, "active");
        assert_eq!(row.join_date, "2024-01-15");
    }
}
