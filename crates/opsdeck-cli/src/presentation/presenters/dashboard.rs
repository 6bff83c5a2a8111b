use crate::presentation::view_models::{
    DashboardViewModel, FetchViewModel, GateViewModel, OverviewViewModel, PaginationViewModel,
    Screen, StatCard, UsersScreenViewModel,
};
use opsdeck_core::pagination;
use opsdeck_runtime::{FetchState, SessionStatus};
use opsdeck_types::QueryParams;

/// The static overview cards from the product mock.
pub fn overview_stats() -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Users".to_string(),
            value: "1,234".to_string(),
            change: "+12% from last month".to_string(),
        },
        StatCard {
            title: "Active Sessions".to_string(),
            value: "456".to_string(),
            change: "+8% from last month".to_string(),
        },
        StatCard {
            title: "Growth Rate".to_string(),
            value: "23%".to_string(),
            change: "+5% from last month".to_string(),
        },
    ]
}

/// Build one frame of the shell. Pure; the handler calls it after every
/// state change.
pub fn build_dashboard(
    screen: Screen,
    status: &SessionStatus,
    params: &QueryParams,
    fetch: &FetchState,
    search_pending: bool,
) -> DashboardViewModel {
    let gate = match status {
        SessionStatus::Checking => GateViewModel::Checking,
        SessionStatus::SignedIn(session) => GateViewModel::Ready {
            name: session.name.clone(),
            email: session.email.clone(),
        },
        SessionStatus::SignedOut => GateViewModel::SignedOut,
    };

    DashboardViewModel {
        gate,
        screen,
        overview: OverviewViewModel {
            stats: overview_stats(),
        },
        users: UsersScreenViewModel {
            search: params.search.clone(),
            search_pending,
            role: params.role,
            status: params.status,
            fetch: build_fetch(params, fetch),
        },
        share: opsdeck_core::share::encode(params),
    }
}

fn build_fetch(params: &QueryParams, fetch: &FetchState) -> FetchViewModel {
    match fetch {
        FetchState::Idle => FetchViewModel::Idle,
        FetchState::Loading => FetchViewModel::Loading,
        FetchState::Failed(reason) => FetchViewModel::Error {
            message: reason.clone(),
        },
        FetchState::Success { users, total } => {
            if *total == 0 {
                return FetchViewModel::Empty;
            }
            let view = pagination::present(*total, params.page_size, params.page);
            let range_label = match view.row_range(params.page_size, *total) {
                Some((start, end)) => format!("Showing {} to {} of {} users", start, end, total),
                None => String::new(),
            };
            FetchViewModel::Table {
                rows: users.iter().map(super::users::user_row).collect(),
                pagination: PaginationViewModel {
                    page: view.current_page,
                    total_pages: view.total_pages,
                    has_prev: view.has_prev,
                    has_next: view.has_next,
                    range_label,
                    strip: view.page_strip(),
                },
            }
        }
    }
}
