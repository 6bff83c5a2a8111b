use super::users::UserRow;
use opsdeck_types::{Role, Status};

/// Shell screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Overview,
    Users,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Overview, Screen::Users, Screen::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Overview => "Overview",
            Screen::Users => "Users",
            Screen::Settings => "Settings",
        }
    }

    pub fn next(&self) -> Screen {
        match self {
            Screen::Overview => Screen::Users,
            Screen::Users => Screen::Settings,
            Screen::Settings => Screen::Overview,
        }
    }

    pub fn prev(&self) -> Screen {
        match self {
            Screen::Overview => Screen::Settings,
            Screen::Users => Screen::Overview,
            Screen::Settings => Screen::Users,
        }
    }
}

/// Everything the renderer needs to draw one frame of the shell.
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub gate: GateViewModel,
    pub screen: Screen,
    pub overview: OverviewViewModel,
    pub users: UsersScreenViewModel,
    pub share: String,
}

/// Session presence as the shell sees it.
#[derive(Debug, Clone)]
pub enum GateViewModel {
    /// Presence still being determined; draw nothing substantive.
    Checking,
    /// Signed in; the header shows the account.
    Ready { name: String, email: String },
    /// Settled on no session; the shell is about to exit.
    SignedOut,
}

#[derive(Debug, Clone)]
pub struct OverviewViewModel {
    pub stats: Vec<StatCard>,
}

#[derive(Debug, Clone)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone)]
pub struct UsersScreenViewModel {
    /// Committed search text.
    pub search: String,
    /// A search edit is waiting out its quiet window.
    pub search_pending: bool,
    pub role: Option<Role>,
    pub status: Option<Status>,
    pub fetch: FetchViewModel,
}

/// Users-table body, one variant per visible fetch state. An empty result
/// renders its own message, distinct from loading and from failure.
#[derive(Debug, Clone)]
pub enum FetchViewModel {
    Idle,
    Loading,
    Empty,
    Table {
        rows: Vec<UserRow>,
        pagination: PaginationViewModel,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct PaginationViewModel {
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub range_label: String,
    pub strip: Vec<Option<usize>>,
}
