use clap::ValueEnum;
use opsdeck_types::{Role, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Role filter accepted on the command line; `all` is the match-all
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleFilterArg {
    All,
    Admin,
    User,
    Viewer,
}

impl RoleFilterArg {
    pub fn to_filter(self) -> Option<Role> {
        match self {
            RoleFilterArg::All => None,
            RoleFilterArg::Admin => Some(Role::Admin),
            RoleFilterArg::User => Some(Role::User),
            RoleFilterArg::Viewer => Some(Role::Viewer),
        }
    }
}

/// Status filter accepted on the command line; `all` is the match-all
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilterArg {
    All,
    Active,
    Inactive,
    Pending,
}

impl StatusFilterArg {
    pub fn to_filter(self) -> Option<Status> {
        match self {
            StatusFilterArg::All => None,
            StatusFilterArg::Active => Some(Status::Active),
            StatusFilterArg::Inactive => Some(Status::Inactive),
            StatusFilterArg::Pending => Some(Status::Pending),
        }
    }
}
