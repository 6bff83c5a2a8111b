use super::{RoleFilterArg, StatusFilterArg};
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with mock credentials
    Login {
        /// Email address; the display name is its local part
        #[arg(long)]
        email: String,

        /// Password, minimum six characters
        #[arg(long)]
        password: String,
    },

    /// Remove the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Query the user directory once and print the result
    Users(UsersArgs),

    /// Open the interactive dashboard (the default when no command is given)
    Dashboard {
        /// Start from a shared query string, e.g. "search=grace&page=2"
        #[arg(long)]
        query: Option<String>,
    },
}

#[derive(Args)]
pub struct UsersArgs {
    /// Run a shared query string instead of the individual filter flags
    #[arg(long, conflicts_with_all = ["search", "role", "status", "page"])]
    pub query: Option<String>,

    /// Free-text search over name and email
    #[arg(long, default_value = "")]
    pub search: String,

    /// Role filter
    #[arg(long, value_enum, default_value = "all")]
    pub role: RoleFilterArg,

    /// Status filter
    #[arg(long, value_enum, default_value = "all")]
    pub status: StatusFilterArg,

    /// 1-based page number
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Print the shareable query string instead of fetching
    #[arg(long)]
    pub share: bool,
}
