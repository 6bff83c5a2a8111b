use crate::args::{Cli, Commands};
use crate::context::CliContext;
use crate::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = CliContext::from_cli(&cli)?;

    match cli.command.unwrap_or(Commands::Dashboard { query: None }) {
        Commands::Login { email, password } => handlers::login::handle(&ctx, &email, &password),
        Commands::Logout => handlers::logout::handle(&ctx),
        Commands::Whoami => handlers::whoami::handle(&ctx),
        Commands::Users(args) => handlers::users::handle(&ctx, &args),
        Commands::Dashboard { query } => handlers::dashboard::handle(&ctx, query.as_deref()),
    }
}
