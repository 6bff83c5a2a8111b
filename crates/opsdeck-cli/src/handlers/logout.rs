use crate::context::CliContext;
use anyhow::Result;

pub fn handle(ctx: &CliContext) -> Result<()> {
    ctx.session_store().logout()?;
    println!("Signed out");
    Ok(())
}
