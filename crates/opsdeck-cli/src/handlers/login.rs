use crate::context::CliContext;
use anyhow::Result;

pub fn handle(ctx: &CliContext, email: &str, password: &str) -> Result<()> {
    let session = ctx.session_store().login(email, password)?;
    println!("Signed in as {} <{}>", session.name, session.email);
    Ok(())
}
