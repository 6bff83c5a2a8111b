use crate::args::OutputFormat;
use crate::context::CliContext;
use crate::presentation::view_models::SessionViewModel;
use anyhow::Result;
use opsdeck_runtime::SessionStatus;

pub fn handle(ctx: &CliContext) -> Result<()> {
    match ctx.session_store().check() {
        SessionStatus::SignedIn(session) => {
            let vm = SessionViewModel::from(&session);
            match ctx.format() {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
                OutputFormat::Plain => print!("{}", vm),
            }
            Ok(())
        }
        _ => anyhow::bail!("not signed in; run `opsdeck login` first"),
    }
}
