use crate::args::{OutputFormat, UsersArgs};
use crate::context::CliContext;
use crate::presentation::{presenters, renderers};
use anyhow::Result;
use opsdeck_runtime::SessionStatus;
use opsdeck_types::QueryParams;

pub fn handle(ctx: &CliContext, args: &UsersArgs) -> Result<()> {
    if !matches!(ctx.session_store().check(), SessionStatus::SignedIn(_)) {
        anyhow::bail!("not signed in; run `opsdeck login` first");
    }

    let console = ctx.open_console()?;

    let mut params = match &args.query {
        Some(raw) => opsdeck_core::share::decode(raw)?,
        None => {
            let mut params = QueryParams::new()
                .search(args.search.clone())
                .page(args.page as usize);
            params.role = args.role.to_filter();
            params.status = args.status.to_filter();
            params
        }
    };
    params.page_size = console.config().page_size;

    if args.share {
        println!("{}", opsdeck_core::share::encode(&params));
        return Ok(());
    }

    let page = console.query_users(&params)?;
    let vm = presenters::users::build_list_view_model(&params, &page);

    match ctx.format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => renderers::console::render_users(&vm),
    }

    Ok(())
}
