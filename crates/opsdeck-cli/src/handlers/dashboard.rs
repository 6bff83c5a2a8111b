//! Dashboard shell handler.
//!
//! The handler owns domain state: the session gate, the committed query
//! snapshot, the search debouncer and the fetch controller. The renderer on
//! its own thread owns UI-only state and reports intents back over a
//! channel. Search keystrokes commit to the query immediately but only
//! dispatch a fetch once the quiet window closes; role, status and page
//! changes dispatch at once.

use crate::context::CliContext;
use crate::presentation::presenters;
use crate::presentation::renderers::tui::{TuiEvent, TuiRenderer, UiIntent};
use crate::presentation::view_models::Screen;
use anyhow::Result;
use opsdeck_core::pagination;
use opsdeck_runtime::{
    Console, Debouncer, FetchComplete, FetchState, ListController, QueryState, SEARCH_DEBOUNCE,
    SessionStatus,
};
use opsdeck_types::QueryParams;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Idle tick for the handler loop; bounds how long a finished fetch can sit
/// in the channel before it is applied.
const TICK: Duration = Duration::from_millis(100);

pub fn handle(ctx: &CliContext, query: Option<&str>) -> Result<()> {
    let console = ctx.open_console()?;

    // Decode a shared query up front so a malformed link fails before the
    // terminal is taken over.
    let initial = match query {
        Some(raw) => opsdeck_core::share::decode(raw)?,
        None => QueryParams::new(),
    };

    let (event_tx, event_rx) = mpsc::channel();
    let (intent_tx, intent_rx) = mpsc::channel();

    let renderer = TuiRenderer::new(intent_tx);
    let tui_handle = thread::spawn(move || renderer.run(event_rx));

    let result = run_shell(&console, initial, event_tx, intent_rx);

    match tui_handle.join() {
        Ok(renderer_result) => renderer_result.and(result),
        Err(_) => {
            eprintln!("TUI thread panicked");
            result
        }
    }
}

fn run_shell(
    console: &Console,
    initial: QueryParams,
    tx: Sender<TuiEvent>,
    intents: Receiver<UiIntent>,
) -> Result<()> {
    let store = console.sessions();

    let (fetch_tx, fetch_rx) = mpsc::channel();
    let mut shell = ShellHandler::new(console, initial, tx.clone(), fetch_tx);

    // Gate frame: nothing substantive renders until the presence check
    // settles.
    shell.push_update();

    shell.status = store.check();
    shell.push_update();
    if !matches!(shell.status, SessionStatus::SignedIn(_)) {
        let _ = tx.send(TuiEvent::Fatal);
        anyhow::bail!("not signed in; run `opsdeck login` first");
    }

    // Initial load of the users view.
    shell.controller.dispatch(shell.query.snapshot());
    shell.push_update();

    loop {
        // Finished fetches first; stale completions change nothing.
        let mut dirty = false;
        while let Ok(completion) = fetch_rx.try_recv() {
            dirty |= shell.controller.apply(completion);
        }

        // A settled search window dispatches the committed snapshot.
        if shell.debouncer.poll(Instant::now()).is_some() {
            shell.controller.dispatch(shell.query.snapshot());
            dirty = true;
        }

        if dirty {
            shell.push_update();
        }

        match intents.recv_timeout(poll_timeout(shell.debouncer.deadline())) {
            Ok(UiIntent::Quit) => break,
            Ok(intent) => {
                shell.on_intent(intent);
                shell.push_update();
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn poll_timeout(deadline: Option<Instant>) -> Duration {
    match deadline {
        Some(deadline) => deadline.saturating_duration_since(Instant::now()).min(TICK),
        None => TICK,
    }
}

struct ShellHandler {
    screen: Screen,
    status: SessionStatus,
    query: QueryState,
    debouncer: Debouncer<String>,
    controller: ListController,
    page_size: usize,
    tx: Sender<TuiEvent>,
}

impl ShellHandler {
    fn new(
        console: &Console,
        initial: QueryParams,
        tx: Sender<TuiEvent>,
        fetch_tx: Sender<FetchComplete>,
    ) -> Self {
        let page_size = console.config().page_size;
        let initial_search = initial.search.clone();
        Self {
            screen: Screen::Overview,
            status: SessionStatus::Checking,
            query: QueryState::from_params(initial.page_size(page_size)),
            debouncer: Debouncer::new(initial_search, SEARCH_DEBOUNCE),
            controller: console.users_controller(fetch_tx),
            page_size,
            tx,
        }
    }

    fn push_update(&self) {
        let vm = presenters::dashboard::build_dashboard(
            self.screen,
            &self.status,
            self.query.params(),
            self.controller.state(),
            self.debouncer.is_pending(),
        );
        // The renderer may already be gone on shutdown.
        let _ = self.tx.send(TuiEvent::Update(Box::new(vm)));
    }

    fn on_intent(&mut self, intent: UiIntent) {
        match intent {
            UiIntent::ScreenSelected(screen) => self.screen = screen,
            UiIntent::SearchChanged(text) => {
                self.query.set_search(text.clone());
                self.debouncer.set(text, Instant::now());
            }
            UiIntent::RoleSelected(role) => {
                self.settle_search();
                let params = self.query.set_role(role);
                self.controller.dispatch(params);
            }
            UiIntent::StatusSelected(status) => {
                self.settle_search();
                let params = self.query.set_status(status);
                self.controller.dispatch(params);
            }
            UiIntent::NextPage => self.turn_page(1),
            UiIntent::PrevPage => self.turn_page(-1),
            UiIntent::Retry => {
                if self.controller.state().is_failed() {
                    self.controller.retry();
                }
            }
            // Handled by the loop before dispatching here.
            UiIntent::Quit => {}
        }
    }

    /// An immediate dispatch already carries the freshest search text, so
    /// the pending window must not fire a duplicate afterwards.
    fn settle_search(&mut self) {
        self.debouncer.settle(self.query.params().search.clone());
    }

    fn turn_page(&mut self, direction: i64) {
        let FetchState::Success { total, .. } = self.controller.state() else {
            return;
        };
        let view = pagination::present(*total, self.page_size, self.query.params().page);
        let target = if direction > 0 {
            if !view.has_next {
                return;
            }
            view.current_page + 1
        } else {
            if !view.has_prev {
                return;
            }
            view.current_page - 1
        };

        self.settle_search();
        if let Ok(params) = self.query.set_page(target) {
            self.controller.dispatch(params);
        }
    }
}
