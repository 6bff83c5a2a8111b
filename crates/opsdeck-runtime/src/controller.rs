use opsdeck_providers::UserDirectory;
use opsdeck_types::{QueryParams, User};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

/// Generic message shown when a directory query fails. The underlying error
/// stays at the controller boundary and is not surfaced to the view.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load users";

/// Visible state of the users list. Exactly one variant is active at a time
/// and only the owning event loop writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
    Success { users: Vec<User>, total: usize },
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }
}

/// Completion of a directory request, tagged with the generation it was
/// issued under.
#[derive(Debug)]
pub struct FetchComplete {
    pub generation: u64,
    pub result: opsdeck_providers::Result<opsdeck_types::UserPage>,
}

/// Orchestrates directory requests for the users list.
///
/// Each [`dispatch`](ListController::dispatch) stamps the request with a
/// fresh generation and runs it on a worker thread; the completion comes
/// back through the owner's channel and is applied with
/// [`apply`](ListController::apply), which drops any completion that is not
/// the latest generation. Requests are never cancelled or queued: an
/// overtaken response simply loses the generation comparison, so overlapping
/// requests cannot race the visible state. A production directory call would
/// also want a deadline; the mock one cannot hang.
pub struct ListController {
    directory: Arc<dyn UserDirectory>,
    completions: Sender<FetchComplete>,
    state: FetchState,
    generation: u64,
    last_params: Option<QueryParams>,
}

impl ListController {
    pub fn new(directory: Arc<dyn UserDirectory>, completions: Sender<FetchComplete>) -> Self {
        Self {
            directory,
            completions,
            state: FetchState::Idle,
            generation: 0,
            last_params: None,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Generation of the most recently issued request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue a request for `params`.
    ///
    /// The visible state flips to `Loading` immediately, even if an earlier
    /// request is still in flight.
    pub fn dispatch(&mut self, params: QueryParams) {
        self.generation += 1;
        let generation = self.generation;
        self.state = FetchState::Loading;
        self.last_params = Some(params.clone());

        let directory = self.directory.clone();
        let completions = self.completions.clone();
        thread::spawn(move || {
            let result = directory.query(&params);
            // The owner may already be gone on shutdown.
            let _ = completions.send(FetchComplete { generation, result });
        });
    }

    /// Re-issue the last request after a failure. Returns false when there is
    /// nothing to retry.
    pub fn retry(&mut self) -> bool {
        match self.last_params.clone() {
            Some(params) => {
                self.dispatch(params);
                true
            }
            None => false,
        }
    }

    /// Apply a completion from the channel.
    ///
    /// Returns true when the visible state changed; stale completions leave
    /// it untouched and are reported as false.
    pub fn apply(&mut self, completion: FetchComplete) -> bool {
        if completion.generation != self.generation {
            return false;
        }
        self.state = match completion.result {
            Ok(page) => FetchState::Success {
                users: page.users,
                total: page.total,
            },
            Err(_) => FetchState::Failed(FETCH_ERROR_MESSAGE.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_providers::MemoryDirectory;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    fn controller() -> (ListController, std::sync::mpsc::Receiver<FetchComplete>) {
        let (tx, rx) = channel();
        let directory = Arc::new(MemoryDirectory::with_latency(Duration::ZERO));
        (ListController::new(directory, tx), rx)
    }

    #[test]
    fn test_starts_idle() {
        let (controller, _rx) = controller();
        assert_eq!(*controller.state(), FetchState::Idle);
    }

    #[test]
    fn test_dispatch_flips_to_loading_immediately() {
        let (mut controller, _rx) = controller();
        controller.dispatch(QueryParams::new());
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_completion_lands_in_success() {
        let (mut controller, rx) = controller();
        controller.dispatch(QueryParams::new());

        let completion = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(controller.apply(completion));

        match controller.state() {
            FetchState::Success { users, total } => {
                assert_eq!(users.len(), 10);
                assert_eq!(*total, 12);
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_result_is_success_not_failure() {
        let (mut controller, rx) = controller();
        controller.dispatch(QueryParams::new().search("zzz-no-match"));

        let completion = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        controller.apply(completion);

        assert_eq!(
            *controller.state(),
            FetchState::Success {
                users: vec![],
                total: 0
            }
        );
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let (mut controller, _rx) = controller();
        controller.dispatch(QueryParams::new());
        let old_generation = controller.generation();
        controller.dispatch(QueryParams::new().search("grace"));

        let stale = FetchComplete {
            generation: old_generation,
            result: Ok(opsdeck_types::UserPage {
                users: vec![],
                total: 99,
            }),
        };
        assert!(!controller.apply(stale));
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_retry_without_a_prior_dispatch_is_a_no_op() {
        let (mut controller, _rx) = controller();
        assert!(!controller.retry());
        assert_eq!(*controller.state(), FetchState::Idle);
    }
}
