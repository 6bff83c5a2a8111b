use std::time::{Duration, Instant};

/// Quiet period applied to the users search box.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Quiet-period debouncer for a rapidly changing input value.
///
/// The debouncer is deadline-based rather than timer-based: the owner records
/// changes with [`set`](Debouncer::set), sizes its poll timeout from
/// [`deadline`](Debouncer::deadline), and collects the settled value with
/// [`poll`](Debouncer::poll). Every call takes the current instant
/// explicitly, so tests drive the clock without sleeping.
///
/// The initial value counts as already emitted; only later changes wait out
/// the quiet window. A change inside the window replaces the pending value
/// and restarts the wait. Dropping the debouncer, or calling
/// [`cancel`](Debouncer::cancel), discards any pending emission.
#[derive(Debug)]
pub struct Debouncer<T> {
    committed: T,
    pending: Option<(T, Instant)>,
    quiet: Duration,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T, quiet: Duration) -> Self {
        Self {
            committed: initial,
            pending: None,
            quiet,
        }
    }

    /// Record a change observed at `now`.
    ///
    /// Setting the value back to the committed one clears the window instead
    /// of scheduling a no-op emission.
    pub fn set(&mut self, value: T, now: Instant) {
        if value == self.committed {
            self.pending = None;
            return;
        }
        self.pending = Some((value, now + self.quiet));
    }

    /// Commit and return the pending value if its quiet window has elapsed
    /// by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(&self.pending, Some((_, deadline)) if *deadline <= now);
        if !due {
            return None;
        }
        let (value, _) = self.pending.take()?;
        self.committed = value.clone();
        Some(value)
    }

    /// Deadline of the pending emission, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Whether an emission is waiting out its quiet window.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard any pending emission without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Record `value` as already observed, clearing any pending emission.
    ///
    /// Used when the owner ships the value through another path before the
    /// quiet window closes, so the window does not fire a duplicate.
    pub fn settle(&mut self, value: T) {
        self.committed = value;
        self.pending = None;
    }

    /// The last committed value.
    pub fn committed(&self) -> &T {
        &self.committed
    }
}
