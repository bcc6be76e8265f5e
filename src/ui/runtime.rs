//! Observable state container and lifecycle-scoped task set.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinSet;

use super::mvi::Reducer;

/// Holds the current state of one screen and publishes every change.
///
/// Every update replaces the whole state. Concurrent tasks may dispatch in
/// any order; the last write wins.
pub struct Store<R: Reducer> {
    tx: Arc<watch::Sender<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx: Arc::new(tx),
            _reducer: PhantomData,
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> R::State {
        self.tx.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }

    /// Replace the state with `f(current)`.
    pub fn apply(&self, f: impl FnOnce(R::State) -> R::State) {
        self.tx.send_if_modified(|state| {
            let next = f(std::mem::take(state));
            let changed = *state != next;
            *state = next;
            changed
        });
    }

    pub fn dispatch(&self, intent: R::Intent) {
        self.apply(|state| R::reduce(state, intent));
    }
}

/// Background work owned by one screen.
///
/// Dropping the scope aborts everything still running, so results of a
/// screen that is gone are never applied.
#[derive(Default)]
pub struct TaskScope {
    tasks: Mutex<JoinSet<()>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `fut` on the current runtime, owned by this scope.
    pub fn launch<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.lock().spawn(fut);
    }

    /// Number of tasks that have not been reaped yet.
    pub fn in_flight(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Wait until every launched task has finished, including tasks launched
    /// while waiting.
    pub async fn settle(&self) {
        loop {
            let mut batch = std::mem::take(&mut *self.tasks.lock());
            if batch.is_empty() {
                return;
            }
            while let Some(joined) = batch.join_next().await {
                if let Err(err) = joined {
                    if err.is_panic() {
                        tracing::error!(error = %err, "screen task panicked");
                    }
                }
            }
        }
    }

    pub fn abort_all(&self) {
        self.tasks.lock().abort_all();
    }
}

/// Common surface of every screen's view model.
pub trait ViewModel {
    type Reducer: Reducer;

    fn store(&self) -> &Store<Self::Reducer>;

    fn scope(&self) -> &TaskScope;

    fn state(&self) -> <Self::Reducer as Reducer>::State {
        self.store().snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<<Self::Reducer as Reducer>::State> {
        self.store().subscribe()
    }

    /// Resolve once all pending work of this screen is done.
    fn settle(&self) -> impl Future<Output = ()> + Send
    where
        Self: Sync,
    {
        self.scope().settle()
    }
}
