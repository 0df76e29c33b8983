//! Asynchronous item loading with stale-result suppression.
//!
//! [`ItemsBinder`] runs item fetches on the Tokio runtime and tracks
//! their lifecycle as an [`AsyncState`]. Each call to
//! [`reload`](ItemsBinder::reload) supersedes any fetch still in
//! flight: completions are tagged with a generation counter and a
//! completion whose generation is not the latest is discarded, so a
//! slow earlier response can never overwrite a newer one.
//!
//! Completions are delivered through a channel and applied only when
//! the owner calls [`pump`](ItemsBinder::pump) (non-blocking, for hosts
//! with their own tick) or [`settle`](ItemsBinder::settle) (awaits the
//! in-flight fetch). The binder never mutates state from the spawned
//! task, so all observable transitions happen on the owner's thread.
//!
//! Dropping the binder closes the channel; in-flight fetches finish on
//! the runtime but their results go nowhere.
//!
//! # Example
//!
//! ```
//! use dropkit::binder::{AsyncState, ItemsBinder};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut binder: ItemsBinder<String> = ItemsBinder::new();
//! binder.reload(async { Ok(vec!["Apple".to_string(), "Orange".to_string()]) });
//! binder.settle().await;
//!
//! assert!(matches!(binder.state(), AsyncState::Success(_)));
//! assert_eq!(binder.items(), Some(&["Apple".to_string(), "Orange".to_string()][..]));
//! # }
//! ```

use std::future::Future;

use tokio::sync::mpsc;

use dropkit_core::Signal;
use dropkit_core::logging::targets;

use crate::error::{FetchError, FetchResult};

/// Lifecycle phase of the binder, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStatus {
    /// No fetch has been started.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Success,
    /// The latest fetch failed.
    Failure,
}

/// Lifecycle state of the latest fetch, with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncState<T> {
    /// No fetch has been started.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded with these items.
    Success(Vec<T>),
    /// The latest fetch failed.
    Failure(FetchError),
}

impl<T> AsyncState<T> {
    /// Get the status of this state, without the payload.
    pub fn status(&self) -> BindingStatus {
        match self {
            AsyncState::Idle => BindingStatus::Idle,
            AsyncState::Loading => BindingStatus::Loading,
            AsyncState::Success(_) => BindingStatus::Success,
            AsyncState::Failure(_) => BindingStatus::Failure,
        }
    }
}

struct Completion<T> {
    generation: u64,
    result: FetchResult<Vec<T>>,
}

/// Binds an asynchronous item source to a selection controller.
pub struct ItemsBinder<T: Send + 'static> {
    state: AsyncState<T>,
    generation: u64,
    tx: mpsc::UnboundedSender<Completion<T>>,
    rx: mpsc::UnboundedReceiver<Completion<T>>,

    /// Emitted when the binding status changes.
    pub status_changed: Signal<BindingStatus>,
}

impl<T: Send + 'static> Default for ItemsBinder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> ItemsBinder<T> {
    /// Create an idle binder.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: AsyncState::Idle,
            generation: 0,
            tx,
            rx,
            status_changed: Signal::new(),
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &AsyncState<T> {
        &self.state
    }

    /// Get the current status.
    pub fn status(&self) -> BindingStatus {
        self.state.status()
    }

    /// Check whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, AsyncState::Loading)
    }

    /// Get the successfully loaded items, if the latest fetch succeeded.
    pub fn items(&self) -> Option<&[T]> {
        match &self.state {
            AsyncState::Success(items) => Some(items),
            _ => None,
        }
    }

    /// Get the fetch error, if the latest fetch failed.
    pub fn error(&self) -> Option<&FetchError> {
        match &self.state {
            AsyncState::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Start a fetch, superseding any fetch still in flight.
    ///
    /// The future runs on the Tokio runtime; its result is buffered
    /// until [`pump`](Self::pump) or [`settle`](Self::settle) applies
    /// it. A superseded fetch still runs to completion but its result
    /// is discarded.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime context.
    pub fn reload<F>(&mut self, fetch: F)
    where
        F: Future<Output = FetchResult<Vec<T>>> + Send + 'static,
    {
        self.generation += 1;
        let generation = self.generation;
        tracing::debug!(target: targets::BINDER, generation, "starting fetch");

        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = fetch.await;
            // The binder may have been dropped; the result goes nowhere.
            let _ = tx.send(Completion { generation, result });
        });

        self.set_state(AsyncState::Loading);
    }

    /// Apply any buffered completions without blocking.
    ///
    /// Returns `true` if a fresh completion was applied. Stale
    /// completions are drained and discarded.
    pub fn pump(&mut self) -> bool {
        let mut applied = false;
        while let Ok(completion) = self.rx.try_recv() {
            applied |= self.apply(completion);
        }
        applied
    }

    /// Await completions until the in-flight fetch settles.
    ///
    /// Returns immediately if no fetch is in flight. Stale completions
    /// received while waiting are discarded.
    pub async fn settle(&mut self) {
        while self.is_loading() {
            match self.rx.recv().await {
                Some(completion) => {
                    self.apply(completion);
                }
                // The sender half lives in self, so this is unreachable,
                // but bail rather than spin.
                None => break,
            }
        }
    }

    fn apply(&mut self, completion: Completion<T>) -> bool {
        if completion.generation != self.generation {
            tracing::warn!(
                target: targets::BINDER,
                generation = completion.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        match completion.result {
            Ok(items) => {
                tracing::debug!(target: targets::BINDER, count = items.len(), "fetch succeeded");
                self.set_state(AsyncState::Success(items));
            }
            Err(err) => {
                tracing::warn!(target: targets::BINDER, error = %err, "fetch failed");
                self.set_state(AsyncState::Failure(err));
            }
        }
        true
    }

    fn set_state(&mut self, state: AsyncState<T>) {
        let old_status = self.state.status();
        let new_status = state.status();
        self.state = state;
        if old_status != new_status {
            self.status_changed.emit(new_status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_initial_state() {
        let binder: ItemsBinder<String> = ItemsBinder::new();
        assert_eq!(binder.status(), BindingStatus::Idle);
        assert!(binder.items().is_none());
        assert!(binder.error().is_none());
        assert!(!binder.is_loading());
    }

    #[tokio::test]
    async fn test_reload_success() {
        let mut binder: ItemsBinder<String> = ItemsBinder::new();
        binder.reload(async { Ok(vec!["a".to_string(), "b".to_string()]) });
        assert!(binder.is_loading());

        binder.settle().await;
        assert_eq!(binder.status(), BindingStatus::Success);
        assert_eq!(binder.items(), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[tokio::test]
    async fn test_reload_failure() {
        let mut binder: ItemsBinder<String> = ItemsBinder::new();
        binder.reload(async { Err(FetchError::Timeout) });
        binder.settle().await;

        assert_eq!(binder.status(), BindingStatus::Failure);
        assert_eq!(binder.error(), Some(&FetchError::Timeout));
        assert!(binder.items().is_none());
    }

    #[tokio::test]
    async fn test_stale_result_discarded() {
        let mut binder: ItemsBinder<String> = ItemsBinder::new();

        // Slow first fetch, superseded by a fast second one.
        binder.reload(async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(vec!["stale".to_string()])
        });
        binder.reload(async { Ok(vec!["fresh".to_string()]) });

        binder.settle().await;
        assert_eq!(binder.items(), Some(&["fresh".to_string()][..]));

        // Let the slow fetch complete, then confirm its result is dropped.
        tokio::time::sleep(Duration::from_millis(100)).await;
        let applied = binder.pump();
        assert!(!applied);
        assert_eq!(binder.items(), Some(&["fresh".to_string()][..]));
    }

    #[tokio::test]
    async fn test_pump_without_completion() {
        let mut binder: ItemsBinder<i32> = ItemsBinder::new();
        assert!(!binder.pump());

        binder.reload(async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(vec![1])
        });
        // Nothing buffered yet: state stays Loading.
        assert!(!binder.pump());
        assert!(binder.is_loading());

        binder.settle().await;
        assert_eq!(binder.items(), Some(&[1][..]));
    }

    #[tokio::test]
    async fn test_settle_without_fetch_returns_immediately() {
        let mut binder: ItemsBinder<i32> = ItemsBinder::new();
        binder.settle().await;
        assert_eq!(binder.status(), BindingStatus::Idle);
    }

    #[tokio::test]
    async fn test_status_signal() {
        let mut binder: ItemsBinder<i32> = ItemsBinder::new();
        let transitions = Arc::new(AtomicUsize::new(0));
        let transitions_clone = transitions.clone();
        binder.status_changed.connect(move |_| {
            transitions_clone.fetch_add(1, Ordering::SeqCst);
        });

        binder.reload(async { Ok(vec![1, 2]) });
        binder.settle().await;

        // Idle -> Loading -> Success.
        assert_eq!(transitions.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_then_success() {
        let mut binder: ItemsBinder<i32> = ItemsBinder::new();
        binder.reload(async { Err(FetchError::Transport("down".into())) });
        binder.settle().await;
        assert_eq!(binder.status(), BindingStatus::Failure);

        binder.reload(async { Ok(vec![7]) });
        binder.settle().await;
        assert_eq!(binder.status(), BindingStatus::Success);
        assert_eq!(binder.items(), Some(&[7][..]));
    }
}
