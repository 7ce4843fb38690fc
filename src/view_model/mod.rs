//! View-models: fetch orchestration and published state for each screen.
//!
//! Each fetch runs as its own Tokio task so the caller never blocks. The
//! task writes its outcome through a [`Published`](crate::state::Published)
//! value, which is the single point where screen state changes.
//!
//! Overlapping fetches of the same kind are not coordinated: whichever task
//! finishes last overwrites the published value.

mod dessert;
mod meal;

pub use dessert::{prepare_desserts, DessertViewModel};
pub use meal::MealViewModel;

use std::future::Future;
use tokio::task::JoinHandle;

/// Handle to an in-flight fetch.
///
/// Dropping the handle detaches the task; it still runs to completion.
#[derive(Debug)]
pub struct FetchHandle {
    task: JoinHandle<()>,
}

impl FetchHandle {
    /// Spawn `future` on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            task: tokio::spawn(future),
        }
    }

    /// Abort the fetch. A cancelled fetch publishes nothing.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the fetch to settle.
    ///
    /// Returns `true` if it ran to completion and `false` if it was cancelled.
    pub async fn join(self) -> bool {
        match self.task.await {
            Ok(()) => true,
            Err(err) if err.is_cancelled() => false,
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}
