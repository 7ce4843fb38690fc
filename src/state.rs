//! Observable state container shared by view-models and screens.
//!
//! [`Published`] wraps a `tokio::sync::watch` channel. The sender is the one
//! place state is written; readers either take a snapshot or subscribe and
//! get woken on every replacement.

use futures::stream::{self, Stream};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug)]
struct Inner<T> {
    tx: watch::Sender<T>,
    version: AtomicU64,
}

/// A value that is replaced wholesale and observed by subscribers.
///
/// Clones share the same underlying value.
///
/// # Example
///
/// ```
/// use dessert_book::state::Published;
///
/// let names = Published::new(Vec::<String>::new());
/// let rx = names.subscribe();
/// names.replace(vec!["Apple Pie".to_string()]);
/// assert_eq!(rx.borrow().len(), 1);
/// assert_eq!(names.version(), 1);
/// ```
#[derive(Debug)]
pub struct Published<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Published<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Published<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Published<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            inner: Arc::new(Inner {
                tx,
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Replace the value and notify subscribers.
    ///
    /// The version is bumped while the channel's write lock is held, so a
    /// subscriber woken by this replacement never reads a stale version.
    pub fn replace(&self, value: T) {
        self.inner.tx.send_modify(|current| {
            self.inner.version.fetch_add(1, Ordering::SeqCst);
            *current = value;
        });
    }

    /// Read the current value in place.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.tx.borrow())
    }

    /// Number of replacements since construction.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::SeqCst)
    }

    /// Receiver that observes every subsequent replacement.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.inner.tx.subscribe()
    }

    /// Number of live receivers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.tx.receiver_count()
    }
}

impl<T: Clone> Published<T> {
    /// Clone of the current value.
    pub fn snapshot(&self) -> T {
        self.inner.tx.borrow().clone()
    }
}

impl<T: Clone + Send + Sync + 'static> Published<T> {
    /// Stream of values published after this call.
    ///
    /// Intermediate values may be skipped if the consumer is slower than
    /// the producer; the latest one is always delivered.
    pub fn updates(&self) -> impl Stream<Item = T> + Send + 'static {
        stream::unfold(self.subscribe(), |mut rx| async move {
            rx.changed().await.ok()?;
            let value = rx.borrow_and_update().clone();
            Some((value, rx))
        })
    }
}
