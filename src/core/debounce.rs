//! Trailing-edge debouncing with an optional leading call.
//!
//! Every [`Debouncer::call`] aborts the pending timer task and schedules a new
//! one `interval` later, so a burst of calls collapses into a single trailing
//! invocation carrying the arguments of the last call. With `immediate`
//! enabled, a call made while nothing is pending also fires synchronously;
//! the trailing call is still scheduled.
//!
//! Timers are tokio tasks, so `call` must run inside a tokio runtime.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

pub struct Debouncer<T> {
    callback: Callback<T>,
    interval: Duration,
    immediate: bool,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + 'static,
{
    pub fn new<F>(callback: F, interval: Duration) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            interval,
            immediate: false,
            pending: None,
        }
    }

    #[must_use]
    pub const fn with_immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    pub fn call(&mut self, args: T) {
        let call_now = self.immediate && !self.is_pending();
        self.cancel();

        if call_now {
            self.schedule(args.clone());
            tracing::debug!("debounce: leading call");
            (self.callback)(args);
        } else {
            self.schedule(args);
        }
    }

    /// Drops the pending trailing call, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn schedule(&mut self, args: T) {
        let callback = Arc::clone(&self.callback);
        let interval = self.interval;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            tracing::debug!("debounce: trailing call");
            callback(args);
        }));
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("interval", &self.interval)
            .field("immediate", &self.immediate)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}
