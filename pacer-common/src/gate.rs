//! A gate that spaces operations at least a fixed interval apart.
use crate::config::GateConfig;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::{debug, trace};

/// Shared timer gating every operation that runs through it.
///
/// Clones share the same timer, so a gate can be handed to any number of tasks.
/// The timer starts at construction, so even the first operation waits out the rest
/// of the interval counted from [`Gate::new`]. The whole sequence of waiting, running the operation and recording its completion
/// happens while holding the lock, which hands out access in arrival order.
#[derive(Clone, Debug)]
pub struct Gate {
    min_interval: Duration,
    last_request: Arc<Mutex<Instant>>,
}

impl Gate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            min_interval: config.min_interval,
            last_request: Arc::new(Mutex::new(Instant::now())),
        }
    }
    pub fn with_interval(min_interval: Duration) -> Self {
        Self::new(GateConfig::new(min_interval))
    }
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
    /// Runs `operation` once the interval since the previous one has passed.
    ///
    /// The timestamp is recorded right before the operation starts and again when it
    /// finishes, whether it succeeded or not. If the returned future is dropped while
    /// the operation is in flight, the start timestamp still counts.
    pub async fn execute<F, Fut, R>(&self, operation: F) -> R
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        let mut last_request = self.last_request.lock().await;
        if let Some(wait) = self.remaining(*last_request, Instant::now()) {
            debug!(?wait, "waiting for request slot");
            sleep(wait).await;
        }
        let started = Self::record(&mut last_request);
        trace!("request admitted");
        let output = operation().await;
        let finished = Self::record(&mut last_request);
        trace!(elapsed = ?(finished - started), "request completed");
        output
    }
    /// Same as [`execute`](Self::execute), for callers on plain OS threads.
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context.
    pub fn execute_blocking<F, R>(&self, operation: F) -> R
    where
        F: FnOnce() -> R,
    {
        let mut last_request = self.last_request.blocking_lock();
        if let Some(wait) = self.remaining(*last_request, Instant::now()) {
            debug!(?wait, "waiting for request slot");
            std::thread::sleep(wait);
        }
        let started = Self::record(&mut last_request);
        trace!("request admitted");
        let output = operation();
        let finished = Self::record(&mut last_request);
        trace!(elapsed = ?(finished - started), "request completed");
        output
    }
    fn remaining(&self, last_request: Instant, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(last_request);
        self.min_interval.checked_sub(elapsed).filter(|wait| !wait.is_zero())
    }
    fn record(last_request: &mut Instant) -> Instant {
        // never moves backwards
        *last_request = (*last_request).max(Instant::now());
        *last_request
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}
