//! Tick scheduling.
//!
//! Watches the store and keeps exactly one tick chain alive while the
//! countdown runs. A chain is a tokio task that sleeps for the tick interval,
//! then dispatches `Tick` through [`TimerStore::dispatch_if`] so the
//! "still running, still the current chain" check happens atomically with the
//! apply. Any change to `(is_running, duration)` aborts the pending chain and
//! bumps the epoch, so a step that has already woken up is dropped too.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::store::{Subscription, TimerStore};
use crate::timer::{TimerIntent, TimerState};

/// Drives `Tick` intents into a [`TimerStore`] while its countdown runs.
///
/// Dropping the scheduler cancels the pending step; no tick is dispatched
/// afterwards.
pub struct TickScheduler {
    core: Arc<Mutex<SchedulerCore>>,
    _subscription: Subscription,
}

struct SchedulerCore {
    store: TimerStore,
    runtime: Handle,
    epoch: Arc<AtomicU64>,
    /// Tick interval of the live chain, `None` when idle.
    armed: Option<u64>,
    pending: Option<JoinHandle<()>>,
    detached: bool,
}

impl TickScheduler {
    /// Attach to `store`, spawning chains on `runtime`.
    ///
    /// If the countdown is already running a chain starts immediately.
    pub fn attach(store: &TimerStore, runtime: Handle) -> Self {
        let core = Arc::new(Mutex::new(SchedulerCore {
            store: store.clone(),
            runtime,
            epoch: Arc::new(AtomicU64::new(0)),
            armed: None,
            pending: None,
            detached: false,
        }));

        let weak = Arc::downgrade(&core);
        let subscription = store.subscribe(move |state| {
            if let Some(core) = weak.upgrade() {
                core.lock().sync(state);
            }
        });
        let initial = store.state();
        core.lock().sync(&initial);

        Self {
            core,
            _subscription: subscription,
        }
    }

    /// Whether a tick chain is currently scheduled.
    pub fn is_armed(&self) -> bool {
        self.core.lock().armed.is_some()
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        let mut core = self.core.lock();
        core.detached = true;
        core.cancel();
        tracing::debug!("Tick scheduler detached");
    }
}

impl SchedulerCore {
    fn sync(&mut self, state: &TimerState) {
        if self.detached {
            return;
        }
        let wanted = state.is_running.then_some(state.duration);
        if wanted == self.armed {
            return;
        }
        self.cancel();
        if let Some(duration) = wanted {
            self.arm(duration);
        }
    }

    fn cancel(&mut self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        if self.armed.take().is_some() {
            tracing::trace!("Tick chain cancelled");
        }
    }

    fn arm(&mut self, duration: u64) {
        let epoch = self.epoch.load(Ordering::SeqCst);
        let chain = run_chain(
            self.store.clone(),
            Arc::clone(&self.epoch),
            epoch,
            duration,
        );
        self.pending = Some(self.runtime.spawn(chain));
        self.armed = Some(duration);
        tracing::debug!(duration_ms = duration, epoch, "Tick chain armed");
    }
}

async fn run_chain(store: TimerStore, live_epoch: Arc<AtomicU64>, epoch: u64, mut duration: u64) {
    loop {
        tokio::time::sleep(Duration::from_millis(duration)).await;

        if live_epoch.load(Ordering::SeqCst) != epoch {
            tracing::trace!(epoch, "Dropping stale tick");
            return;
        }

        let check = Arc::clone(&live_epoch);
        let result = store.dispatch_if(
            move |state| state.is_running && check.load(Ordering::SeqCst) == epoch,
            TimerIntent::Tick,
        );
        if let Err(err) = result {
            tracing::warn!(error = %err, "Tick dispatch failed");
            return;
        }

        let latest = store.state();
        if !latest.is_running {
            return;
        }
        duration = latest.duration;
    }
}
