//! Process-wide countdown store.
//!
//! Owns the only mutable [`TimerState`]. Every change goes through
//! [`TimerReducer`] via a FIFO queue drained by one caller at a time, so a
//! listener that dispatches while being notified never interleaves with the
//! transition that notified it: its action is queued and applied once the
//! current notification round has finished.

mod subscription;

pub use subscription::Subscription;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::error::TimerError;
use crate::mvi::Reducer;
use crate::timer::{RawAction, TimerIntent, TimerReducer, TimerState};

pub(crate) type Listener = Arc<dyn Fn(&TimerState) + Send + Sync>;
type Guard = Box<dyn FnOnce(&TimerState) -> bool + Send>;

struct Queued {
    intent: TimerIntent,
    /// Evaluated against the state at apply time; `false` drops the intent.
    guard: Option<Guard>,
}

pub(crate) struct StoreInner {
    state: RwLock<TimerState>,
    queue: Mutex<VecDeque<Queued>>,
    /// Held by whichever caller is draining the queue.
    draining: Mutex<()>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
}

impl StoreInner {
    pub(crate) fn remove_listener(&self, id: u64) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }
}

/// Shared handle to the countdown store. Cloning is cheap.
#[derive(Clone)]
pub struct TimerStore {
    inner: Arc<StoreInner>,
}

impl Default for TimerStore {
    fn default() -> Self {
        Self::new(TimerState::default())
    }
}

impl TimerStore {
    pub fn new(initial: TimerState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial),
                queue: Mutex::new(VecDeque::new()),
                draining: Mutex::new(()),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> TimerState {
        *self.inner.state.read()
    }

    /// Validate and apply an intent.
    ///
    /// Configuration intents with out-of-range values are rejected before
    /// they reach the queue; the state is left untouched.
    pub fn dispatch(&self, intent: TimerIntent) -> Result<(), TimerError> {
        self.submit(intent, None)
    }

    /// Apply `intent` only if `guard` holds for the state it would be
    /// applied to.
    ///
    /// The guard runs inside the drain loop, so no other transition can
    /// slip in between the check and the apply.
    pub fn dispatch_if<G>(&self, guard: G, intent: TimerIntent) -> Result<(), TimerError>
    where
        G: FnOnce(&TimerState) -> bool + Send + 'static,
    {
        self.submit(intent, Some(Box::new(guard)))
    }

    /// Decode and apply a raw action envelope.
    ///
    /// Envelopes that do not decode are ignored.
    pub fn dispatch_raw(&self, action: RawAction) -> Result<(), TimerError> {
        match action.decode() {
            Some(intent) => self.dispatch(intent),
            None => {
                tracing::debug!(kind = %action.kind, "Ignoring unknown action");
                Ok(())
            }
        }
    }

    /// Register a listener called with the new state after every applied
    /// intent. The listener stays registered until the returned guard is
    /// dropped or [`Subscription::unsubscribe`] is called.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&TimerState) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        Subscription::new(Arc::downgrade(&self.inner), id)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    fn submit(&self, intent: TimerIntent, guard: Option<Guard>) -> Result<(), TimerError> {
        if let Err(err) = intent.validate() {
            tracing::warn!(action = intent.name(), error = %err, "Rejected configuration");
            return Err(err);
        }
        self.inner.queue.lock().push_back(Queued { intent, guard });
        self.drain();
        Ok(())
    }

    fn drain(&self) {
        loop {
            let Some(token) = self.inner.draining.try_lock() else {
                // Someone else (possibly our own caller further up the
                // stack) is draining and will pick the intent up.
                return;
            };
            loop {
                let next = self.inner.queue.lock().pop_front();
                let Some(queued) = next else {
                    break;
                };
                self.apply(queued);
            }
            drop(token);
            // An intent pushed between the last pop and the unlock would
            // otherwise be stranded.
            if self.inner.queue.lock().is_empty() {
                return;
            }
        }
    }

    fn apply(&self, queued: Queued) {
        let current = self.state();
        if let Some(guard) = queued.guard {
            if !guard(&current) {
                tracing::trace!(action = queued.intent.name(), "Guard rejected action");
                return;
            }
        }

        let next = TimerReducer::reduce(current, queued.intent);
        *self.inner.state.write() = next;
        tracing::trace!(
            action = queued.intent.name(),
            current_time = next.current_time,
            is_running = next.is_running,
            "Applied action"
        );

        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }
}
