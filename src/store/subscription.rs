use std::sync::Weak;

use super::StoreInner;

/// Registration handle returned by [`TimerStore::subscribe`](super::TimerStore::subscribe).
///
/// Dropping the handle removes the listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: u64,
}

impl Subscription {
    pub(super) fn new(store: Weak<StoreInner>, id: u64) -> Self {
        Self { store, id }
    }

    /// Remove the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    fn release(&self) -> bool {
        match self.store.upgrade() {
            Some(inner) => inner.remove_listener(self.id),
            None => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if !self.release() {
            tracing::trace!(id = self.id, "Subscription outlived its store");
        }
    }
}
