use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

use tracing::{debug, trace};

use crate::{
    callback::{Callback, IntoCallback},
    guard::{CallbackGuard, Unsubscribe},
    id::{CallbackId, IdCounter},
};

/// An unordered signal. Every callback registered with [`Signal::add`] is invoked once per
/// [`Signal::dispatch`], in no particular order.
///
/// Cloning a Signal yields another handle to the same subscriber table and id counter.
pub struct Signal<Args = ()>(Arc<Inner<Args>>);

struct Inner<Args> {
    callbacks: RwLock<HashMap<CallbackId, Callback<Args>>>,
    next_id: IdCounter,
}

impl<Args> Clone for Signal<Args> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal").field("callbacks", &self.len()).finish()
    }
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self { Self::new() }
}

impl<Args> Signal<Args> {
    pub fn new() -> Self { Self(Arc::new(Inner { callbacks: RwLock::new(HashMap::new()), next_id: IdCounter::new() })) }

    /// Registers a callback and returns its id
    pub fn add<C>(&self, callback: C) -> CallbackId
    where C: IntoCallback<Args> {
        let id = self.0.next_id.next();
        self.0.callbacks.write().expect("callbacks lock is poisoned").insert(id, callback.into_callback());
        debug!("Signal added callback {}", id);
        id
    }

    /// Removes the callback with the given id. Unknown or already removed ids are ignored.
    pub fn remove(&self, id: CallbackId) { self.0.unsubscribe(id) }

    /// Removes every callback
    pub fn remove_all(&self) {
        // dropped after the lock is released: a callback may own a guard on this signal
        let removed = std::mem::take(&mut *self.0.callbacks.write().expect("callbacks lock is poisoned"));
        debug!("Signal removed all {} callbacks", removed.len());
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize { self.0.callbacks.read().expect("callbacks lock is poisoned").len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn contains(&self, id: CallbackId) -> bool { self.0.callbacks.read().expect("callbacks lock is poisoned").contains_key(&id) }
}

impl<Args> Signal<Args>
where Args: 'static
{
    /// Like [`Signal::add`], but the subscription only lives as long as the returned guard
    pub fn add_scoped<C>(&self, callback: C) -> CallbackGuard
    where C: IntoCallback<Args> {
        let id = self.add(callback);
        CallbackGuard::new(Arc::downgrade(&self.0) as Weak<dyn Unsubscribe>, id)
    }
}

impl<Args> Signal<Args>
where Args: Clone
{
    /// Invokes every registered callback with `args`.
    ///
    /// The callbacks are snapshotted before the first one runs: a callback may add or remove
    /// subscriptions (or dispatch again) and those changes apply from the next dispatch on.
    /// A panicking callback unwinds out of `dispatch` and the remaining callbacks are skipped.
    pub fn dispatch(&self, args: Args) {
        // Clone the callbacks to avoid holding the lock during callback execution
        let callbacks = {
            let callbacks = self.0.callbacks.read().expect("callbacks lock is poisoned");
            callbacks.values().cloned().collect::<Vec<_>>()
        };
        trace!("Signal dispatching to {} callbacks", callbacks.len());

        // clone the args for each callback except the last one
        if let Some((last, rest)) = callbacks.split_last() {
            for callback in rest {
                callback.call(args.clone());
            }
            last.call(args);
        }
    }
}

impl<Args> Unsubscribe for Inner<Args> {
    fn unsubscribe(&self, id: CallbackId) {
        // the lock guard is a temporary, so the removed callback drops after it is released
        let removed = self.callbacks.write().expect("callbacks lock is poisoned").remove(&id);
        if removed.is_some() {
            debug!("Signal removed callback {}", id);
        }
    }
}
