use std::cmp::Ordering;
use std::sync::{Arc, RwLock, Weak};

use tracing::{debug, trace};

use crate::{
    callback::{Callback, IntoCallback},
    guard::{CallbackGuard, Unsubscribe},
    id::{CallbackId, IdCounter},
};

/// Ordering key for [`PrioritySignal`]. Higher priorities are dispatched first.
pub type Priority = i32;

/// Priority used by [`PrioritySignal::add`]
pub const DEFAULT_PRIORITY: Priority = 0;

/// A callback together with its priority and id
pub struct PrioritizedCallback<Args> {
    callback: Callback<Args>,
    priority: Priority,
    id: CallbackId,
}

impl<Args> PrioritizedCallback<Args> {
    pub fn new(callback: Callback<Args>, priority: Priority, id: CallbackId) -> Self { Self { callback, priority, id } }

    pub fn callback(&self) -> &Callback<Args> { &self.callback }

    pub fn priority(&self) -> Priority { self.priority }

    pub fn id(&self) -> CallbackId { self.id }
}

impl<Args> Clone for PrioritizedCallback<Args> {
    fn clone(&self) -> Self { Self { callback: self.callback.clone(), priority: self.priority, id: self.id } }
}

impl<Args> std::fmt::Debug for PrioritizedCallback<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrioritizedCallback").field("priority", &self.priority).field("id", &self.id).finish()
    }
}

/// Orders records by descending priority. Equal priorities compare equal, so a stable sort keeps
/// them in insertion order.
pub fn priority_compare<Args>(a: &PrioritizedCallback<Args>, b: &PrioritizedCallback<Args>) -> Ordering {
    b.priority.cmp(&a.priority)
}

/// A signal whose callbacks are dispatched in descending priority order, and in the order they
/// were added when priorities are equal.
///
/// Cloning a PrioritySignal yields another handle to the same callbacks and id counter.
pub struct PrioritySignal<Args = ()>(Arc<Inner<Args>>);

struct Inner<Args> {
    // kept sorted with priority_compare after every insertion
    callbacks: RwLock<Vec<PrioritizedCallback<Args>>>,
    next_id: IdCounter,
}

impl<Args> Clone for PrioritySignal<Args> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<Args> std::fmt::Debug for PrioritySignal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrioritySignal").field("callbacks", &self.len()).finish()
    }
}

impl<Args> Default for PrioritySignal<Args> {
    fn default() -> Self { Self::new() }
}

impl<Args> PrioritySignal<Args> {
    pub fn new() -> Self { Self(Arc::new(Inner { callbacks: RwLock::new(Vec::new()), next_id: IdCounter::new() })) }

    /// Registers a callback at [`DEFAULT_PRIORITY`]
    pub fn add<C>(&self, callback: C) -> CallbackId
    where C: IntoCallback<Args> {
        self.add_with_priority(callback, DEFAULT_PRIORITY)
    }

    /// Registers a callback at the given priority and returns its id
    pub fn add_with_priority<C>(&self, callback: C, priority: Priority) -> CallbackId
    where C: IntoCallback<Args> {
        let id = self.0.next_id.next();
        let mut callbacks = self.0.callbacks.write().expect("callbacks lock is poisoned");
        callbacks.push(PrioritizedCallback::new(callback.into_callback(), priority, id));
        // sort_by is stable
        callbacks.sort_by(priority_compare);
        debug!("PrioritySignal added callback {} at priority {}", id, priority);
        id
    }

    /// Removes the callback with the given id. Unknown or already removed ids are ignored.
    pub fn remove(&self, id: CallbackId) { self.0.unsubscribe(id) }

    /// Removes every callback
    pub fn remove_all(&self) {
        // dropped after the lock is released: a callback may own a guard on this signal
        let removed = std::mem::take(&mut *self.0.callbacks.write().expect("callbacks lock is poisoned"));
        debug!("PrioritySignal removed all {} callbacks", removed.len());
    }

    pub fn len(&self) -> usize { self.0.callbacks.read().expect("callbacks lock is poisoned").len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn contains(&self, id: CallbackId) -> bool {
        self.0.callbacks.read().expect("callbacks lock is poisoned").iter().any(|record| record.id == id)
    }

    /// The (priority, id) pairs in dispatch order
    pub fn priorities(&self) -> Vec<(Priority, CallbackId)> {
        self.0.callbacks.read().expect("callbacks lock is poisoned").iter().map(|record| (record.priority, record.id)).collect()
    }
}

impl<Args> PrioritySignal<Args>
where Args: 'static
{
    /// Like [`PrioritySignal::add`], but the subscription only lives as long as the returned guard
    pub fn add_scoped<C>(&self, callback: C) -> CallbackGuard
    where C: IntoCallback<Args> {
        self.add_scoped_with_priority(callback, DEFAULT_PRIORITY)
    }

    pub fn add_scoped_with_priority<C>(&self, callback: C, priority: Priority) -> CallbackGuard
    where C: IntoCallback<Args> {
        let id = self.add_with_priority(callback, priority);
        CallbackGuard::new(Arc::downgrade(&self.0) as Weak<dyn Unsubscribe>, id)
    }
}

impl<Args> PrioritySignal<Args>
where Args: Clone
{
    /// Invokes every registered callback with `args`, highest priority first.
    ///
    /// Same snapshot semantics as [`crate::Signal::dispatch`]: changes made by callbacks apply
    /// from the next dispatch, and a panicking callback skips the rest of the pass.
    pub fn dispatch(&self, args: Args) {
        let callbacks = {
            let callbacks = self.0.callbacks.read().expect("callbacks lock is poisoned");
            callbacks.iter().map(|record| record.callback.clone()).collect::<Vec<_>>()
        };
        trace!("PrioritySignal dispatching to {} callbacks", callbacks.len());

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
        // ids are unique, so there is at most one record; it drops after the lock is released
        let removed = {
            let mut callbacks = self.callbacks.write().expect("callbacks lock is poisoned");
            callbacks.iter().position(|record| record.id == id).map(|index| callbacks.remove(index))
        };
        if removed.is_some() {
            debug!("PrioritySignal removed callback {}", id);
        }
    }
}
