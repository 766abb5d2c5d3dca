use std::sync::Weak;

use crate::id::CallbackId;

/// Implemented by the shared state of every signal flavor so a guard can remove its subscription
/// without knowing the signal's argument type.
pub(crate) trait Unsubscribe: Send + Sync {
    fn unsubscribe(&self, id: CallbackId);
}

/// A scoped subscription. Dropping the guard removes the callback from its signal.
///
/// The guard does not keep the signal alive; dropping it after the signal is gone does nothing.
#[must_use = "dropping a CallbackGuard immediately removes the subscription"]
pub struct CallbackGuard {
    inner: Option<Weak<dyn Unsubscribe>>,
    id: CallbackId,
}

impl CallbackGuard {
    pub(crate) fn new(inner: Weak<dyn Unsubscribe>, id: CallbackId) -> Self { Self { inner: Some(inner), id } }

    /// The id of the guarded subscription
    pub fn id(&self) -> CallbackId { self.id }

    /// Give up the guard, leaving the subscription registered for the lifetime of the signal.
    /// It can still be removed with `remove(id)`.
    pub fn detach(mut self) -> CallbackId {
        self.inner = None;
        self.id
    }
}

impl std::fmt::Debug for CallbackGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let live = self.inner.as_ref().is_some_and(|inner| inner.strong_count() > 0);
        f.debug_struct("CallbackGuard").field("id", &self.id).field("live", &live).finish()
    }
}

impl Drop for CallbackGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.take().and_then(|inner| inner.upgrade()) {
            inner.unsubscribe(self.id);
        }
    }
}
