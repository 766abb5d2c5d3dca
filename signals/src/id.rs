use std::sync::atomic::{AtomicUsize, Ordering};

/// Identifies one subscription on one signal instance.
/// Ids are handed out in increasing order starting at 1 and are never reused by the issuing signal.
/// They carry no meaning across signal instances.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CallbackId(usize);

impl From<CallbackId> for usize {
    fn from(id: CallbackId) -> usize { id.0 }
}

impl std::fmt::Display for CallbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Per-signal allocator for [`CallbackId`]s
#[derive(Debug, Default)]
pub(crate) struct IdCounter(AtomicUsize);

impl IdCounter {
    pub(crate) fn new() -> Self { Self(AtomicUsize::new(0)) }

    /// Pre-increment: the first id issued is 1
    pub(crate) fn next(&self) -> CallbackId { CallbackId(self.0.fetch_add(1, Ordering::Relaxed) + 1) }
}
