use std::sync::Arc;

/// A subscriber to a signal: a shared handle to anything callable with the signal's arguments.
/// Cloning a Callback clones the handle, not the closure state.
pub struct Callback<Args>(Arc<dyn Fn(Args) + Send + Sync + 'static>);

impl<Args> Callback<Args> {
    pub fn new<F>(f: F) -> Self
    where F: Fn(Args) + Send + Sync + 'static {
        Self(Arc::new(f))
    }

    /// Invoke the underlying closure
    pub fn call(&self, args: Args) { (self.0)(args) }

    /// True when both handles point at the same closure
    pub fn ptr_eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

impl<Args> Clone for Callback<Args> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<Args> std::fmt::Debug for Callback<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Callback").field(&(Arc::as_ptr(&self.0) as *const () as usize)).finish()
    }
}

/// Trait for types that can be registered with a signal.
pub trait IntoCallback<Args> {
    /// Convert this type into a callback that can be invoked on dispatch.
    fn into_callback(self) -> Callback<Args>;
}

// Closures, fn items and fn pointers
impl<F, Args> IntoCallback<Args> for F
where F: Fn(Args) + Send + Sync + 'static
{
    fn into_callback(self) -> Callback<Args> { Callback::new(self) }
}

impl<Args> IntoCallback<Args> for Callback<Args> {
    fn into_callback(self) -> Callback<Args> { self }
}

impl<Args> IntoCallback<Args> for Arc<dyn Fn(Args) + Send + Sync + 'static> {
    fn into_callback(self) -> Callback<Args> { Callback(self) }
}

impl<Args> IntoCallback<Args> for std::sync::mpsc::Sender<Args>
where Args: Send + 'static
{
    fn into_callback(self) -> Callback<Args> {
        // Sender is Sync since 1.72
        Callback::new(move |args| {
            let _ = self.send(args); // receiver may be gone
        })
    }
}

#[cfg(feature = "tokio")]
impl<Args> IntoCallback<Args> for tokio::sync::mpsc::UnboundedSender<Args>
where Args: Send + 'static
{
    fn into_callback(self) -> Callback<Args> {
        Callback::new(move |args| {
            let _ = self.send(args); // receiver may be gone
        })
    }
}
