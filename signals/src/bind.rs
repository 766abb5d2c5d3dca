//! Helpers for subscribing methods of a shared receiver.
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use simple_signals::{Signal, bind};
//!
//! struct Adder(Mutex<i32>);
//! impl Adder {
//!     fn on_pair(&self, (a, b): (i32, i32)) { *self.0.lock().unwrap() += a + b; }
//! }
//!
//! let adder = Arc::new(Adder(Mutex::new(0)));
//! let signal = Signal::<(i32, i32)>::new();
//! signal.add(bind(adder.clone(), Adder::on_pair));
//! signal.dispatch((1, 2));
//! assert_eq!(*adder.0.lock().unwrap(), 3);
//! ```

use std::sync::Arc;

use crate::callback::Callback;

/// Binds `method` to `receiver`. The callback keeps the receiver alive for as long as it is subscribed.
pub fn bind<R, Args>(receiver: Arc<R>, method: fn(&R, Args)) -> Callback<Args>
where
    R: Send + Sync + 'static,
    Args: 'static,
{
    Callback::new(move |args| method(&receiver, args))
}

/// Binds `method` to a weak reference to `receiver`. Once the receiver is dropped the callback does nothing.
pub fn bind_weak<R, Args>(receiver: &Arc<R>, method: fn(&R, Args)) -> Callback<Args>
where
    R: Send + Sync + 'static,
    Args: 'static,
{
    let weak = Arc::downgrade(receiver);
    Callback::new(move |args| {
        if let Some(receiver) = weak.upgrade() {
            method(&receiver, args);
        }
    })
}
