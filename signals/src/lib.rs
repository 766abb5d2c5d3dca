/*!
Synchronous, typed signals: one event source, any number of callbacks.

# Design requirements:
- A signal is bound to one argument type, usually a tuple. Every callback receives the same arguments.
- Two flavors, chosen at declaration: [`Signal`] (unordered) and [`PrioritySignal`] (descending priority, ties in insertion order).
- Both flavors accept the same callbacks: closures, bound methods, `Arc<dyn Fn>`, channel senders.
- `add` returns a [`CallbackId`]; ids start at 1 and are never reused by the same signal.
- `remove` of an unknown id is a no-op.
- Dispatch works on a snapshot, so callbacks may add, remove, or dispatch on the same signal.

# Basic usage

```rust
use std::sync::{Arc, Mutex};
use simple_signals::*;

let on_sum: Signal<(i32, i32)> = Signal::new();
let total = Arc::new(Mutex::new(0));

let id = {
    let total = total.clone();
    on_sum.add(move |(a, b): (i32, i32)| *total.lock().unwrap() += a + b)
};
on_sum.dispatch((1, 2));
assert_eq!(*total.lock().unwrap(), 3);

on_sum.remove(id);
on_sum.dispatch((1, 2));
assert_eq!(*total.lock().unwrap(), 3);
```

# Priority usage

```rust
use std::sync::{Arc, Mutex};
use simple_signals::*;

let on_frame: PrioritySignal = PrioritySignal::new();
let order = Arc::new(Mutex::new(Vec::new()));
for (name, priority) in [("C", 10), ("D", 20), ("E", 10)] {
    let order = order.clone();
    on_frame.add_with_priority(move |_: ()| order.lock().unwrap().push(name), priority);
}
on_frame.dispatch(());
assert_eq!(*order.lock().unwrap(), ["D", "C", "E"]);
```
*/

mod bind;
mod callback;
mod guard;
mod id;
mod priority;
mod signal;

pub use bind::*;
pub use callback::*;
pub use guard::CallbackGuard;
pub use id::CallbackId;
pub use priority::*;
pub use signal::*;
