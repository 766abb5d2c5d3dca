use std::str::FromStr;
use std::sync::{Arc, Mutex};

use simple_signals::Callback;
use tracing::Level;

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() {
    // if LOG_LEVEL env var is set, use it
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        tracing_subscriber::fmt().with_max_level(Level::from_str(&level).unwrap()).with_test_writer().init();
    } else {
        tracing_subscriber::fmt().with_max_level(Level::INFO).with_test_writer().init();
    }
}

/// Returns a callback that records every value it receives, and a function draining what was recorded so far
#[allow(unused)]
pub fn watcher<T: Send + 'static>() -> (impl Fn(T) + Send + Sync + Clone + 'static, impl Fn() -> Vec<T>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let watcher = {
        let changes = changes.clone();
        move |value: T| changes.lock().unwrap().push(value)
    };
    let check = move || changes.lock().unwrap().drain(..).collect::<Vec<T>>();
    (watcher, check)
}

/// A callback that records `name` in `log` when invoked
#[allow(unused)]
pub fn named<Args>(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> Callback<Args> {
    let log = log.clone();
    Callback::new(move |_| log.lock().unwrap().push(name))
}
