//! One-shot window-teardown signal.

use std::sync::{Arc, Condvar, Mutex};

/// Broadcast-once signal: fires at most once, and every waiter — past or
/// future, any number of them — observes the fired state.
///
/// Handles are cheap clones sharing one state; `wait` blocks the calling
/// thread until some handle calls `notify`.
#[derive(Clone, Default)]
pub struct DoneSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl DoneSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the signal and wake all waiters. Firing again is a no-op.
    pub fn notify(&self) {
        let (fired, cvar) = &*self.inner;
        *fired.lock().unwrap() = true;
        cvar.notify_all();
    }

    /// Whether the signal has fired.
    pub fn is_done(&self) -> bool {
        *self.inner.0.lock().unwrap()
    }

    /// Block until the signal fires. Returns immediately if it already has.
    pub fn wait(&self) {
        let (fired, cvar) = &*self.inner;
        let mut done = fired.lock().unwrap();
        while !*done {
            done = cvar.wait(done).unwrap();
        }
    }
}
