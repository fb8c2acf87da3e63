//! Scripted window double shared by the crate's tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use glance_common::UiError;

use crate::done::DoneSignal;
use crate::value::ScriptValue;
use crate::window::{Backend, BoundFn, Bounds, Window, WindowOptions};

#[derive(Default)]
struct MockState {
    evals: Mutex<Vec<String>>,
    bound: Mutex<Vec<String>>,
    responses: Mutex<HashMap<String, ScriptValue>>,
    closed: AtomicBool,
}

/// Window double: records every call and answers evals from a scripted
/// response table keyed by exact script text. Clones share state, so a
/// test can keep a handle while the `Ui` owns another.
#[derive(Clone, Default)]
pub struct MockWindow {
    state: Arc<MockState>,
    done: DoneSignal,
}

impl MockWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response for an exact eval text. Unscripted evals answer
    /// with the empty value.
    pub fn respond(&self, js: impl Into<String>, val: ScriptValue) {
        self.state.responses.lock().unwrap().insert(js.into(), val);
    }

    pub fn eval_log(&self) -> Vec<String> {
        self.state.evals.lock().unwrap().clone()
    }

    pub fn bind_log(&self) -> Vec<String> {
        self.state.bound.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.state.closed.load(Ordering::SeqCst)
    }

    pub fn done_signal(&self) -> &DoneSignal {
        &self.done
    }
}

impl Window for MockWindow {
    fn load(&self, _url: &str) -> Result<(), UiError> {
        Ok(())
    }

    fn bounds(&self) -> Result<Bounds, UiError> {
        Ok(Bounds::default())
    }

    fn set_bounds(&self, _bounds: Bounds) -> Result<(), UiError> {
        Ok(())
    }

    fn bind(&self, name: &str, _f: BoundFn) -> Result<(), UiError> {
        self.state.bound.lock().unwrap().push(name.to_string());
        Ok(())
    }

    fn eval(&self, js: &str) -> ScriptValue {
        self.state.evals.lock().unwrap().push(js.to_string());
        self.state
            .responses
            .lock()
            .unwrap()
            .get(js)
            .cloned()
            .unwrap_or_else(ScriptValue::empty)
    }

    fn done(&self) -> DoneSignal {
        self.done.clone()
    }

    fn close(&self) -> Result<(), UiError> {
        self.state.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Backend double handing out clones of one shared [`MockWindow`].
pub struct MockBackend {
    pub win: MockWindow,
    pub opened: Mutex<Vec<WindowOptions>>,
    fail: Option<String>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            win: MockWindow::new(),
            opened: Mutex::new(Vec::new()),
            fail: None,
        }
    }

    /// A backend whose `open` always fails with `msg`.
    pub fn failing(msg: impl Into<String>) -> Self {
        Self {
            win: MockWindow::new(),
            opened: Mutex::new(Vec::new()),
            fail: Some(msg.into()),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct MockBackendError(String);

impl fmt::Display for MockBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for MockBackendError {}

impl Backend for MockBackend {
    type Window = MockWindow;
    type Error = MockBackendError;

    fn open(&self, opts: &WindowOptions) -> Result<MockWindow, MockBackendError> {
        self.opened.lock().unwrap().push(opts.clone());
        match &self.fail {
            Some(msg) => Err(MockBackendError(msg.clone())),
            None => Ok(self.win.clone()),
        }
    }
}
