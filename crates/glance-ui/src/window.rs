//! Capability interface over the scriptable window.
//!
//! The concrete window implementation lives outside this workspace; the
//! binding layer consumes it only through [`Window`] and constructs it
//! through [`Backend`].

use glance_common::UiError;

use crate::done::DoneSignal;
use crate::value::ScriptValue;

/// Window geometry, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A native function exposed to the script environment. Arguments arrive
/// JSON-marshaled as value-handles; the `Ok` result is marshaled back, and
/// an `Err` string surfaces as a script-side rejection. The script
/// environment invokes these asynchronously.
pub type BoundFn = Box<dyn Fn(&[ScriptValue]) -> Result<serde_json::Value, String> + Send + Sync>;

/// Launch parameters for opening a window.
#[derive(Debug, Clone, Default)]
pub struct WindowOptions {
    pub width: u32,
    pub height: u32,
    /// Extra launch arguments for the browser process
    /// (e.g. `--start-fullscreen`).
    pub args: Vec<String>,
}

/// The operations the binding layer requires from a scriptable window.
///
/// One window is shared by every module context. The trait imposes no
/// locking of its own: implementations must either tolerate concurrent
/// callers or the embedding application must serialize access. Once the
/// `done()` signal has fired, callers must stop issuing operations; an
/// eval overlapping window teardown is not guarded against.
pub trait Window {
    /// Navigate to `url`.
    fn load(&self, url: &str) -> Result<(), UiError>;

    fn bounds(&self) -> Result<Bounds, UiError>;

    fn set_bounds(&self, bounds: Bounds) -> Result<(), UiError>;

    /// Register a native function under `name`. Bindings are window-global.
    fn bind(&self, name: &str, f: BoundFn) -> Result<(), UiError>;

    /// Evaluate `js` and block until the script environment reports the
    /// outcome. There is no timeout: a script-side hang blocks indefinitely,
    /// and callers needing bounded waits must wrap this externally.
    fn eval(&self, js: &str) -> ScriptValue;

    /// The one-shot teardown signal; fires when the window is closed.
    fn done(&self) -> DoneSignal;

    fn close(&self) -> Result<(), UiError>;
}

/// Constructor for the external window implementation, consumed by
/// [`Ui::new`](crate::Ui::new). The error type is the backend's own; the
/// binding layer wraps it into `UiError::WindowCreation`.
pub trait Backend {
    type Window: Window;
    type Error: std::error::Error;

    fn open(&self, opts: &WindowOptions) -> Result<Self::Window, Self::Error>;
}
