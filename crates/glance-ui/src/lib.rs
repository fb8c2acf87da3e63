//! UI binding layer for driving a scriptable mirror window.
//!
//! Turns a raw scriptable-window handle into a structured API:
//! - One [`Ui`] per window session, handling global setup (fonts, custom CSS)
//! - One [`UiContext`] per dashboard module, scoped to its named DOM region
//! - Lazy, repeatable decoding of script results via [`ScriptValue`]
//! - A [`Window`] capability trait the concrete window backend implements
//!
//! Every script call is synchronous and blocking; the only asynchronous
//! signal is the window's one-shot [`DoneSignal`].

pub mod context;
pub mod done;
pub mod script;
pub mod ui;
pub mod value;
pub mod window;

pub use context::UiContext;
pub use done::DoneSignal;
pub use ui::Ui;
pub use value::{EvalValue, ScriptValue};
pub use window::{Backend, BoundFn, Bounds, Window, WindowOptions};

#[cfg(test)]
pub(crate) mod mock;
