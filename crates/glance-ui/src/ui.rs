//! Window session bootstrap and the module-context factory.

use std::fmt;
use std::sync::Arc;

use glance_common::{Position, UiError};
use glance_config::UiConfig;
use tracing::{debug, warn};

use crate::context::UiContext;
use crate::done::DoneSignal;
use crate::script::template_literal;
use crate::window::{Backend, Window, WindowOptions};

/// Embedded base stylesheet carrying the mirror's font faces.
const FONT_CSS: &str = include_str!("../assets/fonts.css");

/// Launch argument passed to the browser process for fullscreen windows.
const FULLSCREEN_ARG: &str = "--start-fullscreen";

/// One window session. Owns the window and hands out per-module contexts
/// that share it.
pub struct Ui<W: Window> {
    win: Arc<W>,
}

impl<W: Window> Ui<W> {
    /// Open the window and perform the one-time global setup: the embedded
    /// font stylesheet, then each custom stylesheet from `cfg`, in order,
    /// labeled `customCSS1`, `customCSS2`, …
    ///
    /// A window that fails to open, or a custom CSS file that cannot be
    /// read, fails construction; no partial session is returned. Script-side
    /// errors from the injections themselves are cosmetic and load
    /// best-effort: they are logged, not returned.
    pub fn new<B>(cfg: &UiConfig, backend: &B) -> Result<Self, UiError>
    where
        B: Backend<Window = W>,
    {
        let mut opts = WindowOptions {
            width: cfg.width,
            height: cfg.height,
            args: Vec::new(),
        };
        if cfg.fullscreen {
            opts.args.push(FULLSCREEN_ARG.to_string());
        }

        let win = backend
            .open(&opts)
            .map_err(|e| UiError::WindowCreation(e.to_string()))?;
        debug!(
            width = cfg.width,
            height = cfg.height,
            fullscreen = cfg.fullscreen,
            "window created"
        );

        let ui = Self { win: Arc::new(win) };

        ui.inject_css("fonts", FONT_CSS);
        for (i, path) in cfg.custom_css.iter().enumerate() {
            let css = std::fs::read_to_string(path).map_err(|e| {
                UiError::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to read {}: {e}", path.display()),
                ))
            })?;
            ui.inject_css(&format!("customCSS{}", i + 1), &css);
        }

        Ok(ui)
    }

    /// Create the DOM region for module `name` at `pos` and return its
    /// context. Names are not checked for uniqueness: a repeated name
    /// aliases the existing region.
    pub fn context(&self, name: &str, pos: Position) -> Result<UiContext<W>, UiError> {
        UiContext::new(self, name, pos)
    }

    /// The window's teardown signal, passed through unchanged.
    pub fn done(&self) -> DoneSignal {
        self.win.done()
    }

    /// Close the window. No guard against double close beyond what the
    /// window itself provides.
    pub fn close(&self) -> Result<(), UiError> {
        self.win.close()
    }

    pub(crate) fn window(&self) -> &Arc<W> {
        &self.win
    }

    fn inject_css(&self, label: &str, css: &str) {
        let js = format!(
            "loadCSS({}, {});",
            template_literal(label),
            template_literal(css)
        );
        match self.win.eval(&js).err() {
            Some(err) => warn!(label, error = %err, "stylesheet injection reported an error"),
            None => debug!(label, bytes = css.len(), "stylesheet injected"),
        }
    }
}

// The window type is not required to be `Debug`, so this cannot be derived.
impl<W: Window> fmt::Debug for Ui<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ui").finish_non_exhaustive()
    }
}
