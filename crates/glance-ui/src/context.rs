//! Per-module handle over the shared window.

use std::fmt;
use std::sync::Arc;

use glance_common::{Position, UiError};
use tracing::debug;

use crate::script::{quote, template_literal};
use crate::ui::Ui;
use crate::value::EvalValue;
use crate::window::{BoundFn, Window};

/// Handle bound to one module's DOM region. Many contexts share one window;
/// a context has no teardown of its own and stays valid for the life of the
/// owning [`Ui`].
///
/// The module name is used verbatim in every scoped script call and is not
/// checked for uniqueness: two contexts created with the same name alias
/// the same region.
pub struct UiContext<W: Window> {
    win: Arc<W>,
    name: String,
}

impl<W: Window> UiContext<W> {
    /// Evaluate the `createModule` call for `name` and bind a context to
    /// the new region. If the call cannot be evaluated or reports a
    /// script-side error, no context is returned.
    pub(crate) fn new(ui: &Ui<W>, name: &str, pos: Position) -> Result<Self, UiError> {
        let js = format!(
            "createModule({}, {}, {});",
            quote(name),
            quote(pos.vertical.as_str()),
            quote(pos.horizontal.as_str()),
        );
        if let Some(err) = ui.window().eval(&js).err() {
            return Err(UiError::ModuleCreation {
                module: name.to_string(),
                cause: err.to_string(),
            });
        }

        debug!(module = name, position = %pos, "module region created");
        Ok(Self {
            win: Arc::clone(ui.window()),
            name: name.to_string(),
        })
    }

    /// The module name this context is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inject a stylesheet block labeled with this module's name.
    pub fn load_css(&self, css: &str) -> Result<(), UiError> {
        let js = format!(
            "loadCSS({}, {});",
            template_literal(&self.name),
            template_literal(css)
        );
        self.checked_eval(&js)
    }

    /// Replace the region's HTML content.
    pub fn load_html(&self, html: &str) -> Result<(), UiError> {
        let js = format!(
            "loadModuleHTML({}, {});",
            template_literal(&self.name),
            template_literal(html)
        );
        self.checked_eval(&js)
    }

    /// Register a native function callable from the page. Bindings are
    /// window-global: `name` is not scoped to this module. The underlying
    /// binding error, if any, is returned unchanged.
    pub fn bind(&self, name: &str, f: BoundFn) -> Result<(), UiError> {
        self.win.bind(name, f)
    }

    /// Evaluate an arbitrary script expression. Callers build the script
    /// text themselves (typically with `format!`); no escaping is applied
    /// here.
    ///
    /// A script-side error comes back with its message unchanged. A
    /// successful evaluation with no resulting value yields `Ok(None)`;
    /// otherwise the payload is decoded generically — scalars as their
    /// natural type, containers as value-handles to decode further.
    pub fn eval(&self, script: &str) -> Result<Option<EvalValue>, UiError> {
        let val = self.win.eval(script);
        if let Some(err) = val.err() {
            return Err(UiError::Script(err.to_string()));
        }
        val.decode()
    }

    fn checked_eval(&self, js: &str) -> Result<(), UiError> {
        match self.win.eval(js).err() {
            Some(err) => Err(UiError::Script(err.to_string())),
            None => Ok(()),
        }
    }
}

// The window type is not required to be `Debug`, so this cannot be derived.
impl<W: Window> fmt::Debug for UiContext<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiContext")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
