//! Script evaluation results.
//!
//! A [`ScriptValue`] carries the raw JSON the script environment returned
//! plus an error slot. Decoding is lazy: the payload is interpreted only
//! when a caller asks for a concrete shape, the operation is repeatable,
//! and a failed decode leaves the value usable for another attempt. When
//! the error slot is set the payload is never interpreted.

use std::collections::BTreeMap;

use glance_common::UiError;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

/// Outcome of one script evaluation: error-or-payload, decoded on demand.
#[derive(Debug, Clone, Default)]
pub struct ScriptValue {
    raw: String,
    err: Option<String>,
}

impl ScriptValue {
    /// A value holding the given raw JSON payload. An empty string means
    /// the evaluation produced no value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            err: None,
        }
    }

    /// A successful evaluation that produced no value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A script-side error outcome.
    pub fn with_error(msg: impl Into<String>) -> Self {
        Self {
            raw: String::new(),
            err: Some(msg.into()),
        }
    }

    /// The script-side error, if the evaluation reported one.
    pub fn err(&self) -> Option<&str> {
        self.err.as_deref()
    }

    /// Whether the payload is absent. A script returning `undefined` or
    /// `null` counts as absent.
    pub fn is_empty(&self) -> bool {
        let trimmed = self.raw.trim();
        trimmed.is_empty() || trimmed == "null"
    }

    /// The raw payload bytes.
    pub fn bytes(&self) -> &[u8] {
        self.raw.as_bytes()
    }

    /// Decode the payload into any deserializable shape.
    pub fn to<T: DeserializeOwned>(&self) -> Result<T, UiError> {
        Ok(serde_json::from_str(&self.raw)?)
    }

    pub fn as_f64(&self) -> Result<f64, UiError> {
        self.to()
    }

    pub fn as_i64(&self) -> Result<i64, UiError> {
        self.to()
    }

    pub fn as_bool(&self) -> Result<bool, UiError> {
        self.to()
    }

    pub fn as_str(&self) -> Result<String, UiError> {
        self.to()
    }

    /// Decode a script-side array into an ordered sequence of value-handles.
    /// Elements stay raw until the caller decodes them.
    pub fn array(&self) -> Result<Vec<ScriptValue>, UiError> {
        let parts: Vec<Box<RawValue>> = serde_json::from_str(&self.raw)?;
        Ok(parts
            .into_iter()
            .map(|part| ScriptValue::new(part.get()))
            .collect())
    }

    /// Decode a script-side object into a map of value-handles, keyed by
    /// property name. Values stay raw until the caller decodes them.
    pub fn object(&self) -> Result<BTreeMap<String, ScriptValue>, UiError> {
        let entries: BTreeMap<String, Box<RawValue>> = serde_json::from_str(&self.raw)?;
        Ok(entries
            .into_iter()
            .map(|(key, value)| (key, ScriptValue::new(value.get())))
            .collect())
    }

    /// Generic decode: scalars come back as their natural type, containers
    /// as value-handles for the caller to decode further. An absent payload
    /// decodes to `None`.
    pub fn decode(&self) -> Result<Option<EvalValue>, UiError> {
        if self.is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<serde_json::Value>(&self.raw)? {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Bool(b) => Ok(Some(EvalValue::Bool(b))),
            serde_json::Value::Number(n) => Ok(Some(EvalValue::Number(n))),
            serde_json::Value::String(s) => Ok(Some(EvalValue::String(s))),
            serde_json::Value::Array(_) => Ok(Some(EvalValue::Array(self.array()?))),
            serde_json::Value::Object(_) => Ok(Some(EvalValue::Object(self.object()?))),
        }
    }
}

/// Generically decoded script result, as returned by `UiContext::eval`.
#[derive(Debug, Clone)]
pub enum EvalValue {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    /// Ordered value-handles; each element is decoded on demand.
    Array(Vec<ScriptValue>),
    /// Value-handles keyed by property name; each value is decoded on demand.
    Object(BTreeMap<String, ScriptValue>),
}
