use serde_json::{Map, Value};
use tracing::debug;

/// Loose truthiness of a JSON value: `null`, `false`, zero, `""`, `[]` and
/// `{}` are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// A named-field patch applied by [`Entity::copy`].
///
/// Only truthy values are ever applied. A patch cannot set a field to zero,
/// `false` or an empty string; those entries are treated as "leave the field
/// as it is". Assign the field directly when a falsy value is intended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update(Map<String, Value>);

impl Update {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// A flat output record that supports copy-with-patch.
pub trait Entity: Clone {
    /// Assign one named field from a JSON value.
    /// Returns false when the field is unknown or the value does not fit its type.
    fn assign(&mut self, field: &str, value: &Value) -> bool;

    /// Independent duplicate of `self` with the truthy entries of `update` applied.
    fn copy(&self, update: Option<&Update>) -> Self {
        let mut item = self.clone();
        let Some(update) = update else {
            return item;
        };

        for (field, value) in update.iter().filter(|(_, v)| is_truthy(v)) {
            if !item.assign(field, value) {
                debug!(field = %field, value = %value, "Skipped patch entry");
            }
        }
        item
    }
}

pub(crate) fn set_text(slot: &mut Option<String>, value: &Value) -> bool {
    match value.as_str() {
        Some(s) => {
            *slot = Some(s.to_string());
            true
        }
        None => false,
    }
}

pub(crate) fn set_string(slot: &mut String, value: &Value) -> bool {
    match value.as_str() {
        Some(s) => {
            *slot = s.to_string();
            true
        }
        None => false,
    }
}

pub(crate) fn set_int(slot: &mut i64, value: &Value) -> bool {
    match value.as_i64() {
        Some(n) => {
            *slot = n;
            true
        }
        None => false,
    }
}

pub(crate) fn set_uint(slot: &mut u32, value: &Value) -> bool {
    match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
        Some(n) => {
            *slot = n;
            true
        }
        None => false,
    }
}

pub(crate) fn set_float(slot: &mut f64, value: &Value) -> bool {
    match value.as_f64().filter(|f| f.is_finite()) {
        Some(f) => {
            *slot = f;
            true
        }
        None => false,
    }
}

pub(crate) fn set_bool(slot: &mut bool, value: &Value) -> bool {
    match value.as_bool() {
        Some(b) => {
            *slot = b;
            true
        }
        None => false,
    }
}
