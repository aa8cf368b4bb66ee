//! Shallow copy and merge helpers for keyed mappings.
//!
//! A key whose value is `null` counts as undefined and is never copied.
//! Falsy but defined values (`0`, `""`, `false`) are always kept.

use serde_json::{Map, Value};

use crate::error::BalloonError;

/// The keyed mapping type used for options, defaults and arguments.
pub type Object = Map<String, Value>;

pub(crate) fn is_defined(value: &Value) -> bool {
    !value.is_null()
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn expect_object<'a>(name: &'static str, value: &'a Value) -> Result<&'a Object, BalloonError> {
    value
        .as_object()
        .ok_or_else(|| BalloonError::invalid(name, format!("expected an object, got {}", kind(value))))
}

/// Returns a shallow copy of `obj`.
///
/// ```
/// use serde_json::json;
///
/// let source = json!({ "name": "test", "age": 1 });
/// let mut copied = balloons::clone(&source).unwrap();
/// copied.insert("age".into(), json!(2));
///
/// assert_eq!(source["age"], json!(1));
/// ```
pub fn clone(obj: &Value) -> Result<Object, BalloonError> {
    expect_object("obj", obj).map(clone_object)
}

pub(crate) fn clone_object(source: &Object) -> Object {
    source
        .iter()
        .filter(|(_, value)| is_defined(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Copies every defined key of `source` onto `destination` and returns it.
pub fn extend<'a>(destination: &'a mut Value, source: &Value) -> Result<&'a mut Object, BalloonError> {
    let source = expect_object("from", source)?;
    let found = kind(destination);
    let destination = destination
        .as_object_mut()
        .ok_or_else(|| BalloonError::invalid("destination", format!("expected an object, got {}", found)))?;

    Ok(merge(destination, source))
}

/// Infallible form of [`extend`] for callers that already hold mappings.
pub fn merge<'a>(destination: &'a mut Object, source: &Object) -> &'a mut Object {
    for (key, value) in source {
        if is_defined(value) {
            destination.insert(key.clone(), value.clone());
        }
    }
    destination
}
