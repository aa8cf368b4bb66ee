use serde_json::Value;

use crate::error::BalloonError;
use crate::object::{self, Object};

/// Parameters for building a component.
///
/// ```
/// use balloons::Construct;
/// use serde_json::json;
///
/// let construct = Construct::new()
///     .options(json!({ "open": true }))
///     .arg("first");
/// assert_eq!(construct.args, vec![json!("first")]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Construct {
    /// Merged over a copy of the definition's defaults. Must be an object.
    pub options: Option<Value>,
    /// Passed to the init member.
    pub args: Vec<Value>,
}

impl Construct {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    pub fn arg(mut self, arg: impl Into<Value>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }

    /// A copy of `defaults` with the caller's options laid over it.
    ///
    /// `defaults` itself is never modified.
    pub(crate) fn resolve_options(&self, defaults: &Object) -> Result<Object, BalloonError> {
        let mut resolved = object::clone_object(defaults);

        match &self.options {
            None => {}
            Some(Value::Object(options)) => {
                object::merge(&mut resolved, options);
            }
            Some(other) => {
                return Err(BalloonError::UnsupportedInstantiation(format!(
                    "options must be an object, got {}",
                    object::kind(other)
                )))
            }
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults() -> Object {
        json!({ "open": false, "speed": 3 }).as_object().cloned().unwrap()
    }

    #[test]
    fn no_options_copies_defaults() {
        let defaults = defaults();
        let resolved = Construct::new().resolve_options(&defaults).unwrap();
        assert_eq!(resolved, defaults);
    }

    #[test]
    fn options_override_defaults_without_touching_them() {
        let defaults = defaults();
        let resolved = Construct::new()
            .options(json!({ "open": true, "extra": "x" }))
            .resolve_options(&defaults)
            .unwrap();

        assert_eq!(
            Value::Object(resolved),
            json!({ "open": true, "speed": 3, "extra": "x" })
        );
        assert_eq!(defaults["open"], json!(false));
    }

    #[test]
    fn non_object_options_are_unsupported() {
        let err = Construct::new()
            .options(json!("#selector"))
            .resolve_options(&defaults())
            .unwrap_err();
        assert!(matches!(err, BalloonError::UnsupportedInstantiation(_)));
    }
}
