use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::component::Component;
use crate::error::BalloonError;

/// Signature of a method stored in a member table.
///
/// The component is the receiver; the slice holds the call arguments.
pub type Method =
    Arc<dyn Fn(&mut Component, &[Value]) -> Result<Value, BalloonError> + Send + Sync>;

/// One entry of a [`Prototype`](super::Prototype) table.
#[derive(Clone)]
pub enum Member {
    Value(Value),
    Method(Method),
}

impl Member {
    /// Wrap a closure as a method member.
    pub fn method<F>(f: F) -> Self
    where
        F: Fn(&mut Component, &[Value]) -> Result<Value, BalloonError> + Send + Sync + 'static,
    {
        Member::Method(Arc::new(f))
    }

    /// `null` values are treated as undefined and skipped by merges.
    pub fn is_defined(&self) -> bool {
        match self {
            Member::Value(value) => !value.is_null(),
            Member::Method(_) => true,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Member::Value(value) => Some(value),
            Member::Method(_) => None,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Member::Method(method) => Some(method),
            Member::Value(_) => None,
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Member::Method(_))
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Member::Method(method) => write!(f, "Method({:p})", Arc::as_ptr(method)),
        }
    }
}

impl From<Value> for Member {
    fn from(value: Value) -> Self {
        Member::Value(value)
    }
}
