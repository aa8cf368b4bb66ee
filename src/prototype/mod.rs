//! Member tables and flat composition.
//!
//! A [`Prototype`] is the dispatch table of a component type: named values and
//! methods plus the default options. Composition copies tables into each other
//! ([`inherits`]); there is no live chain back to the parent.
//!
//! ```text
//! define_with(&[&foo, &bar], members)
//!
//!   base ──copy──▶ ┌───────────┐
//!   foo  ──copy──▶ │ new table │ ◀── members (highest priority)
//!   bar  ──copy──▶ └───────────┘
//! ```

mod inherits;
mod member;

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;

use crate::component::Component;
use crate::error::BalloonError;
use crate::object::{self, Object};

pub use inherits::inherits;
pub use member::{Member, Method};

/// A member table shared by a definition and every instance built from it.
pub type SharedPrototype = Arc<RwLock<Prototype>>;

/// Anything that carries a member table ("constructor-like").
pub trait Constructor {
    fn prototype(&self) -> &SharedPrototype;
}

/// Ordered table of members plus default options.
#[derive(Clone, Debug, Default)]
pub struct Prototype {
    members: IndexMap<String, Member>,
    defaults: Object,
}

impl Prototype {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert) for a plain value.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, Member::Value(value.into()));
        self
    }

    /// Builder form of [`insert`](Self::insert) for a method.
    pub fn with_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&mut Component, &[Value]) -> Result<Value, BalloonError> + Send + Sync + 'static,
    {
        self.insert(name, Member::method(method));
        self
    }

    /// Replace the default options of this table.
    pub fn with_defaults(mut self, defaults: Object) -> Self {
        self.defaults = defaults;
        self
    }

    /// Insert or overwrite a member. Returns the previous member, if any.
    pub fn insert(&mut self, name: impl Into<String>, member: Member) -> Option<Member> {
        self.members.insert(name.into(), member)
    }

    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// The method stored under `name`, if that member is a method.
    pub fn method(&self, name: &str) -> Option<Method> {
        self.members.get(name).and_then(Member::as_method).cloned()
    }

    /// Member names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn defaults(&self) -> &Object {
        &self.defaults
    }

    /// Copies every defined member and default of `other` onto `self`.
    ///
    /// Same-named members are overwritten (last writer wins).
    pub fn extend(&mut self, other: &Prototype) -> &mut Self {
        for (name, member) in &other.members {
            if member.is_defined() {
                self.members.insert(name.clone(), member.clone());
            }
        }
        object::merge(&mut self.defaults, &other.defaults);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_keeps_insertion_order() {
        let table = Prototype::new()
            .with_value("name", "Foo")
            .with_method("sayFoo", |_, _| Ok(json!("foo")))
            .with_value("size", 3);

        assert_eq!(table.names().collect::<Vec<_>>(), vec!["name", "sayFoo", "size"]);
        assert!(table.method("sayFoo").is_some());
        assert!(table.method("name").is_none());
    }

    #[test]
    fn extend_overwrites_and_skips_null() {
        let mut child = Prototype::new()
            .with_value("name", "child")
            .with_value("keep", true)
            .with_defaults(json!({ "a": 1 }).as_object().cloned().unwrap());
        let parent = Prototype::new()
            .with_value("name", "parent")
            .with_value("keep", Value::Null)
            .with_defaults(json!({ "b": 2 }).as_object().cloned().unwrap());

        child.extend(&parent);

        assert_eq!(child.get("name").and_then(Member::as_value), Some(&json!("parent")));
        assert_eq!(child.get("keep").and_then(Member::as_value), Some(&json!(true)));
        assert_eq!(Value::Object(child.defaults().clone()), json!({ "a": 1, "b": 2 }));
    }
}
