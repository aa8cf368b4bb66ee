//! Event emitter, component lifecycle and flat member-table composition.
//!
//! ```
//! use balloons::{define, define_with, listener, Observable, Prototype};
//! use serde_json::json;
//!
//! let foo = define(
//!     Prototype::new()
//!         .with_value("name", "Foo")
//!         .with_method("sayFoo", |_, _| Ok(json!("foo"))),
//! );
//! let foobar = define_with(&[&foo], Prototype::new().with_value("name", "Foobar"));
//!
//! let mut instance = foobar.new_instance().unwrap();
//! instance.on("destroy", listener(|_, _| {})).unwrap();
//!
//! assert_eq!(instance.call("sayFoo", &[]).unwrap(), json!("foo"));
//! instance.destroy().unwrap();
//! ```

pub mod component;
mod config;
pub mod emitter;
mod error;
pub mod object;
pub mod prototype;
pub mod scheduler;

pub use component::{component, define, define_with, Component, Construct, Definition};
pub use config::Config;
pub use emitter::{emitter, listener, mediator, Emitter, Event, Listener, ListenerEntry, Observable};
pub use error::BalloonError;
pub use object::{clone, extend, Object};
pub use prototype::{inherits, Constructor, Member, Method, Prototype, SharedPrototype};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The object helpers grouped the way the CommonJS build exposed them.
pub mod util {
    pub use crate::object::{clone, extend};
    pub use crate::prototype::inherits;
}
