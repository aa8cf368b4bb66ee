//! Publish/subscribe event emitter.
//!
//! [`Emitter`] is a named-event listener registry. [`Observable`] mixes its
//! methods onto any type that owns one, and [`mediator`] is a shared instance
//! for broadcast between components that do not know each other.

mod entry;
mod event;
mod global;
mod observable;
mod registry;

pub use entry::{listener, Listener, ListenerEntry, ListenerFn};
pub use event::Event;
pub use global::mediator;
pub use observable::{emitter, Observable};
pub use registry::Emitter;
