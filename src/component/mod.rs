//! Components and their definitions.
//!
//! A [`Definition`] plays the role of a constructor: [`define`] and
//! [`define_with`] assemble its member table, [`Definition::construct`] builds
//! [`Component`] instances that carry lifecycle events on top of an emitter.

mod construct;
mod define;
mod instance;

pub use construct::Construct;
pub use define::{component, define, define_with, Definition};
pub use instance::Component;
