//! Shared fixtures for the integration tests.

#![allow(dead_code, unused_imports)]

mod recorder;
mod widgets;

pub use recorder::Recorder;
pub use widgets::{foo, foobar};
