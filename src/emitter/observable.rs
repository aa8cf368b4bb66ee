use serde_json::Value;

use super::{Emitter, Event, Listener, ListenerEntry};
use crate::error::BalloonError;

/// Adds emitter methods to any type that owns an [`Emitter`].
///
/// # Example
///
/// ```
/// use balloons::{emitter, listener, Emitter, Observable};
///
/// struct Widget {
///     events: Emitter,
/// }
///
/// impl Observable for Widget {
///     fn emitter(&self) -> &Emitter {
///         &self.events
///     }
/// }
///
/// let widget = Widget { events: emitter() };
/// widget.on("contentLoad", listener(|_, _| {})).unwrap();
/// widget.emit("contentLoad", &[]).unwrap();
/// ```
pub trait Observable {
    /// The registry backing this value.
    fn emitter(&self) -> &Emitter;

    fn on(&self, event: &str, listener: Listener) -> Result<&Self, BalloonError> {
        self.emitter().on(event, listener)?;
        Ok(self)
    }

    fn once(&self, event: &str, listener: Listener) -> Result<&Self, BalloonError> {
        self.emitter().once(event, listener)?;
        Ok(self)
    }

    fn off(&self, event: &str, listener: &Listener) -> Result<&Self, BalloonError> {
        self.emitter().off(event, listener)?;
        Ok(self)
    }

    fn emit(&self, event: impl Into<Event>, args: &[Value]) -> Result<&Self, BalloonError>
    where
        Self: Sized,
    {
        self.emitter().emit(event, args)?;
        Ok(self)
    }

    fn get_listeners(&self, event: &str) -> Result<Option<Vec<ListenerEntry>>, BalloonError> {
        self.emitter().get_listeners(event)
    }
}

/// A freestanding emitter, usable as a local event bus.
pub fn emitter() -> Emitter {
    Emitter::new()
}
