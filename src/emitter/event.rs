use super::Emitter;

/// The record passed to every listener of an emission.
#[derive(Clone, Debug)]
pub struct Event {
    /// Event name listeners were registered under (e.g. "ready", "destroy").
    pub event_type: String,
    /// The emitter the event was fired on, unless the caller supplied one.
    ///
    /// For a [`Component`](crate::Component) this is the emitter backing it,
    /// not the component itself; compare it with
    /// [`Observable::emitter`](crate::Observable::emitter) to tell instances
    /// apart.
    pub target: Option<Emitter>,
}

impl Event {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            target: None,
        }
    }

    /// Route the event with an explicit target instead of the emitting instance.
    pub fn with_target(mut self, target: Emitter) -> Self {
        self.target = Some(target);
        self
    }
}

impl From<&str> for Event {
    fn from(event_type: &str) -> Self {
        Event::new(event_type)
    }
}

impl From<String> for Event {
    fn from(event_type: String) -> Self {
        Event::new(event_type)
    }
}
