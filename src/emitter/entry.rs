use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::Event;

/// Closure type for event listeners.
pub type ListenerFn = dyn Fn(&Event, &[Value]) + Send + Sync;

/// A shareable listener handle.
///
/// Two handles are the same listener when they were cloned from one another;
/// [`Emitter::off`](super::Emitter::off) relies on that identity.
#[derive(Clone)]
pub struct Listener(Arc<ListenerFn>);

impl Listener {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Event, &[Value]) + Send + Sync + 'static,
    {
        Listener(Arc::new(f))
    }

    pub(crate) fn call(&self, event: &Event, args: &[Value]) {
        (self.0)(event, args)
    }

    /// Identity comparison.
    pub fn same(&self, other: &Listener) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Arc::as_ptr(&self.0))
    }
}

/// Shorthand for [`Listener::new`].
pub fn listener<F>(f: F) -> Listener
where
    F: Fn(&Event, &[Value]) + Send + Sync + 'static,
{
    Listener::new(f)
}

/// A registered listener and how it was registered.
#[derive(Clone, Debug)]
pub struct ListenerEntry {
    pub(crate) id: u64,
    pub(crate) listener: Listener,
    pub(crate) once: bool,
}

impl ListenerEntry {
    pub fn listener(&self) -> &Listener {
        &self.listener
    }

    /// Whether the entry is removed after its first call.
    pub fn once(&self) -> bool {
        self.once
    }
}
