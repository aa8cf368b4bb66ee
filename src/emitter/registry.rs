use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::trace;

use super::{Event, Listener, ListenerEntry};
use crate::error::BalloonError;

#[derive(Default)]
struct Registry {
    // Created on the first `on`/`once`.
    events: Option<HashMap<String, Vec<ListenerEntry>>>,
    next_id: u64,
}

impl Registry {
    fn listeners(&self, event: &str) -> Option<&Vec<ListenerEntry>> {
        self.events.as_ref()?.get(event)
    }

    fn listeners_mut(&mut self, event: &str) -> Option<&mut Vec<ListenerEntry>> {
        self.events.as_mut()?.get_mut(event)
    }
}

/// Named-event listener registry.
///
/// Cloning an `Emitter` yields another handle to the same registry. The
/// registry lock is never held while a listener runs, so listeners may call
/// back into the emitter (`on`, `off`, `emit`) without deadlocking.
#[derive(Clone, Default)]
pub struct Emitter {
    registry: Arc<Mutex<Registry>>,
}

fn require_event(event: &str) -> Result<(), BalloonError> {
    if event.is_empty() {
        return Err(BalloonError::MissingArgument("event"));
    }
    Ok(())
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `other` is a handle to the same registry.
    pub fn same(&self, other: &Emitter) -> bool {
        Arc::ptr_eq(&self.registry, &other.registry)
    }

    /// Register `listener` for `event`.
    pub fn on(&self, event: &str, listener: Listener) -> Result<&Self, BalloonError> {
        self.register(event, listener, false)
    }

    /// Register `listener` for the next emission of `event` only.
    pub fn once(&self, event: &str, listener: Listener) -> Result<&Self, BalloonError> {
        self.register(event, listener, true)
    }

    fn register(&self, event: &str, listener: Listener, once: bool) -> Result<&Self, BalloonError> {
        require_event(event)?;

        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry
            .events
            .get_or_insert_with(HashMap::new)
            .entry(event.to_string())
            .or_default()
            .push(ListenerEntry { id, listener, once });

        trace!(event, once, "listener registered");
        Ok(self)
    }

    /// Remove the first registration of `listener` for `event`.
    pub fn off(&self, event: &str, listener: &Listener) -> Result<&Self, BalloonError> {
        require_event(event)?;

        let mut registry = self.registry.lock();
        if let Some(listeners) = registry.listeners_mut(event) {
            if let Some(slot) = listeners.iter().position(|e| e.listener.same(listener)) {
                listeners.remove(slot);
                trace!(event, "listener removed");
            }
        }

        Ok(self)
    }

    /// Listeners currently registered for `event`, in call order.
    ///
    /// `None` when nothing was ever registered for it; an emptied sequence
    /// stays `Some(vec![])`.
    pub fn get_listeners(&self, event: &str) -> Result<Option<Vec<ListenerEntry>>, BalloonError> {
        require_event(event)?;
        Ok(self.registry.lock().listeners(event).cloned())
    }

    /// Call every listener of `event` in registration order.
    ///
    /// `target` is set to this emitter unless the caller supplied one. Once
    /// listeners are removed right before they run. Listeners registered
    /// while this call is in progress run from the next emission on.
    pub fn emit(&self, event: impl Into<Event>, args: &[Value]) -> Result<&Self, BalloonError> {
        let mut event = event.into();
        require_event(&event.event_type)?;

        if event.target.is_none() {
            event.target = Some(self.clone());
        }

        let cutoff = self.registry.lock().next_id;
        let mut last: Option<u64> = None;
        let mut fired = 0usize;

        loop {
            let entry = {
                let mut registry = self.registry.lock();
                let Some(listeners) = registry.listeners_mut(&event.event_type) else {
                    break;
                };
                // Ids grow along the sequence, so resume after the last id that ran
                // whatever the listeners removed in the meantime.
                let cursor = listeners
                    .iter()
                    .position(|e| last.map_or(true, |id| e.id > id))
                    .unwrap_or(listeners.len());
                match listeners.get(cursor) {
                    Some(entry) if entry.id < cutoff => {
                        let entry = entry.clone();
                        // Out before it runs, so a nested emit cannot call it again.
                        if entry.once {
                            listeners.remove(cursor);
                        }
                        entry
                    }
                    _ => break,
                }
            };

            last = Some(entry.id);
            entry.listener.call(&event, args);
            fired += 1;
        }

        trace!(event = %event.event_type, fired, "event emitted");
        Ok(self)
    }

    /// Drop every registered listener.
    pub fn clear(&self) {
        self.registry.lock().events = None;
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.lock();
        let mut events: Vec<(&str, usize)> = registry
            .events
            .iter()
            .flatten()
            .map(|(name, listeners)| (name.as_str(), listeners.len()))
            .collect();
        events.sort_unstable();
        f.debug_struct("Emitter").field("events", &events).finish()
    }
}
