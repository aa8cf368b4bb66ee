use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use super::Construct;
use crate::config::Config;
use crate::emitter::{Emitter, Observable};
use crate::error::BalloonError;
use crate::object::Object;
use crate::prototype::{Member, Prototype, SharedPrototype};
use crate::scheduler::{ScheduledTask, Scheduler};

/// An instance built by a [`Definition`](super::Definition).
///
/// Emits `enable`, `disable` and `destroy` synchronously, and `ready` once,
/// shortly after construction.
pub struct Component {
    prototype: SharedPrototype,
    events: Emitter,
    enabled: bool,
    destroyed: bool,
    options: Object,
    ready: Option<ScheduledTask>,
}

impl Component {
    /// Runs the initialization protocol: enable, resolve options, call the
    /// init member, then schedule `ready`.
    pub(crate) fn initialize(
        prototype: SharedPrototype,
        construct: Construct,
        config: &Config,
        scheduler: &dyn Scheduler,
    ) -> Result<Self, BalloonError> {
        let options = construct.resolve_options(prototype.read().defaults())?;

        let mut component = Component {
            prototype,
            events: Emitter::new(),
            enabled: true,
            destroyed: false,
            options,
            ready: None,
        };

        let init = component.prototype.read().method(&config.init_member);
        if let Some(init) = init {
            init(&mut component, &construct.args)?;
        }

        let events = component.events.clone();
        let ready_event = config.ready_event.clone();
        let task = scheduler.schedule(
            config.ready_delay(),
            Box::new(move || {
                if let Err(err) = events.emit(ready_event.as_str(), &[]) {
                    warn!(error = %err, "could not emit deferred ready event");
                }
            }),
        );
        component.ready = Some(task);

        debug!(name = ?component.name(), "component initialized");
        Ok(component)
    }

    /// The `name` member (`"component"` unless a definition overrides it).
    pub fn name(&self) -> Option<String> {
        self.prototype
            .read()
            .get("name")
            .and_then(Member::as_value)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Defaults merged with the options given at construction.
    pub fn options(&self) -> &Object {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Object {
        &mut self.options
    }

    /// The member table shared with every instance of the same definition.
    pub fn prototype(&self) -> &SharedPrototype {
        &self.prototype
    }

    pub fn enable(&mut self) -> Result<&mut Self, BalloonError> {
        self.enabled = true;
        self.events.emit("enable", &[])?;
        debug!(name = ?self.name(), "component enabled");
        Ok(self)
    }

    pub fn disable(&mut self) -> Result<&mut Self, BalloonError> {
        self.enabled = false;
        self.events.emit("disable", &[])?;
        debug!(name = ?self.name(), "component disabled");
        Ok(self)
    }

    /// Cancels a pending `ready`, disables, then emits `destroy`.
    ///
    /// Registered listeners are kept.
    pub fn destroy(&mut self) -> Result<&mut Self, BalloonError> {
        if let Some(ready) = self.ready.take() {
            if ready.cancel() {
                debug!(name = ?self.name(), "pending ready cancelled");
            }
        }
        self.disable()?;
        self.destroyed = true;
        self.events.emit("destroy", &[])?;
        debug!(name = ?self.name(), "component destroyed");
        Ok(self)
    }

    /// Merges `members` into the shared table, for this instance and every
    /// other instance of its definition, present and future.
    pub fn inflate(&mut self, members: Prototype) -> &mut Self {
        self.prototype.write().extend(&members);
        self
    }

    pub fn get(&self, name: &str) -> Option<Member> {
        self.prototype.read().get(name).cloned()
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.prototype.read().contains(name)
    }

    /// The value member stored under `name`.
    pub fn value(&self, name: &str) -> Option<Value> {
        self.prototype
            .read()
            .get(name)
            .and_then(Member::as_value)
            .cloned()
    }

    /// Invoke the method stored under `name` with this component as receiver.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value, BalloonError> {
        let member = self
            .get(name)
            .ok_or_else(|| BalloonError::UnknownMember(name.to_string()))?;

        match member {
            Member::Method(method) => method(self, args),
            Member::Value(_) => Err(BalloonError::NotCallable(name.to_string())),
        }
    }
}

impl Observable for Component {
    fn emitter(&self) -> &Emitter {
        &self.events
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name())
            .field("enabled", &self.enabled)
            .field("destroyed", &self.destroyed)
            .field("options", &self.options)
            .field("events", &self.events)
            .finish()
    }
}
