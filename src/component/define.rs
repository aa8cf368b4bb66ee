use std::fmt;
use std::iter;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use super::{Component, Construct};
use crate::config::Config;
use crate::error::BalloonError;
use crate::prototype::{inherits, Constructor, Member, Prototype, SharedPrototype};
use crate::scheduler::{Scheduler, ThreadScheduler};

/// The member table every definition starts from.
fn base_prototype() -> Prototype {
    Prototype::new().with_value("name", "component")
}

/// A component "constructor": a member table plus the settings used to
/// initialize its instances.
///
/// Cloning a definition yields another handle to the same table.
#[derive(Clone)]
pub struct Definition {
    prototype: SharedPrototype,
    config: Config,
    scheduler: Arc<dyn Scheduler>,
}

impl Definition {
    fn from_prototype(prototype: Prototype) -> Self {
        Self {
            prototype: Arc::new(RwLock::new(prototype)),
            config: Config::default(),
            scheduler: Arc::new(ThreadScheduler),
        }
    }

    /// Replace the initialization settings after validating them.
    pub fn with_config(mut self, config: Config) -> Result<Self, BalloonError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn with_scheduler<S>(mut self, scheduler: S) -> Self
    where
        S: Scheduler + 'static,
    {
        self.scheduler = Arc::new(scheduler);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn name(&self) -> Option<String> {
        self.prototype
            .read()
            .get("name")
            .and_then(Member::as_value)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Build an instance.
    pub fn construct(&self, construct: Construct) -> Result<Component, BalloonError> {
        Component::initialize(
            Arc::clone(&self.prototype),
            construct,
            &self.config,
            self.scheduler.as_ref(),
        )
    }

    /// Build an instance without options or arguments.
    pub fn new_instance(&self) -> Result<Component, BalloonError> {
        self.construct(Construct::default())
    }

    /// Merge `members` into the table shared by every instance.
    pub fn inflate(&self, members: Prototype) -> &Self {
        self.prototype.write().extend(&members);
        self
    }
}

impl Constructor for Definition {
    fn prototype(&self) -> &SharedPrototype {
        &self.prototype
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("name", &self.name())
            .field("members", &self.prototype.read().names().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

/// Define a component with no parents.
///
/// ```
/// use balloons::{define, Prototype};
/// use serde_json::json;
///
/// let foo = define(
///     Prototype::new()
///         .with_value("name", "Foo")
///         .with_method("sayFoo", |_, _| Ok(json!("foo"))),
/// );
/// let mut instance = foo.new_instance().unwrap();
/// assert_eq!(instance.call("sayFoo", &[]).unwrap(), json!("foo"));
/// ```
pub fn define(members: Prototype) -> Definition {
    define_with(&[], members)
}

/// Define a component composed from `parents`.
///
/// The base component table comes first, then each parent in order, then
/// `members`; on name collisions the later source wins.
pub fn define_with(parents: &[&Definition], members: Prototype) -> Definition {
    let base = Definition::from_prototype(base_prototype());
    let definition = Definition::from_prototype(Prototype::new());

    for parent in iter::once(&base).chain(parents.iter().copied()) {
        inherits(&definition, parent);
    }
    definition.prototype.write().extend(&members);

    debug!(name = ?definition.name(), parents = parents.len(), "component defined");
    definition
}

/// Mix the base component table onto an existing constructor.
pub fn component<C>(ctor: &C) -> &C
where
    C: Constructor + ?Sized,
{
    let base = Definition::from_prototype(base_prototype());
    inherits(ctor, &base);
    ctor
}
