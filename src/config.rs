//! Per-definition settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::BalloonError;

/// How a [`Definition`](crate::Definition) initializes its components.
///
/// Every field has a default, so partial JSON is accepted:
///
/// ```
/// use balloons::Config;
///
/// let config = Config::from_json(r#"{ "init_member": "initialize" }"#).unwrap();
/// assert_eq!(config.init_member, "initialize");
/// assert_eq!(config.ready_delay_ms, 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay before the deferred `ready` event fires.
    pub ready_delay_ms: u64,
    /// Name of the event fired once a component is ready.
    pub ready_event: String,
    /// Member invoked with the construction arguments (`init`, or `initialize`
    /// for older component tables).
    pub init_member: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ready_delay_ms: 50,
            ready_event: "ready".to_string(),
            init_member: "init".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, BalloonError> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn ready_delay(&self) -> Duration {
        Duration::from_millis(self.ready_delay_ms)
    }

    /// Reject settings a component cannot be initialized with.
    pub fn validate(&self) -> Result<(), BalloonError> {
        if self.ready_event.is_empty() {
            return Err(BalloonError::Config("ready_event must not be empty".to_string()));
        }
        if self.init_member.is_empty() {
            return Err(BalloonError::Config("init_member must not be empty".to_string()));
        }
        Ok(())
    }
}
