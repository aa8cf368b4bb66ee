use thiserror::Error;

/// Error type shared by every operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalloonError {
    /// A required argument was absent (empty event name, ...).
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    /// An argument had the wrong shape, e.g. a scalar where a mapping was expected.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    /// A component was constructed with parameters the initializer cannot interpret.
    #[error("unsupported instantiation: {0}")]
    UnsupportedInstantiation(String),
    /// No member with this name exists on the component.
    #[error("unknown member: {0}")]
    UnknownMember(String),
    /// The member exists but holds a value, not a method.
    #[error("member is not callable: {0}")]
    NotCallable(String),
    /// A user-supplied method refused to run.
    #[error("rejected: {0}")]
    Rejected(String),
    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The scheduler could not be created.
    #[error("scheduler unavailable: {0}")]
    Scheduler(String),
}

impl BalloonError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        BalloonError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BalloonError {
    fn from(err: serde_json::Error) -> Self {
        BalloonError::Config(err.to_string())
    }
}
