use std::sync::OnceLock;

use super::Emitter;

static MEDIATOR: OnceLock<Emitter> = OnceLock::new();

/// Process-wide emitter for decoupled broadcast between components.
///
/// Created on first access and never torn down. Call [`Emitter::clear`] to
/// reset it, e.g. between test cases.
pub fn mediator() -> &'static Emitter {
    MEDIATOR.get_or_init(Emitter::new)
}
