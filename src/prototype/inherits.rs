use std::sync::Arc;

use tracing::trace;

use super::{Constructor, Prototype};

/// Copies the member table of `parent` onto `child` and returns the parent's
/// table as it was copied.
///
/// This is a one-time flat copy: members added to `parent` afterwards are not
/// seen by `child`. Calling it for several parents in a row composes them, the
/// last call winning on name collisions.
pub fn inherits<C, P>(child: &C, parent: &P) -> Prototype
where
    C: Constructor + ?Sized,
    P: Constructor + ?Sized,
{
    let snapshot = parent.prototype().read().clone();

    if !Arc::ptr_eq(child.prototype(), parent.prototype()) {
        child.prototype().write().extend(&snapshot);
    }

    trace!(members = snapshot.len(), "inherited member table");
    snapshot
}
