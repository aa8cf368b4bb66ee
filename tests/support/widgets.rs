use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use balloons::{define, define_with, Definition, Prototype};
use serde_json::json;

/// `Foo` counts how many times its `init` ran.
pub fn foo(inits: Arc<AtomicUsize>) -> Definition {
    define(
        Prototype::new()
            .with_value("name", "Foo")
            .with_method("init", move |_, _| {
                inits.fetch_add(1, Ordering::SeqCst);
                Ok(json!(null))
            })
            .with_method("sayFoo", |_, _| Ok(json!("foo"))),
    )
}

pub fn foobar(foo: &Definition) -> Definition {
    define_with(
        &[foo],
        Prototype::new()
            .with_value("name", "Foobar")
            .with_method("sayFoobar", |_, _| Ok(json!("foobar"))),
    )
}
