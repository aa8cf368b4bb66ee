mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use balloons::scheduler::ManualScheduler;
use balloons::{
    define, define_with, inherits, BalloonError, Config, Constructor, Construct, Observable,
    Prototype,
};
use serde_json::{json, Value};
use support::{foo, foobar};

#[test]
fn instances_expose_component_capabilities() {
    let foo = foo(Arc::new(AtomicUsize::new(0)));
    let instance = foo.new_instance().unwrap();

    assert_eq!(instance.name().as_deref(), Some("Foo"));
    assert!(instance.is_enabled());
    assert!(instance.get_listeners("ready").unwrap().is_none());
    assert!(instance.has_member("sayFoo"));
    assert!(instance.has_member("init"));
}

#[test]
fn init_runs_synchronously_on_construction() {
    let inits = Arc::new(AtomicUsize::new(0));
    let foo = foo(Arc::clone(&inits));

    let _first = foo.new_instance().unwrap();
    assert_eq!(inits.load(Ordering::SeqCst), 1);
    let _second = foo.new_instance().unwrap();
    assert_eq!(inits.load(Ordering::SeqCst), 2);
}

#[test]
fn foobar_inherits_from_foo() {
    let foo = foo(Arc::new(AtomicUsize::new(0)));
    let foobar = foobar(&foo);
    let mut instance = foobar.new_instance().unwrap();

    assert!(foobar.prototype().read().contains("sayFoo"));
    assert_eq!(instance.name().as_deref(), Some("Foobar"));
    assert_eq!(instance.call("sayFoo", &[]).unwrap(), json!("foo"));
    assert_eq!(instance.call("sayFoobar", &[]).unwrap(), json!("foobar"));
}

#[test]
fn composition_is_a_snapshot_of_the_parent() {
    let foo = foo(Arc::new(AtomicUsize::new(0)));
    let foobar = foobar(&foo);

    foo.inflate(Prototype::new().with_method("sayLater", |_, _| Ok(json!("later"))));

    assert!(foo.new_instance().unwrap().has_member("sayLater"));
    assert!(!foobar.new_instance().unwrap().has_member("sayLater"));
}

#[test]
fn inherits_returns_the_parent_table() {
    let pet = define(
        Prototype::new().with_method("setName", |component, args| {
            let name = args.first().cloned().unwrap_or(Value::Null);
            component.options_mut().insert("name".into(), name);
            Ok(Value::Null)
        }),
    );
    let cat = define(Prototype::new().with_value("name", "Cat"));

    let parent = inherits(&cat, &pet);

    assert!(parent.contains("setName"));
    assert!(cat.prototype().read().contains("setName"));

    let mut tom = cat.new_instance().unwrap();
    tom.call("setName", &[json!("Tom")]).unwrap();
    assert_eq!(tom.options()["name"], json!("Tom"));
}

#[test]
fn inflate_reaches_every_instance() {
    let scheduler = ManualScheduler::new();
    let widget = define(Prototype::new().with_value("name", "Widget")).with_scheduler(scheduler);
    let mut first = widget.new_instance().unwrap();
    let mut second = widget.new_instance().unwrap();

    first.inflate(Prototype::new().with_method("shout", |_, _| Ok(json!("HEY"))));

    assert_eq!(second.call("shout", &[]).unwrap(), json!("HEY"));
    assert_eq!(first.call("shout", &[]).unwrap(), json!("HEY"));
    assert!(widget.new_instance().unwrap().has_member("shout"));
}

#[test]
fn options_merge_over_defaults() {
    let defaults = json!({ "open": false, "speed": 3 }).as_object().cloned().unwrap();
    let panel = define(Prototype::new().with_defaults(defaults));

    let plain = panel.new_instance().unwrap();
    assert_eq!(Value::Object(plain.options().clone()), json!({ "open": false, "speed": 3 }));

    let custom = panel
        .construct(Construct::new().options(json!({ "open": true })))
        .unwrap();
    assert_eq!(Value::Object(custom.options().clone()), json!({ "open": true, "speed": 3 }));

    let again = panel.new_instance().unwrap();
    assert_eq!(again.options()["open"], json!(false));
}

#[test]
fn unsupported_options_fail_construction() {
    let panel = define(Prototype::new());
    let err = panel
        .construct(Construct::new().options(json!([1, 2, 3])))
        .unwrap_err();
    assert!(matches!(err, BalloonError::UnsupportedInstantiation(_)));
}

#[test]
fn init_receives_arguments_and_can_reject() {
    let strict = define(Prototype::new().with_method("init", |component, args| {
        match args.first().and_then(Value::as_str) {
            Some(label) => {
                component.options_mut().insert("label".into(), json!(label));
                Ok(Value::Null)
            }
            None => Err(BalloonError::Rejected("a label is required".to_string())),
        }
    }));

    let labelled = strict.construct(Construct::new().arg("hello")).unwrap();
    assert_eq!(labelled.options()["label"], json!("hello"));

    assert_eq!(
        strict.new_instance().unwrap_err(),
        BalloonError::Rejected("a label is required".to_string())
    );
}

#[test]
fn initialize_can_be_the_init_member() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let legacy = define(
        Prototype::new()
            .with_method("initialize", move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Value::Null)
            })
            .with_method("init", |_, _| Err(BalloonError::Rejected("not this one".into()))),
    )
    .with_config(Config::from_json(r#"{ "init_member": "initialize" }"#).unwrap())
    .unwrap();

    legacy.new_instance().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn define_with_no_parents_matches_define() {
    let a = define_with(&[], Prototype::new().with_value("name", "A"));
    let b = define(Prototype::new().with_value("name", "A"));

    let names = |d: &balloons::Definition| d.prototype().read().names().map(str::to_string).collect::<Vec<_>>();
    assert_eq!(names(&a), names(&b));
}
