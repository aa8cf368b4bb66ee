use std::sync::Arc;

use balloons::{listener, Listener, Observable};
use parking_lot::Mutex;
use serde_json::Value;

/// Collects `(event, args)` pairs in the order listeners fire.
#[derive(Clone, Default)]
pub struct Recorder {
    log: Arc<Mutex<Vec<(String, Vec<Value>)>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener that records every call under `tag`.
    pub fn listener(&self, tag: &str) -> Listener {
        let log = Arc::clone(&self.log);
        let tag = tag.to_string();
        listener(move |_, args| log.lock().push((tag.clone(), args.to_vec())))
    }

    /// Record each of `events` on `target` under its own name.
    pub fn watch<O: Observable>(&self, target: &O, events: &[&str]) {
        for event in events {
            target.on(event, self.listener(event)).unwrap();
        }
    }

    pub fn tags(&self) -> Vec<String> {
        self.log.lock().iter().map(|(tag, _)| tag.clone()).collect()
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.log.lock().clone()
    }

    pub fn count(&self, tag: &str) -> usize {
        self.log.lock().iter().filter(|(t, _)| t == tag).count()
    }
}
