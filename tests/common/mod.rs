//! Capture sinks shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tierlog::{Level, Sink, Value};

/// One recorded sink call: which function received it and with what.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub via: String,
    pub args: Vec<Value>,
}

impl Call {
    pub fn first_text(&self) -> String {
        self.args.first().map(Value::to_text).unwrap_or_default()
    }
}

#[derive(Clone, Default)]
pub struct Capture {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorder(&self, via: &str) -> impl Fn(&[Value]) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        let via = via.to_string();
        move |args: &[Value]| {
            calls.lock().unwrap().push(Call {
                via: via.clone(),
                args: args.to_vec(),
            });
        }
    }

    /// A sink with a function for every level, like a console.
    pub fn leveled(&self) -> Sink {
        Level::all()
            .into_iter()
            .fold(Sink::empty(), |sink, level| {
                sink.level(level, self.recorder(level.as_str()))
            })
    }

    pub fn only_level(&self, level: Level) -> Sink {
        Sink::empty().level(level, self.recorder(level.as_str()))
    }

    pub fn generic_log(&self) -> Sink {
        Sink::generic_log(self.recorder("log"))
    }

    pub fn direct(&self) -> Sink {
        Sink::direct(self.recorder("direct"))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.calls().iter().map(Call::first_text).collect()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}
