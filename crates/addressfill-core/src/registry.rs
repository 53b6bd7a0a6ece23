use std::collections::HashMap;

use serde_json::Value;

use crate::form::FormDocument;

/// Handler invoked by the host framework after it submits a form to the
/// target the handler was registered under.
pub type SubmissionHandler = Box<dyn Fn(&mut dyn FormDocument, &Value) + Send + Sync>;

/// Registry of submission handlers keyed by target identifier. An explicit
/// value the host constructs and owns, not an ambient global map.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, SubmissionHandler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler, replacing any earlier one for the same target.
    pub fn register(&mut self, target: impl Into<String>, handler: SubmissionHandler) {
        self.handlers.insert(target.into(), handler);
    }

    pub fn lookup(&self, target: &str) -> Option<&SubmissionHandler> {
        self.handlers.get(target)
    }

    /// Invokes the handler for `target`, returning `false` when none is
    /// registered.
    pub fn dispatch(&self, target: &str, form: &mut dyn FormDocument, response: &Value) -> bool {
        match self.handlers.get(target) {
            Some(handler) => {
                handler(form, response);
                true
            }
            None => false,
        }
    }
}
