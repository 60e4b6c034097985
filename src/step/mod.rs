use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod value;

pub use value::*;

/// Field name that carries the action identifier in the flat wire form of a step.
pub const ACTION_FIELD: &str = "action";

/// One browser action with its parameters.
///
/// On the wire a step is a flat JSON object: `{"action": "wait", "seconds": 5}`.
/// A step has no position of its own; its order comes from the sequence holding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub action: String,
    #[serde(flatten)]
    pub params: BTreeMap<String, ParamValue>,
}

impl Step {
    /// A step for `action` with no parameters set, as created by dropping a palette entry.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// Sets a field of the step.
    ///
    /// `"action"` is the step's own identifier rather than a parameter; it only
    /// accepts text and any other value for it is ignored.
    pub fn set(&mut self, field: &str, value: ParamValue) {
        if field == ACTION_FIELD {
            if let ParamValue::Text(action) = value {
                self.action = action;
            }
            return;
        }
        self.params.insert(field.to_string(), value);
    }
}
