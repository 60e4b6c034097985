use serde::{Deserialize, Serialize};
use std::fmt;

/// How a parameter is edited and which value type it is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// Schema of one parameter of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub placeholder: String,
}

impl FieldSpec {
    pub fn new(name: &str, kind: FieldKind, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            placeholder: placeholder.to_string(),
        }
    }
}

/// A known action: its identifier, human label and ordered parameter schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDefinition {
    pub id: String,
    pub label: String,
    pub fields: Vec<FieldSpec>,
}

impl ActionDefinition {
    pub fn new(id: &str, label: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
