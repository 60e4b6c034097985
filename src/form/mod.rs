//! Schema-driven parameter form for a single step.
//!
//! The form shows one input per catalog field, in catalog order, and turns every edit
//! into a typed value right away. There is no validation state: a number field that
//! receives text it cannot parse stores `0`, and consumers treat `0` as unset.

use crate::catalog::{ActionCatalog, FieldKind, FieldSpec};
use crate::graph::{GraphModel, NodeId};
use crate::step::{ParamValue, Step};

mod coerce;

pub use coerce::coerce;

/// Value shown in an input widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Toggle(bool),
}

/// A raw edit coming from an input widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Text(String),
    Toggle(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub placeholder: String,
    pub input: FieldInput,
}

/// What a node renders: its label and the parameter inputs of its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub action: String,
    pub label: String,
    /// `false` when the action is not in the catalog.
    pub known: bool,
    pub fields: Vec<FormField>,
}

impl FormView {
    /// The "no parameters" state.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub struct ParameterForm;

impl ParameterForm {
    pub fn render(step: &Step, catalog: &ActionCatalog) -> FormView {
        let action = catalog.resolve(&step.action);
        FormView {
            action: step.action.clone(),
            label: action.label.to_string(),
            known: action.is_known(),
            fields: action
                .fields
                .iter()
                .map(|spec| FormField {
                    name: spec.name.clone(),
                    kind: spec.kind,
                    placeholder: spec.placeholder.clone(),
                    input: Self::input_for(spec, step.get(&spec.name)),
                })
                .collect(),
        }
    }

    fn input_for(spec: &FieldSpec, value: Option<&ParamValue>) -> FieldInput {
        match spec.kind {
            // Unset toggles read as enabled.
            FieldKind::Boolean => FieldInput::Toggle(match value {
                Some(ParamValue::Bool(b)) => *b,
                Some(other) => coerce::truthy(&other.to_string()),
                None => true,
            }),
            FieldKind::Text | FieldKind::Number => {
                FieldInput::Text(value.map(|v| v.to_string()).unwrap_or_default())
            }
        }
    }

    /// Coerces an edit for `field` of the node's action and writes it to the graph.
    ///
    /// Fields the catalog does not declare for the action are stored as text.
    /// Edits for unknown nodes are ignored.
    pub fn apply(
        graph: &mut GraphModel,
        node: NodeId,
        field: &str,
        edit: FieldEdit,
        catalog: &ActionCatalog,
    ) {
        let Some(current) = graph.node(node) else {
            return;
        };
        let kind = catalog
            .lookup(&current.step.action)
            .and_then(|def| def.field(field))
            .map_or(FieldKind::Text, |spec| spec.kind);
        graph.update_node_step(node, field, coerce(kind, edit));
    }
}
