//! The action catalog: the fixed registry of known actions and their parameter schemas.
//!
//! The catalog is the single source of truth for which parameters an action has and how
//! each one is coerced. Both the parameter form and the codec consult it. A missing
//! entry is never an error: [`ActionCatalog::resolve`] falls back to a label equal to
//! the action id and an empty field list, so steps created by a newer server still load.

use ahash::AHashMap;

mod builtin;
pub mod definition;

pub use builtin::BUILTIN_ACTION_IDS;
pub use definition::*;

/// Read-only registry of action definitions, keyed by action id.
#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    actions: Vec<ActionDefinition>,
    index: AHashMap<String, usize>,
}

/// The view of an action as seen by renderers: either a catalog entry or the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAction<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub fields: &'a [FieldSpec],
    known: bool,
}

impl ResolvedAction<'_> {
    /// `false` when the action id is not in the catalog and the fallback was used.
    pub fn is_known(&self) -> bool {
        self.known
    }
}

impl ActionCatalog {
    /// An empty catalog. Every action resolves to the fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of actions the tracker engine ships with.
    pub fn builtin() -> Self {
        builtin::builtin_actions()
            .into_iter()
            .fold(Self::new(), |catalog, def| catalog.with_action(def))
    }

    /// Registers an action, replacing any existing definition with the same id in place.
    pub fn with_action(mut self, definition: ActionDefinition) -> Self {
        match self.index.get(&definition.id) {
            Some(&slot) => self.actions[slot] = definition,
            None => {
                self.index
                    .insert(definition.id.clone(), self.actions.len());
                self.actions.push(definition);
            }
        }
        self
    }

    pub fn lookup(&self, action_id: &str) -> Option<&ActionDefinition> {
        self.index.get(action_id).map(|&slot| &self.actions[slot])
    }

    /// Resolves an action id, falling back to `{ label: action_id, fields: [] }`.
    pub fn resolve<'a>(&'a self, action_id: &'a str) -> ResolvedAction<'a> {
        match self.lookup(action_id) {
            Some(def) => ResolvedAction {
                id: &def.id,
                label: &def.label,
                fields: &def.fields,
                known: true,
            },
            None => ResolvedAction {
                id: action_id,
                label: action_id,
                fields: &[],
                known: false,
            },
        }
    }

    pub fn contains(&self, action_id: &str) -> bool {
        self.index.contains_key(action_id)
    }

    /// All definitions in declaration order, as the palette lists them.
    pub fn iter(&self) -> std::slice::Iter<'_, ActionDefinition> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
