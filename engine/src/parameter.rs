//! FILENAME: engine/src/parameter.rs
//! PURPOSE: Defines named numeric parameters and their ordered store.
//! CONTEXT: Parameters are the only source of values in a formula. Operand
//! tokens refer to them by id; the evaluator looks values up through the
//! store on every pass, so edits and renames are always live.

use serde::{Deserialize, Serialize};

/// A named numeric input that formula blocks can reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Stable id, unique for the lifetime of the session. Never reused
    /// after removal.
    pub id: String,
    /// Display label shown on parameter blocks. User-editable.
    pub name: String,
    pub value: f64,
}

/// Ordered collection of parameters with id-based lookup.
///
/// Ids are issued from a monotonic counter so they stay fresh across
/// removals; while nothing has been removed the next id equals the
/// parameter count plus one.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    parameters: Vec<Parameter>,
    next_id: u64,
}

impl ParameterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ParameterStore {
            parameters: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns the parameter's current value, or 0 if the id does not
    /// resolve. Dangling references are evaluated best-effort, never
    /// surfaced as errors.
    pub fn lookup(&self, ref_id: &str) -> f64 {
        self.parameters
            .iter()
            .find(|p| p.id == ref_id)
            .map(|p| p.value)
            .unwrap_or(0.0)
    }

    /// Retrieves a parameter by id.
    pub fn get(&self, ref_id: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.id == ref_id)
    }

    /// Display name for an operand referencing `ref_id`. Resolved at
    /// render time so renames stay consistent; falls back to the raw id
    /// when the parameter no longer exists.
    pub fn display_name(&self, ref_id: &str) -> String {
        self.get(ref_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| ref_id.to_string())
    }

    /// Replaces the value of an existing parameter. Silent no-op if the id
    /// is absent or the value is not finite (stored values are always
    /// finite numbers).
    pub fn upsert_value(&mut self, id: &str, value: f64) {
        if !value.is_finite() {
            return;
        }
        if let Some(param) = self.parameters.iter_mut().find(|p| p.id == id) {
            param.value = value;
        }
    }

    /// Replaces the display name of an existing parameter. Silent no-op if
    /// the id is absent. Operand labels resolve names at render time, so a
    /// rename shows up everywhere on the next render.
    pub fn rename(&mut self, id: &str, name: &str) {
        if let Some(param) = self.parameters.iter_mut().find(|p| p.id == id) {
            param.name = name.to_string();
        }
    }

    /// Creates a parameter with a fresh id and value 0. When no name is
    /// given the default "Parameter {n}" label is used.
    pub fn add(&mut self, name: Option<String>) -> Parameter {
        let n = self.next_id;
        self.next_id += 1;
        let parameter = Parameter {
            id: format!("p{}", n),
            name: name.unwrap_or_else(|| format!("Parameter {}", n)),
            value: 0.0,
        };
        self.parameters.push(parameter.clone());
        parameter
    }

    /// Deletes a parameter. Returns true if something was removed.
    ///
    /// Removing a parameter must also remove every operand token that
    /// references it; that cascade is driven by the owning session state,
    /// which holds the formula sequences.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.parameters.len();
        self.parameters.retain(|p| p.id != id);
        self.parameters.len() != before
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
