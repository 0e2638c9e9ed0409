//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for engine integration tests.

use engine::{create_session_state, Operator, SessionState};

/// Test harness for creating and managing test state.
pub struct TestHarness {
    pub state: SessionState,
}

#[allow(dead_code)]
impl TestHarness {
    /// Create a new harness with the minimal session: no parameters, one
    /// empty sequence.
    pub fn new() -> Self {
        TestHarness {
            state: SessionState::new(),
        }
    }

    /// Create a harness with the seeded demo session (three parameters,
    /// two example formulas).
    pub fn with_demo_session() -> Self {
        TestHarness {
            state: create_session_state(),
        }
    }

    /// Create a harness with `count` parameters holding the given values.
    pub fn with_parameters(values: &[f64]) -> Self {
        let mut harness = Self::new();
        for value in values {
            let param = harness.state.add_parameter(None);
            harness.state.set_parameter_value(&param.id, *value);
        }
        harness
    }

    /// Create a harness with `count` sequences (the first comes from the
    /// minimal session, the rest are added and the first is re-activated).
    pub fn with_sequences(count: usize) -> Self {
        let mut harness = Self::new();
        for _ in 1..count {
            harness.state.add_sequence();
        }
        harness
            .state
            .set_active_sequence(0)
            .expect("index 0 is always valid");
        harness
    }

    /// Append `a <op> b <op> c ...` for parameter ids, all joined with the
    /// same operator.
    pub fn append_chain(&mut self, ids: &[&str], operator: Operator) {
        for id in ids {
            self.state.append_operand(id, operator);
        }
    }

    pub fn sequence_count(&self) -> usize {
        self.state.sequences().len()
    }

    pub fn sequence_name(&self, index: usize) -> Option<String> {
        self.state.sequences().get(index).map(|s| s.name.clone())
    }

    pub fn sequence_id(&self, index: usize) -> Option<String> {
        self.state.sequences().get(index).map(|s| s.id.clone())
    }

    pub fn active_tokens(&self) -> &[engine::Token] {
        &self.state.active_sequence().tokens
    }
}
