//! FILENAME: engine/src/session.rs
//! PURPOSE: Session state aggregate and the sequence editing operations.
//! CONTEXT: One session owns the parameter store, the formula sequences,
//! and the active sequence index. All mutation goes through the methods
//! here, driven by user events from the UI collaborator (button clicks,
//! parameter edits, drag completions). Single-threaded and synchronous —
//! every operation is a finite in-place transformation.

use crate::api_types::{DragIntent, SequenceInfo, SequencesResult};
use crate::evaluator::Evaluator;
use crate::parameter::{Parameter, ParameterStore};
use crate::sequence::FormulaSequence;
use crate::{log_debug, log_info};
use formula::{Operator, Token};

/// The exclusively-owned mutable root of one editing session.
///
/// Invariants maintained by the methods below:
/// - `sequences` is never empty;
/// - `active_sequence` is always a valid index into `sequences`;
/// - sequence ids are never reused within a session.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub parameters: ParameterStore,
    sequences: Vec<FormulaSequence>,
    active_sequence: usize,
    next_sequence_id: u64,
}

impl SessionState {
    /// Minimal valid state: no parameters, one empty sequence.
    pub fn new() -> Self {
        SessionState {
            parameters: ParameterStore::new(),
            sequences: vec![FormulaSequence::new("seq1", "Formula 1")],
            active_sequence: 0,
            next_sequence_id: 2,
        }
    }

    // ========================================================================
    // READ ACCESSORS
    // ========================================================================

    pub fn sequences(&self) -> &[FormulaSequence] {
        &self.sequences
    }

    pub fn active_index(&self) -> usize {
        self.active_sequence
    }

    pub fn active_sequence(&self) -> &FormulaSequence {
        &self.sequences[self.active_sequence]
    }

    fn active_sequence_mut(&mut self) -> &mut FormulaSequence {
        &mut self.sequences[self.active_sequence]
    }

    fn sequence_mut(&mut self, id: &str) -> Option<&mut FormulaSequence> {
        self.sequences.iter_mut().find(|s| s.id == id)
    }

    /// Evaluates one sequence. Out-of-range indices evaluate to 0.
    pub fn evaluate_sequence(&self, index: usize) -> f64 {
        match self.sequences.get(index) {
            Some(sequence) => Evaluator::new(&self.parameters).evaluate(&sequence.tokens),
            None => 0.0,
        }
    }

    /// Re-evaluates every sequence independently. Called per render; there
    /// is no cached or incremental evaluation, and none is needed since
    /// sequences are small.
    pub fn sequence_results(&self) -> Vec<f64> {
        let evaluator = Evaluator::new(&self.parameters);
        self.sequences
            .iter()
            .map(|s| evaluator.evaluate(&s.tokens))
            .collect()
    }

    /// Tab-strip payload for the UI: every sequence with its live result,
    /// plus the active index.
    pub fn get_sequences(&self) -> SequencesResult {
        let evaluator = Evaluator::new(&self.parameters);
        let sequences = self
            .sequences
            .iter()
            .enumerate()
            .map(|(index, sequence)| SequenceInfo {
                index,
                id: sequence.id.clone(),
                name: sequence.name.clone(),
                result: evaluator.evaluate(&sequence.tokens),
            })
            .collect();

        SequencesResult {
            sequences,
            active_index: self.active_sequence,
        }
    }

    // ========================================================================
    // SEQUENCE MANAGEMENT
    // ========================================================================

    /// Appends a new empty sequence and makes it active.
    pub fn add_sequence(&mut self) -> &FormulaSequence {
        let n = self.next_sequence_id;
        self.next_sequence_id += 1;
        self.sequences.push(FormulaSequence::new(
            format!("seq{}", n),
            format!("Formula {}", n),
        ));
        self.active_sequence = self.sequences.len() - 1;
        log_info!("SES", "Added sequence seq{}", n);
        &self.sequences[self.active_sequence]
    }

    /// Removes a sequence. Refused when it is the last one — a session
    /// always retains at least one sequence. The active index is adjusted
    /// to stay valid, preferring the previous index when the removed
    /// sequence was at or before the active one.
    pub fn remove_sequence(&mut self, index: usize) -> Result<(), String> {
        if self.sequences.len() <= 1 {
            return Err("Cannot remove the last sequence".to_string());
        }
        if index >= self.sequences.len() {
            return Err(format!("Sequence index {} out of range", index));
        }

        let removed = self.sequences.remove(index);
        if self.active_sequence >= index {
            self.active_sequence = self.active_sequence.saturating_sub(1);
        }
        log_info!("SES", "Removed sequence {}", removed.id);
        Ok(())
    }

    /// Pure metadata update; names are not required to be unique.
    pub fn rename_sequence(&mut self, index: usize, name: &str) -> Result<(), String> {
        match self.sequences.get_mut(index) {
            Some(sequence) => {
                sequence.name = name.to_string();
                Ok(())
            }
            None => Err(format!("Sequence index {} out of range", index)),
        }
    }

    pub fn set_active_sequence(&mut self, index: usize) -> Result<(), String> {
        if index >= self.sequences.len() {
            return Err(format!("Sequence index {} out of range", index));
        }
        self.active_sequence = index;
        Ok(())
    }

    // ========================================================================
    // TOKEN EDITS (active sequence)
    // ========================================================================

    /// Appends an operand to the active sequence, joined by `operator`
    /// unless the sequence is empty.
    pub fn append_operand(&mut self, ref_id: &str, operator: Operator) {
        self.active_sequence_mut().append_operand(ref_id, operator);
    }

    /// Appends an empty parenthesis pair to the active sequence.
    pub fn append_group(&mut self) {
        self.active_sequence_mut().append_group();
    }

    /// Removes the token at `index` from the active sequence together with
    /// its paired operator.
    pub fn remove_token(&mut self, index: usize) {
        self.active_sequence_mut().remove_at(index);
    }

    /// Raw positional move of one token within or across sequences, with
    /// no operator rebalancing. The end state may violate the alternating
    /// invariant; producing sensible moves is the drag collaborator's
    /// responsibility and the evaluator tolerates anything. Unknown ids
    /// and out-of-range source indices are silent no-ops; the destination
    /// index is clamped.
    pub fn move_token(
        &mut self,
        from_sequence_id: &str,
        from_index: usize,
        to_sequence_id: &str,
        to_index: usize,
    ) {
        if self.sequence_mut(to_sequence_id).is_none() {
            return;
        }
        let token = match self.sequence_mut(from_sequence_id) {
            Some(source) => match source.take_token(from_index) {
                Some(token) => token,
                None => return,
            },
            None => return,
        };
        // Destination re-borrowed after the removal so a same-sequence
        // move inserts relative to the already-shortened sequence.
        if let Some(dest) = self.sequence_mut(to_sequence_id) {
            dest.insert_token(to_index, token);
        }
        log_debug!(
            "SES",
            "Moved token {}:{} -> {}:{}",
            from_sequence_id,
            from_index,
            to_sequence_id,
            to_index
        );
    }

    /// Maps a completed drag gesture directly onto `move_token`.
    pub fn apply_drag(&mut self, intent: &DragIntent) {
        self.move_token(
            &intent.source_sequence_id,
            intent.source_index,
            &intent.dest_sequence_id,
            intent.dest_index,
        );
    }

    // ========================================================================
    // PARAMETER OPERATIONS
    // ========================================================================

    pub fn add_parameter(&mut self, name: Option<String>) -> Parameter {
        let parameter = self.parameters.add(name);
        log_info!("SES", "Added parameter {}", parameter.id);
        parameter
    }

    pub fn set_parameter_value(&mut self, id: &str, value: f64) {
        self.parameters.upsert_value(id, value);
    }

    /// Removes a parameter and cascades: every operand token referencing
    /// it, in every sequence, is removed with it. An operand never
    /// outlives its parameter.
    pub fn remove_parameter(&mut self, id: &str) {
        if self.parameters.remove(id) {
            for sequence in &mut self.sequences {
                sequence.purge_operands(id);
            }
            log_info!("SES", "Removed parameter {}", id);
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the seeded demo session the application boots with: three zero
/// parameters and two example formulas, `( p1 + p2 )` and `p3 * p1`.
pub fn create_session_state() -> SessionState {
    log_info!("SYS", "Creating SessionState");
    let mut state = SessionState::new();
    for _ in 0..3 {
        state.parameters.add(None);
    }

    state.sequences[0].tokens = vec![
        Token::GroupOpen,
        Token::operand("p1"),
        Token::Operator(Operator::Add),
        Token::operand("p2"),
        Token::GroupClose,
    ];

    state.add_sequence();
    state.sequences[1].tokens = vec![
        Token::operand("p3"),
        Token::Operator(Operator::Multiply),
        Token::operand("p1"),
    ];

    state.active_sequence = 0;
    state
}
