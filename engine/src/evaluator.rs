//! FILENAME: engine/src/evaluator.rs
//! PURPOSE: Evaluates a token sequence to a number.
//! CONTEXT: Sequences stay flat so the editor can insert, remove, and move
//! tokens by index; the evaluator re-derives grouping structure from
//! nesting depth on every call. Evaluation is strictly left to right with
//! no operator precedence — explicit parentheses are the only way to
//! change the order of operations.
//!
//! POLICIES (part of the contract, not incidental behavior):
//! - Dangling operand references resolve to 0.
//! - Division by a zero operand is skipped; the running result is left
//!   unchanged, never Infinity or NaN.
//! - Unbalanced parentheses are tolerated: an unmatched `(` groups the
//!   remainder of the sequence, an unmatched `)` combines as a zero-valued
//!   operand. The evaluator never re-validates the editor's invariants.

use crate::parameter::ParameterStore;
use formula::{Operator, Token};

/// Evaluates token sequences against a parameter store.
///
/// Pure and total: the same sequence and store always produce the same
/// number, and no input makes evaluation fail.
pub struct Evaluator<'a> {
    params: &'a ParameterStore,
}

impl<'a> Evaluator<'a> {
    pub fn new(params: &'a ParameterStore) -> Self {
        Evaluator { params }
    }

    /// Reduces a token sequence to a number. The empty sequence is 0.
    pub fn evaluate(&self, tokens: &[Token]) -> f64 {
        let mut result = 0.0;
        let mut pending = Operator::Add;
        let mut i = 0;

        while i < tokens.len() {
            match &tokens[i] {
                Token::GroupOpen => {
                    // Forward scan for the matching close, tracking depth.
                    let mut depth = 1;
                    let mut j = i + 1;
                    while j < tokens.len() && depth > 0 {
                        match tokens[j] {
                            Token::GroupOpen => depth += 1,
                            Token::GroupClose => depth -= 1,
                            _ => {}
                        }
                        j += 1;
                    }
                    // Sub-sequence excludes the markers. With no matching
                    // close the remainder of the tokens is the group.
                    let end = if depth == 0 { j - 1 } else { j };
                    let sub = self.evaluate(&tokens[i + 1..end]);
                    result = if i == 0 {
                        sub
                    } else {
                        apply(pending, result, sub)
                    };
                    i = j;
                }
                Token::Operator(op) => {
                    // An operator only sets the pending operator; it is
                    // combined when the next operand or group arrives.
                    pending = *op;
                    i += 1;
                }
                Token::Operand { ref_id } => {
                    let value = self.params.lookup(ref_id);
                    result = if i == 0 {
                        value
                    } else {
                        apply(pending, result, value)
                    };
                    i += 1;
                }
                Token::GroupClose => {
                    // Only reachable when unmatched: a matched close is
                    // consumed by the group scan above. Combines as a
                    // zero-valued operand.
                    result = if i == 0 { 0.0 } else { apply(pending, result, 0.0) };
                    i += 1;
                }
            }
        }

        result
    }
}

/// Combines the running result with the next value.
fn apply(op: Operator, left: f64, right: f64) -> f64 {
    match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        // Division by zero is swallowed: the running result is kept.
        Operator::Divide => {
            if right == 0.0 {
                left
            } else {
                left / right
            }
        }
    }
}

/// Convenience wrapper for one-off evaluations.
pub fn evaluate(tokens: &[Token], params: &ParameterStore) -> f64 {
    Evaluator::new(params).evaluate(tokens)
}
