//! FILENAME: formula/src/token.rs
//! PURPOSE: Token definitions for block formula sequences.
//! CONTEXT: Tokens are the atomic units a formula is built from. The user
//! composes them by clicking and dragging blocks in the UI; the engine
//! evaluates the resulting sequence. There is no lexer — sequences are
//! assembled token by token, never parsed from text.

use serde::{Deserialize, Serialize};

/// Arithmetic operators available between operands.
///
/// There is no operator precedence in this language: `*` and `/` do not
/// bind tighter than `+` and `-`. Evaluation is strictly left to right and
/// only explicit grouping changes the order of operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The single-character symbol form: '+', '-', '*', '/'.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Parses a symbol character back into an operator.
    pub fn from_symbol(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The word label shown on operator blocks in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Operator::Add => "plus",
            Operator::Subtract => "minus",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single block in a formula sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// References a parameter by id. Resolves to the parameter's current
    /// value during evaluation, or to 0 if the id no longer exists.
    Operand { ref_id: String },
    Operator(Operator),
    /// Opening parenthesis marker. Groups carry no label or pairing id;
    /// matching is re-derived by nesting depth on every evaluation.
    GroupOpen,
    GroupClose,
}

impl Token {
    /// Convenience constructor for operand tokens.
    pub fn operand(ref_id: impl Into<String>) -> Token {
        Token::Operand {
            ref_id: ref_id.into(),
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Operand { .. })
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Operand { ref_id } => write!(f, "{}", ref_id),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::GroupOpen => write!(f, "("),
            Token::GroupClose => write!(f, ")"),
        }
    }
}
