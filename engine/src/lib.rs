//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the block formula engine.
//! CONTEXT: Re-exports public types and modules for use by the host
//! application. The engine owns one session: named numeric parameters,
//! formula sequences built from tokens, and the evaluator that reduces a
//! sequence to a number on every render.

pub mod api_types;
pub mod evaluator;
pub mod logging;
pub mod parameter;
pub mod sequence;
pub mod session;

// Re-export commonly used types at the crate root
pub use api_types::{DragIntent, SequenceInfo, SequencesResult, TokenData};
pub use evaluator::{evaluate, Evaluator};
pub use parameter::{Parameter, ParameterStore};
pub use sequence::FormulaSequence;
pub use session::{create_session_state, SessionState};

// The token vocabulary comes from the formula crate
pub use formula::{Operator, Token};
