//! FILENAME: engine/src/api_types.rs
//! PURPOSE: Shared type definitions for the UI collaborator.
//! CONTEXT: All structs use camelCase serialization for JavaScript
//! interoperability. The rendering layer consumes these payloads; the
//! drag-and-drop layer produces `DragIntent` events.

use crate::parameter::ParameterStore;
use formula::Token;
use serde::{Deserialize, Serialize};

/// One token as rendered by the frontend: a display label plus the raw
/// payload (parameter id, operator symbol, or parenthesis).
///
/// Labels are derived at build time from the current store, never cached,
/// so parameter renames show up on the next render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    pub label: String,
    pub value: String,
}

impl TokenData {
    pub fn from_token(token: &Token, params: &ParameterStore) -> Self {
        match token {
            Token::Operand { ref_id } => TokenData {
                label: params.display_name(ref_id),
                value: ref_id.clone(),
            },
            Token::Operator(op) => TokenData {
                label: op.label().to_string(),
                value: op.symbol().to_string(),
            },
            Token::GroupOpen => TokenData {
                label: "(".to_string(),
                value: "(".to_string(),
            },
            Token::GroupClose => TokenData {
                label: ")".to_string(),
                value: ")".to_string(),
            },
        }
    }
}

/// Information about a single sequence (sent to frontend).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceInfo {
    pub index: usize,
    pub id: String,
    pub name: String,
    /// Live evaluation result, recomputed on every render.
    pub result: f64,
}

/// Result of the get_sequences accessor: the tab strip plus active tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequencesResult {
    pub sequences: Vec<SequenceInfo>,
    pub active_index: usize,
}

/// A completed drag gesture from the drag-and-drop collaborator. Mapped
/// directly onto `SessionState::move_token`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragIntent {
    pub source_sequence_id: String,
    pub source_index: usize,
    pub dest_sequence_id: String,
    pub dest_index: usize,
}
