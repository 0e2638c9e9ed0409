//! FILENAME: tests/test_editor.rs
//! Integration tests for token editing: appends, paired removal, and raw
//! positional moves driven by drag intents.

mod common;

use common::TestHarness;
use engine::{DragIntent, Operator, Token};

// ============================================================================
// APPEND TESTS
// ============================================================================

#[test]
fn test_append_operand_to_empty_sequence() {
    let mut harness = TestHarness::with_parameters(&[1.0]);
    harness.state.append_operand("p1", Operator::Multiply);

    // No leading operator, whatever the requested join was
    assert_eq!(harness.active_tokens(), &[Token::operand("p1")]);
}

#[test]
fn test_append_operand_joins_with_operator() {
    let mut harness = TestHarness::with_parameters(&[1.0, 2.0]);
    harness.state.append_operand("p1", Operator::Add);
    harness.state.append_operand("p2", Operator::Subtract);

    assert_eq!(
        harness.active_tokens(),
        &[
            Token::operand("p1"),
            Token::Operator(Operator::Subtract),
            Token::operand("p2"),
        ]
    );
}

#[test]
fn test_append_group_pair() {
    let mut harness = TestHarness::with_parameters(&[1.0]);
    harness.state.append_operand("p1", Operator::Add);
    harness.state.append_group();

    assert_eq!(
        harness.active_tokens(),
        &[Token::operand("p1"), Token::GroupOpen, Token::GroupClose]
    );
}

#[test]
fn test_appends_target_active_sequence() {
    let mut harness = TestHarness::with_parameters(&[1.0]);
    harness.state.add_sequence();
    harness.state.append_operand("p1", Operator::Add);

    assert!(harness.state.sequences()[0].is_empty());
    assert_eq!(harness.state.sequences()[1].len(), 1);
}

// ============================================================================
// PAIRED REMOVAL TESTS
// ============================================================================

#[test]
fn test_remove_operator_removes_pair() {
    let mut harness = TestHarness::with_parameters(&[1.0, 2.0, 3.0]);
    harness.append_chain(&["p1", "p2", "p3"], Operator::Add);

    // Removing the operator at index 3 deletes indices 2 and 3
    harness.state.remove_token(3);

    assert_eq!(
        harness.active_tokens(),
        &[
            Token::operand("p1"),
            Token::Operator(Operator::Add),
            Token::operand("p3"),
        ]
    );
}

#[test]
fn test_removal_keeps_alternating_invariant() {
    let mut harness = TestHarness::with_parameters(&[1.0, 2.0, 3.0, 4.0]);
    harness.append_chain(&["p1", "p2", "p3", "p4"], Operator::Multiply);

    // Remove every operator position in turn and check the shape each time
    for index in [5, 3, 1] {
        harness.state.remove_token(index);

        let tokens = harness.active_tokens();
        assert!(!tokens.first().map(Token::is_operator).unwrap_or(false));
        assert!(!tokens.last().map(Token::is_operator).unwrap_or(false));
        for pair in tokens.windows(2) {
            assert!(
                !(pair[0].is_operator() && pair[1].is_operator()),
                "adjacent operators after removal"
            );
        }
    }

    assert_eq!(harness.active_tokens(), &[Token::operand("p1")]);
}

#[test]
fn test_remove_leading_operand_promotes_next() {
    let mut harness = TestHarness::with_parameters(&[1.0, 2.0]);
    harness.append_chain(&["p1", "p2"], Operator::Add);

    harness.state.remove_token(0);

    assert_eq!(harness.active_tokens(), &[Token::operand("p2")]);
}

#[test]
fn test_remove_sole_token_empties_sequence() {
    let mut harness = TestHarness::with_parameters(&[1.0]);
    harness.state.append_operand("p1", Operator::Add);
    harness.state.remove_token(0);

    assert!(harness.state.active_sequence().is_empty());
    assert_eq!(harness.state.evaluate_sequence(0), 0.0);
}

#[test]
fn test_remove_group_marker_takes_preceding_operator() {
    let mut harness = TestHarness::with_parameters(&[1.0]);
    harness.state.append_operand("p1", Operator::Add);
    harness.state.append_group();

    // A non-leading token always takes the slot before it with it, so
    // removing the GroupOpen at index 1 deletes indices 0 and 1
    harness.state.remove_token(1);

    assert_eq!(harness.active_tokens(), &[Token::GroupClose]);
}

// ============================================================================
// MOVE / DRAG TESTS
// ============================================================================

#[test]
fn test_move_within_sequence() {
    let mut harness = TestHarness::with_parameters(&[1.0, 2.0]);
    harness.append_chain(&["p1", "p2"], Operator::Add);
    let id = harness.sequence_id(0).unwrap();

    // Drag p1 to the end: [+, p2, p1]
    harness.state.move_token(&id, 0, &id, 2);

    assert_eq!(
        harness.active_tokens(),
        &[
            Token::Operator(Operator::Add),
            Token::operand("p2"),
            Token::operand("p1"),
        ]
    );
}

#[test]
fn test_move_across_sequences() {
    let mut harness = TestHarness::with_parameters(&[1.0, 2.0]);
    harness.append_chain(&["p1", "p2"], Operator::Add);
    harness.state.add_sequence();

    let from = harness.sequence_id(0).unwrap();
    let to = harness.sequence_id(1).unwrap();
    harness.state.move_token(&from, 2, &to, 0);

    assert_eq!(
        harness.state.sequences()[0].tokens,
        vec![Token::operand("p1"), Token::Operator(Operator::Add)]
    );
    assert_eq!(
        harness.state.sequences()[1].tokens,
        vec![Token::operand("p2")]
    );
}

#[test]
fn test_move_can_violate_alternation_and_still_evaluates() {
    // Raw moves do not rebalance operators; the evaluator must cope with
    // whatever shape results.
    let mut harness = TestHarness::with_parameters(&[1.0, 2.0, 3.0]);
    harness.append_chain(&["p1", "p2", "p3"], Operator::Add);
    let id = harness.sequence_id(0).unwrap();

    // Drag the second operator next to the first: two adjacent operators
    harness.state.move_token(&id, 3, &id, 1);

    let tokens = harness.active_tokens();
    assert!(tokens[1].is_operator() && tokens[2].is_operator());

    // Later operator wins as the pending one: 1 + 2 + 3 = 6 still
    assert_eq!(harness.state.evaluate_sequence(0), 6.0);
}

#[test]
fn test_drag_intent_maps_to_move() {
    let mut harness = TestHarness::with_parameters(&[1.0, 2.0]);
    harness.append_chain(&["p1", "p2"], Operator::Add);
    harness.state.add_sequence();

    harness.state.apply_drag(&DragIntent {
        source_sequence_id: harness.sequence_id(0).unwrap(),
        source_index: 0,
        dest_sequence_id: harness.sequence_id(1).unwrap(),
        dest_index: 0,
    });

    assert_eq!(
        harness.state.sequences()[1].tokens,
        vec![Token::operand("p1")]
    );
}

#[test]
fn test_move_unknown_sequence_is_noop() {
    let mut harness = TestHarness::with_parameters(&[1.0]);
    harness.state.append_operand("p1", Operator::Add);
    let id = harness.sequence_id(0).unwrap();

    harness.state.move_token("ghost", 0, &id, 0);
    harness.state.move_token(&id, 0, "ghost", 0);

    assert_eq!(harness.active_tokens(), &[Token::operand("p1")]);
}

#[test]
fn test_move_out_of_range_source_is_noop() {
    let mut harness = TestHarness::with_parameters(&[1.0]);
    harness.state.append_operand("p1", Operator::Add);
    let id = harness.sequence_id(0).unwrap();

    harness.state.move_token(&id, 7, &id, 0);

    assert_eq!(harness.active_tokens(), &[Token::operand("p1")]);
}

#[test]
fn test_move_clamps_destination_index() {
    let mut harness = TestHarness::with_parameters(&[1.0, 2.0]);
    harness.append_chain(&["p1", "p2"], Operator::Add);
    harness.state.add_sequence();

    let from = harness.sequence_id(0).unwrap();
    let to = harness.sequence_id(1).unwrap();
    harness.state.move_token(&from, 0, &to, 99);

    assert_eq!(
        harness.state.sequences()[1].tokens,
        vec![Token::operand("p1")]
    );
}
