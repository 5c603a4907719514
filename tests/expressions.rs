use intcalc::{
    ast::{AstArena, NODE_CAPACITY, NodeKind},
    eval_expression,
};

fn assert_evaluates(src: &str, expected: i64) {
    match eval_expression(src) {
        Ok(value) => assert_eq!(value, expected, "{src} evaluated to {value}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_fails_with(src: &str, message: &str) {
    match eval_expression(src) {
        Ok(value) => panic!("{src} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), message, "{src} failed with the wrong error"),
    }
}

#[test]
fn integer_literals_evaluate_to_themselves() {
    assert_evaluates("0", 0);
    assert_evaluates("7", 7);
    assert_evaluates("42", 42);
    assert_evaluates("  42  ", 42);
    assert_evaluates("9223372036854775807", i64::MAX);
}

#[test]
fn oversized_literals_wrap() {
    // One past i64::MAX; the scanner accumulates with wrapping arithmetic.
    assert_evaluates("9223372036854775808", i64::MIN);
}

#[test]
fn addition_and_subtraction_are_left_associative() {
    assert_evaluates("10-3-2", 5);
    assert_evaluates("1+2+3+4", 10);
    assert_evaluates("100-40+5", 65);
}

#[test]
fn division_is_left_associative() {
    assert_evaluates("20/4/5", 1);
    assert_evaluates("100/5/2", 10);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_evaluates("2+3*4", 14);
    assert_evaluates("2*3+4", 10);
    assert_evaluates("2+3*4-1", 13);
}

#[test]
fn parentheses_override_precedence() {
    assert_evaluates("(2+3)*4", 20);
    assert_evaluates("2*(3+4)", 14);
    assert_evaluates("((((5))))", 5);
}

#[test]
fn power_is_right_associative() {
    assert_evaluates("2^3^2", 512);
    assert_evaluates("2^2^3", 256);
}

#[test]
fn power_by_repeated_multiplication() {
    assert_evaluates("2^10", 1024);
    assert_evaluates("5^0", 1);
    assert_evaluates("0^0", 1);
    assert_evaluates("2^2*3", 12);
}

#[test]
fn negative_exponents_yield_one() {
    // The power loop runs `right` times; a negative count runs zero times.
    assert_evaluates("2^-1", 1);
    assert_evaluates("2^(0-3)", 1);
}

#[test]
fn unary_minus_desugars_to_subtraction_from_zero() {
    assert_evaluates("-5+3", -2);
    assert_evaluates("-5", -5);
    assert_evaluates("--5", 5);
    assert_evaluates("+5", 5);
    assert_evaluates("-(2+3)", -5);
    assert_evaluates("2*-3", -6);
}

#[test]
fn division_truncates_toward_zero() {
    assert_evaluates("7/2", 3);
    assert_evaluates("-7/2", -3);
    assert_evaluates("8/2", 4);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_fails_with("5/0", "Division by zero");
    assert_fails_with("5/(3-3)", "Division by zero");
}

#[test]
fn malformed_expressions_are_syntax_errors() {
    assert_fails_with("2+", "Syntax error");
    assert_fails_with("*2", "Syntax error");
    assert_fails_with(")", "Syntax error");
    assert_fails_with("", "Syntax error");
}

#[test]
fn unclosed_parenthesis_is_reported() {
    assert_fails_with("(2+3", "')' expected");
    assert_fails_with("((1)", "')' expected");
}

#[test]
fn unrecognized_characters_are_reported() {
    assert_fails_with("2#3", "Invalid character '#'");
    assert_fails_with("1 & 2", "Invalid character '&'");
}

#[test]
fn trailing_input_after_expression_is_ignored() {
    // The driver hands the parser one line and does not require it to be
    // consumed entirely, matching the original calculator.
    assert_evaluates("2)3", 2);
    assert_evaluates("5 5", 5);
}

#[test]
fn evaluation_is_idempotent() {
    for _ in 0..2 {
        assert_evaluates("2+3*4", 14);
        assert_evaluates("10-3-2", 5);
    }
}

#[test]
fn expressions_within_the_node_budget_succeed() {
    // 512 literals and 511 operators allocate 1023 nodes, one under the cap.
    let source = vec!["1"; 512].join("+");
    assert_evaluates(&source, 512);
}

#[test]
fn expressions_exceeding_the_node_budget_fail() {
    // 513 literals and 512 operators would need 1025 nodes.
    let source = vec!["1"; 513].join("+");
    assert_fails_with(&source, "Out of AST nodes");
}

#[test]
fn arena_allocation_is_bounded() {
    let mut arena = AstArena::new();

    for i in 0..NODE_CAPACITY {
        arena.alloc_leaf(NodeKind::IntLiteral, i as i64)
             .expect("allocation within capacity failed");
    }
    assert_eq!(arena.len(), NODE_CAPACITY);

    let err = arena.alloc_leaf(NodeKind::IntLiteral, 0)
                   .expect_err("allocation beyond capacity succeeded");
    assert_eq!(err.to_string(), "Out of AST nodes");
}

#[test]
fn arena_reset_reclaims_all_slots() {
    let mut arena = AstArena::new();

    for _ in 0..NODE_CAPACITY {
        arena.alloc_leaf(NodeKind::IntLiteral, 1)
             .expect("allocation within capacity failed");
    }

    arena.reset();
    assert!(arena.is_empty());
    arena.alloc_leaf(NodeKind::IntLiteral, 1)
         .expect("allocation after reset failed");
}
