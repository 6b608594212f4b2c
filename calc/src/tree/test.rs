use crate::{group, lex, Error, Span};

use super::*;

fn tree(input: &str) -> crate::Result<Option<Node>> {
    build(group(lex(input)?)?)
}

fn assert(input: &str, expected: &str) {
    match tree(input) {
        Ok(Some(t)) => assert_eq!(t.to_string(), expected),
        Ok(None) => panic!("Expected a tree found nothing"),
        Err(e) => panic!("{e:?}"),
    }
}

fn assert_err(input: &str, expected: Error) {
    match tree(input) {
        Ok(t) => panic!("Expected error: {expected:?}, found {t:?}"),
        Err(e) => assert_eq!(e, expected),
    }
}

#[test]
fn empty() {
    assert_eq!(tree("").unwrap(), None);
}

#[test]
fn single_value() {
    assert("4", "4");
    assert("(2)", "2");
}

#[test]
fn precedence() {
    assert("2 * 3 + 4 * 2**2", "(+ (* 2 3) (* 4 (** 2 2)))");
    assert("1 + 2 * 3", "(+ 1 (* 2 3))");
    assert("1 * 2 + 3", "(+ (* 1 2) 3)");
}

#[test]
fn left_associative() {
    assert("1 - 2 - 3", "(- (- 1 2) 3)");
    assert("8 / 4 // 2 % 3", "(% (// (/ 8 4) 2) 3)");
    assert("2 ** 3 ** 2", "(** (** 2 3) 2)");
}

#[test]
fn unary() {
    assert("-2", "(- _ 2)");
    assert("3 * -2", "(* 3 (- _ 2))");
    assert("3 * --2", "(* 3 (- _ (- _ 2)))");
    assert("-2 ** 2", "(- _ (** 2 2))");
    assert("2 ** -1", "(** 2 (- _ 1))");
}

#[test]
fn groups_are_atomic() {
    assert("(3 + 4) * 3", "(* (+ 3 4) 3)");
    assert("2**(3 + 4)", "(** 2 (+ 3 4))");
    assert("2 * (3 + 4) ** 2", "(* 2 (** (+ 3 4) 2))");
    assert("2 * (3 + 4) + 7 * 2**2", "(+ (* 2 (+ 3 4)) (* 7 (** 2 2)))");
}

#[test]
fn group_span() {
    let t = tree("1 * [2 - 3]").unwrap().unwrap();
    let right = t.as_op().and_then(|o| o.right.as_ref()).unwrap();
    assert!(right.is_group());
    assert_eq!(right.span(), Span::of(4, 11));
    assert_eq!(t.span(), Span::of(0, 11));
}

#[test]
fn missing_rhs_is_not_structural() {
    assert("2 *", "(* 2 _)");
    assert("* 2", "(* _ 2)");
}

#[test]
fn missing_operator() {
    assert_err("2 3", Error::MissingOperator(Span::of(1, 2)));
    assert_err("(1)(2)", Error::MissingOperator(Span::of(3, 3)));
    assert_err("1 + 2 (3)", Error::MissingOperator(Span::of(5, 6)));
}

#[test]
fn missing_operator_message() {
    let err = tree("12 3").unwrap_err();
    assert_eq!(err.to_string(), "missing an operator at 3");
}

#[test]
fn empty_group() {
    assert_err("()", Error::EmptyGroup(Span::of(0, 2)));
    assert_err("1 + [ ]", Error::EmptyGroup(Span::of(4, 7)));
}
