use proptest::prelude::*;

use super::*;
use crate::Error;

fn assert(input: &str, expected: Vec<Token>) {
    let tokens = lex(input).unwrap();
    assert_eq!(tokens, expected);
}

fn assert_err(input: &str, expected: Error) {
    match lex(input) {
        Ok(t) => panic!("Expected error: {expected:?}, found tokens {t:?}"),
        Err(e) => assert_eq!(e, expected),
    }
}

#[test]
fn float_without_exp() {
    assert("1.2", vec![Token::val(Val::Float(1.2), Span::of(0, 3))]);
}

#[test]
fn float_with_exp() {
    assert("0.12e1", vec![Token::val(Val::Float(1.2), Span::of(0, 6))]);
    assert("1.2e-1", vec![Token::val(Val::Float(0.12), Span::of(0, 6))]);
    assert(".12e+1", vec![Token::val(Val::Float(1.2), Span::of(0, 6))]);
    assert("1.2E-1", vec![Token::val(Val::Float(0.12), Span::of(0, 6))]);
}

#[test]
fn float_is_int() {
    assert("12.", vec![Token::val(Val::Int(12), Span::of(0, 3))]);
    assert("1.2e2", vec![Token::val(Val::Int(120), Span::of(0, 5))]);
    assert("12e1", vec![Token::val(Val::Int(120), Span::of(0, 4))]);
}

#[test]
fn exponent_after_bare_point() {
    assert("12.e5", vec![Token::val(Val::Int(1_200_000), Span::of(0, 5))]);
    assert("1.E-2", vec![Token::val(Val::Float(0.01), Span::of(0, 5))]);
    assert(".5e3", vec![Token::val(Val::Int(500), Span::of(0, 4))]);
    assert("0.e0", vec![Token::val(Val::Int(0), Span::of(0, 4))]);
}

#[test]
fn only_fraction() {
    assert(".2", vec![Token::val(Val::Float(0.2), Span::of(0, 2))]);
    assert("12e-1", vec![Token::val(Val::Float(1.2), Span::of(0, 5))]);
}

#[test]
fn only_decimal_point() {
    assert_err(".", Error::UnexpectedChar('.', Span::pos(0)));
    assert_eq!(
        lex(".").unwrap_err().to_string(),
        "unexpected text at 1: '.'"
    );
}

#[test]
fn radix_literals() {
    assert("0b11", vec![Token::val(Val::Int(3), Span::of(0, 4))]);
    assert("0o17", vec![Token::val(Val::Int(15), Span::of(0, 4))]);
    assert("0xff", vec![Token::val(Val::Int(255), Span::of(0, 4))]);
    assert("0XFF", vec![Token::val(Val::Int(255), Span::of(0, 4))]);
}

#[test]
fn invalid_radix_literals() {
    let invalid = |radix, end| Error::InvalidRadixLiteral {
        radix,
        span: Span::of(0, end),
    };
    assert_err("0b12", invalid(2, 4));
    assert_err("0o19", invalid(8, 4));
    assert_err("0o77E+1", invalid(8, 5));
    assert_err("0xfg", invalid(16, 4));
    assert_err("0b", invalid(2, 2));
}

#[test]
fn invalid_radix_message() {
    let err = lex("0b12").unwrap_err();
    assert_eq!(err.to_string(), "invalid literal for an integer with base 2");
}

#[test]
fn radix_overflow() {
    let input = format!("0x{}", "f".repeat(40));
    assert_err(
        &input,
        Error::InvalidRadixLiteral {
            radix: 16,
            span: Span::of(0, 42),
        },
    );
}

#[test]
fn ops() {
    assert(
        "+ - * ** / // %",
        vec![
            Token::op(OpT::Add, Span::pos(0)),
            Token::op(OpT::Sub, Span::pos(2)),
            Token::op(OpT::Mul, Span::pos(4)),
            Token::op(OpT::Pow, Span::of(6, 8)),
            Token::op(OpT::Div, Span::pos(9)),
            Token::op(OpT::IntDiv, Span::of(11, 13)),
            Token::op(OpT::Rem, Span::pos(14)),
        ],
    );
}

#[test]
fn brackets() {
    assert(
        "()[]{}",
        vec![
            Token::par(ParT::RoundOpen, Span::pos(0)),
            Token::par(ParT::RoundClose, Span::pos(1)),
            Token::par(ParT::SquareOpen, Span::pos(2)),
            Token::par(ParT::SquareClose, Span::pos(3)),
            Token::par(ParT::CurlyOpen, Span::pos(4)),
            Token::par(ParT::CurlyClose, Span::pos(5)),
        ],
    );
}

#[test]
fn mixed() {
    assert(
        "2/[12 - 4*(1.2E-3 ** 0.5)]",
        vec![
            Token::val(Val::Int(2), Span::pos(0)),
            Token::op(OpT::Div, Span::pos(1)),
            Token::par(ParT::SquareOpen, Span::pos(2)),
            Token::val(Val::Int(12), Span::of(3, 5)),
            Token::op(OpT::Sub, Span::pos(6)),
            Token::val(Val::Int(4), Span::pos(8)),
            Token::op(OpT::Mul, Span::pos(9)),
            Token::par(ParT::RoundOpen, Span::pos(10)),
            Token::val(Val::Float(0.0012), Span::of(11, 17)),
            Token::op(OpT::Pow, Span::of(18, 20)),
            Token::val(Val::Float(0.5), Span::of(21, 24)),
            Token::par(ParT::RoundClose, Span::pos(24)),
            Token::par(ParT::SquareClose, Span::pos(25)),
        ],
    );
}

#[test]
fn unexpected_text() {
    assert_err("2 + a", Error::UnexpectedChar('a', Span::pos(4)));
    assert_err("1 2 $", Error::UnexpectedChar('$', Span::pos(4)));
}

#[test]
fn multibyte_whitespace() {
    // U+3000 is a single character but three bytes
    assert(
        "\u{3000}1 +\u{3000}2",
        vec![
            Token::val(Val::Int(1), Span::pos(1)),
            Token::op(OpT::Add, Span::pos(3)),
            Token::val(Val::Int(2), Span::pos(5)),
        ],
    );
    assert_err("\u{3000}1 ×", Error::UnexpectedChar('×', Span::pos(3)));
}

#[test]
fn empty_input() {
    assert("", vec![]);
    assert("  \t ", vec![]);
}

#[test]
fn vocabulary_is_unique() {
    let symbols = validate_vocabulary(vocabulary()).unwrap();
    assert_eq!(symbols.len(), 13);
    assert_eq!(symbols[0].len(), 2);
    assert_eq!(symbols[1].len(), 2);
}

#[test]
fn vocabulary_duplicate() {
    let symbols = ["+", "-", "+"].map(String::from);
    assert_eq!(
        validate_vocabulary(symbols),
        Err(VocabularyError::DuplicateSymbol("+".into()))
    );
}

const SYMBOLS: &[&str] = &[
    "+", "-", "*", "**", "/", "//", "%", "(", ")", "[", "]", "{", "}", "0b101", "0o17", "0xff",
    "12", "1.5", ".25", "3e2", "7.5E-1",
];

fn token_text() -> impl Strategy<Value = String> {
    prop::sample::select(SYMBOLS).prop_map(String::from)
}

proptest! {
    #[test]
    fn spans_reproduce_source(parts in prop::collection::vec((token_text(), " {1,3}"), 0..12)) {
        let mut input = String::new();
        let mut expected = Vec::new();
        for (text, gap) in parts.iter() {
            input.push_str(text);
            input.push_str(gap);
            expected.push(text.as_str());
        }

        let tokens = lex(&input).unwrap();
        let sliced: Vec<&str> = tokens.iter().map(|t| t.span().slice(&input)).collect();
        prop_assert_eq!(sliced, expected);
    }
}
