use crate::{lex, Error, OpT, Par, ParT, Span, Val};

use super::*;

fn items(input: &str) -> crate::Result<Vec<Item>> {
    group(lex(input)?)
}

fn round(start: usize, end: usize) -> (Par, Par) {
    (
        Par::new(ParT::RoundOpen, Span::pos(start)),
        Par::new(ParT::RoundClose, Span::pos(end)),
    )
}

#[test]
fn no_parenthesis() {
    assert_eq!(
        items("423.42 * 64.52").unwrap(),
        vec![
            Item::val(Val::Float(423.42), Span::of(0, 6)),
            Item::op(OpT::Mul, Span::pos(7)),
            Item::val(Val::Float(64.52), Span::of(9, 14)),
        ]
    );
}

#[test]
fn add_parenthesis() {
    let (l, r) = round(0, 14);
    assert_eq!(
        items("(23.13 + 543.2) * 34").unwrap(),
        vec![
            Item::Group(Group::new(
                l,
                r,
                vec![
                    Item::val(Val::Float(23.13), Span::of(1, 6)),
                    Item::op(OpT::Add, Span::pos(7)),
                    Item::val(Val::Float(543.2), Span::of(9, 14)),
                ],
            )),
            Item::op(OpT::Mul, Span::pos(16)),
            Item::val(Val::Int(34), Span::of(18, 20)),
        ]
    );
}

#[test]
fn nested() {
    let outer_l = Par::new(ParT::SquareOpen, Span::pos(0));
    let outer_r = Par::new(ParT::SquareClose, Span::pos(8));
    let (l, r) = round(3, 7);

    let items = items("[1*(2+3)]").unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0],
        Item::Group(Group::new(
            outer_l,
            outer_r,
            vec![
                Item::val(Val::Int(1), Span::pos(1)),
                Item::op(OpT::Mul, Span::pos(2)),
                Item::Group(Group::new(
                    l,
                    r,
                    vec![
                        Item::val(Val::Int(2), Span::pos(4)),
                        Item::op(OpT::Add, Span::pos(5)),
                        Item::val(Val::Int(3), Span::pos(6)),
                    ],
                )),
            ],
        ))
    );
    assert_eq!(items[0].span(), Span::of(0, 9));
}

#[test]
fn empty_brackets() {
    let (l, r) = round(0, 1);
    assert_eq!(
        items("()").unwrap(),
        vec![Item::Group(Group::new(l, r, vec![]))]
    );
}

#[test]
fn mismatched() {
    assert_eq!(
        items("(2]"),
        Err(Error::MismatchedPar(
            Par::new(ParT::RoundOpen, Span::pos(0)),
            Par::new(ParT::SquareClose, Span::pos(2)),
        ))
    );
}

#[test]
fn unexpected_closing() {
    let err = items("1 + 2)").unwrap_err();
    assert_eq!(
        err,
        Error::UnexpectedPar(Par::new(ParT::RoundClose, Span::pos(5)))
    );
    assert_eq!(err.to_string(), "unmatched ')' at 6");
}

#[test]
fn missing_closing_reports_earliest() {
    let err = items("{1 + (2").unwrap_err();
    assert_eq!(
        err,
        Error::MissingClosingPar(Par::new(ParT::CurlyOpen, Span::pos(0)))
    );
    assert_eq!(err.to_string(), "unmatched '{' at 1");
}

#[test]
fn mismatch_message_names_closing() {
    let err = items("[1 + 2)").unwrap_err();
    assert_eq!(err.to_string(), "unmatched ')' at 7");
    assert_eq!(err.pos(), 6);
}
