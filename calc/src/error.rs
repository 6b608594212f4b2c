use std::fmt;

use crate::{Op, Par, Span};

pub type Result<T> = std::result::Result<T, Error>;

/// Something a user should see, pointing at one or more places in the input.
pub trait UserFacing: Sized + fmt::Debug {
    fn description(&self) -> String;

    /// Ordered by position.
    fn spans(&self) -> Vec<Span>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Structural,
    Arithmetic,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    UnexpectedChar(char, Span),
    InvalidRadixLiteral { radix: u32, span: Span },

    UnexpectedPar(Par),
    MismatchedPar(Par, Par),
    MissingClosingPar(Par),
    MissingOperator(Span),
    EmptyGroup(Span),
    TooDeep(Span),

    MissingRhs(Op),
    Arith(ArithError, Op),
}

/// A failure of applying an operator to its operands. It isn't tied to a position until the
/// operator node that applied it turns it into an [`Error::Arith`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithError {
    MissingLhs,
    DivideByZero,
    IntDivideByZero,
    Overflow,
    ResultTooLarge,
    FractionalPowerOfNegative,
    ZeroToNegativePower,
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedChar(..) | Self::InvalidRadixLiteral { .. } => ErrorKind::Lexical,
            Self::UnexpectedPar(_)
            | Self::MismatchedPar(..)
            | Self::MissingClosingPar(_)
            | Self::MissingOperator(_)
            | Self::EmptyGroup(_)
            | Self::TooDeep(_) => ErrorKind::Structural,
            Self::MissingRhs(_) | Self::Arith(..) => ErrorKind::Arithmetic,
        }
    }

    /// Where the caret goes, 0-based.
    pub fn pos(&self) -> usize {
        match self {
            Self::MismatchedPar(_, r) => r.span.start,
            e => e.spans().first().map_or(0, |s| s.start),
        }
    }
}

impl UserFacing for Error {
    fn description(&self) -> String {
        match self {
            Self::UnexpectedChar(c, s) => format!("unexpected text at {}: '{c}'", s.col()),
            Self::InvalidRadixLiteral { radix, .. } => {
                format!("invalid literal for an integer with base {radix}")
            }
            Self::UnexpectedPar(p) => unmatched(p),
            Self::MismatchedPar(_, r) => unmatched(r),
            Self::MissingClosingPar(p) => unmatched(p),
            Self::MissingOperator(s) => format!("missing an operator at {}", s.col()),
            Self::EmptyGroup(s) => format!("empty brackets at {}", s.col()),
            Self::TooDeep(s) => format!("expression nested too deeply at {}", s.col()),
            Self::MissingRhs(o) => format!("missing right-hand-side for '{}'", o.typ),
            Self::Arith(a, o) => a.description(o),
        }
    }

    fn spans(&self) -> Vec<Span> {
        match self {
            Self::UnexpectedChar(_, s) => vec![*s],
            Self::InvalidRadixLiteral { span, .. } => vec![*span],
            Self::UnexpectedPar(p) => vec![p.span],
            Self::MismatchedPar(l, r) => vec![l.span, r.span],
            Self::MissingClosingPar(p) => vec![p.span],
            Self::MissingOperator(s) => vec![*s],
            Self::EmptyGroup(s) => vec![*s],
            Self::TooDeep(s) => vec![*s],
            Self::MissingRhs(o) => vec![o.span.last()],
            Self::Arith(_, o) => vec![o.span],
        }
    }
}

fn unmatched(par: &Par) -> String {
    format!("unmatched '{}' at {}", par.typ, par.span.col())
}

impl ArithError {
    fn description(&self, op: &Op) -> String {
        match self {
            Self::MissingLhs => format!("missing the left-hand-side for '{}'", op.typ),
            Self::DivideByZero => "division by zero".into(),
            Self::IntDivideByZero => "integer division or modulo by zero".into(),
            Self::Overflow => "integer overflow".into(),
            Self::ResultTooLarge => "result too large".into(),
            Self::FractionalPowerOfNegative => {
                "negative number cannot be raised to a fractional power".into()
            }
            Self::ZeroToNegativePower => "0 cannot be raised to a negative power".into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl std::error::Error for Error {}
