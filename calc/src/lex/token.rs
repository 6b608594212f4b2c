use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::Deref;

use calc_derive::{EnumDisplay, EnumFromStr, EnumMembersArray};

use crate::Span;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Val(ValSpan),
    Op(Op),
    Par(Par),
}

impl Token {
    pub fn val(val: Val, span: Span) -> Self {
        Self::Val(ValSpan::new(val, span))
    }

    pub fn op(typ: OpT, span: Span) -> Self {
        Self::Op(Op::new(typ, span))
    }

    pub fn par(typ: ParT, span: Span) -> Self {
        Self::Par(Par::new(typ, span))
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Val(v) => v.span,
            Self::Op(o) => o.span,
            Self::Par(p) => p.span,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValSpan {
    pub val: Val,
    pub span: Span,
}

impl Deref for ValSpan {
    type Target = Val;

    fn deref(&self) -> &Self::Target {
        &self.val
    }
}

impl Display for ValSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.val)
    }
}

impl ValSpan {
    pub const fn new(val: Val, span: Span) -> Self {
        Self { val, span }
    }
}

/// 2^127, the first float magnitude that no longer fits an `i128`.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Val {
    Int(i128),
    Float(f64),
}

impl Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            // keep the trailing `.0` so reals stay distinguishable from integers
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}

impl Val {
    /// Convert floats without a fractional part to [`Self::Int`].
    pub fn maybe_int(self) -> Self {
        match self {
            Self::Float(f) if f.fract() == 0.0 && f.abs() < I128_LIMIT => Self::Int(f as i128),
            v => v,
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Op {
    pub typ: OpT,
    pub span: Span,
}

impl Op {
    pub const fn new(typ: OpT, span: Span) -> Self {
        Op { typ, span }
    }
}

impl Deref for Op {
    type Target = OpT;

    fn deref(&self) -> &Self::Target {
        &self.typ
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumDisplay, EnumFromStr, EnumMembersArray)]
pub enum OpT {
    #[calc(rename = "+")]
    Add,
    #[calc(rename = "-")]
    Sub,
    #[calc(rename = "*")]
    Mul,
    #[calc(rename = "/")]
    Div,
    #[calc(rename = "%")]
    Rem,
    #[calc(rename = "//")]
    IntDiv,
    #[calc(rename = "**")]
    Pow,
}

impl OpT {
    /// Higher binds tighter.
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Sub => 0,
            Self::Mul | Self::Div | Self::Rem | Self::IntDiv => 1,
            Self::Pow => 2,
        }
    }

    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }

    /// Whether a missing left-hand-side counts as `0`.
    pub const fn is_sign(&self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Par {
    pub typ: ParT,
    pub span: Span,
}

impl Deref for Par {
    type Target = ParT;

    fn deref(&self) -> &Self::Target {
        &self.typ
    }
}

impl Par {
    pub const fn new(typ: ParT, span: Span) -> Self {
        Self { typ, span }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumDisplay, EnumFromStr, EnumMembersArray)]
pub enum ParT {
    #[calc(rename = "(")]
    RoundOpen,
    #[calc(rename = ")")]
    RoundClose,
    #[calc(rename = "[")]
    SquareOpen,
    #[calc(rename = "]")]
    SquareClose,
    #[calc(rename = "{")]
    CurlyOpen,
    #[calc(rename = "}")]
    CurlyClose,
}

impl ParT {
    pub const fn is_opening(&self) -> bool {
        match self {
            Self::RoundOpen | Self::SquareOpen | Self::CurlyOpen => true,
            Self::RoundClose | Self::SquareClose | Self::CurlyClose => false,
        }
    }

    pub const fn matches(&self, other: Self) -> bool {
        match self {
            Self::RoundOpen => matches!(other, Self::RoundClose),
            Self::RoundClose => matches!(other, Self::RoundOpen),
            Self::SquareOpen => matches!(other, Self::SquareClose),
            Self::SquareClose => matches!(other, Self::SquareOpen),
            Self::CurlyOpen => matches!(other, Self::CurlyClose),
            Self::CurlyClose => matches!(other, Self::CurlyOpen),
        }
    }
}
