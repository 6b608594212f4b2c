use crate::{Op, OpT, Par, Span, Val, ValSpan};

#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Group(Group),
    Val(ValSpan),
    Op(Op),
}

impl Item {
    pub fn val(val: Val, span: Span) -> Self {
        Self::Val(ValSpan::new(val, span))
    }

    pub fn op(typ: OpT, span: Span) -> Self {
        Self::Op(Op::new(typ, span))
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Group(g) => g.span(),
            Self::Val(v) => v.span,
            Self::Op(o) => o.span,
        }
    }
}

/// The items between one well-matched pair of brackets.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub l_par: Par,
    pub r_par: Par,
    pub items: Vec<Item>,
}

impl Group {
    pub const fn new(l_par: Par, r_par: Par, items: Vec<Item>) -> Self {
        Self {
            l_par,
            r_par,
            items,
        }
    }

    pub fn span(&self) -> Span {
        Span::across(self.l_par.span, self.r_par.span)
    }
}
