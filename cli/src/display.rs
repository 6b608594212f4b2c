use std::fmt::{self, Display, Write};
use std::marker::PhantomData;

use calc::{Span, UserFacing};
use unicode_width::UnicodeWidthChar;

use crate::style::{Color, Failure, RESET};

impl DisplayUserFacing<Failure> for calc::Error {}
pub trait DisplayUserFacing<C: Color>: UserFacing {
    /// Marks the spans under `input`, which is displayed `offset` columns to the right.
    fn display<'a>(&'a self, input: &'a str, offset: usize) -> FmtUserFacing<'a, Self, C> {
        FmtUserFacing {
            input,
            offset,
            error: self,
            c: PhantomData::<C>,
        }
    }
}

pub struct FmtUserFacing<'a, U: DisplayUserFacing<C>, C: Color> {
    input: &'a str,
    offset: usize,
    error: &'a U,
    c: PhantomData<C>,
}

impl<U: DisplayUserFacing<C>, C: Color> Display for FmtUserFacing<'_, U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.offset {
            f.write_char(' ')?;
        }
        mark_spans::<C>(f, self.input, &self.error.spans())?;
        write!(f, "{}{}{RESET}", C::BOLD, self.error.description())
    }
}

fn mark_spans<C: Color>(f: &mut fmt::Formatter<'_>, line: &str, spans: &[Span]) -> fmt::Result {
    let mut chars = line.chars();
    let mut pos = 0;
    let mut peeked = 0;

    // positions past the end of the line are one column wide
    let mut advance = |to: usize, pos: &mut usize| {
        let mut width = 0;
        while *pos < to {
            width += chars.next().map_or(1, |c| c.width().unwrap_or(0));
            *pos += 1;
        }
        width
    };

    for s in spans {
        let offset = advance(s.start, &mut pos).saturating_sub(peeked);
        let mut width = advance(s.end, &mut pos);
        if width == 0 {
            width = 1;
            peeked = 1;
        } else {
            peeked = 0;
        }

        for _ in 0..offset {
            f.write_char(' ')?;
        }
        write!(f, "{}", C::BOLD)?;
        for _ in 0..width {
            f.write_char('^')?;
        }
        f.write_str(RESET)?;
    }

    f.write_char('\n')
}
