pub use crate::calc::*;
pub use error::*;
pub use group::*;
pub use lex::*;
pub use span::*;
pub use tree::*;

mod calc;
mod error;
mod eval;
mod group;
mod lex;
mod span;
mod tree;

/// Evaluates `input` in one go, returning every kind of error including arithmetic ones.
pub fn eval(input: &str) -> crate::Result<Option<Val>> {
    let mut calc = Calc::with_input(DEFAULT_PROMPT, input);
    let val = calc.result()?;
    match calc.arith_error() {
        Some(e) => Err(e.clone()),
        None => Ok(val),
    }
}
