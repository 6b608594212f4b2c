use log::debug;

use crate::{Par, Token, MAX_DEPTH};

pub use item::*;

mod item;
#[cfg(test)]
mod test;

/// A group that is still waiting for its closing bracket.
struct OpenGroup {
    l_par: Par,
    items: Vec<Item>,
}

/// Restructures a flat token sequence into nested groups, one per bracket pair.
pub fn group(tokens: Vec<Token>) -> crate::Result<Vec<Item>> {
    let mut top_level = Vec::new();
    let mut stack: Vec<OpenGroup> = Vec::new();

    for t in tokens {
        let item = match t {
            Token::Val(v) => Item::Val(v),
            Token::Op(o) => Item::Op(o),
            Token::Par(l_par) if l_par.is_opening() => {
                if stack.len() >= MAX_DEPTH {
                    return Err(crate::Error::TooDeep(l_par.span));
                }
                stack.push(OpenGroup {
                    l_par,
                    items: Vec::new(),
                });
                continue;
            }
            Token::Par(r_par) => match stack.pop() {
                Some(open) if open.l_par.matches(r_par.typ) => {
                    Item::Group(Group::new(open.l_par, r_par, open.items))
                }
                Some(open) => return Err(crate::Error::MismatchedPar(open.l_par, r_par)),
                None => return Err(crate::Error::UnexpectedPar(r_par)),
            },
        };

        match stack.last_mut() {
            Some(open) => open.items.push(item),
            None => top_level.push(item),
        }
    }

    if let Some(outermost) = stack.into_iter().next() {
        return Err(crate::Error::MissingClosingPar(outermost.l_par));
    }

    debug!("grouped into {} top level items", top_level.len());
    Ok(top_level)
}
