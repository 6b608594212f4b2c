use log::trace;

use crate::{Item, Op, Span};

pub use node::*;

mod node;
#[cfg(test)]
mod test;

/// The deepest an expression may nest, counting operators and brackets.
pub const MAX_DEPTH: usize = 1000;

/// Builds an expression tree out of grouped items, or nothing if there are no items.
///
/// Operators are placed by comparing their precedence with the current root instead of keeping
/// an operator stack. An operator that binds tighter than the root, or that is unary, descends
/// into the root's right subtree. Otherwise it becomes the new root with the old tree as its
/// left-hand-side, which makes operators of equal precedence left associative. Values always
/// fill the right-most open slot.
pub fn build(items: Vec<Item>) -> crate::Result<Option<Node>> {
    let tree = build_items(items)?;
    if let Some(t) = &tree {
        check_depth(t)?;
        trace!("built tree {t}");
    }
    Ok(tree.map(|t| *t))
}

fn build_items(items: Vec<Item>) -> crate::Result<Option<Box<Node>>> {
    let mut root = None;
    let mut prev_is_val = false;

    for i in items {
        match i {
            Item::Op(o) => {
                root = Some(put_op(root, o, !prev_is_val)?);
                prev_is_val = false;
            }
            Item::Val(v) => {
                root = Some(put_val(root, Node::num(v.val, v.span))?);
                prev_is_val = true;
            }
            Item::Group(g) => {
                let span = g.span();
                let inner = match build_items(g.items)? {
                    Some(n) => n,
                    None => return Err(crate::Error::EmptyGroup(span)),
                };
                root = Some(put_val(root, inner.into_group(span))?);
                prev_is_val = true;
            }
        }
    }

    Ok(root)
}

/// Whether `op` is placed below `node` rather than above it.
fn descends(node: &Node, op: Op, unary: bool) -> bool {
    match &node.typ {
        NodeT::Op(o) if !node.is_group() => unary || op.cmp_precedence(&o.op).is_gt(),
        _ => false,
    }
}

fn put_op(tree: Option<Box<Node>>, op: Op, unary: bool) -> crate::Result<Box<Node>> {
    let mut spine = Vec::new();
    let mut below = tree;
    while let Some(mut node) = below {
        if !descends(&node, op, unary) {
            below = Some(node);
            break;
        }
        below = match &mut node.typ {
            NodeT::Op(o) => o.right.take(),
            NodeT::Num(_) => None,
        };
        spine.push(node);

        if spine.len() >= MAX_DEPTH {
            return Err(crate::Error::TooDeep(op.span));
        }
    }

    Ok(reattach(spine, Node::op(op, below)))
}

/// Attaches `val` in the first open slot of the right spine.
fn put_val(tree: Option<Box<Node>>, val: Box<Node>) -> crate::Result<Box<Node>> {
    let mut spine = Vec::new();
    let mut next = tree;
    while let Some(mut node) = next {
        let open = !node.is_group() && matches!(node.typ, NodeT::Op(_));
        if !open {
            let span = Span::between(node.span(), val.span());
            return Err(crate::Error::MissingOperator(span));
        }
        next = match &mut node.typ {
            NodeT::Op(o) => o.right.take(),
            NodeT::Num(_) => None,
        };
        spine.push(node);
    }

    Ok(reattach(spine, val))
}

/// Puts the detached right spine back together, with `child` as the new bottom.
fn reattach(spine: Vec<Box<Node>>, mut child: Box<Node>) -> Box<Node> {
    for mut parent in spine.into_iter().rev() {
        if let NodeT::Op(o) = &mut parent.typ {
            o.right = Some(child);
        }
        child = parent;
    }
    child
}

fn check_depth(root: &Node) -> crate::Result<()> {
    let mut stack = vec![(root, 1)];
    while let Some((node, depth)) = stack.pop() {
        if let NodeT::Op(o) = &node.typ {
            if depth > MAX_DEPTH {
                return Err(crate::Error::TooDeep(o.op.span));
            }
            stack.extend(o.left.as_deref().map(|l| (l, depth + 1)));
            stack.extend(o.right.as_deref().map(|r| (r, depth + 1)));
        }
    }
    Ok(())
}
