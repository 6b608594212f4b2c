use std::fmt;

use crate::{Op, Span, Val, ValSpan};

/// A node of the expression tree, parents exclusively own their children.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub typ: NodeT,
    /// The span of the brackets if this subtree originated from a group. Groups are atomic:
    /// operators never descend into them, however weakly they bind inside.
    pub group: Option<Span>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeT {
    Num(ValSpan),
    Op(OpNode),
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpNode {
    pub op: Op,
    /// Absent if the operator is applied unary.
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn num(val: Val, span: Span) -> Box<Self> {
        Box::new(Self {
            typ: NodeT::Num(ValSpan::new(val, span)),
            group: None,
        })
    }

    pub fn op(op: Op, left: Option<Box<Node>>) -> Box<Self> {
        Box::new(Self {
            typ: NodeT::Op(OpNode {
                op,
                left,
                right: None,
            }),
            group: None,
        })
    }

    pub fn into_group(mut self: Box<Self>, span: Span) -> Box<Self> {
        self.group = Some(span);
        self
    }

    pub fn is_group(&self) -> bool {
        self.group.is_some()
    }

    pub fn as_op(&self) -> Option<&OpNode> {
        match &self.typ {
            NodeT::Op(o) => Some(o),
            NodeT::Num(_) => None,
        }
    }

    pub fn span(&self) -> Span {
        Span::across(self.edge_span(Edge::Left), self.edge_span(Edge::Right))
    }

    /// The span of the outermost leaf, operator or group on one side of this subtree.
    fn edge_span(&self, edge: Edge) -> Span {
        let mut node = self;
        loop {
            if let Some(s) = node.group {
                return s;
            }

            match &node.typ {
                NodeT::Num(n) => return n.span,
                NodeT::Op(o) => {
                    let child = match edge {
                        Edge::Left => &o.left,
                        Edge::Right => &o.right,
                    };
                    match child {
                        Some(c) => node = &**c,
                        None => return o.op.span,
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Edge {
    Left,
    Right,
}

/// Trees can be arbitrarily deep before they are rejected, so they are torn down without
/// recursion.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        take_children(self, &mut stack);
        while let Some(mut node) = stack.pop() {
            take_children(&mut node, &mut stack);
        }
    }
}

fn take_children(node: &mut Node, stack: &mut Vec<Box<Node>>) {
    if let NodeT::Op(o) = &mut node.typ {
        stack.extend(o.left.take());
        stack.extend(o.right.take());
    }
}

/// Prints the tree as an s-expression, `_` marks an absent operand.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.typ {
            NodeT::Num(n) => write!(f, "{n}"),
            NodeT::Op(o) => {
                write!(f, "({} ", o.op.typ)?;
                match &o.left {
                    Some(l) => write!(f, "{l}")?,
                    None => f.write_str("_")?,
                }
                f.write_str(" ")?;
                match &o.right {
                    Some(r) => write!(f, "{r}")?,
                    None => f.write_str("_")?,
                }
                f.write_str(")")
            }
        }
    }
}
