use crate::{Node, NodeT, OpNode, Val};

mod val;

impl Node {
    /// Recursively evaluates the tree.
    pub fn eval(&self) -> crate::Result<Val> {
        match &self.typ {
            NodeT::Num(n) => Ok(n.val),
            NodeT::Op(o) => o.eval(),
        }
    }
}

impl OpNode {
    /// Evaluates the right-hand-side first, then the left-hand-side if there is one.
    ///
    /// Errors of the children already point at the operator that caused them and are passed on
    /// untouched. Only failures of applying this node's own operator are attributed to it.
    pub fn eval(&self) -> crate::Result<Val> {
        let rhs = match &self.right {
            Some(r) => r.eval()?,
            None => return Err(crate::Error::MissingRhs(self.op)),
        };
        let lhs = self.left.as_ref().map(|l| l.eval()).transpose()?;

        self.op
            .apply(lhs, rhs)
            .map_err(|e| crate::Error::Arith(e, self.op))
    }
}
