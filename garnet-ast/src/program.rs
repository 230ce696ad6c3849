use crate::priv_prelude::*;

/// The root of a whole parsed unit. Its single child is the grammar's
/// top-level `Statements` node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Box<Node>,
}

impl Spanned for Program {
    fn span(&self) -> Span {
        self.statements.span()
    }
}
