use crate::priv_prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub target: Box<Node>,
    pub operator: Token,
    pub value: Box<Node>,
}

impl Spanned for Assignment {
    fn span(&self) -> Span {
        Span::join(self.target.span(), self.value.span())
    }
}

/// Compound assignment such as `x += 1`; the operator token carries the
/// compound kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorAssignment {
    pub target: Box<Node>,
    pub operator: Token,
    pub value: Box<Node>,
}

impl Spanned for OperatorAssignment {
    fn span(&self) -> Span {
        Span::join(self.target.span(), self.value.span())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binary {
    pub left: Box<Node>,
    pub operator: Token,
    pub right: Box<Node>,
}

impl Spanned for Binary {
    fn span(&self) -> Span {
        Span::join(self.left.span(), self.right.span())
    }
}

/// `predicate ? true_expression : false_expression`; both branches are
/// always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ternary {
    pub predicate: Box<Node>,
    pub question_mark: Token,
    pub true_expression: Box<Node>,
    pub colon: Token,
    pub false_expression: Box<Node>,
}

impl Spanned for Ternary {
    fn span(&self) -> Span {
        Span::join(self.predicate.span(), self.false_expression.span())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub value: Token,
}

impl Spanned for Identifier {
    fn span(&self) -> Span {
        self.value.span()
    }
}

/// Distinguished from [`Identifier`] by grammar context, not by shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableReference {
    pub value: Token,
}

impl Spanned for VariableReference {
    fn span(&self) -> Span {
        self.value.span()
    }
}
