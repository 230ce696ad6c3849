use crate::priv_prelude::*;

/// An ordered sequence of zero or more statements. An empty body is valid,
/// so the node's span comes from the enclosing markers rather than from the
/// body itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statements {
    pub body: NodeList,
}

macro_rules! define_modifier (
    ($ty_name:ident) => {
        /// Trailing-modifier control form: `statement` executes conditioned
        /// on `predicate`.
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $ty_name {
            pub statement: Box<Node>,
            pub keyword: Token,
            pub predicate: Box<Node>,
        }

        impl Spanned for $ty_name {
            fn span(&self) -> Span {
                Span::join(self.statement.span(), self.predicate.span())
            }
        }
    };
);

define_modifier!(IfModifier);
define_modifier!(UnlessModifier);
define_modifier!(UntilModifier);
define_modifier!(WhileModifier);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redo {
    pub value: Token,
}

impl Spanned for Redo {
    fn span(&self) -> Span {
        self.value.span()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retry {
    pub value: Token,
}

impl Spanned for Retry {
    fn span(&self) -> Span {
        self.value.span()
    }
}
