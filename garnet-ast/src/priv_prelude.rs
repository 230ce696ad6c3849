pub use {
    crate::{
        expr::{Assignment, Binary, Identifier, OperatorAssignment, Ternary, VariableReference},
        literal::{
            CharacterLiteral, FloatLiteral, ImaginaryLiteral, IntegerLiteral, RationalLiteral,
        },
        node::{Node, NodeKind},
        node_list::NodeList,
        program::Program,
        statement::{
            IfModifier, Redo, Retry, Statements, UnlessModifier, UntilModifier, WhileModifier,
        },
        token::{Token, TokenKind},
    },
    extension_trait::extension_trait,
    garnet_types::{Span, Spanned},
    serde::{Deserialize, Serialize},
};
