pub mod expr;
pub mod literal;
pub mod node;
pub mod node_list;
pub mod program;
pub mod statement;
pub mod token;

mod priv_prelude;

pub use crate::{
    expr::{Assignment, Binary, Identifier, OperatorAssignment, Ternary, VariableReference},
    literal::{CharacterLiteral, FloatLiteral, ImaginaryLiteral, IntegerLiteral, RationalLiteral},
    node::{Node, NodeKind},
    node_list::NodeList,
    program::Program,
    statement::{IfModifier, Redo, Retry, Statements, UnlessModifier, UntilModifier, WhileModifier},
    token::{CharExt, Token, TokenKind},
};
