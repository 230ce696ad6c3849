use crate::priv_prelude::*;

/// One syntax-tree element: a span covering the whole construct plus exactly
/// one active variant payload. Nodes are built bottom-up by the parser and
/// are read-only afterwards; a transformation builds a new tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    span: Span,
    kind: NodeKind,
}

/// The closed set of variants. Consumers dispatch with `match`, so adding a
/// variant is a breaking change that forces every consumer to be revisited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Assignment(Assignment),
    Binary(Binary),
    CharacterLiteral(CharacterLiteral),
    FloatLiteral(FloatLiteral),
    Identifier(Identifier),
    IfModifier(IfModifier),
    ImaginaryLiteral(ImaginaryLiteral),
    IntegerLiteral(IntegerLiteral),
    OperatorAssignment(OperatorAssignment),
    Program(Program),
    RationalLiteral(RationalLiteral),
    Redo(Redo),
    Retry(Retry),
    Statements(Statements),
    Ternary(Ternary),
    UnlessModifier(UnlessModifier),
    UntilModifier(UntilModifier),
    VariableReference(VariableReference),
    WhileModifier(WhileModifier),
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn assignment(target: Node, operator: Token, value: Node) -> Node {
        let assignment = Assignment {
            target: Box::new(target),
            operator,
            value: Box::new(value),
        };
        let span = assignment.span();
        debug_assert!(span.contains(&assignment.operator.span));
        Node {
            span,
            kind: NodeKind::Assignment(assignment),
        }
    }

    pub fn binary(left: Node, operator: Token, right: Node) -> Node {
        let binary = Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        };
        let span = binary.span();
        debug_assert!(span.contains(&binary.operator.span));
        Node {
            span,
            kind: NodeKind::Binary(binary),
        }
    }

    pub fn character_literal(value: Token) -> Node {
        let span = value.span();
        Node {
            span,
            kind: NodeKind::CharacterLiteral(CharacterLiteral { value }),
        }
    }

    pub fn float_literal(value: Token) -> Node {
        let span = value.span();
        Node {
            span,
            kind: NodeKind::FloatLiteral(FloatLiteral { value }),
        }
    }

    pub fn identifier(value: Token) -> Node {
        let span = value.span();
        Node {
            span,
            kind: NodeKind::Identifier(Identifier { value }),
        }
    }

    pub fn if_modifier(statement: Node, keyword: Token, predicate: Node) -> Node {
        let modifier = IfModifier {
            statement: Box::new(statement),
            keyword,
            predicate: Box::new(predicate),
        };
        let span = modifier.span();
        debug_assert!(span.contains(&modifier.keyword.span));
        Node {
            span,
            kind: NodeKind::IfModifier(modifier),
        }
    }

    pub fn imaginary_literal(value: Token) -> Node {
        let span = value.span();
        Node {
            span,
            kind: NodeKind::ImaginaryLiteral(ImaginaryLiteral { value }),
        }
    }

    pub fn integer_literal(value: Token) -> Node {
        let span = value.span();
        Node {
            span,
            kind: NodeKind::IntegerLiteral(IntegerLiteral { value }),
        }
    }

    pub fn operator_assignment(target: Node, operator: Token, value: Node) -> Node {
        let assignment = OperatorAssignment {
            target: Box::new(target),
            operator,
            value: Box::new(value),
        };
        let span = assignment.span();
        debug_assert!(span.contains(&assignment.operator.span));
        Node {
            span,
            kind: NodeKind::OperatorAssignment(assignment),
        }
    }

    pub fn program(statements: Node) -> Node {
        debug_assert!(matches!(statements.kind(), NodeKind::Statements(_)));
        let span = statements.span();
        Node {
            span,
            kind: NodeKind::Program(Program {
                statements: Box::new(statements),
            }),
        }
    }

    pub fn rational_literal(value: Token) -> Node {
        let span = value.span();
        Node {
            span,
            kind: NodeKind::RationalLiteral(RationalLiteral { value }),
        }
    }

    pub fn redo(value: Token) -> Node {
        let span = value.span();
        Node {
            span,
            kind: NodeKind::Redo(Redo { value }),
        }
    }

    pub fn retry(value: Token) -> Node {
        let span = value.span();
        Node {
            span,
            kind: NodeKind::Retry(Retry { value }),
        }
    }

    /// `span` comes from the enclosing markers; an empty body cannot supply
    /// one on its own.
    pub fn statements(span: Span, body: NodeList) -> Node {
        debug_assert!(body.iter().all(|node| span.contains(&node.span)));
        Node {
            span,
            kind: NodeKind::Statements(Statements { body }),
        }
    }

    pub fn ternary(
        predicate: Node,
        question_mark: Token,
        true_expression: Node,
        colon: Token,
        false_expression: Node,
    ) -> Node {
        let ternary = Ternary {
            predicate: Box::new(predicate),
            question_mark,
            true_expression: Box::new(true_expression),
            colon,
            false_expression: Box::new(false_expression),
        };
        let span = ternary.span();
        debug_assert!(span.contains(&ternary.question_mark.span));
        debug_assert!(span.contains(&ternary.colon.span));
        Node {
            span,
            kind: NodeKind::Ternary(ternary),
        }
    }

    pub fn unless_modifier(statement: Node, keyword: Token, predicate: Node) -> Node {
        let modifier = UnlessModifier {
            statement: Box::new(statement),
            keyword,
            predicate: Box::new(predicate),
        };
        let span = modifier.span();
        debug_assert!(span.contains(&modifier.keyword.span));
        Node {
            span,
            kind: NodeKind::UnlessModifier(modifier),
        }
    }

    pub fn until_modifier(statement: Node, keyword: Token, predicate: Node) -> Node {
        let modifier = UntilModifier {
            statement: Box::new(statement),
            keyword,
            predicate: Box::new(predicate),
        };
        let span = modifier.span();
        debug_assert!(span.contains(&modifier.keyword.span));
        Node {
            span,
            kind: NodeKind::UntilModifier(modifier),
        }
    }

    pub fn variable_reference(value: Token) -> Node {
        let span = value.span();
        Node {
            span,
            kind: NodeKind::VariableReference(VariableReference { value }),
        }
    }

    pub fn while_modifier(statement: Node, keyword: Token, predicate: Node) -> Node {
        let modifier = WhileModifier {
            statement: Box::new(statement),
            keyword,
            predicate: Box::new(predicate),
        };
        let span = modifier.span();
        debug_assert!(span.contains(&modifier.keyword.span));
        Node {
            span,
            kind: NodeKind::WhileModifier(modifier),
        }
    }
}

impl Spanned for Node {
    fn span(&self) -> Span {
        self.span.clone()
    }
}
