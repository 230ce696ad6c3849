use crate::priv_prelude::*;

/// A lexical unit handed over by the lexer. Node variants embed tokens by
/// value and never mutate them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn as_str(&self) -> &str {
        self.span.as_str()
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Identifier,
    CharacterLiteral,
    FloatLiteral,
    ImaginaryLiteral,
    IntegerLiteral,
    RationalLiteral,
    KeywordIf,
    KeywordRedo,
    KeywordRetry,
    KeywordUnless,
    KeywordUntil,
    KeywordWhile,
    Equals,
    Question,
    Colon,
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    PlusEquals,
    MinusEquals,
    StarEquals,
    StarStarEquals,
    SlashEquals,
    PercentEquals,
}

impl TokenKind {
    /// The fixed lexeme of keyword and operator kinds. Content-bearing kinds
    /// (identifiers and literals) have no fixed spelling.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Identifier
            | TokenKind::CharacterLiteral
            | TokenKind::FloatLiteral
            | TokenKind::ImaginaryLiteral
            | TokenKind::IntegerLiteral
            | TokenKind::RationalLiteral => None,
            TokenKind::KeywordIf => Some("if"),
            TokenKind::KeywordRedo => Some("redo"),
            TokenKind::KeywordRetry => Some("retry"),
            TokenKind::KeywordUnless => Some("unless"),
            TokenKind::KeywordUntil => Some("until"),
            TokenKind::KeywordWhile => Some("while"),
            TokenKind::Equals => Some("="),
            TokenKind::Question => Some("?"),
            TokenKind::Colon => Some(":"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::StarStar => Some("**"),
            TokenKind::Slash => Some("/"),
            TokenKind::Percent => Some("%"),
            TokenKind::PlusEquals => Some("+="),
            TokenKind::MinusEquals => Some("-="),
            TokenKind::StarEquals => Some("*="),
            TokenKind::StarStarEquals => Some("**="),
            TokenKind::SlashEquals => Some("/="),
            TokenKind::PercentEquals => Some("%="),
        }
    }

    pub fn from_keyword(word: &str) -> Option<TokenKind> {
        match word {
            "if" => Some(TokenKind::KeywordIf),
            "redo" => Some(TokenKind::KeywordRedo),
            "retry" => Some(TokenKind::KeywordRetry),
            "unless" => Some(TokenKind::KeywordUnless),
            "until" => Some(TokenKind::KeywordUntil),
            "while" => Some(TokenKind::KeywordWhile),
            _ => None,
        }
    }
}

#[extension_trait]
pub impl CharExt for char {
    fn as_operator_kind(self) -> Option<TokenKind> {
        match self {
            '=' => Some(TokenKind::Equals),
            '?' => Some(TokenKind::Question),
            ':' => Some(TokenKind::Colon),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '%' => Some(TokenKind::Percent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn keywords_round_trip() {
        for word in ["if", "redo", "retry", "unless", "until", "while"] {
            let kind = TokenKind::from_keyword(word).unwrap();
            assert_eq!(kind.as_str(), Some(word));
        }
        assert!(TokenKind::from_keyword("begin").is_none());
        assert!(TokenKind::from_keyword("").is_none());
    }

    #[test]
    fn content_bearing_kinds_have_no_fixed_lexeme() {
        assert_eq!(TokenKind::Identifier.as_str(), None);
        assert_eq!(TokenKind::IntegerLiteral.as_str(), None);
        assert_eq!(TokenKind::RationalLiteral.as_str(), None);
    }

    #[test]
    fn chars_map_to_operator_kinds() {
        assert_eq!('+'.as_operator_kind(), Some(TokenKind::Plus));
        assert_eq!('?'.as_operator_kind(), Some(TokenKind::Question));
        assert_eq!('%'.as_operator_kind(), Some(TokenKind::Percent));
        assert_eq!('x'.as_operator_kind(), None);
        assert_eq!(' '.as_operator_kind(), None);
    }

    #[test]
    fn token_slices_its_source_text() {
        let src: Arc<str> = Arc::from("x = 1");
        let token = Token {
            kind: TokenKind::Identifier,
            span: Span::new(src, 0, 1).unwrap(),
        };
        assert_eq!(token.as_str(), "x");
        assert_eq!(token.span().end(), 1);
    }
}
