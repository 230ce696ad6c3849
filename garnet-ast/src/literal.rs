//! Literal nodes keep their token verbatim; numeric and textual
//! interpretation happens in a later phase.

use crate::priv_prelude::*;

macro_rules! define_literal (
    ($ty_name:ident) => {
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $ty_name {
            pub value: Token,
        }

        impl Spanned for $ty_name {
            fn span(&self) -> Span {
                self.value.span()
            }
        }
    };
);

define_literal!(CharacterLiteral);
define_literal!(FloatLiteral);
define_literal!(ImaginaryLiteral);
define_literal!(IntegerLiteral);
define_literal!(RationalLiteral);
