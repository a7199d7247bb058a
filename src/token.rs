//! Token classification tags.
//!
//! The tokenizer producing these lives in the calling crate; here a kind is
//! nothing but a theme lookup key and is never validated. `Custom` lets a
//! tokenizer extend the taxonomy without touching this crate.

/// Classification of one token of source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    StringLiteral,
    NumberLiteral,
    TypeName,
    /// Function or method invocation.
    Call,
    Property,
    Comment,
    Variable,
    /// Preprocessor and compiler directives (`#include`, attributes, ...).
    Preprocessing,
    /// Tokenizer-specific kind outside the built-in taxonomy.
    Custom(String),
}

impl TokenKind {
    /// Custom kind with the given name.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        TokenKind::Custom(name.into())
    }
}
