//! Token types produced by the [`crate::lexer`]

use std::fmt;

/// Syntax category of a [`Token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `/* ... */` or `// ...` including delimiters
    Comment,
    /// Quoted literal or an `#include <...>` target
    String,
    /// `#` plus the directive name
    Preprocessor,
    Number,
    Identifier,
    Keyword,
    /// Identifier followed by `(`
    Function,
    Operator,
    /// Anything else, one character at a time
    Plain,
}

impl TokenKind {
    /// Get a lower-case name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Preprocessor => "preprocessor",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Function => "function",
            TokenKind::Operator => "operator",
            TokenKind::Plain => "plain",
        }
    }

    /// CSS class used by the overlay, `None` for unstyled text
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            TokenKind::Plain => None,
            other => Some(other.name()),
        }
    }

    /// All kinds that carry a style class
    pub fn styled() -> [TokenKind; 8] {
        [
            TokenKind::Comment,
            TokenKind::String,
            TokenKind::Preprocessor,
            TokenKind::Number,
            TokenKind::Identifier,
            TokenKind::Keyword,
            TokenKind::Function,
            TokenKind::Operator,
        ]
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, verbatim slice of the source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}
