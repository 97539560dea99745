//! Hand-written C/C++ tokenizer for highlighting
//!
//! [`Lexer`] walks the buffer left to right and at each position takes the
//! first rule that matches, in this order: block comment, line comment,
//! `#include` target, double-quoted string, single-quoted literal,
//! preprocessor directive, number, word (keyword, function or identifier),
//! operator, and finally a single plain character.
//!
//! The scan is total. Unterminated comments and strings run to the end of the
//! buffer and anything unrecognised becomes a one-character [`TokenKind::Plain`]
//! token, so every input makes progress and the token texts always concatenate
//! back to the input.

use crate::token::{Token, TokenKind};

/// Words classified as [`TokenKind::Keyword`]. Whole-word matches only.
pub const KEYWORDS: &[&str] = &[
    "int", "float", "double", "char", "void", "return", "if", "else", "for", "while", "do",
    "switch", "case", "break", "continue", "const", "static", "extern", "typedef", "struct",
    "class", "public", "private", "protected", "virtual", "new", "delete", "namespace", "using",
    "include", "bool", "true", "false", "nullptr", "auto", "long", "short", "unsigned", "signed",
];

const SINGLE_OPERATORS: &str = "+-*/%=<>!&|^~?:;,(){}[]";

const DOUBLE_OPERATORS: &[&str] = &[
    "<<", ">>", "&&", "||", "==", "!=", "<=", ">=", "++", "--", "+=", "-=", "*=", "/=", "%=", "::",
];

const INCLUDE_DIRECTIVE: &str = "#include";

/// Default size of the window searched for `#include` before a `<`.
pub const DEFAULT_INCLUDE_LOOKBACK: usize = 10;

/// Tunables for the [`Lexer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// How many UTF-16 code units before a `<` are searched for `#include`
    pub include_lookback: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            include_lookback: DEFAULT_INCLUDE_LOOKBACK,
        }
    }
}

/// Tokenize `text` with the default [`LexerConfig`].
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    tokenize_with(text, LexerConfig::default())
}

/// Tokenize `text` with an explicit [`LexerConfig`].
pub fn tokenize_with(text: &str, config: LexerConfig) -> Vec<Token<'_>> {
    let tokens: Vec<_> = Lexer::new(text, config).collect();
    tracing::trace!(bytes = text.len(), tokens = tokens.len(), "tokenized buffer");
    tokens
}

/// Iterator over the tokens of a buffer
pub struct Lexer<'a> {
    text: &'a str,
    pos: usize,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str, config: LexerConfig) -> Self {
        Self {
            text,
            pos: 0,
            config,
        }
    }

    /// Returns the kind and byte length of the token starting at `self.pos`.
    fn scan_token(&self, rest: &str, first: char) -> (TokenKind, usize) {
        if let Some(body) = rest.strip_prefix("/*") {
            let len = body.find("*/").map_or(rest.len(), |end| end + 4);
            return (TokenKind::Comment, len);
        }

        if rest.starts_with("//") {
            let len = rest.find('\n').map_or(rest.len(), |end| end + 1);
            return (TokenKind::Comment, len);
        }

        // Without a closing '>' the '<' falls through to the operator rule
        if first == '<' && self.follows_include() {
            if let Some(end) = rest.find('>') {
                return (TokenKind::String, end + 1);
            }
        }

        match first {
            '"' | '\'' => (TokenKind::String, quoted_len(rest, first)),
            '#' => {
                let name = run_len(&rest[1..], |c| c.is_ascii_alphabetic() || c == '_');
                (TokenKind::Preprocessor, 1 + name)
            },
            c if c.is_ascii_digit() => (
                TokenKind::Number,
                run_len(rest, |c| c.is_ascii_digit() || c == '.'),
            ),
            c if is_word_start(c) => self.scan_word(rest),
            _ => match operator_len(rest, first) {
                Some(len) => (TokenKind::Operator, len),
                None => (TokenKind::Plain, first.len_utf8()),
            },
        }
    }

    fn scan_word(&self, rest: &str) -> (TokenKind, usize) {
        let len = run_len(rest, is_word_char);
        let word = &rest[..len];

        let kind = if KEYWORDS.contains(&word) {
            TokenKind::Keyword
        } else if rest[len..].trim_start().starts_with('(') {
            TokenKind::Function
        } else {
            TokenKind::Identifier
        };

        (kind, len)
    }

    /// Whether `#include` occurs in the lookback window ending at `self.pos`.
    fn follows_include(&self) -> bool {
        let before = &self.text[..self.pos];
        let mut window_start = self.pos;
        let mut units = 0;

        for (idx, ch) in before.char_indices().rev() {
            units += ch.len_utf16();
            if units > self.config.include_lookback {
                break;
            }
            window_start = idx;
        }

        before[window_start..].contains(INCLUDE_DIRECTIVE)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let first = rest.chars().next()?;

        let (kind, len) = self.scan_token(rest, first);
        let start = self.pos;
        self.pos += len;

        Some(Token::new(kind, &self.text[start..self.pos]))
    }
}

/// Length of a quoted literal starting at `rest[0] == quote`.
///
/// Only the single preceding character is consulted for escapes, so `"\\"` does
/// not close on its final quote. Unterminated literals take the rest of the text.
fn quoted_len(rest: &str, quote: char) -> usize {
    let mut prev = quote;
    for (idx, ch) in rest.char_indices().skip(1) {
        if ch == quote && prev != '\\' {
            return idx + ch.len_utf8();
        }
        prev = ch;
    }
    rest.len()
}

fn operator_len(rest: &str, first: char) -> Option<usize> {
    if !SINGLE_OPERATORS.contains(first) {
        return None;
    }
    if DOUBLE_OPERATORS.iter().any(|op| rest.starts_with(op)) {
        Some(2)
    } else {
        Some(1)
    }
}

fn run_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|(_, ch)| !pred(*ch))
        .map_or(text.len(), |(idx, _)| idx)
}

fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
