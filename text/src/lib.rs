//! Text crate for Stylus
//!
//! Turns raw C/C++-like source into highlighted markup for the editor overlay.
//! Nothing here knows about keys or cursors beyond offset arithmetic; the
//! editing engine lives in the `stylus` crate.
//!
//! The key components are:
//! - [`lexer::tokenize`] - Classifies a buffer into a lossless [`token::Token`] stream
//! - [`highlight::render`] - Escapes tokens and wraps them in per-kind spans
//! - [`gutter`] - Line counting and the line-number column
//! - [`OffsetUtf16`] - Code-unit offsets matching native text-input selections

pub mod gutter;
pub mod highlight;
pub mod lexer;
mod offset_utf16;
pub mod token;

#[cfg(test)]
mod tests;

pub use highlight::{highlight, render};
pub use lexer::{tokenize, tokenize_with, Lexer, LexerConfig};
pub use offset_utf16::OffsetUtf16;
pub use token::{Token, TokenKind};
