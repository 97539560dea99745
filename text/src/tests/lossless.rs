//! Lossless tokenization tests
//!
//! Every character of the input must land in exactly one token, and the
//! rendered overlay must decode back to the input.

use crate::{highlight::render, lexer::tokenize};
use proptest::prelude::*;

fn concat(text: &str) -> String {
    tokenize(text).iter().map(|t| t.text).collect()
}

fn strip_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            other if !in_tag => out.push(other),
            _ => {},
        }
    }
    out
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

fn test_lossless(input: &str) {
    let output = concat(input);
    assert_eq!(
        output, input,
        "Lossless tokenization failed.\nInput:  {input:?}\nOutput: {output:?}"
    );

    let decoded = unescape(&strip_markup(&render(&tokenize(input))));
    assert_eq!(decoded, input, "Rendered overlay does not decode to input");
}

#[test]
fn test_lossless_empty() {
    test_lossless("");
}

#[test]
fn test_lossless_unterminated() {
    test_lossless("/* never closed");
    test_lossless("\"never closed");
    test_lossless("'x");
    test_lossless("// trailing");
    test_lossless("#include <never closed");
}

#[test]
fn test_lossless_markup_characters() {
    test_lossless("a < b && c > d");
    test_lossless("\"<b>&amp;</b>\"");
    test_lossless("'&' \"'\"");
    test_lossless("&lt; is not an entity here");
}

#[test]
fn test_lossless_whitespace() {
    test_lossless(" ");
    test_lossless("\t\tx\r\n");
    test_lossless("\n\n\n");
}

#[test]
fn test_lossless_non_ascii() {
    test_lossless("int café = 1; // ünïcödé");
    test_lossless("\"😀\" 😀");
}

proptest! {
    #[test]
    fn tokens_reconstruct_any_input(text in "\\PC{0,200}") {
        prop_assert_eq!(concat(&text), text);
    }

    #[test]
    fn tokens_reconstruct_code_like_input(text in "[#<>/*\"'\\\\a-z0-9 (){}\\[\\];\n.=+-]{0,120}") {
        prop_assert_eq!(concat(&text), text.clone());
        let decoded = unescape(&strip_markup(&render(&tokenize(&text))));
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn no_token_is_empty(text in "\\PC{0,120}") {
        prop_assert!(tokenize(&text).iter().all(|t| !t.text.is_empty()));
    }
}
