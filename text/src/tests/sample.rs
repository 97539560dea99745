//! Tokenizing a small but complete program

use crate::{
    lexer::tokenize,
    token::TokenKind::{self, *},
};

const PROGRAM: &str = r#"#include <iostream>
using namespace std;

int main() {
    cout << "Hello World!";
    return 0;
}"#;

fn styled(text: &str) -> Vec<(TokenKind, &str)> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.kind != Plain)
        .map(|t| (t.kind, t.text))
        .collect()
}

#[test]
fn classifies_hello_world() {
    assert_eq!(
        styled(PROGRAM),
        vec![
            (Preprocessor, "#include"),
            (String, "<iostream>"),
            (Keyword, "using"),
            (Keyword, "namespace"),
            (Identifier, "std"),
            (Operator, ";"),
            (Keyword, "int"),
            (Function, "main"),
            (Operator, "("),
            (Operator, ")"),
            (Operator, "{"),
            (Identifier, "cout"),
            (Operator, "<<"),
            (String, "\"Hello World!\""),
            (Operator, ";"),
            (Keyword, "return"),
            (Number, "0"),
            (Operator, ";"),
            (Operator, "}"),
        ]
    );
}

#[test]
fn comments_hide_everything_inside() {
    let text = "/* int \"x\" #include <a> */ // f(1)\nreturn";
    assert_eq!(
        styled(text),
        vec![
            (Comment, "/* int \"x\" #include <a> */"),
            (Comment, "// f(1)\n"),
            (Keyword, "return"),
        ]
    );
}

#[test]
fn comment_start_inside_string_is_text() {
    assert_eq!(
        styled(r#"s = "/* no */";"#),
        vec![
            (Identifier, "s"),
            (Operator, "="),
            (String, r#""/* no */""#),
            (Operator, ";"),
        ]
    );
}
