//! Token stream to overlay markup
//!
//! The overlay is positioned exactly under a transparent text input, so the
//! rendered markup must contain the same characters in the same order as the
//! buffer. [`render`] only escapes and wraps; it never adds or drops text.

use crate::{
    gutter,
    lexer::{tokenize_with, LexerConfig},
    token::{Token, TokenKind},
};
use std::{borrow::Cow, fmt::Write};

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Render tokens as escaped markup, one `<span class="kind">` per styled token.
pub fn render(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        let escaped = escape_html(token.text);
        match token.kind.css_class() {
            Some(class) => {
                let _ = write!(out, r#"<span class="{class}">{escaped}</span>"#);
            },
            None => out.push_str(&escaped),
        }
    }
    out
}

/// Tokenize and render in one step with the default lexer settings.
pub fn highlight(text: &str) -> String {
    render(&crate::lexer::tokenize(text))
}

/// Colors for each styled token class, used by [`stylesheet`].
fn class_color(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Comment => "#6a9955",
        TokenKind::String => "#ce9178",
        TokenKind::Preprocessor => "#c586c0",
        TokenKind::Number => "#b5cea8",
        TokenKind::Identifier => "#9cdcfe",
        TokenKind::Keyword => "#569cd6",
        TokenKind::Function => "#dcdcaa",
        TokenKind::Operator => "#d4d4d4",
        TokenKind::Plain => "inherit",
    }
}

/// Stylesheet for the two-layer editor.
///
/// The overlay and the text area share font metrics, padding and wrapping so
/// that characters line up; the text area's own glyphs are transparent and only
/// its caret shows.
pub fn stylesheet() -> String {
    let mut css = String::from(
        "\
body { margin: 0; background: #1e1e1e; color: #d4d4d4; }
.editor-container { display: flex; font: 14px/1.5 Consolas, Monaco, 'Courier New', monospace; }
.line-numbers { padding: 10px 8px; text-align: right; color: #858585; user-select: none; }
.code-wrapper { position: relative; flex: 1; }
.syntax-highlight, .code-textarea {
  position: absolute; inset: 0; margin: 0; padding: 10px; border: 0;
  font: inherit; white-space: pre; overflow: auto; tab-size: 4;
}
.syntax-highlight { pointer-events: none; }
.code-textarea { background: transparent; color: transparent; caret-color: #aeafad; resize: none; outline: none; }
",
    );
    for kind in TokenKind::styled() {
        let _ = writeln!(css, ".{} {{ color: {}; }}", kind.name(), class_color(kind));
    }
    css
}

/// Standalone page with gutter, overlay and edit surface for `text`.
pub fn render_page(text: &str, config: LexerConfig) -> String {
    let markup = render(&tokenize_with(text, config));
    let gutter = gutter::render_gutter(text);
    let source = escape_html(text);
    let css = stylesheet();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
{css}</style>
</head>
<body>
<div class="editor-container">
<div class="line-numbers">{gutter}</div>
<div class="code-wrapper">
<pre class="syntax-highlight">{markup}</pre>
<textarea class="code-textarea" spellcheck="false">{source}</textarea>
</div>
</div>
<script>
const area = document.querySelector('.code-textarea');
const overlay = document.querySelector('.syntax-highlight');
area.addEventListener('scroll', () => {{
  overlay.scrollTop = area.scrollTop;
  overlay.scrollLeft = area.scrollLeft;
}});
</script>
</body>
</html>
"#
    )
}
