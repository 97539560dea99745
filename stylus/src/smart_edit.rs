//! Keystroke-level smart editing
//!
//! [`SmartEdit::handle_key`] looks at one key against the committed
//! [`EditorState`] and either returns an [`Edit`] to apply in place of the
//! host's default behaviour, or [`KeyOutcome::PassThrough`]. Rules are tried in
//! order and the first match wins:
//!
//! 1. Typing a closer that is already the next character steps over it.
//! 2. Typing an opener inserts the pair and puts the caret between them.
//! 3. `Tab` inserts one indent unit at the selection start.
//! 4. `Enter` carries the current line's indentation forward, one unit deeper
//!    after a trailing `{`, and splits an empty bracket pair across three lines.
//!
//! Everything else, including ordinary typing and deletion, is left to the host.

use crate::{
    config::Config,
    keymap::Key,
    state::{Edit, EditorState, Selection},
};
use stylus_text::OffsetUtf16;

/// Default indent unit width in spaces.
pub const DEFAULT_TAB_WIDTH: usize = 4;

const CLOSERS: [char; 5] = [')', '}', ']', '"', '\''];

fn partner(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// What the host should do with a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Suppress the default action and commit this edit
    Intercept(Edit),
    /// Let the host's native input handle the key
    PassThrough,
}

impl KeyOutcome {
    pub fn is_intercepted(&self) -> bool {
        matches!(self, KeyOutcome::Intercept(_))
    }
}

/// Settings for [`SmartEdit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartEditConfig {
    /// Spaces inserted per indent level
    pub tab_width: usize,
    /// Enables the step-over and auto-pair rules
    pub auto_close: bool,
}

impl Default for SmartEditConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            auto_close: true,
        }
    }
}

impl From<&Config> for SmartEditConfig {
    fn from(config: &Config) -> Self {
        Self {
            tab_width: config.tab_width,
            auto_close: config.auto_close,
        }
    }
}

/// The smart-edit state machine. Stateless between keys; all state lives in
/// the [`EditorState`] it is handed.
#[derive(Debug, Clone)]
pub struct SmartEdit {
    indent_unit: String,
    auto_close: bool,
}

impl Default for SmartEdit {
    fn default() -> Self {
        Self::new(&SmartEditConfig::default())
    }
}

impl SmartEdit {
    pub fn new(config: &SmartEditConfig) -> Self {
        Self {
            indent_unit: " ".repeat(config.tab_width),
            auto_close: config.auto_close,
        }
    }

    /// Decide what `key` does to `state`.
    pub fn handle_key(&self, state: &EditorState, key: &Key) -> KeyOutcome {
        let edit = match key {
            Key::Char(ch) if self.auto_close => self.closing_pair(state, *ch),
            Key::Tab => Some(self.indent(state)),
            Key::Enter => Some(self.newline(state)),
            _ => None,
        };

        match edit {
            Some(edit) => KeyOutcome::Intercept(edit),
            None => KeyOutcome::PassThrough,
        }
    }

    /// Rules 1 and 2: step over a matching closer, or insert a pair.
    fn closing_pair(&self, state: &EditorState, ch: char) -> Option<Edit> {
        let selection = state.selection();
        if !selection.is_caret() {
            return None;
        }
        let caret = selection.start;

        if CLOSERS.contains(&ch) && state.char_after(caret) == Some(ch) {
            return Some(Edit::select(Selection::caret(caret.0 + 1)));
        }

        let close = partner(ch)?;
        Some(Edit::splice(
            caret..caret,
            format!("{ch}{close}"),
            Selection::caret(caret.0 + 1),
        ))
    }

    /// Rule 3: one indent unit replaces the selection.
    fn indent(&self, state: &EditorState) -> Edit {
        let selection = state.selection();
        let caret = selection.start + OffsetUtf16::len_of(&self.indent_unit);
        Edit::splice(
            selection.range(),
            self.indent_unit.clone(),
            Selection::caret(caret.0),
        )
    }

    /// Rule 4: newline with carried indentation.
    ///
    /// Inserts at the selection start; a range selection is left in place after
    /// the inserted text.
    fn newline(&self, state: &EditorState) -> Edit {
        let at = state.selection().start;
        let before = state.text_before(at);
        let line = before.rsplit('\n').next().unwrap_or_default();
        let indent = leading_whitespace(line);

        let between_pair = matches!(
            (state.char_before(at), state.char_after(at)),
            (Some('{'), Some('}')) | (Some('['), Some(']')) | (Some('('), Some(')'))
        );

        if between_pair {
            let inner = format!("{indent}{}", self.indent_unit);
            let caret = at.0 + 1 + OffsetUtf16::len_of(&inner).0;
            return Edit::splice(
                at..at,
                format!("\n{inner}\n{indent}"),
                Selection::caret(caret),
            );
        }

        let mut indent = indent.to_string();
        if line.trim().ends_with('{') {
            indent.push_str(&self.indent_unit);
        }
        let caret = at.0 + 1 + OffsetUtf16::len_of(&indent).0;
        Edit::splice(at..at, format!("\n{indent}"), Selection::caret(caret))
    }
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}
