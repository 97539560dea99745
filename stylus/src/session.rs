//! Editor session: the committed state, the engine that mutates it, and the
//! overlay markup derived from it.
//!
//! The session is the only writer of [`EditorState`]. It learns about changes
//! from two directions:
//!
//! - Keys go through [`Session::handle_key`]. Intercepted keys are committed
//!   here and pushed to the host's [`EditSurface`], text first and selection
//!   second, so the selection always refers to the new text.
//! - Native edits the host performed itself (pass-through keys, paste, mouse
//!   selection) are reported back with [`Session::on_input`] and
//!   [`Session::on_select`].
//!
//! Every text change re-tokenizes and re-renders the overlay markup.

use crate::{
    config::Config,
    keymap::{Key, KeyEvent},
    smart_edit::{KeyOutcome, SmartEdit, SmartEditConfig},
    state::{EditorState, Selection},
};
use stylus_text::{gutter, render, tokenize_with, LexerConfig, Token};
use tracing::debug;

/// Document a new session opens with.
pub const DEFAULT_DOCUMENT: &str = r#"#include <iostream>
using namespace std;

int main() {
    cout << "Hello World!";
    return 0;
}"#;

/// The host's editable text input.
pub trait EditSurface {
    /// Replace the whole displayed value.
    fn set_text(&mut self, text: &str);
    /// Place the selection, in offsets of the current value.
    fn set_selection(&mut self, selection: Selection);
}

pub struct Session {
    state: EditorState,
    engine: SmartEdit,
    lexer: LexerConfig,
    markup: String,
}

impl Session {
    /// Open the default document with the caret at 0.
    pub fn new(config: &Config) -> Self {
        Self::with_state(EditorState::new(DEFAULT_DOCUMENT), config)
    }

    pub fn with_state(state: EditorState, config: &Config) -> Self {
        let lexer = config.lexer();
        let markup = render(&tokenize_with(state.text(), lexer));
        Self {
            state,
            engine: SmartEdit::new(&SmartEditConfig::from(config)),
            lexer,
            markup,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn selection(&self) -> Selection {
        self.state.selection()
    }

    /// Overlay markup for the committed text.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Tokens of the committed text.
    pub fn tokens(&self) -> Vec<Token<'_>> {
        tokenize_with(self.state.text(), self.lexer)
    }

    pub fn line_count(&self) -> usize {
        gutter::line_count(self.state.text())
    }

    /// Handle a raw host key event, adopting the selection it reports first.
    pub fn handle_event(
        &mut self,
        event: &KeyEvent,
        surface: &mut impl EditSurface,
    ) -> KeyOutcome {
        if event.selection() != self.state.selection() {
            self.on_select(event.selection());
        }
        self.handle_key(&event.key(), surface)
    }

    /// Run `key` through the smart-edit engine.
    ///
    /// Returns [`KeyOutcome::PassThrough`] when the host should perform its
    /// default action instead.
    pub fn handle_key(&mut self, key: &Key, surface: &mut impl EditSurface) -> KeyOutcome {
        let outcome = self.engine.handle_key(&self.state, key);

        if let KeyOutcome::Intercept(edit) = &outcome {
            let next = self.state.apply(edit);
            debug!(
                key = %key.name(),
                selection = %next.selection(),
                changed = edit.changes_text(),
                "intercepted key"
            );

            if edit.changes_text() {
                surface.set_text(next.text());
            }
            surface.set_selection(next.selection());
            self.commit(next);
        }

        outcome
    }

    /// The host changed its value natively.
    pub fn on_input(&mut self, text: impl Into<String>, selection: Selection) {
        self.commit(EditorState::with_selection(text, selection));
    }

    /// The host moved its selection without changing text.
    pub fn on_select(&mut self, selection: Selection) {
        self.state = self.state.select(selection);
    }

    fn commit(&mut self, next: EditorState) {
        let text_changed = next.text() != self.state.text();
        self.state = next;
        if text_changed {
            self.markup = render(&tokenize_with(self.state.text(), self.lexer));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylus_text::TokenKind;

    /// Records every call so ordering can be asserted.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl EditSurface for Recorder {
        fn set_text(&mut self, text: &str) {
            self.calls.push(format!("text:{text}"));
        }

        fn set_selection(&mut self, selection: Selection) {
            self.calls.push(format!("select:{selection}"));
        }
    }

    fn session(text: &str, selection: Selection) -> Session {
        Session::with_state(
            EditorState::with_selection(text, selection),
            &Config::default(),
        )
    }

    #[test]
    fn starts_with_default_document() {
        let session = Session::new(&Config::default());
        assert_eq!(session.text(), DEFAULT_DOCUMENT);
        assert_eq!(session.selection(), Selection::caret(0));
        assert_eq!(session.line_count(), 7);
        let expected = concat!(
            r#"<span class="preprocessor">#include</span> "#,
            r#"<span class="string">&lt;iostream&gt;</span>"#,
        );
        assert!(session.markup().starts_with(expected));
    }

    #[test]
    fn text_commits_before_selection() {
        let mut session = session("foo", Selection::caret(3));
        let mut surface = Recorder::default();

        let outcome = session.handle_key(&Key::char('('), &mut surface);

        assert!(outcome.is_intercepted());
        assert_eq!(surface.calls, vec!["text:foo()", "select:4"]);
        assert_eq!(session.text(), "foo()");
        assert_eq!(session.selection(), Selection::caret(4));
    }

    #[test]
    fn step_over_only_moves_selection() {
        let mut session = session("foo()", Selection::caret(4));
        let mut surface = Recorder::default();

        session.handle_key(&Key::char(')'), &mut surface);

        assert_eq!(surface.calls, vec!["select:5"]);
        assert_eq!(session.text(), "foo()");
        assert_eq!(session.selection(), Selection::caret(5));
    }

    #[test]
    fn pass_through_leaves_everything_alone() {
        let mut session = session("abc", Selection::caret(1));
        let mut surface = Recorder::default();

        let outcome = session.handle_key(&Key::char('x'), &mut surface);

        assert_eq!(outcome, KeyOutcome::PassThrough);
        assert!(surface.calls.is_empty());
        assert_eq!(session.text(), "abc");
    }

    #[test]
    fn markup_follows_committed_text() {
        let mut session = session("", Selection::caret(0));
        session.on_input("int", Selection::caret(3));
        assert_eq!(session.markup(), r#"<span class="keyword">int</span>"#);

        session.handle_key(&Key::char('('), &mut Recorder::default());
        assert_eq!(
            session.markup(),
            r#"<span class="keyword">int</span><span class="operator">(</span><span class="operator">)</span>"#
        );
        assert_eq!(session.tokens().len(), 3);
        assert_eq!(session.tokens()[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn event_selection_is_adopted_before_dispatch() {
        let mut session = session("abc", Selection::caret(0));
        let mut surface = Recorder::default();

        let event = KeyEvent::new("Tab", Selection::caret(3));
        session.handle_event(&event, &mut surface);

        assert_eq!(session.text(), "abc    ");
        assert_eq!(session.selection(), Selection::caret(7));
    }

    #[test]
    fn event_without_selection_flag_acts_at_caret() {
        let mut session = session("abc", Selection::caret(0));
        let mut surface = Recorder::default();

        let event = KeyEvent {
            key: "(".into(),
            has_selection: false,
            selection_start: 1,
            selection_end: 3,
        };
        session.handle_event(&event, &mut surface);

        assert_eq!(session.text(), "a()bc");
        assert_eq!(session.selection(), Selection::caret(2));
    }

    #[test]
    fn on_input_clamps_selection() {
        let mut session = session("abc", Selection::caret(3));
        session.on_input("a", Selection::caret(3));
        assert_eq!(session.selection(), Selection::caret(1));
    }
}
