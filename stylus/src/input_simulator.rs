//! Input simulation for testing and debugging.
//!
//! Drives a [`Session`] the way a browser text input would, without a browser.
//! Key sequences use a small DSL where regular characters are typed as-is and
//! special keys are enclosed in angle brackets like `<Enter>` or `<Tab>`.
//!
//! [`TextArea`] stands in for the native input. It applies the host's default
//! action for every key the session passes through, then reports the result
//! back so the overlay markup stays current.

use crate::{
    config::Config,
    keymap::{Key, KeyEvent},
    scroll::{sync_scroll, ScrollPosition, Scrollable},
    session::{EditSurface, Session},
    smart_edit::KeyOutcome,
    state::{Edit, EditorState, Selection},
};
use stylus_text::OffsetUtf16;

/// Parse an input sequence string into individual keys.
///
/// The input DSL supports:
/// - Regular characters: typed as-is (e.g., "int" becomes 3 keys)
/// - Special keys: enclosed in angle brackets (e.g., "<Enter>", "<Tab>", "<BS>")
/// - `<lt>` for a literal `<`
///
/// Unknown names and unclosed brackets are typed literally.
pub fn parse_input_sequence(input: &str) -> Vec<Key> {
    let mut keys = Vec::new();
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch != '<' {
            keys.push(Key::Char(ch));
            continue;
        }

        let mut key_name = String::new();
        let mut found_close = false;
        for next_ch in chars.by_ref() {
            if next_ch == '>' {
                found_close = true;
                break;
            }
            key_name.push(next_ch);
        }

        match parse_special_key(&key_name).filter(|_| found_close) {
            Some(key) => keys.push(key),
            None => {
                if found_close && !key_name.is_empty() {
                    tracing::warn!("Unknown special key: <{}>", key_name);
                }
                keys.push(Key::Char('<'));
                keys.extend(key_name.chars().map(Key::Char));
                if found_close {
                    keys.push(Key::Char('>'));
                }
            },
        }
    }

    keys
}

/// Recognizes common special key names, returning `None` for anything else.
fn parse_special_key(name: &str) -> Option<Key> {
    let key = match name.to_lowercase().as_str() {
        "esc" | "escape" => Key::Escape,
        "enter" | "return" | "cr" => Key::Enter,
        "tab" => Key::Tab,
        "backspace" | "bs" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "space" | "spc" => Key::Char(' '),
        "lt" => Key::Char('<'),
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        _ => return None,
    };
    Some(key)
}

/// Headless stand-in for the native `<textarea>`.
#[derive(Debug, Clone, Default)]
pub struct TextArea {
    state: EditorState,
    scroll: ScrollPosition,
}

impl TextArea {
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            scroll: ScrollPosition::default(),
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

    /// Perform the browser's default action for `key`.
    ///
    /// Returns `true` if the text changed.
    pub fn perform_default(&mut self, key: &Key) -> bool {
        match native_edit(&self.state, key) {
            Some(edit) => {
                self.state = self.state.apply(&edit);
                edit.changes_text()
            },
            None => false,
        }
    }
}

impl EditSurface for TextArea {
    fn set_text(&mut self, text: &str) {
        self.state = EditorState::with_selection(text, self.state.selection());
    }

    fn set_selection(&mut self, selection: Selection) {
        self.state = self.state.select(selection);
    }
}

impl Scrollable for TextArea {
    fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    fn set_scroll_position(&mut self, position: ScrollPosition) {
        self.scroll = position;
    }
}

/// The highlight layer drawn behind the text area.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    markup: String,
    scroll: ScrollPosition,
}

impl Overlay {
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl Scrollable for Overlay {
    fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    fn set_scroll_position(&mut self, position: ScrollPosition) {
        self.scroll = position;
    }
}

/// A session wired to a simulated text area and overlay.
pub struct InputSimulator {
    session: Session,
    textarea: TextArea,
    overlay: Overlay,
}

impl InputSimulator {
    /// Start on the default document.
    pub fn new(config: &Config) -> Self {
        Self::from_session(Session::new(config))
    }

    pub fn with_state(state: EditorState, config: &Config) -> Self {
        Self::from_session(Session::with_state(state, config))
    }

    fn from_session(session: Session) -> Self {
        let textarea = TextArea::new(session.state().clone());
        let overlay = Overlay {
            markup: session.markup().to_string(),
            scroll: ScrollPosition::default(),
        };
        Self {
            session,
            textarea,
            overlay,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn textarea(&self) -> &TextArea {
        &self.textarea
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn text(&self) -> &str {
        self.session.text()
    }

    pub fn selection(&self) -> Selection {
        self.session.selection()
    }

    /// Press one key: offer it to the session, fall back to the native action.
    pub fn press(&mut self, key: &Key) -> KeyOutcome {
        let event = KeyEvent::new(key.name(), self.textarea.selection());
        let outcome = self.session.handle_event(&event, &mut self.textarea);

        if !outcome.is_intercepted() {
            let selection = self.textarea.selection();
            if self.textarea.perform_default(key) {
                self.session
                    .on_input(self.textarea.text(), self.textarea.selection());
            } else if self.textarea.selection() != selection {
                self.session.on_select(self.textarea.selection());
            }
        }

        if self.overlay.markup != self.session.markup() {
            self.overlay.markup = self.session.markup().to_string();
        }
        outcome
    }

    /// Press every key of a DSL sequence in order.
    pub fn type_sequence(&mut self, input: &str) {
        for key in parse_input_sequence(input) {
            self.press(&key);
        }
    }

    /// Scroll the text area and carry the overlay with it.
    pub fn scroll_to(&mut self, position: ScrollPosition) {
        self.textarea.set_scroll_position(position);
        sync_scroll(&self.textarea, &mut self.overlay);
    }
}

/// The default action of a plain `<textarea>` for `key`.
fn native_edit(state: &EditorState, key: &Key) -> Option<Edit> {
    let selection = state.selection();
    let start = selection.start;
    let end = selection.end;

    let edit = match key {
        Key::Char(ch) => Edit::splice(
            selection.range(),
            ch.to_string(),
            Selection::caret(start.0 + ch.len_utf16()),
        ),
        Key::Enter => Edit::splice(selection.range(), "\n", Selection::caret(start.0 + 1)),
        Key::Tab => Edit::splice(selection.range(), "\t", Selection::caret(start.0 + 1)),
        Key::Backspace if !selection.is_caret() => {
            Edit::splice(selection.range(), "", Selection::caret(start.0))
        },
        Key::Backspace => {
            let width = state.char_before(start)?.len_utf16();
            let from = start.0.saturating_sub(width);
            Edit::splice(OffsetUtf16(from)..start, "", Selection::caret(from))
        },
        Key::Delete if !selection.is_caret() => {
            Edit::splice(selection.range(), "", Selection::caret(start.0))
        },
        Key::Delete => {
            let width = state.char_after(start)?.len_utf16();
            Edit::splice(start..OffsetUtf16(start.0 + width), "", Selection::caret(start.0))
        },
        Key::Left if !selection.is_caret() => Edit::select(Selection::caret(start.0)),
        Key::Left => {
            let width = state.char_before(start).map_or(0, char::len_utf16);
            Edit::select(Selection::caret(start.0.saturating_sub(width)))
        },
        Key::Right if !selection.is_caret() => Edit::select(Selection::caret(end.0)),
        Key::Right => {
            let width = state.char_after(start).map_or(0, char::len_utf16);
            Edit::select(Selection::caret(start.0 + width))
        },
        Key::Home => Edit::select(Selection::caret(line_start(state, start).0)),
        Key::End => Edit::select(Selection::caret(line_end(state, end).0)),
        Key::Up => {
            let here = line_start(state, start);
            if here.0 == 0 {
                Edit::select(Selection::caret(0))
            } else {
                let column = start.saturating_sub(here);
                let prev_end = OffsetUtf16(here.0 - 1);
                let prev_start = line_start(state, prev_end);
                let target = (prev_start + column).min(prev_end);
                Edit::select(Selection::caret(target.0))
            }
        },
        Key::Down => {
            let column = end.saturating_sub(line_start(state, end));
            let here_end = line_end(state, end);
            if here_end == state.len_utf16() {
                Edit::select(Selection::caret(here_end.0))
            } else {
                let next_start = OffsetUtf16(here_end.0 + 1);
                let next_end = line_end(state, next_start);
                let target = (next_start + column).min(next_end);
                Edit::select(Selection::caret(target.0))
            }
        },
        Key::Escape | Key::Named(_) => return None,
    };

    Some(edit)
}

/// Offset of the first character on the line containing `at`.
fn line_start(state: &EditorState, at: OffsetUtf16) -> OffsetUtf16 {
    let before = state.text_before(at);
    let byte = before.rfind('\n').map_or(0, |idx| idx + 1);
    OffsetUtf16::len_of(&before[..byte])
}

/// Offset of the newline (or end of text) ending the line containing `at`.
fn line_end(state: &EditorState, at: OffsetUtf16) -> OffsetUtf16 {
    let after = state.text_after(at);
    let byte = after.find('\n').unwrap_or(after.len());
    at + OffsetUtf16::len_of(&after[..byte])
}
