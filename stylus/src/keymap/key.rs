use crate::state::Selection;

/// A key as reported by the host text input.
///
/// Names follow the DOM `KeyboardEvent.key` convention: printable keys are the
/// character itself, special keys are named (`"Enter"`, `"ArrowLeft"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    /// Any other named key (`"F5"`, `"Shift"`), never intercepted
    Named(String),
}

impl Key {
    pub fn char(c: char) -> Self {
        Key::Char(c)
    }

    pub fn enter() -> Self {
        Key::Enter
    }

    pub fn tab() -> Self {
        Key::Tab
    }

    pub fn backspace() -> Self {
        Key::Backspace
    }

    /// Parse a DOM key name.
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Key::Char(ch);
        }

        match name {
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Escape" => Key::Escape,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "Home" => Key::Home,
            "End" => Key::End,
            other => Key::Named(other.to_string()),
        }
    }

    /// DOM key name, the inverse of [`Key::from_name`].
    pub fn name(&self) -> String {
        match self {
            Key::Char(ch) => ch.to_string(),
            Key::Enter => "Enter".into(),
            Key::Tab => "Tab".into(),
            Key::Backspace => "Backspace".into(),
            Key::Delete => "Delete".into(),
            Key::Escape => "Escape".into(),
            Key::Left => "ArrowLeft".into(),
            Key::Right => "ArrowRight".into(),
            Key::Up => "ArrowUp".into(),
            Key::Down => "ArrowDown".into(),
            Key::Home => "Home".into(),
            Key::End => "End".into(),
            Key::Named(name) => name.clone(),
        }
    }
}

/// Raw key event from the host: the key plus the input's selection at the
/// moment it was pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub has_selection: bool,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, selection: Selection) -> Self {
        Self {
            key: key.into(),
            has_selection: !selection.is_caret(),
            selection_start: selection.start.0,
            selection_end: selection.end.0,
        }
    }

    pub fn key(&self) -> Key {
        Key::from_name(&self.key)
    }

    /// The reported selection. Without `has_selection` only the start is
    /// trusted and the event describes a caret.
    pub fn selection(&self) -> Selection {
        if self.has_selection {
            Selection::new(self.selection_start, self.selection_end)
        } else {
            Selection::caret(self.selection_start)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters_are_chars() {
        assert_eq!(Key::from_name("("), Key::char('('));
        assert_eq!(Key::from_name(" "), Key::char(' '));
        assert_eq!(Key::from_name("é"), Key::char('é'));
    }

    #[test]
    fn named_keys() {
        assert_eq!(Key::from_name("Enter"), Key::enter());
        assert_eq!(Key::from_name("Tab"), Key::tab());
        assert_eq!(Key::from_name("ArrowLeft"), Key::Left);
        assert_eq!(Key::from_name("F5"), Key::Named("F5".into()));
    }

    #[test]
    fn names_round_trip() {
        for key in [Key::char('x'), Key::Enter, Key::Left, Key::Named("F1".into())] {
            assert_eq!(Key::from_name(&key.name()), key);
        }
    }

    #[test]
    fn event_carries_selection() {
        let event = KeyEvent::new("Tab", Selection::new(2, 5));
        assert!(event.has_selection);
        assert_eq!(event.key(), Key::tab());
        assert_eq!(event.selection(), Selection::new(2, 5));
    }

    #[test]
    fn event_without_selection_is_a_caret() {
        let event = KeyEvent {
            key: "(".into(),
            has_selection: false,
            selection_start: 4,
            selection_end: 9,
        };
        assert_eq!(event.selection(), Selection::caret(4));
    }
}
