//! Buffer and selection, the single unit mutated per keystroke
//!
//! An [`EditorState`] is never patched in place. Every intercepted key builds an
//! [`Edit`] and [`EditorState::apply`] returns the next state, so readers holding
//! a reference only ever see committed text with a selection that is valid for
//! that text.

use std::{fmt, ops::Range, str::FromStr};
use stylus_text::OffsetUtf16;
use thiserror::Error;

/// Selection in UTF-16 code units, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: OffsetUtf16,
    pub end: OffsetUtf16,
}

impl Selection {
    /// Build a selection from code-unit offsets, swapping the ends if they
    /// arrive reversed.
    pub fn new(start: usize, end: usize) -> Self {
        let (start, end) = (OffsetUtf16(start), OffsetUtf16(end));
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn caret(offset: usize) -> Self {
        let offset = OffsetUtf16(offset);
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Clamp both ends into `text` and round each forward to a char boundary.
    pub fn snap(self, text: &str) -> Self {
        Self {
            start: self.start.snap(text),
            end: self.end.snap(text),
        }
    }

    pub fn range(&self) -> Range<OffsetUtf16> {
        self.start..self.end
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_caret() {
            write!(f, "{}", self.start.0)
        } else {
            write!(f, "{}..{}", self.start.0, self.end.0)
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionParseError {
    #[error("invalid offset {text:?} in selection")]
    InvalidOffset { text: String },
    #[error("selection start {start} is after end {end}")]
    Reversed { start: usize, end: usize },
}

/// Parses `"7"` as a caret and `"2..5"` as a range.
impl FromStr for Selection {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |text: &str| {
            text.trim()
                .parse::<usize>()
                .map_err(|_| SelectionParseError::InvalidOffset {
                    text: text.to_string(),
                })
        };

        match s.split_once("..") {
            Some((start, end)) => {
                let (start, end) = (parse(start)?, parse(end)?);
                if start > end {
                    return Err(SelectionParseError::Reversed { start, end });
                }
                Ok(Selection::new(start, end))
            },
            None => Ok(Selection::caret(parse(s)?)),
        }
    }
}

/// A splice plus the selection to place afterwards.
///
/// `selection` is expressed in the coordinates of the text *after* the splice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<OffsetUtf16>,
    pub text: String,
    pub selection: Selection,
}

impl Edit {
    /// Replace `range` with `text`, then place `selection`.
    pub fn splice(
        range: Range<OffsetUtf16>,
        text: impl Into<String>,
        selection: Selection,
    ) -> Self {
        Self {
            range,
            text: text.into(),
            selection,
        }
    }

    /// Leave the text alone and only move the selection.
    pub fn select(selection: Selection) -> Self {
        Self {
            range: selection.start..selection.start,
            text: String::new(),
            selection,
        }
    }

    pub fn changes_text(&self) -> bool {
        !self.text.is_empty() || self.range.start != self.range.end
    }
}

/// Committed buffer and selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    text: String,
    selection: Selection,
}

impl EditorState {
    /// New state with the caret at offset 0.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: Selection::default(),
        }
    }

    /// New state with an explicit selection, clamped to the text and moved
    /// out of any surrogate pair it splits.
    pub fn with_selection(text: impl Into<String>, selection: Selection) -> Self {
        let text = text.into();
        let selection = selection.snap(&text);
        Self { text, selection }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn len_utf16(&self) -> OffsetUtf16 {
        OffsetUtf16::len_of(&self.text)
    }

    /// Text before `offset`.
    pub fn text_before(&self, offset: OffsetUtf16) -> &str {
        &self.text[..offset.to_byte(&self.text)]
    }

    /// Text from `offset` to the end.
    pub fn text_after(&self, offset: OffsetUtf16) -> &str {
        &self.text[offset.to_byte(&self.text)..]
    }

    pub fn char_before(&self, offset: OffsetUtf16) -> Option<char> {
        self.text_before(offset).chars().next_back()
    }

    pub fn char_after(&self, offset: OffsetUtf16) -> Option<char> {
        self.text_after(offset).chars().next()
    }

    /// Apply `edit`, producing the next state.
    ///
    /// The text is spliced first and the selection is then clamped against the
    /// new text, never the old one.
    pub fn apply(&self, edit: &Edit) -> EditorState {
        let start = edit.range.start.to_byte(&self.text);
        let end = edit.range.end.to_byte(&self.text).max(start);

        let mut text = String::with_capacity(self.text.len() + edit.text.len());
        text.push_str(&self.text[..start]);
        text.push_str(&edit.text);
        text.push_str(&self.text[end..]);

        EditorState::with_selection(text, edit.selection)
    }

    /// Replace the selection without touching the text.
    pub fn select(&self, selection: Selection) -> EditorState {
        EditorState::with_selection(self.text.clone(), selection)
    }
}
