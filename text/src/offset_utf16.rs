use std::ops::Add;

/// An offset measured in UTF-16 code units.
///
/// Native text inputs report `selectionStart`/`selectionEnd` in these units, so
/// every cursor the editor stores uses them. Conversion to byte offsets happens
/// only at the point where a `str` is sliced.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetUtf16(pub usize);

impl OffsetUtf16 {
    /// Length of `text` in UTF-16 code units.
    pub fn len_of(text: &str) -> Self {
        OffsetUtf16(text.chars().map(char::len_utf16).sum())
    }

    /// Byte offset into `text` for this code-unit offset.
    ///
    /// Offsets past the end clamp to `text.len()`. An offset that falls between
    /// the two halves of a surrogate pair rounds forward to the next char boundary.
    pub fn to_byte(self, text: &str) -> usize {
        let mut units = 0;
        for (idx, ch) in text.char_indices() {
            if units >= self.0 {
                return idx;
            }
            units += ch.len_utf16();
        }
        text.len()
    }

    /// Code-unit offset for a byte offset into `text`, clamped to the text length.
    pub fn from_byte(text: &str, byte: usize) -> Self {
        let byte = byte.min(text.len());
        OffsetUtf16(
            text.char_indices()
                .take_while(|(idx, _)| *idx < byte)
                .map(|(_, ch)| ch.len_utf16())
                .sum(),
        )
    }

    /// Round forward to the nearest char boundary of `text`, clamped to its
    /// length. An offset between the halves of a surrogate pair moves past it.
    pub fn snap(self, text: &str) -> Self {
        Self::from_byte(text, self.to_byte(text))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        OffsetUtf16(self.0.saturating_sub(other.0))
    }
}

impl Add for OffsetUtf16 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        OffsetUtf16(self.0 + other.0)
    }
}
