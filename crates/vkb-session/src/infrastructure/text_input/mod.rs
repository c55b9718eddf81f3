//! In-memory text field the keyboard can type into.
//!
//! Caret and selection are counted in `char`s, not bytes, so layouts with
//! non-ASCII glyphs (`é`, `ß`, Cyrillic) edit correctly.

use std::ops::Range;

use crate::application::host::InputTarget;

/// A text field value with caret and selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    value: String,
    /// Selection as a char range; empty when there is only a caret.
    selection: Range<usize>,
    multiline: bool,
}

impl TextBuffer {
    /// An empty single-line field.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty multi-line field.
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// A single-line field holding `value`, caret at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let end = value.chars().count();
        Self {
            value,
            selection: end..end,
            multiline: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.selection.end
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Selects `start..end`, clamped to the value and reordered if reversed.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.char_count();
        let (start, end) = (start.min(len), end.min(len));
        self.selection = start.min(end)..start.max(end);
    }

    pub fn set_caret(&mut self, position: usize) {
        self.select(position, position);
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(offset, _)| offset)
    }

    fn replace_chars(&mut self, range: Range<usize>, text: &str) {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        self.value.replace_range(start..end, text);
        let caret = range.start + text.chars().count();
        self.selection = caret..caret;
    }
}

impl InputTarget for TextBuffer {
    fn insert_text(&mut self, text: &str) {
        self.replace_chars(self.selection(), text);
    }

    fn delete_backward(&mut self) {
        let selection = self.selection();
        if !selection.is_empty() {
            self.replace_chars(selection, "");
        } else if selection.start > 0 {
            self.replace_chars(selection.start - 1..selection.start, "");
        }
    }

    fn is_multiline(&self) -> bool {
        self.multiline
    }
}
