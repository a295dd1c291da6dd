//! Text field input handling utilities.
//!
//! Common operations for the single-line inputs used by the naming prompts.
//! The cursor is a character index, never a byte offset; every edit converts
//! it to a byte position first so multibyte input cannot land mid-char.

/// Helper for handling text field input operations.
pub struct TextField;

impl TextField {
    /// Byte offset of the character at `cursor`, or the end of the string
    #[inline]
    fn byte_offset(input: &str, cursor: usize) -> usize {
        input
            .char_indices()
            .nth(cursor)
            .map(|(offset, _)| offset)
            .unwrap_or(input.len())
    }

    /// Handle backspace key - delete character before cursor
    #[inline]
    pub fn backspace(input: &mut String, cursor: &mut usize) {
        if *cursor > 0 {
            input.remove(Self::byte_offset(input, *cursor - 1));
            *cursor -= 1;
        }
    }

    /// Handle delete key - delete character at cursor
    #[inline]
    pub fn delete(input: &mut String, cursor: usize) {
        if cursor < input.chars().count() {
            input.remove(Self::byte_offset(input, cursor));
        }
    }

    /// Handle left arrow - move cursor left
    #[inline]
    pub fn left(cursor: &mut usize) {
        if *cursor > 0 {
            *cursor -= 1;
        }
    }

    /// Handle right arrow - move cursor right
    #[inline]
    pub fn right(input: &str, cursor: &mut usize) {
        if *cursor < input.chars().count() {
            *cursor += 1;
        }
    }

    /// Handle home key - move cursor to start
    #[inline]
    pub fn home(cursor: &mut usize) {
        *cursor = 0;
    }

    /// Handle end key - move cursor to end
    #[inline]
    pub fn end(input: &str, cursor: &mut usize) {
        *cursor = input.chars().count();
    }

    /// Handle character input - insert at cursor
    #[inline]
    pub fn insert_char(input: &mut String, cursor: &mut usize, c: char) {
        let offset = Self::byte_offset(input, *cursor);
        input.insert(offset, c);
        *cursor += 1;
    }
}
