//! Selection, filter and text-input state for the browser view

use std::sync::atomic::{AtomicU32, Ordering};

use compact_str::CompactString;

/// Longest name the rename input accepts, in characters.
pub const MAX_INPUT_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RedrawFlag {
    Main = 1,
    StatusBar = 2,
    Overlay = 4,
    All = 7,
}

impl RedrawFlag {
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }
}

/// Single-line editable text with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: CompactString,
    // Measured in chars, not bytes.
    cursor: usize,
}

impl TextInput {
    pub fn with_value(text: &str) -> Self {
        let mut input = Self::default();
        input.set_value(text);
        input
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the text, truncated to [`MAX_INPUT_CHARS`], cursor at the end.
    pub fn set_value(&mut self, text: &str) {
        self.value = text.chars().take(MAX_INPUT_CHARS).collect();
        self.cursor = self.char_len();
    }

    pub fn insert(&mut self, ch: char) -> bool {
        if self.char_len() >= MAX_INPUT_CHARS {
            return false;
        }
        let byte_pos = self.byte_offset(self.cursor);
        let mut text = self.value.to_string();
        text.insert(byte_pos, ch);
        self.value = text.into();
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        self.remove_at_cursor();
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    fn remove_at_cursor(&mut self) {
        let byte_pos = self.byte_offset(self.cursor);
        let mut text = self.value.to_string();
        text.remove(byte_pos);
        self.value = text.into();
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(pos, _)| pos)
    }
}

#[derive(Debug)]
pub struct UIState {
    pub redraw_flags: AtomicU32,

    /// Index into the *visible* rows.
    pub selected: usize,

    pub filter: TextInput,
    pub filter_editing: bool,

    /// Rows moved by PageUp/PageDown; updated from the last rendered height.
    pub page_size: usize,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

impl UIState {
    pub fn new() -> Self {
        Self {
            redraw_flags: AtomicU32::new(RedrawFlag::All.bits()),
            selected: 0,
            filter: TextInput::default(),
            filter_editing: false,
            page_size: 10,
        }
    }

    #[inline]
    pub fn request_redraw(&self, flag: RedrawFlag) {
        self.redraw_flags.fetch_or(flag.bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_flags.load(Ordering::Relaxed) != 0
    }

    #[inline]
    pub fn clear_redraw(&self) {
        self.redraw_flags.store(0, Ordering::Relaxed);
    }

    pub fn clear_filter(&mut self) {
        self.filter = TextInput::default();
        self.filter_editing = false;
        self.selected = 0;
        self.request_redraw(RedrawFlag::All);
    }

    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.request_redraw(RedrawFlag::Main);
    }

    /// Moves the selection by `delta` rows, clamped to `0..len`.
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected.saturating_add_signed(delta);
        self.selected = target.min(len - 1);
        self.request_redraw(RedrawFlag::Main);
    }

    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_edits_at_char_cursor() {
        let mut input = TextInput::with_value("caf");
        input.insert('é');
        assert_eq!(input.value(), "café");

        input.move_home();
        input.insert('>');
        input.move_end();
        assert!(input.backspace());
        assert_eq!(input.value(), ">caf");

        input.move_home();
        assert!(input.delete());
        assert_eq!(input.value(), "caf");
        assert!(!input.backspace());
    }

    #[test]
    fn input_caps_length() {
        let long = "a".repeat(MAX_INPUT_CHARS + 20);
        let mut input = TextInput::with_value(&long);
        assert_eq!(input.char_len(), MAX_INPUT_CHARS);
        assert!(!input.insert('b'));
    }

    #[test]
    fn selection_is_clamped() {
        let mut ui = UIState::new();
        ui.move_selection(5, 3);
        assert_eq!(ui.selected, 2);
        ui.move_selection(-10, 3);
        assert_eq!(ui.selected, 0);
        ui.move_selection(1, 0);
        assert_eq!(ui.selected, 0);
    }

    #[test]
    fn redraw_flags_clear() {
        let ui = UIState::new();
        assert!(ui.needs_redraw());
        ui.clear_redraw();
        assert!(!ui.needs_redraw());
        ui.request_redraw(RedrawFlag::StatusBar);
        assert!(ui.needs_redraw());
    }
}
