use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use zeroize::Zeroize;

use crate::event::FormEvent;

const PLACEHOLDER_STYLE: Style = Style::new().fg(Color::DarkGray);
const CURSOR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// The capability set the form relies on. The form never touches a field's
/// buffer or cursor directly.
pub trait Field {
    fn focus(&mut self);
    fn blur(&mut self);
    fn is_focused(&self) -> bool;
    fn set_value(&mut self, value: &str);
    fn value(&self) -> &str;
    /// Widest the field ever displays, in cells.
    fn width(&self) -> usize;
    /// Single-line view of the field, cursor included when focused. At most
    /// `min(visible_width, width())` cells wide.
    fn view(&self, visible_width: usize) -> Line<'static>;
    /// Interpret an event. Ignored entirely unless focused.
    fn handle_event(&mut self, event: &FormEvent);
}

/// Single-line text entry with optional masking, a placeholder, and a
/// blinking cursor.
#[derive(Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, 0..=value.chars().count()
    cursor: usize,
    placeholder: String,
    mask: Option<char>,
    focused: bool,
    width: usize,
    char_limit: Option<usize>,
    cursor_visible: bool,
}

impl TextInput {
    pub fn new(placeholder: &str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.to_string(),
            mask: None,
            focused: false,
            width: 30,
            char_limit: None,
            cursor_visible: true,
        }
    }

    pub fn masked(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    pub fn is_masked(&self) -> bool {
        self.mask.is_some()
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_pos(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, c: char) {
        if self.char_limit.is_some_and(|limit| self.char_len() >= limit) {
            return;
        }
        let at = self.byte_pos(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.char_len(),
            KeyCode::Char('u') if ctrl => {
                let at = self.byte_pos(self.cursor);
                self.value.replace_range(..at, "");
                self.cursor = 0;
            }
            KeyCode::Char('k') if ctrl => {
                let at = self.byte_pos(self.cursor);
                self.value.truncate(at);
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert(c)
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_pos(self.cursor);
                    self.value.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.char_len() {
                    let at = self.byte_pos(self.cursor);
                    self.value.remove(at);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_len(),
            _ => return,
        }
        self.cursor_visible = true;
    }

    fn display_chars(&self) -> Vec<char> {
        match self.mask {
            Some(m) => std::iter::repeat(m).take(self.char_len()).collect(),
            None => self.value.chars().collect(),
        }
    }

    fn shows_cursor(&self) -> bool {
        self.focused && self.cursor_visible
    }

    fn placeholder_view(&self, width: usize) -> Line<'static> {
        let mut chars = self.placeholder.chars().take(width);
        if !self.shows_cursor() {
            return Line::from(Span::styled(chars.collect::<String>(), PLACEHOLDER_STYLE));
        }
        let first = chars.next().unwrap_or(' ');
        Line::from(vec![
            Span::styled(first.to_string(), CURSOR_STYLE),
            Span::styled(chars.collect::<String>(), PLACEHOLDER_STYLE),
        ])
    }
}

impl Field for TextInput {
    fn focus(&mut self) {
        self.focused = true;
        self.cursor_visible = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_value(&mut self, value: &str) {
        self.value.zeroize();
        self.value = match self.char_limit {
            Some(limit) => value.chars().take(limit).collect(),
            None => value.to_string(),
        };
        self.cursor = self.char_len();
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn width(&self) -> usize {
        self.width
    }

    fn view(&self, visible_width: usize) -> Line<'static> {
        let width = visible_width.min(self.width()).max(1);
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view(width);
        }

        let chars = self.display_chars();
        // Scroll so the cursor stays visible. A drawn cursor may sit one past
        // the end and needs its own cell.
        let cursor_cells = if self.shows_cursor() { 1 } else { 0 };
        let start = (self.cursor + cursor_cells).saturating_sub(width);
        let end = chars.len().min(start + width);
        let visible = |from: usize, to: usize| -> String {
            chars[from.min(to)..to].iter().collect()
        };

        if !self.shows_cursor() {
            return Line::from(visible(start, end));
        }

        let under_cursor = chars.get(self.cursor).copied().unwrap_or(' ');
        let after_start = (self.cursor + 1).min(end);
        Line::from(vec![
            Span::raw(visible(start, self.cursor.min(end))),
            Span::styled(under_cursor.to_string(), CURSOR_STYLE),
            Span::raw(visible(after_start, end)),
        ])
    }

    fn handle_event(&mut self, event: &FormEvent) {
        if !self.focused {
            return;
        }
        match event {
            FormEvent::Key(key) => self.handle_key(key),
            FormEvent::Tick => self.cursor_visible = !self.cursor_visible,
            FormEvent::Pointer(_) | FormEvent::Resize { .. } => {}
        }
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.is_masked() { "<redacted>" } else { self.value.as_str() };
        f.debug_struct("TextInput")
            .field("value", &value)
            .field("cursor", &self.cursor)
            .field("placeholder", &self.placeholder)
            .field("focused", &self.focused)
            .field("width", &self.width)
            .finish()
    }
}

impl Drop for TextInput {
    fn drop(&mut self) {
        if self.is_masked() {
            self.value.zeroize();
        }
    }
}
