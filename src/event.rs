use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

/// What the pointer did. Scroll and other exotic kinds are dropped during
/// conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Press,
    Release,
    Motion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub button: Option<MouseButton>,
    pub action: PointerAction,
    pub column: u16,
    pub row: u16,
}

impl PointerEvent {
    #[cfg(test)]
    pub fn left_press(column: u16, row: u16) -> Self {
        Self {
            button: Some(MouseButton::Left),
            action: PointerAction::Press,
            column,
            row,
        }
    }

    pub fn is_left_press(&self) -> bool {
        self.button == Some(MouseButton::Left) && self.action == PointerAction::Press
    }
}

/// Every input the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Key(KeyEvent),
    Pointer(PointerEvent),
    Resize { width: u16, height: u16 },
    /// Periodic cursor-blink tick, generated by the event loop when idle.
    Tick,
}

impl FormEvent {
    /// Map a raw terminal event. Returns None for events the form never
    /// looks at (focus changes, paste, key releases, scroll).
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(FormEvent::Key(key)),
            Event::Key(_) => None,
            Event::Mouse(mouse) => pointer_from_mouse(mouse).map(FormEvent::Pointer),
            Event::Resize(width, height) => Some(FormEvent::Resize { width, height }),
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
        }
    }
}

fn pointer_from_mouse(mouse: MouseEvent) -> Option<PointerEvent> {
    let (button, action) = match mouse.kind {
        MouseEventKind::Down(b) => (Some(b), PointerAction::Press),
        MouseEventKind::Up(b) => (Some(b), PointerAction::Release),
        MouseEventKind::Drag(b) => (Some(b), PointerAction::Motion),
        MouseEventKind::Moved => (None, PointerAction::Motion),
        _ => return None,
    };
    Some(PointerEvent {
        button,
        action,
        column: mouse.column,
        row: mouse.row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn key_press_is_kept() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(FormEvent::from_terminal(Event::Key(key)), Some(FormEvent::Key(key)));
    }

    #[test]
    fn key_release_is_dropped() {
        let key = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(FormEvent::from_terminal(Event::Key(key)), None);
    }

    #[test]
    fn left_down_becomes_left_press() {
        let ev = FormEvent::from_terminal(mouse(MouseEventKind::Down(MouseButton::Left), 3, 7));
        match ev {
            Some(FormEvent::Pointer(p)) => {
                assert!(p.is_left_press());
                assert_eq!((p.column, p.row), (3, 7));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn release_and_motion_are_not_presses() {
        for kind in [
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Drag(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::Down(MouseButton::Right),
        ] {
            match FormEvent::from_terminal(mouse(kind, 0, 0)) {
                Some(FormEvent::Pointer(p)) => assert!(!p.is_left_press()),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn scroll_is_dropped() {
        assert_eq!(FormEvent::from_terminal(mouse(MouseEventKind::ScrollDown, 0, 0)), None);
    }

    #[test]
    fn resize_carries_dimensions() {
        assert_eq!(
            FormEvent::from_terminal(Event::Resize(100, 30)),
            Some(FormEvent::Resize { width: 100, height: 30 })
        );
    }

    #[test]
    fn paste_and_focus_are_dropped() {
        assert_eq!(FormEvent::from_terminal(Event::Paste("x".into())), None);
        assert_eq!(FormEvent::from_terminal(Event::FocusLost), None);
    }
}
