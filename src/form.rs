use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};
use tracing::{debug, info};

use crate::event::FormEvent;
use crate::focus::{self, Focus};
use crate::layout::{self, FieldBox, FormLayout};
use crate::text_field::{Field, TextInput};

const USERNAME_TITLE: &str = "Username";
const PASSWORD_TITLE: &str = "Password";
const FIELD_CHAR_LIMIT: usize = 64;
/// Display width of each field. Matches the widest box, so the box width
/// clips it on narrower viewports.
const FIELD_WIDTH: usize = 50;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// The login form: two fields, which one has focus, the viewport it is laid
/// out in, and whether the user has submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    username: TextInput,
    password: TextInput,
    focus: Focus,
    width: u16,
    height: u16,
    submitted: bool,
    layout: FormLayout,
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

impl LoginForm {
    pub fn new(width: u16, height: u16, mask: char) -> Self {
        let mut form = Self {
            username: TextInput::new(USERNAME_TITLE)
                .with_width(FIELD_WIDTH)
                .with_char_limit(FIELD_CHAR_LIMIT),
            password: TextInput::new(PASSWORD_TITLE)
                .masked(mask)
                .with_width(FIELD_WIDTH)
                .with_char_limit(FIELD_CHAR_LIMIT),
            focus: Focus::Username,
            width,
            height,
            submitted: false,
            layout: FormLayout::default(),
        };
        form.focus.apply(&mut form.username, &mut form.password);
        form
    }

    /// Start with the username field already filled in.
    pub fn with_username(mut self, username: &str) -> Self {
        self.username.set_value(username);
        self
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    fn visible_field_width(&self) -> usize {
        usize::from(self.layout.box_width(self.width))
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus != self.focus {
            debug!(from = ?self.focus, to = ?focus, index = focus.index(), "focus changed");
        }
        self.focus = focus;
        self.focus.apply(&mut self.username, &mut self.password);
    }

    /// Which field a pointer press on `row` lands on. Heights come from the
    /// boxes in their unforced, blurred shape so the answer does not depend
    /// on which field is focused.
    fn hit_test(&self, row: u16) -> Option<Focus> {
        let visible = self.visible_field_width();
        let username = layout::field_content(USERNAME_TITLE, self.username.view(visible));
        let password = layout::field_content(PASSWORD_TITLE, self.password.view(visible));
        focus::hit_test(
            row,
            layout::natural_height(&username),
            layout::natural_height(&password),
        )
    }

    /// Apply one event. Events the form consumes (focus keys, quit, submit,
    /// pointer, resize) never reach a field; everything else goes to the
    /// focused one. Once submitted, only quit and resize have any effect.
    pub fn dispatch(&mut self, event: FormEvent) -> Control {
        match event {
            FormEvent::Resize { width, height } => {
                self.width = width;
                self.height = height;
            }
            FormEvent::Key(key) if is_quit_key(&key) => {
                info!(submitted = self.submitted, "quit requested");
                return Control::Quit;
            }
            _ if self.submitted => {}
            FormEvent::Key(key) if focus::is_toggle_key(&key) => {
                self.set_focus(self.focus.toggled());
            }
            FormEvent::Key(key) if key.code == KeyCode::Enter => {
                self.submitted = true;
                info!(
                    username_len = self.username.value().chars().count(),
                    password_len = self.password.value().chars().count(),
                    "form submitted"
                );
            }
            FormEvent::Pointer(pointer) => {
                if pointer.is_left_press() {
                    debug!(column = pointer.column, row = pointer.row, "pointer press");
                    if let Some(target) = self.hit_test(pointer.row) {
                        self.set_focus(target);
                    }
                }
            }
            FormEvent::Key(_) | FormEvent::Tick => {
                self.focus
                    .route(&mut self.username, &mut self.password)
                    .handle_event(&event);
            }
        }
        Control::Continue
    }

    /// The completion screen. Only the password's length is shown.
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!("Username: {}", self.username.value()),
            format!("Password length: {}", self.password.value().chars().count()),
        ]
    }

    pub fn draw(&self, frame: &mut Frame) {
        if self.submitted {
            let lines: Vec<Line> = self.summary_lines().into_iter().map(Line::from).collect();
            frame.render_widget(Paragraph::new(lines), frame.area());
            return;
        }

        let box_width = self.layout.box_width(self.width);
        let box_height = self.layout.box_height(self.height);
        let visible = self.visible_field_width();
        let boxes = vec![
            FieldBox {
                content: layout::field_content(USERNAME_TITLE, self.username.view(visible)),
                focused: self.username.is_focused(),
            },
            FieldBox {
                content: layout::field_content(PASSWORD_TITLE, self.password.view(visible)),
                focused: self.password.is_focused(),
            },
        ];
        let viewport = Rect::new(0, 0, self.width, self.height);
        layout::render_stack(frame, viewport, boxes, box_width, box_height);
    }
}
