use crossterm::event::{KeyCode, KeyEvent};

use crate::text_field::Field;

/// Which of the two fields receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Username,
    Password,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Username => Focus::Password,
            Focus::Password => Focus::Username,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Focus::Username => 0,
            Focus::Password => 1,
        }
    }

    /// Focus the field this value names and blur the other, so exactly one
    /// is focused afterwards.
    pub fn apply<F: Field>(self, username: &mut F, password: &mut F) {
        match self {
            Focus::Username => {
                password.blur();
                username.focus();
            }
            Focus::Password => {
                username.blur();
                password.focus();
            }
        }
    }

    /// The field that should receive forwarded events.
    pub fn route<'a, F: Field>(self, username: &'a mut F, password: &'a mut F) -> &'a mut F {
        match self {
            Focus::Username => username,
            Focus::Password => password,
        }
    }
}

/// Up/Down and Tab/Shift-Tab flip focus between the two fields.
pub fn is_toggle_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab)
}

/// Inclusive row span a field box occupies on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub top: u16,
    pub bottom: u16,
}

impl HitRegion {
    pub fn contains(&self, row: u16) -> bool {
        row >= self.top && row <= self.bottom
    }
}

/// Row spans for the username and password boxes given their rendered
/// heights. The username box starts at row 1 and one row separates the two.
pub fn hit_regions(username_height: u16, password_height: u16) -> (HitRegion, HitRegion) {
    let username = HitRegion {
        top: 1,
        bottom: username_height,
    };
    let password_top = username_height.saturating_add(2);
    let password = HitRegion {
        top: password_top,
        bottom: password_top.saturating_add(password_height),
    };
    (username, password)
}

/// Map a pointer row onto a field. Columns are not checked.
pub fn hit_test(row: u16, username_height: u16, password_height: u16) -> Option<Focus> {
    let (username, password) = hit_regions(username_height, password_height);
    if username.contains(row) {
        Some(Focus::Username)
    } else if password.contains(row) {
        Some(Focus::Password)
    } else {
        None
    }
}
