// Application state management

use crate::nav::{Action, Controller, NavError, ScreenId};
use crate::profile::{ProfileDraft, ProfileField};
use crate::ui::focus::FormFocus;
use ratatui::layout::Rect;

/// What a mouse click on a recorded area does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Action(Action),
    Field(ProfileField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub area: Rect,
    pub target: HitTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitConfirmationState {
    pub filled_fields: usize,
}

/// Form screen state. Thrown away whenever the form is entered again.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub draft: ProfileDraft,
    pub focus: FormFocus,
    /// Cursor position in chars within the focused field
    pub cursor_pos: usize,
}

impl FormState {
    fn focused_value(&self) -> Option<&str> {
        self.focus.field().map(|f| self.draft.value(f))
    }

    fn focused_len(&self) -> usize {
        self.focused_value().map_or(0, |v| v.chars().count())
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.cursor_to_end();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
        self.cursor_to_end();
    }

    pub fn focus_field(&mut self, field: ProfileField) {
        self.focus = field.into();
        self.cursor_to_end();
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor_pos = self.focused_len();
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.focused_len());
    }

    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let value = self.draft.value_mut(field);
        let chars: Vec<char> = value.chars().collect();
        let pos = self.cursor_pos.min(chars.len());
        let mut new_string: String = chars.iter().take(pos).collect();
        new_string.push(c);
        new_string.extend(chars.iter().skip(pos));
        *value = new_string;
        self.cursor_pos = pos + 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if self.cursor_pos == 0 {
            return;
        }
        let value = self.draft.value_mut(field);
        let chars: Vec<char> = value.chars().collect();
        let pos = self.cursor_pos.min(chars.len());
        if pos == 0 {
            return;
        }
        let mut new_string: String = chars.iter().take(pos - 1).collect();
        new_string.extend(chars.iter().skip(pos));
        *value = new_string;
        self.cursor_pos = pos - 1;
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let value = self.draft.value_mut(field);
        let chars: Vec<char> = value.chars().collect();
        if self.cursor_pos < chars.len() {
            let mut new_string: String = chars.iter().take(self.cursor_pos).collect();
            new_string.extend(chars.iter().skip(self.cursor_pos + 1));
            *value = new_string;
        }
    }

    /// Delete the word before the cursor, along with any whitespace after it
    pub fn delete_word(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let value = self.draft.value_mut(field);
        let chars: Vec<char> = value.chars().collect();
        let end = self.cursor_pos.min(chars.len());
        let mut new_pos = end;
        while new_pos > 0 && chars[new_pos - 1].is_whitespace() {
            new_pos -= 1;
        }
        while new_pos > 0 && !chars[new_pos - 1].is_whitespace() {
            new_pos -= 1;
        }
        let mut new_string: String = chars.iter().take(new_pos).collect();
        new_string.extend(chars.iter().skip(end));
        *value = new_string;
        self.cursor_pos = new_pos;
    }

    pub fn clear_field(&mut self) {
        if let Some(field) = self.focus.field() {
            self.draft.value_mut(field).clear();
            self.cursor_pos = 0;
        }
    }

    pub fn filled_fields(&self) -> usize {
        ProfileField::ALL
            .iter()
            .filter(|f| !self.draft.value(**f).is_empty())
            .count()
    }
}

pub struct AppState {
    pub controller: Controller,
    pub form: FormState,
    /// Index into `available_actions()` on button screens
    pub button_focus: usize,
    pub quit_confirmation: Option<QuitConfirmationState>,
    /// Clickable areas from the last draw
    pub hitboxes: Vec<Hitbox>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Controller::new())
    }
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            form: FormState::default(),
            button_focus: 0,
            quit_confirmation: None,
            hitboxes: Vec::new(),
        }
    }

    pub fn current_screen(&self) -> ScreenId {
        self.controller.current()
    }

    /// Actions the user can trigger right now. A profile screen without a
    /// profile renders nothing, so it offers nothing either.
    pub fn available_actions(&self) -> &'static [Action] {
        match self.current_screen() {
            ScreenId::Profile if self.controller.profile().is_none() => &[],
            screen => screen.actions(),
        }
    }

    pub fn focused_action(&self) -> Option<Action> {
        self.available_actions().get(self.button_focus).copied()
    }

    pub fn focus_next_button(&mut self) {
        let count = self.available_actions().len();
        if count > 0 {
            self.button_focus = (self.button_focus + 1) % count;
        }
    }

    pub fn focus_previous_button(&mut self) {
        let count = self.available_actions().len();
        if count > 0 {
            self.button_focus = (self.button_focus + count - 1) % count;
        }
    }

    /// Run `action` against the controller. Submit freezes the form draft.
    pub fn perform(&mut self, action: Action) -> Result<ScreenId, NavError> {
        if !self.available_actions().contains(&action) {
            return Err(NavError::Unavailable {
                screen: self.current_screen(),
                action,
            });
        }

        let to = match action {
            Action::Submit => {
                let profile = self.form.draft.submit();
                self.controller.submit(profile)?
            }
            other => self.controller.dispatch(other)?,
        };

        self.enter_screen(to);
        Ok(to)
    }

    fn enter_screen(&mut self, screen: ScreenId) {
        self.button_focus = 0;
        // Old rects belong to the previous screen until the next draw
        self.hitboxes.clear();
        if screen == ScreenId::Form {
            self.form = FormState::default();
        }
    }

    /// Returns true when the app should exit now; otherwise a confirmation is pending.
    pub fn request_quit(&mut self) -> bool {
        if self.current_screen() == ScreenId::Form && !self.form.draft.is_blank() {
            self.quit_confirmation = Some(QuitConfirmationState {
                filled_fields: self.form.filled_fields(),
            });
            return false;
        }
        true
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.hitboxes
            .iter()
            .find(|hb| {
                x >= hb.area.x
                    && x < hb.area.x + hb.area.width
                    && y >= hb.area.y
                    && y < hb.area.y + hb.area.height
            })
            .map(|hb| hb.target)
    }
}
