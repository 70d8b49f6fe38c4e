// Reusable UI components

use crate::nav::{Action, ScreenId};
use crate::ui::constants::{ACCENT, BACKGROUND, MUTED, TEXT};
use crate::ui::state::{HitTarget, Hitbox};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    fn from_controls(controls: &[(&'static str, &'static str)]) -> Self {
        let mut spans = vec![Span::raw("CONTROLS: ")];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    /// Generic navigation keys plus the screen's own hotkeys.
    pub fn buttons(actions: &[Action]) -> Self {
        let mut spans = vec![Span::raw("CONTROLS: ")];
        let mut push = |hotkey: String, desc: &'static str| {
            if spans.len() > 1 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(desc));
        };

        push("[Tab]".to_string(), "Focus");
        push("[Enter]".to_string(), "Select");
        for action in actions {
            if let Some(key) = action.hotkey() {
                push(format!("[{}]", key), action.label());
            }
        }
        push("[q]".to_string(), "Quit");

        Self {
            content: Line::from(spans),
        }
    }

    pub fn form() -> Self {
        Self::from_controls(&[
            ("[Tab/↑↓]", "Field"),
            ("[←/→]", "Cursor"),
            ("[Ctrl+W]", "Delete Word"),
            ("[Ctrl+U]", "Clear"),
            ("[Ctrl+S]", "Submit"),
            ("[Esc]", "Quit"),
        ])
    }

    pub fn quit_confirmation() -> Self {
        Self::from_controls(&[("[Y]", "Quit"), ("[N/Esc]", "Cancel")])
    }

    pub fn for_screen(screen: ScreenId, actions: &[Action]) -> Self {
        match screen {
            ScreenId::Form => Self::form(),
            _ => Self::buttons(actions),
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray).fg(Color::White))
            .render(area, buf);
    }
}

/// Full-screen page background.
pub fn page_block() -> Block<'static> {
    Block::default().style(Style::default().bg(BACKGROUND).fg(TEXT))
}

pub fn button_text(action: Action) -> String {
    match action.hotkey() {
        Some(key) => format!("[{}] {}", key, action.label()),
        None => format!("[ {} ]", action.label()),
    }
}

pub fn button_width(action: Action) -> u16 {
    button_text(action).chars().count() as u16
}

/// Draw one button centered in `area`; returns the rect actually covered.
pub fn render_button(action: Action, focused: bool, area: Rect, buf: &mut Buffer) -> Rect {
    let style = if focused {
        Style::default().bg(ACCENT).fg(Color::White).bold()
    } else {
        Style::default().fg(ACCENT).bold()
    };

    if area.width == 0 || area.height == 0 {
        return Rect { width: 0, height: 0, ..area };
    }

    let text_width = button_width(action);
    let mut centered_area = Rect { height: 1, ..area };
    if area.width > text_width {
        let padding = (area.width - text_width) / 2;
        centered_area.x += padding;
        centered_area.width = text_width;
    }

    let text = Line::from(Span::styled(button_text(action), style));
    buf.set_line(centered_area.x, centered_area.y, &text, centered_area.width);
    centered_area
}

/// Buttons stacked vertically, one blank row apart. Needs `2n - 1` rows.
pub fn render_button_column(
    actions: &[Action],
    focused: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
    hitboxes: &mut Vec<Hitbox>,
) {
    for (i, action) in actions.iter().enumerate() {
        let y = area.y + (i as u16) * 2;
        if y >= area.y + area.height {
            break;
        }
        let row = Rect { y, height: 1, ..area };
        let drawn = render_button(*action, focused == Some(i), row, buf);
        hitboxes.push(Hitbox {
            area: drawn,
            target: HitTarget::Action(*action),
        });
    }
}

/// Buttons side by side, the row split evenly between them.
pub fn render_button_row(
    actions: &[Action],
    focused: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
    hitboxes: &mut Vec<Hitbox>,
) {
    if actions.is_empty() {
        return;
    }
    let slot = area.width / actions.len() as u16;
    for (i, action) in actions.iter().enumerate() {
        let cell = Rect {
            x: area.x + slot * i as u16,
            y: area.y,
            width: slot,
            height: 1,
        };
        let drawn = render_button(*action, focused == Some(i), cell, buf);
        hitboxes.push(Hitbox {
            area: drawn,
            target: HitTarget::Action(*action),
        });
    }
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// Insert a visible cursor marker at `cursor_pos` (in chars)
fn insert_cursor(text: &str, cursor_pos: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let pos = cursor_pos.min(chars.len());
    let before: String = chars.iter().take(pos).collect();
    let after: String = chars.iter().skip(pos).collect();
    format!("{}|{}", before, after)
}

// The `width` chars of `text` that keep char `cursor` in view, scrolled as little as possible
fn cursor_window(text: &str, cursor: usize, width: usize) -> String {
    let start = (cursor + 1).saturating_sub(width);
    text.chars().skip(start).take(width).collect()
}

/// Single-line text input. `cursor` is `Some` only on the focused input.
pub fn render_text_input(
    value: &str,
    placeholder: &str,
    cursor: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    let field_style = if cursor.is_some() {
        Style::default().bg(Color::White).fg(TEXT)
    } else {
        Style::default().bg(Color::Rgb(0xEE, 0xE8, 0xB6)).fg(TEXT)
    };

    let line = match cursor {
        Some(_) if value.is_empty() => Line::from(vec![
            Span::styled("|", Style::default().fg(ACCENT).bold()),
            Span::styled(placeholder.to_string(), Style::default().fg(MUTED)),
        ]),
        Some(pos) => Line::from(Span::raw(cursor_window(
            &insert_cursor(value, pos),
            pos,
            area.width as usize,
        ))),
        None if value.is_empty() => {
            Line::from(Span::styled(placeholder.to_string(), Style::default().fg(MUTED)))
        }
        None => Line::from(Span::raw(value.to_string())),
    };

    Paragraph::new(line).style(field_style).render(area, buf);
}
