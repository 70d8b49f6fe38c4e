// Read-only profile summary

use crate::ui::{
    components::{render_button_column, render_button_row, wrap_words},
    constants::{PHOTO_BADGE, PROFILE_THANKS},
    state::AppState,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SUMMARY_WIDTH: u16 = 72;

/// Buttons on the shared row; the rest go underneath.
const ROW_BUTTONS: usize = 2;

pub struct ProfileScreen;

impl ProfileScreen {
    /// Renders nothing until a profile has been submitted.
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let Some(profile) = state.controller.profile() else {
            return;
        };
        let actions = state.available_actions();
        let buf = frame.buffer_mut();

        let [column] = Layout::horizontal([Constraint::Length(area.width.min(SUMMARY_WIDTH))])
            .flex(Flex::Center)
            .areas(area);

        // Name line stands out, as the largest text on the page
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = profile
            .summary_lines()
            .iter()
            .enumerate()
            .flat_map(|(i, text)| {
                let style = if i == 0 { bold } else { Style::default() };
                wrap_words(text, column.width as usize)
                    .into_iter()
                    .map(move |row| Line::styled(row, style))
            })
            .collect();

        let [badge, _, thanks, _, details, _, button_row, _, below] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(lines.len() as u16),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

        Paragraph::new(Line::from(Span::styled(
            PHOTO_BADGE,
            Style::default().bg(Color::Gray).fg(Color::White),
        )))
        .alignment(Alignment::Center)
        .render(badge, buf);

        Paragraph::new(PROFILE_THANKS)
            .alignment(Alignment::Center)
            .render(thanks, buf);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(details, buf);

        let split = ROW_BUTTONS.min(actions.len());
        let focus = state.button_focus;
        render_button_row(
            &actions[..split],
            (focus < split).then_some(focus),
            button_row,
            buf,
            &mut state.hitboxes,
        );
        render_button_column(
            &actions[split..],
            focus.checked_sub(split),
            below,
            buf,
            &mut state.hitboxes,
        );
    }
}
