// Profile intake form

use crate::nav::Action;
use crate::profile::ProfileField;
use crate::ui::{
    components::{render_button, render_text_input},
    constants::PHOTO_BADGE,
    focus::FormFocus,
    state::{AppState, HitTarget, Hitbox},
};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const FORM_WIDTH: u16 = 64;

pub struct FormScreen;

impl FormScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let buf = frame.buffer_mut();

        let [column] = Layout::horizontal([Constraint::Length(area.width.min(FORM_WIDTH))])
            .flex(Flex::Center)
            .areas(area);

        let rows = Layout::vertical([
            Constraint::Length(1), // Photo badge
            Constraint::Length(1),
            Constraint::Length(1), // Name
            Constraint::Length(1),
            Constraint::Length(1), // Location | Age
            Constraint::Length(1),
            Constraint::Length(1), // Student ID
            Constraint::Length(1),
            Constraint::Length(1), // Email
            Constraint::Length(2),
            Constraint::Length(1), // Housing
            Constraint::Length(1),
            Constraint::Length(1), // Food
            Constraint::Length(1),
            Constraint::Length(1), // Major
            Constraint::Length(1),
            Constraint::Length(1), // Physical capabilities
            Constraint::Length(1),
            Constraint::Length(1), // Advisor
            Constraint::Length(2),
            Constraint::Length(1), // Submit
        ])
        .flex(Flex::Center)
        .split(column);

        Paragraph::new(Line::from(Span::styled(
            PHOTO_BADGE,
            Style::default().bg(Color::Gray).fg(Color::White),
        )))
        .alignment(Alignment::Center)
        .render(rows[0], buf);

        let [location, _, age] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(rows[4]);

        let placements = [
            (ProfileField::Name, rows[2]),
            (ProfileField::Location, location),
            (ProfileField::Age, age),
            (ProfileField::StudentId, rows[6]),
            (ProfileField::Email, rows[8]),
            (ProfileField::Housing, rows[10]),
            (ProfileField::Food, rows[12]),
            (ProfileField::Major, rows[14]),
            (ProfileField::PhysicalCapabilities, rows[16]),
            (ProfileField::Advisor, rows[18]),
        ];

        for (field, rect) in placements {
            Self::render_field(state, field, rect, buf);
        }

        let submit_focused = state.form.focus == FormFocus::SubmitButton;
        let drawn = render_button(Action::Submit, submit_focused, rows[20], buf);
        state.hitboxes.push(Hitbox {
            area: drawn,
            target: HitTarget::Action(Action::Submit),
        });
    }

    fn render_field(state: &mut AppState, field: ProfileField, area: Rect, buf: &mut Buffer) {
        let cursor = (state.form.focus.field() == Some(field)).then_some(state.form.cursor_pos);
        render_text_input(
            state.form.draft.value(field),
            field.placeholder(),
            cursor,
            area,
            buf,
        );
        state.hitboxes.push(Hitbox {
            area,
            target: HitTarget::Field(field),
        });
    }
}
