// Welcome splash and About page

use crate::ui::{
    components::{render_button_column, wrap_words},
    constants::{ABOUT_PARAGRAPHS, ACCENT, APP_TITLE, GOLD, WELCOME_BANNER},
    state::AppState,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

const ABOUT_TEXT_WIDTH: u16 = 72;

fn title_line() -> Line<'static> {
    Line::styled(
        APP_TITLE,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )
}

fn button_rows(count: usize) -> u16 {
    (count as u16 * 2).saturating_sub(1)
}

pub struct WelcomeScreen;

impl WelcomeScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let actions = state.available_actions();
        let buf = frame.buffer_mut();

        let [banner, _, title, _, buttons] = Layout::vertical([
            Constraint::Length(WELCOME_BANNER.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(button_rows(actions.len())),
        ])
        .flex(Flex::Center)
        .areas(area);

        let banner_lines: Vec<Line> = WELCOME_BANNER.iter().map(|l| Line::raw(*l)).collect();
        Paragraph::new(banner_lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            .render(banner, buf);

        Paragraph::new(title_line())
            .alignment(Alignment::Center)
            .render(title, buf);

        render_button_column(
            actions,
            Some(state.button_focus),
            buttons,
            buf,
            &mut state.hitboxes,
        );
    }
}

pub struct AboutScreen;

impl AboutScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let actions = state.available_actions();
        let buf = frame.buffer_mut();

        let width = area.width.min(ABOUT_TEXT_WIDTH);
        let mut text: Vec<Line> = Vec::new();
        for (i, paragraph) in ABOUT_PARAGRAPHS.iter().enumerate() {
            if i > 0 {
                text.push(Line::raw(""));
            }
            text.extend(wrap_words(paragraph, width as usize).into_iter().map(Line::raw));
        }

        let [title, _, body, _, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(text.len() as u16),
            Constraint::Length(3),
            Constraint::Length(button_rows(actions.len())),
        ])
        .flex(Flex::Center)
        .areas(area);

        Paragraph::new(title_line())
            .alignment(Alignment::Center)
            .render(title, buf);

        let [body] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(body);
        Paragraph::new(text).render(body, buf);

        render_button_column(
            actions,
            Some(state.button_focus),
            buttons,
            buf,
            &mut state.hitboxes,
        );
    }
}
