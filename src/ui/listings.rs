// Static job and advisor listings

use crate::ui::{
    components::{render_button_column, wrap_words},
    constants::{ADVISORS, ADVISORS_NOTE, ADVISORS_TITLE, JOB_POSITIONS, JOBS_NOTE, JOBS_TITLE},
    state::AppState,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const LISTING_WIDTH: u16 = 64;
const JOB_COLUMN_GAP: &str = "      ";

/// Job titles as rows of two, padded so the second column lines up.
pub fn job_rows() -> Vec<String> {
    let left_width = JOB_POSITIONS
        .iter()
        .map(|(left, _)| left.chars().count())
        .max()
        .unwrap_or(0);

    JOB_POSITIONS
        .iter()
        .map(|(left, right)| format!("{:<width$}{}{}", left, JOB_COLUMN_GAP, right, width = left_width))
        .collect()
}

pub fn advisor_rows() -> Vec<String> {
    ADVISORS
        .iter()
        .map(|(name, specialty)| format!("{} - {}", name, specialty))
        .collect()
}

pub struct JobsScreen;

impl JobsScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let rows = job_rows();
        let pad_to = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        // Same width on every row so centering keeps the columns aligned
        let entries: Vec<String> = rows
            .into_iter()
            .map(|r| format!("{:<width$}", r, width = pad_to))
            .collect();
        render_listing(frame, area, state, JOBS_TITLE, entries, JOBS_NOTE);
    }
}

pub struct AdvisorsScreen;

impl AdvisorsScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        render_listing(frame, area, state, ADVISORS_TITLE, advisor_rows(), ADVISORS_NOTE);
    }
}

fn render_listing(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    title: &str,
    entries: Vec<String>,
    note: &str,
) {
    let actions = state.available_actions();
    let buf = frame.buffer_mut();

    let width = area.width.min(LISTING_WIDTH);
    let note_lines: Vec<Line> = wrap_words(note, width as usize)
        .into_iter()
        .map(Line::raw)
        .collect();
    let button_rows = (actions.len() as u16 * 2).saturating_sub(1);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);

    let [title_area, _, list_area, _, note_area, _, buttons] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(entries.len() as u16),
        Constraint::Length(2),
        Constraint::Length(note_lines.len() as u16),
        Constraint::Length(3),
        Constraint::Length(button_rows),
    ])
    .flex(Flex::Center)
    .areas(column);

    Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .render(title_area, buf);

    let list: Vec<Line> = entries.into_iter().map(Line::raw).collect();
    Paragraph::new(list)
        .alignment(Alignment::Center)
        .render(list_area, buf);

    Paragraph::new(note_lines)
        .alignment(Alignment::Center)
        .render(note_area, buf);

    render_button_column(
        actions,
        Some(state.button_focus),
        buttons,
        buf,
        &mut state.hitboxes,
    );
}
