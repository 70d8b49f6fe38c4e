// Popup shown when quitting would throw away form input

use super::constants::{ACCENT, BACKGROUND, GOLD, MUTED, TEXT};
use crate::ui::state::QuitConfirmationState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const WIDTH: u16 = 46;
const HEIGHT: u16 = 7;

pub struct QuitModal;

impl QuitModal {
    pub fn render(frame: &mut Frame, state: &QuitConfirmationState) {
        let area = frame.area();
        let [row] = Layout::vertical([Constraint::Length(HEIGHT.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(row);

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(GOLD))
            .title(Line::from(" Leave SJSUConnect? ").centered())
            .style(Style::default().bg(BACKGROUND).fg(TEXT));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let key = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let body = vec![
            Line::from(""),
            Line::from(pending_text(state.filled_fields)),
            Line::styled("Quitting will discard it.", Style::default().fg(MUTED)),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Y]", key),
                Span::raw(" Quit   "),
                Span::styled("[N]", key),
                Span::raw(" Keep editing"),
            ]),
        ];

        frame.render_widget(Paragraph::new(body).alignment(Alignment::Center), inner);
    }
}

fn pending_text(filled: usize) -> String {
    match filled {
        1 => "1 form field has unsubmitted text.".to_string(),
        n => format!("{} form fields have unsubmitted text.", n),
    }
}
