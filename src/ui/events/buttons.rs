use super::*;

pub(super) fn handle_button_key(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return state.request_quit(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Down => state.focus_next_button(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Up => state.focus_previous_button(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(action) = state.focused_action() {
                activate(state, action);
            }
        }
        KeyCode::Char(c) => {
            let c = c.to_ascii_lowercase();
            let hit = state
                .available_actions()
                .iter()
                .find(|a| a.hotkey() == Some(c))
                .copied();
            if let Some(action) = hit {
                activate(state, action);
            }
        }
        _ => {}
    }
    false
}
