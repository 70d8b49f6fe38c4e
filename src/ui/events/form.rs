use super::*;
use crate::ui::focus::FormFocus;

pub(super) fn handle_form_key(key: KeyEvent, state: &mut AppState) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return state.request_quit(),

        KeyCode::Char('s') | KeyCode::Char('S') if ctrl => activate(state, Action::Submit),
        KeyCode::Char('u') | KeyCode::Char('U') if ctrl => state.form.clear_field(),
        KeyCode::Char('w') | KeyCode::Char('W') if ctrl => state.form.delete_word(),
        KeyCode::Backspace if ctrl => state.form.delete_word(),

        KeyCode::Tab | KeyCode::Down => state.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.form.focus_previous(),
        KeyCode::Enter => {
            if state.form.focus == FormFocus::SubmitButton {
                activate(state, Action::Submit);
            } else {
                state.form.focus_next();
            }
        }

        KeyCode::Left => state.form.cursor_left(),
        KeyCode::Right => state.form.cursor_right(),
        KeyCode::Home => state.form.cursor_home(),
        KeyCode::End => state.form.cursor_to_end(),
        KeyCode::Backspace => state.form.backspace(),
        KeyCode::Delete => state.form.delete(),

        KeyCode::Char(' ') if state.form.focus == FormFocus::SubmitButton => {
            activate(state, Action::Submit)
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            state.form.insert_char(c)
        }
        _ => {}
    }
    false
}
