// Integration tests for the profile form's text editing and focus handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sjsuconnect::profile::ProfileField;
use sjsuconnect::ui::events::handle_key;
use sjsuconnect::ui::focus::FormFocus;
use sjsuconnect::ui::state::AppState;
use sjsuconnect::{Controller, ScreenId};

use crate::common::helpers::*;

fn form_state() -> AppState {
    AppState::new(Controller::starting_at(ScreenId::Form))
}

fn name(state: &AppState) -> &str {
    state.form.draft.value(ProfileField::Name)
}

// ============================================================================
// Focus navigation
// ============================================================================

#[test]
fn test_focus_navigation_cycles_forward() {
    let mut focus = FormFocus::Name;
    for i in 0..20 {
        focus = focus.next();
        if focus == FormFocus::Name {
            assert_eq!(i, 10, "expected 11 focus stops");
            return;
        }
    }
    panic!("Focus navigation did not cycle back to Name. Last focus: {:?}", focus);
}

#[test]
fn test_focus_navigation_cycles_backward() {
    let mut focus = FormFocus::Name;
    for i in 0..20 {
        focus = focus.previous();
        if focus == FormFocus::Name {
            assert_eq!(i, 10, "expected 11 focus stops");
            return;
        }
    }
    panic!("Focus navigation did not cycle back to Name. Last focus: {:?}", focus);
}

#[test]
fn test_next_then_previous_is_identity() {
    let mut focus = FormFocus::Name;
    for _ in 0..11 {
        assert_eq!(focus.next().previous(), focus);
        focus = focus.next();
    }
}

#[test]
fn test_focus_order_matches_field_order() {
    let mut focus = FormFocus::Name;
    for field in ProfileField::ALL {
        assert_eq!(focus.field(), Some(field));
        focus = focus.next();
    }
    assert_eq!(focus, FormFocus::SubmitButton);
    assert_eq!(focus.field(), None);
}

#[test]
fn test_arrow_keys_move_between_fields() {
    let mut state = form_state();
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Down);
    assert_eq!(state.form.focus, FormFocus::Age);
    press(&mut state, KeyCode::Up);
    assert_eq!(state.form.focus, FormFocus::Location);
    press(&mut state, KeyCode::BackTab);
    press(&mut state, KeyCode::BackTab);
    assert_eq!(state.form.focus, FormFocus::SubmitButton);
}

#[test]
fn test_text_lands_in_focused_field_only() {
    let mut state = form_state();
    type_text(&mut state, "Ana");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "San Jose");

    assert_eq!(name(&state), "Ana");
    assert_eq!(state.form.draft.value(ProfileField::Location), "San Jose");
    assert_eq!(state.form.draft.value(ProfileField::Age), "");
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_cursor_movement_and_insert() {
    let mut state = form_state();
    type_text(&mut state, "An");
    press(&mut state, KeyCode::Home);
    type_text(&mut state, "J");
    press(&mut state, KeyCode::End);
    type_text(&mut state, "a");
    assert_eq!(name(&state), "JAna");

    press(&mut state, KeyCode::Left);
    press(&mut state, KeyCode::Left);
    press(&mut state, KeyCode::Delete);
    assert_eq!(name(&state), "JAa");
}

#[test]
fn test_backspace_and_word_delete() {
    let mut state = form_state();
    type_text(&mut state, "Computer Science");
    press(&mut state, KeyCode::Backspace);
    assert_eq!(name(&state), "Computer Scienc");

    handle_key(
        KeyEvent::new(KeyCode::Backspace, KeyModifiers::CONTROL),
        &mut state,
    );
    assert_eq!(name(&state), "Computer ");

    handle_key(ctrl('w'), &mut state);
    assert_eq!(name(&state), "");
}

#[test]
fn test_ctrl_u_clears_field() {
    let mut state = form_state();
    type_text(&mut state, "something");
    handle_key(ctrl('u'), &mut state);
    assert_eq!(name(&state), "");
    assert_eq!(state.form.cursor_pos, 0);
}

#[test]
fn test_shifted_and_unicode_characters_are_kept() {
    let mut state = form_state();
    handle_key(
        KeyEvent::new(KeyCode::Char('Á'), KeyModifiers::SHIFT),
        &mut state,
    );
    type_text(&mut state, "ngel Nuñez");
    assert_eq!(name(&state), "Ángel Nuñez");
}

#[test]
fn test_alt_chords_are_not_typed() {
    let mut state = form_state();
    handle_key(
        KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT),
        &mut state,
    );
    assert_eq!(name(&state), "");
}

#[test]
fn test_clicking_a_field_focuses_it() {
    use sjsuconnect::ui::state::HitTarget;

    let mut state = form_state();
    state.form.draft.set(ProfileField::Major, "Art");
    render_to_string(&mut state);

    let (x, y) = hitbox_origin(&state, HitTarget::Field(ProfileField::Major));
    click(&mut state, x, y);
    assert_eq!(state.form.focus, FormFocus::Major);
    assert_eq!(state.form.cursor_pos, 3);
}

#[test]
fn test_returning_to_form_starts_fresh() {
    let mut state = AppState::default();
    submit_from_welcome(&mut state, &sample_profile());
    press(&mut state, KeyCode::Char('h'));
    press(&mut state, KeyCode::Char('n'));

    assert!(state.form.draft.is_blank());
    assert_eq!(state.form.focus, FormFocus::Name);
    assert_eq!(state.form.cursor_pos, 0);
}
