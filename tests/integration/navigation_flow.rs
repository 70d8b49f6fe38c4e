// Integration tests for screen navigation driven by key and mouse input

use crossterm::event::KeyCode;
use sjsuconnect::profile::ProfileField;
use sjsuconnect::ui::state::{AppState, HitTarget};
use sjsuconnect::{Action, Controller, ScreenId};

use crate::common::helpers::*;

// ============================================================================
// Welcome -> Form
// ============================================================================

#[test]
fn test_next_goes_straight_to_empty_form() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('n'));

    assert_eq!(state.current_screen(), ScreenId::Form);
    assert!(state.form.draft.is_blank());
}

#[test]
fn test_about_path_lands_on_empty_form() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('a'));
    assert_eq!(state.current_screen(), ScreenId::About);

    press(&mut state, KeyCode::Enter); // Next is the only button
    assert_eq!(state.current_screen(), ScreenId::Form);
    assert!(state.form.draft.is_blank());
}

#[test]
fn test_enter_activates_focused_button() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Tab);
    assert_eq!(state.focused_action(), Some(Action::Next));
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.current_screen(), ScreenId::Form);
}

#[test]
fn test_hotkeys_for_other_screens_are_ignored() {
    let mut state = AppState::default();
    for c in ['j', 'v', 'b', 'h', 'x'] {
        assert!(!press(&mut state, KeyCode::Char(c)));
    }
    assert_eq!(state.current_screen(), ScreenId::Welcome);
}

#[test]
fn test_uppercase_hotkey_works() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('A'));
    assert_eq!(state.current_screen(), ScreenId::About);
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submitted_values_reach_profile_unmodified() {
    let mut state = AppState::default();
    submit_from_welcome(&mut state, &sample_profile());

    let profile = state.controller.profile().expect("profile stored");
    for (field, text) in sample_profile() {
        assert_eq!(profile.get(field), text, "{:?}", field);
    }
}

#[test]
fn test_empty_submission_is_accepted() {
    let mut state = AppState::default();
    submit_from_welcome(&mut state, &[]);

    let profile = state.controller.profile().unwrap();
    assert_eq!(profile.name, "");
    assert_eq!(profile.advisor, "");
}

#[test]
fn test_second_submission_replaces_first() {
    let mut state = AppState::default();
    submit_from_welcome(&mut state, &sample_profile());

    press(&mut state, KeyCode::Char('h'));
    assert_eq!(state.current_screen(), ScreenId::Welcome);

    submit_from_welcome(&mut state, &[(ProfileField::Name, "Ben")]);

    let profile = state.controller.profile().unwrap();
    assert_eq!(profile.name, "Ben");
    // Nothing carried over from the first submission
    assert_eq!(profile.location, "");
    assert_eq!(profile.major, "");
}

#[test]
fn test_enter_on_submit_button_submits() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('n'));
    type_text(&mut state, "Ana");
    for _ in 0..10 {
        press(&mut state, KeyCode::Enter); // Enter on a field moves to the next one
    }
    assert_eq!(state.current_screen(), ScreenId::Form);

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.current_screen(), ScreenId::Profile);
    assert_eq!(state.controller.profile().unwrap().name, "Ana");
}

// ============================================================================
// Profile, Jobs, Advisors
// ============================================================================

#[test]
fn test_profile_buttons_follow_table() {
    let mut state = AppState::default();
    submit_from_welcome(&mut state, &sample_profile());

    press(&mut state, KeyCode::Char('j'));
    assert_eq!(state.current_screen(), ScreenId::Jobs);
    press(&mut state, KeyCode::Char('b'));
    assert_eq!(state.current_screen(), ScreenId::Profile);

    press(&mut state, KeyCode::Char('v'));
    assert_eq!(state.current_screen(), ScreenId::Advisors);
    press(&mut state, KeyCode::Char('b'));
    assert_eq!(state.current_screen(), ScreenId::Profile);

    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Char('h'));
    assert_eq!(state.current_screen(), ScreenId::Welcome);

    // Profile survives going home
    assert_eq!(state.controller.profile().unwrap().name, "Ana");
}

#[test]
fn test_profile_button_focus_order() {
    let mut state = AppState::default();
    submit_from_welcome(&mut state, &[]);

    assert_eq!(state.focused_action(), Some(Action::Advisors));
    press(&mut state, KeyCode::Right);
    assert_eq!(state.focused_action(), Some(Action::JobPositions));
    press(&mut state, KeyCode::Right);
    assert_eq!(state.focused_action(), Some(Action::BackToHome));
    press(&mut state, KeyCode::Right);
    assert_eq!(state.focused_action(), Some(Action::Advisors));
}

#[test]
fn test_button_focus_resets_on_screen_change() {
    let mut state = AppState::default();
    submit_from_welcome(&mut state, &[]);
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Enter); // Job Positions
    assert_eq!(state.current_screen(), ScreenId::Jobs);
    assert_eq!(state.focused_action(), Some(Action::Back));
}

#[test]
fn test_profile_screen_without_profile_is_inert() {
    let mut state = AppState::new(Controller::starting_at(ScreenId::Profile));
    for c in ['j', 'v', 'h'] {
        press(&mut state, KeyCode::Char(c));
    }
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.current_screen(), ScreenId::Profile);
    assert!(state.controller.profile().is_none());
}

#[test]
fn test_jobs_without_profile_still_navigates_back() {
    let mut state = AppState::new(Controller::starting_at(ScreenId::Jobs));
    press(&mut state, KeyCode::Char('b'));
    assert_eq!(state.current_screen(), ScreenId::Profile);
    assert!(state.available_actions().is_empty());
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_click_buttons_through_the_flow() {
    let mut state = AppState::default();
    click_action(&mut state, Action::About);
    assert_eq!(state.current_screen(), ScreenId::About);

    click_action(&mut state, Action::Next);
    assert_eq!(state.current_screen(), ScreenId::Form);

    click_action(&mut state, Action::Submit);
    assert_eq!(state.current_screen(), ScreenId::Profile);

    click_action(&mut state, Action::Advisors);
    assert_eq!(state.current_screen(), ScreenId::Advisors);

    click_action(&mut state, Action::BackToHome);
    assert_eq!(state.current_screen(), ScreenId::Welcome);
}

#[test]
fn test_second_click_in_same_batch_ignores_previous_screen_layout() {
    let mut state = AppState::default();
    submit_from_welcome(&mut state, &sample_profile());
    render_to_string(&mut state);
    let (home_x, home_y) = hitbox_origin(&state, HitTarget::Action(Action::BackToHome));
    let (adv_x, adv_y) = hitbox_origin(&state, HitTarget::Action(Action::Advisors));

    // Both clicks land before the next draw
    click(&mut state, adv_x, adv_y);
    assert_eq!(state.current_screen(), ScreenId::Advisors);
    assert!(state.hitboxes.is_empty());
    click(&mut state, home_x, home_y);
    assert_eq!(state.current_screen(), ScreenId::Advisors);
}

#[test]
fn test_click_outside_buttons_does_nothing() {
    let mut state = AppState::default();
    render_to_string(&mut state);
    click(&mut state, 0, 0);
    assert_eq!(state.current_screen(), ScreenId::Welcome);
}

// ============================================================================
// Quitting
// ============================================================================

#[test]
fn test_q_quits_from_button_screens() {
    let mut state = AppState::default();
    assert!(press(&mut state, KeyCode::Char('q')));
    assert!(press(&mut state, KeyCode::Esc));
}

#[test]
fn test_ctrl_c_always_quits() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('n'));
    type_text(&mut state, "draft");
    assert!(sjsuconnect::ui::events::handle_key(ctrl('c'), &mut state));
}

#[test]
fn test_q_is_text_on_the_form() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('n'));
    assert!(!press(&mut state, KeyCode::Char('q')));
    assert_eq!(state.form.draft.value(ProfileField::Name), "q");
}

#[test]
fn test_esc_on_blank_form_quits() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('n'));
    assert!(press(&mut state, KeyCode::Esc));
}

#[test]
fn test_esc_with_draft_asks_first() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('n'));
    type_text(&mut state, "Ana");

    assert!(!press(&mut state, KeyCode::Esc));
    assert!(state.quit_confirmation.is_some());

    // Typing is blocked while the modal is open
    assert!(!press(&mut state, KeyCode::Char('x')));
    assert_eq!(state.form.draft.value(ProfileField::Name), "Ana");

    assert!(!press(&mut state, KeyCode::Char('n')));
    assert!(state.quit_confirmation.is_none());

    press(&mut state, KeyCode::Esc);
    assert!(press(&mut state, KeyCode::Char('y')));
}
