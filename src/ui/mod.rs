// Terminal UI using Ratatui

pub mod components;
pub mod constants;
pub mod events;
pub mod focus;
pub mod form;
pub mod listings;
pub mod profile;
pub mod quit_modal;
pub mod state;
pub mod welcome;

pub use events::{UiOptions, run_ui_with_options};
pub use form::FormScreen;
pub use listings::{AdvisorsScreen, JobsScreen};
pub use profile::ProfileScreen;
pub use quit_modal::QuitModal;
pub use state::AppState;
pub use welcome::{AboutScreen, WelcomeScreen};

use crate::nav::ScreenId;
use components::{Footer, page_block};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin},
};

/// Draw the current screen. Clickable areas are recorded in `state.hitboxes`.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    state.hitboxes.clear();

    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    frame.render_widget(page_block(), body);
    let content = body.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    match state.current_screen() {
        ScreenId::Welcome => WelcomeScreen::render(frame, content, state),
        ScreenId::About => AboutScreen::render(frame, content, state),
        ScreenId::Form => FormScreen::render(frame, content, state),
        ScreenId::Profile => ProfileScreen::render(frame, content, state),
        ScreenId::Jobs => JobsScreen::render(frame, content, state),
        ScreenId::Advisors => AdvisorsScreen::render(frame, content, state),
    }

    if let Some(quit) = state.quit_confirmation {
        frame.render_widget(Footer::quit_confirmation(), footer);
        QuitModal::render(frame, &quit);
    } else {
        frame.render_widget(
            Footer::for_screen(state.current_screen(), state.available_actions()),
            footer,
        );
    }
}
