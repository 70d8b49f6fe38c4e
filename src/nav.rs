// Screen navigation state machine

use crate::profile::Profile;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum ScreenId {
    #[default]
    Welcome,
    About,
    Form,
    Profile,
    Jobs,
    Advisors,
}

impl ScreenId {
    pub const ALL: [ScreenId; 6] = [
        Self::Welcome,
        Self::About,
        Self::Form,
        Self::Profile,
        Self::Jobs,
        Self::Advisors,
    ];

    /// Actions offered on this screen, in on-screen button order.
    pub fn actions(self) -> &'static [Action] {
        match self {
            Self::Welcome => &[Action::About, Action::Next],
            Self::About => &[Action::Next],
            Self::Form => &[Action::Submit],
            Self::Profile => &[Action::Advisors, Action::JobPositions, Action::BackToHome],
            Self::Jobs | Self::Advisors => &[Action::Back, Action::BackToHome],
        }
    }

    pub fn offers(self, action: Action) -> bool {
        self.actions().contains(&action)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::About => "About",
            Self::Form => "Profile Form",
            Self::Profile => "Profile",
            Self::Jobs => "Job Positions",
            Self::Advisors => "Advisors",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A button press the controller turns into a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    About,
    Next,
    Submit,
    JobPositions,
    Advisors,
    Back,
    BackToHome,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Self::About,
        Self::Next,
        Self::Submit,
        Self::JobPositions,
        Self::Advisors,
        Self::Back,
        Self::BackToHome,
    ];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Next => "Next",
            Self::Submit => "Submit",
            Self::JobPositions => "Job Positions",
            Self::Advisors => "Advisors",
            Self::Back => "Back",
            Self::BackToHome => "Back to Home",
        }
    }

    /// Keyboard shortcut on button screens. Submit has none; letters are form input there.
    pub fn hotkey(self) -> Option<char> {
        match self {
            Self::About => Some('a'),
            Self::Next => Some('n'),
            Self::Submit => None,
            Self::JobPositions => Some('j'),
            Self::Advisors => Some('v'),
            Self::Back => Some('b'),
            Self::BackToHome => Some('h'),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The full transition table. `None` for pairs the flow does not define.
pub fn next_screen(from: ScreenId, action: Action) -> Option<ScreenId> {
    use Action as A;
    use ScreenId as S;

    match (from, action) {
        (S::Welcome, A::About) => Some(S::About),
        (S::Welcome, A::Next) => Some(S::Form),
        (S::About, A::Next) => Some(S::Form),
        (S::Form, A::Submit) => Some(S::Profile),
        (S::Profile, A::JobPositions) => Some(S::Jobs),
        (S::Profile, A::Advisors) => Some(S::Advisors),
        (S::Profile, A::BackToHome) => Some(S::Welcome),
        (S::Jobs, A::Back) => Some(S::Profile),
        (S::Jobs, A::BackToHome) => Some(S::Welcome),
        (S::Advisors, A::Back) => Some(S::Profile),
        (S::Advisors, A::BackToHome) => Some(S::Welcome),
        _ => None,
    }
}

/// Every defined `(from, action, to)` triple, screen by screen in button order.
pub fn transitions() -> Vec<(ScreenId, Action, ScreenId)> {
    ScreenId::ALL
        .iter()
        .flat_map(|from| {
            from.actions()
                .iter()
                .filter_map(move |action| next_screen(*from, *action).map(|to| (*from, *action, to)))
        })
        .collect()
}

/// Plain-text rendering of the transition table.
pub fn describe_transitions() -> String {
    transitions()
        .iter()
        .map(|(from, action, to)| {
            let effect = if *action == Action::Submit {
                "  (stores profile)"
            } else {
                ""
            };
            format!("{:<14}{:<16}-> {}{}", from.title(), action.label(), to.title(), effect)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("action '{action}' is not available on the {screen} screen")]
    Unavailable { screen: ScreenId, action: Action },

    #[error("submit requires a profile; use Controller::submit")]
    MissingProfile,
}

/// Owns the current screen and the last submitted profile.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    current: ScreenId,
    profile: Option<Profile>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on an arbitrary screen with no profile.
    pub fn starting_at(screen: ScreenId) -> Self {
        Self {
            current: screen,
            profile: None,
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Apply a non-submit action. Unavailable actions leave state untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<ScreenId, NavError> {
        if action == Action::Submit {
            return Err(NavError::MissingProfile);
        }
        self.advance(action)
    }

    /// Store `profile`, replacing any earlier one, and move to the profile screen.
    pub fn submit(&mut self, profile: Profile) -> Result<ScreenId, NavError> {
        let to = self.advance(Action::Submit)?;
        tracing::info!(name = %profile.name, replaced = self.profile.is_some(), "profile submitted");
        self.profile = Some(profile);
        Ok(to)
    }

    fn advance(&mut self, action: Action) -> Result<ScreenId, NavError> {
        let from = self.current;
        let to = next_screen(from, action).ok_or(NavError::Unavailable {
            screen: from,
            action,
        })?;
        tracing::debug!(%from, %action, %to, "navigate");
        self.current = to;
        Ok(to)
    }
}
