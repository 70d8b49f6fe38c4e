// Focus management for the profile form

use crate::profile::ProfileField;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    #[default]
    Name,
    Location,
    Age,
    StudentId,
    Email,
    Housing,
    Food,
    Major,
    PhysicalCapabilities,
    Advisor,
    SubmitButton,
}

impl FormFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Location,
            Self::Location => Self::Age,
            Self::Age => Self::StudentId,
            Self::StudentId => Self::Email,
            Self::Email => Self::Housing,
            Self::Housing => Self::Food,
            Self::Food => Self::Major,
            Self::Major => Self::PhysicalCapabilities,
            Self::PhysicalCapabilities => Self::Advisor,
            Self::Advisor => Self::SubmitButton,
            Self::SubmitButton => Self::Name, // Wrap around
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Name => Self::SubmitButton, // Wrap around
            Self::Location => Self::Name,
            Self::Age => Self::Location,
            Self::StudentId => Self::Age,
            Self::Email => Self::StudentId,
            Self::Housing => Self::Email,
            Self::Food => Self::Housing,
            Self::Major => Self::Food,
            Self::PhysicalCapabilities => Self::Major,
            Self::Advisor => Self::PhysicalCapabilities,
            Self::SubmitButton => Self::Advisor,
        }
    }

    /// The text field under focus, or `None` on the submit button.
    pub fn field(&self) -> Option<ProfileField> {
        match self {
            Self::Name => Some(ProfileField::Name),
            Self::Location => Some(ProfileField::Location),
            Self::Age => Some(ProfileField::Age),
            Self::StudentId => Some(ProfileField::StudentId),
            Self::Email => Some(ProfileField::Email),
            Self::Housing => Some(ProfileField::Housing),
            Self::Food => Some(ProfileField::Food),
            Self::Major => Some(ProfileField::Major),
            Self::PhysicalCapabilities => Some(ProfileField::PhysicalCapabilities),
            Self::Advisor => Some(ProfileField::Advisor),
            Self::SubmitButton => None,
        }
    }
}

impl From<ProfileField> for FormFocus {
    fn from(field: ProfileField) -> Self {
        match field {
            ProfileField::Name => Self::Name,
            ProfileField::Location => Self::Location,
            ProfileField::Age => Self::Age,
            ProfileField::StudentId => Self::StudentId,
            ProfileField::Email => Self::Email,
            ProfileField::Housing => Self::Housing,
            ProfileField::Food => Self::Food,
            ProfileField::Major => Self::Major,
            ProfileField::PhysicalCapabilities => Self::PhysicalCapabilities,
            ProfileField::Advisor => Self::Advisor,
        }
    }
}
