pub mod config;
pub mod logging;
pub mod nav;
pub mod profile;
pub mod ui;

pub use nav::{Action, Controller, NavError, ScreenId};
pub use profile::{Profile, ProfileDraft, ProfileField};
