// Fixed screen copy - single source of truth for every static text

use ratatui::style::Color;

pub const APP_TITLE: &str = "Welcome to SJSUConnect!";

/// Page background (pale yellow)
pub const BACKGROUND: Color = Color::Rgb(0xFF, 0xF9, 0xC4);
pub const TEXT: Color = Color::Black;
pub const MUTED: Color = Color::Rgb(0x75, 0x75, 0x75);
pub const ACCENT: Color = Color::Rgb(0x00, 0x55, 0xA2);
pub const GOLD: Color = Color::Rgb(0xE5, 0xA8, 0x23);

/// Stands in for the Spartans logo on the welcome screen
pub const WELCOME_BANNER: &[&str] = &[
    r" ____      _ ____  _   _ ",
    r"/ ___|    | / ___|| | | |",
    r"\___ \ _  | \___ \| | | |",
    r" ___) | |_| |___) | |_| |",
    r"|____/ \___/|____/ \___/ ",
    r"",
    r"   S P A R T A N S    ",
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Our program provides housing through the dorms at SJSU in exchange for community service and a job, allowing you to have a steady income, a place to live, something to put on your resume, while serving your community and helping make San Jose a more beautiful place.",
    "Simply input your information and you will be able to find specific job positions available for you to apply. You will be matched with an advisor nearby, and will receive help with your journey continuing your education with a focus on helping you grow as a person!",
];

pub const PHOTO_BADGE: &str = "( Photo )";

pub const PROFILE_THANKS: &str = "Thank you for applying, we will contact you shortly";

pub const JOBS_TITLE: &str = "Available Job Positions";

/// Job titles, two per row
pub const JOB_POSITIONS: &[(&str, &str)] = &[
    ("Library Assistant", "Food Court Worker"),
    ("Campus Tour Guide", "Research Lab Helper"),
    ("Teacher Assistant", "Community Helper"),
    ("Ice Cream Server", "Garden Center Helper"),
    ("Cashier", "Dog Walker"),
];

pub const JOBS_NOTE: &str =
    "To apply for these jobs, please check out SJSU Careers and fill out the application.";

pub const ADVISORS_TITLE: &str = "Available Advisors";

/// (name, specialty)
pub const ADVISORS: &[(&str, &str)] = &[
    ("John Doe", "Academic Support"),
    ("Lynn Smith", "Career Counseling"),
    ("Jeff Johnson", "Housing Assistance"),
    ("Blake Anderson", "Housing Assistance"),
    ("Sam Kim", "Housing Assistance"),
    ("Andy Mason", "Housing Assistance"),
    ("Drew Stock", "Housing Assistance"),
];

pub const ADVISORS_NOTE: &str =
    "Once our team contact you shortly, you will be able to speak to one of our advisors.";
