//! UI components for the portfolio app.

mod contact_form;
mod nav_header;
mod notification;
mod project_card;
mod project_gallery;
mod resume_button;
mod theme_switcher;

pub use contact_form::ContactForm;
pub use nav_header::NavHeader;
pub use notification::{NotificationLayer, Notifier, Severity, Toast};
pub use project_card::ProjectCard;
pub use project_gallery::ProjectGallery;
pub use resume_button::ResumeButton;
pub use theme_switcher::ThemeSwitcher;
