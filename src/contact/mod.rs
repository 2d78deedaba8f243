// Emergency contact module - modal form collecting a phone number
mod app;
mod components;
mod state;

pub use app::{
    show_emergency_contact_dialog, show_emergency_contact_dialog_with_theme, ContactDialogApp,
};
pub use components::FormAction;
pub use state::{validate_contact, ContactForm, ContactResult, DialogPhase, ValidationError};
