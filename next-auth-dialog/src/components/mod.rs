mod auth_dialog;
mod email_field;
mod next_auth_dialog;

pub use auth_dialog::{AuthDialog, AuthDialogProps};
pub use email_field::EmailField;
pub use next_auth_dialog::{NextAuthDialog, NextAuthDialogProps};
