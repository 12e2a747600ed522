use dioxus::prelude::*;

use crate::email::{EmailSubmitter, EmailValidator};
use crate::error::AuthDialogError;
use crate::models::{Breakpoint, SignInOptions, SignInResponse};

/// Texts shown by the dialog
#[derive(Debug, Clone, PartialEq)]
pub struct DialogLabels {
    pub title: String,
    /// Shown above the controls; replaced by the error message when loading failed
    pub description: String,
    pub divider: String,
    pub email_helper_text: String,
    pub email_placeholder: String,
    /// Accessible name of the close button
    pub close: String,
}

impl Default for DialogLabels {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            divider: "or".to_string(),
            email_helper_text: "A sign-in link will be sent to your inbox.".to_string(),
            email_placeholder: "Email".to_string(),
            close: "Close".to_string(),
        }
    }
}

/// Inline CSS appended to the built-in style of each part
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogStyles {
    pub dialog: String,
    pub title: String,
    pub content: String,
    pub content_text: String,
    pub error_text: String,
    pub progress: String,
    pub email_field: String,
    pub divider: String,
    pub button: String,
    pub button_label: String,
    pub button_icon: String,
}

/// Everything a caller can configure on a dialog
#[derive(Clone, PartialEq, Default)]
pub struct DialogConfig {
    pub breakpoint: Breakpoint,
    pub labels: DialogLabels,
    pub styles: DialogStyles,
    pub hide_title: bool,
    pub hide_provider_name: bool,
    pub hide_provider_icon: bool,
    /// Show the email field even when the backend offers no email provider
    pub always_show_email_field: bool,
    pub disable_auto_focus: bool,
    /// Used for every provider without its own options
    pub sign_in_options: Option<SignInOptions>,
    pub validator: EmailValidator,
    /// Replaces the auth client's email sign-in
    pub on_submit_email: Option<EmailSubmitter>,
    pub on_close: Option<EventHandler<()>>,
    pub on_oauth_sign_in_success: Option<EventHandler<SignInResponse>>,
    pub on_oauth_sign_in_error: Option<EventHandler<AuthDialogError>>,
    /// Replaces the default progress bar
    pub progress: Option<Element>,
}
