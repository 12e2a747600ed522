use std::fmt;

/// Errors raised while loading providers or signing in
#[derive(Debug, Clone, PartialEq)]
pub enum AuthDialogError {
    /// Request could not be sent or the connection failed
    Network(String),
    /// Server answered with a non-success status
    Http { status: u16 },
    /// Response body was not the expected JSON
    Json(String),
    /// Endpoint could not be parsed or resolved
    InvalidUrl(String),
    /// The auth client rejected a sign-in
    SignIn(String),
    /// A caller-supplied email submitter failed
    EmailSubmission(String),
}

impl fmt::Display for AuthDialogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthDialogError::Network(msg) => write!(f, "Network error: {}", msg),
            AuthDialogError::Http { status } => write!(f, "Server returned status: {}", status),
            AuthDialogError::Json(msg) => write!(f, "JSON error: {}", msg),
            AuthDialogError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            AuthDialogError::SignIn(msg) => write!(f, "Sign-in failed: {}", msg),
            AuthDialogError::EmailSubmission(msg) => write!(f, "Email submission failed: {}", msg),
        }
    }
}

impl std::error::Error for AuthDialogError {}

impl From<reqwest::Error> for AuthDialogError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            AuthDialogError::Http {
                status: status.as_u16(),
            }
        } else if e.is_decode() {
            AuthDialogError::Json(e.to_string())
        } else {
            AuthDialogError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AuthDialogError {
    fn from(e: serde_json::Error) -> Self {
        AuthDialogError::Json(e.to_string())
    }
}

impl From<url::ParseError> for AuthDialogError {
    fn from(e: url::ParseError) -> Self {
        AuthDialogError::InvalidUrl(e.to_string())
    }
}

impl AuthDialogError {
    /// Message shown in the dialog when the provider list could not be loaded
    pub fn user_message(&self) -> String {
        format!("Error loading providers: {}", self)
    }
}
