use std::fmt;

/// Errors of the demo app outside the dialog itself
#[derive(Debug)]
pub enum AppError {
    /// Settings file could not be read
    Filesystem(std::io::Error),
    /// Settings file is not valid TOML or has wrong values
    Config(toml::de::Error),
    /// `base_url` is not usable by the auth client
    InvalidBaseUrl(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::InvalidBaseUrl(msg) => write!(f, "Invalid base URL: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e)
    }
}

impl From<next_auth_dialog::AuthDialogError> for AppError {
    fn from(e: next_auth_dialog::AuthDialogError) -> Self {
        AppError::InvalidBaseUrl(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AppError::InvalidBaseUrl("relative URL without a base".to_string());
        assert_eq!(err.to_string(), "Invalid base URL: relative URL without a base");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "demo.toml");
        assert_eq!(AppError::from(io).to_string(), "Filesystem error: demo.toml");
    }

    #[test]
    fn test_from_toml_error() {
        let err = toml::from_str::<toml::Table>("base_url = ").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Config(_)));
    }
}
