//! Settings of the demo app, read from TOML.

use next_auth_dialog::{Breakpoint, NextAuthClient, SignInOptions, DEFAULT_PROVIDERS_URL};
use serde::Deserialize;
use std::path::Path;
use unic_langid::{langid, LanguageIdentifier};

use crate::error::AppError;

/// Path of a settings file replacing the bundled `demo.toml`
pub const CONFIG_ENV: &str = "NEXT_AUTH_DIALOG_CONFIG";

const BUNDLED_SETTINGS: &str = include_str!("../demo.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Base of the backend's NextAuth routes
    pub base_url: String,
    pub providers_url: String,
    pub breakpoint: Breakpoint,
    pub locale: String,
    pub disable_sort_by_name: bool,
    pub always_show_email_field: bool,
    pub hide_title: bool,
    pub sign_in_options: Option<SignInOptions>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api/auth".to_string(),
            providers_url: DEFAULT_PROVIDERS_URL.to_string(),
            breakpoint: Breakpoint::Sm,
            locale: "en-US".to_string(),
            disable_sort_by_name: false,
            always_show_email_field: false,
            hide_title: false,
            sign_in_options: None,
        }
    }
}

impl DemoSettings {
    /// Reads the file named by [`CONFIG_ENV`], or the bundled settings
    pub fn load() -> Result<Self, AppError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                log::info!("Loading settings from {}", path);
                Self::from_file(Path::new(&path))
            }
            Err(_) => Self::from_toml(BUNDLED_SETTINGS),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(text)?)
    }

    pub fn auth_client(&self) -> Result<NextAuthClient, AppError> {
        Ok(NextAuthClient::new(&self.base_url)?)
    }

    pub fn language(&self) -> LanguageIdentifier {
        self.locale.parse().unwrap_or_else(|_| {
            log::warn!("Unknown locale '{}', using en-US", self.locale);
            langid!("en-US")
        })
    }
}
