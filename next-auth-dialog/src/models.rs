use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::AuthDialogError;

/// Kind of a provider as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderKind {
    Oauth,
    Email,
    /// Any other type (e.g. `credentials`); fetched but never rendered
    Other(String),
}

impl From<String> for ProviderKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "oauth" => ProviderKind::Oauth,
            "email" => ProviderKind::Email,
            _ => ProviderKind::Other(value),
        }
    }
}

impl From<ProviderKind> for String {
    fn from(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Oauth => "oauth".to_string(),
            ProviderKind::Email => "email".to_string(),
            ProviderKind::Other(other) => other,
        }
    }
}

impl Default for ProviderKind {
    fn default() -> Self {
        ProviderKind::Other(String::new())
    }
}

impl ProviderKind {
    /// Only email and OAuth providers get a control in the dialog
    pub fn is_supported(&self) -> bool {
        matches!(self, ProviderKind::Oauth | ProviderKind::Email)
    }
}

/// Per-provider presentation and sign-in overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOverrides {
    /// Replaces the provider name on its button
    pub label: Option<String>,
    /// Iconify name (`mdi:github`), image URL or literal text
    pub icon: Option<String>,
    pub hide_provider_name: Option<bool>,
    pub hide_provider_icon: Option<bool>,
    pub button_style: Option<String>,
    pub label_style: Option<String>,
    pub icon_style: Option<String>,
    /// Email provider only
    pub text_field_style: Option<String>,
    /// Email provider only
    pub helper_text: Option<String>,
    /// Email provider only; takes precedence over the provider name
    pub placeholder: Option<String>,
    /// Used instead of the dialog-level options when signing in with this provider
    pub sign_in_options: Option<SignInOptions>,
}

impl ProviderOverrides {
    /// Lays `other` over `self`; every field set in `other` wins.
    pub fn overlay(&mut self, other: &ProviderOverrides) {
        fn take<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
            if source.is_some() {
                target.clone_from(source);
            }
        }

        take(&mut self.label, &other.label);
        take(&mut self.icon, &other.icon);
        take(&mut self.hide_provider_name, &other.hide_provider_name);
        take(&mut self.hide_provider_icon, &other.hide_provider_icon);
        take(&mut self.button_style, &other.button_style);
        take(&mut self.label_style, &other.label_style);
        take(&mut self.icon_style, &other.icon_style);
        take(&mut self.text_field_style, &other.text_field_style);
        take(&mut self.helper_text, &other.helper_text);
        take(&mut self.placeholder, &other.placeholder);
        take(&mut self.sign_in_options, &other.sign_in_options);
    }
}

/// One sign-in option offered by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub id: String,
    /// Display name, also the sort key
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ProviderKind,
    #[serde(flatten)]
    pub overrides: ProviderOverrides,
}

impl ProviderConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ProviderKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            overrides: ProviderOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: ProviderOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn is_email(&self) -> bool {
        self.id == EMAIL_PROVIDER_ID
    }
}

/// Id of the passwordless email provider
pub const EMAIL_PROVIDER_ID: &str = "email";

/// Providers keyed by id, in display order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderMapping {
    entries: Vec<ProviderConfig>,
}

impl ProviderMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the providers endpoint body, keeping document order.
    ///
    /// The mapping key is authoritative for the id when the descriptor has none.
    /// Descriptors of a type other than `oauth` or `email` are skipped unread.
    pub fn from_json(body: Map<String, Value>) -> Result<Self, AuthDialogError> {
        let mut mapping = ProviderMapping::new();
        for (key, value) in body {
            if value.is_object() && !descriptor_supported(&value) {
                log::debug!("Skipping provider '{}' of unsupported type", key);
                continue;
            }
            let mut config: ProviderConfig = serde_json::from_value(value).map_err(|e| {
                AuthDialogError::Json(format!("Invalid provider '{}': {}", key, e))
            })?;
            if config.id.is_empty() {
                config.id = key;
            }
            mapping.insert(config);
        }
        Ok(mapping)
    }

    /// Adds a provider; an existing entry with the same id is replaced in place.
    pub fn insert(&mut self, config: ProviderConfig) {
        match self.entries.iter_mut().find(|c| c.id == config.id) {
            Some(existing) => *existing = config,
            None => self.entries.push(config),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ProviderConfig> {
        self.entries.iter().find(|c| c.id == id)
    }

    pub fn email_provider(&self) -> Option<&ProviderConfig> {
        self.get(EMAIL_PROVIDER_ID)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProviderConfig> {
        self.entries.iter()
    }

    /// Every provider except the email one, in order
    pub fn buttons(&self) -> impl Iterator<Item = &ProviderConfig> {
        self.entries.iter().filter(|c| !c.is_email())
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&ProviderConfig, &ProviderConfig) -> std::cmp::Ordering,
    {
        self.entries.sort_by(compare);
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&ProviderConfig) -> bool,
    {
        self.entries.retain(keep);
    }

    /// Applies caller overrides to the providers they name; unknown ids are ignored.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, ProviderOverrides>) {
        for config in &mut self.entries {
            if let Some(o) = overrides.get(&config.id) {
                config.overrides.overlay(o);
            }
        }
    }
}

fn descriptor_supported(value: &Value) -> bool {
    value
        .get("type")
        .and_then(Value::as_str)
        .map(|kind| ProviderKind::from(kind.to_string()).is_supported())
        .unwrap_or(false)
}

impl FromIterator<ProviderConfig> for ProviderMapping {
    fn from_iter<I: IntoIterator<Item = ProviderConfig>>(iter: I) -> Self {
        let mut mapping = ProviderMapping::new();
        for config in iter {
            mapping.insert(config);
        }
        mapping
    }
}

/// Opaque option bag handed to the auth client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignInOptions(Map<String, Value>);

impl SignInOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the browser should follow the URL returned by the auth client
    pub fn redirect(&self) -> bool {
        match self.0.get("redirect") {
            Some(Value::Bool(false)) => false,
            Some(Value::String(s)) if s == "false" => false,
            _ => true,
        }
    }

    /// Flattens the bag into form fields; strings are sent verbatim
    pub fn to_form_fields(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect()
    }
}

impl From<Map<String, Value>> for SignInOptions {
    fn from(map: Map<String, Value>) -> Self {
        SignInOptions(map)
    }
}

/// Outcome of a sign-in request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignInResponse {
    /// Where the browser should go next
    pub url: Option<String>,
    /// Error code reported by the backend in the returned URL
    pub error: Option<String>,
    pub status: u16,
    pub ok: bool,
}

/// Width class of the dialog, also the threshold for the mobile layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub fn width_px(self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 600,
            Breakpoint::Md => 900,
            Breakpoint::Lg => 1200,
            Breakpoint::Xl => 1536,
        }
    }

    /// Maximum dialog width; `xs` dialogs still get a usable width
    pub fn dialog_max_width_px(self) -> u32 {
        self.width_px().max(444)
    }

    /// True when a viewport of this width gets the full-screen layout
    pub fn is_mobile(self, viewport_width: f64) -> bool {
        viewport_width < f64::from(self.width_px()) - 0.05
    }

    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}
