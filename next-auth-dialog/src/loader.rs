//! Fetching and normalizing the provider list.

use serde_json::{Map, Value};
use std::cmp::Ordering;
use url::Url;

use crate::error::AuthDialogError;
use crate::models::ProviderMapping;

/// NextAuth's provider discovery route
pub const DEFAULT_PROVIDERS_URL: &str = "/api/auth/providers";

/// Where the provider list is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderLoadState {
    Loading,
    Ready(ProviderMapping),
    /// Display message for a failed load
    Failed(String),
}

impl Default for ProviderLoadState {
    fn default() -> Self {
        ProviderLoadState::Ready(ProviderMapping::new())
    }
}

impl ProviderLoadState {
    pub fn from_result(result: Result<ProviderMapping, AuthDialogError>) -> Self {
        match result {
            Ok(mapping) => ProviderLoadState::Ready(mapping),
            Err(e) => ProviderLoadState::Failed(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ProviderLoadState::Loading)
    }

    pub fn providers(&self) -> Option<&ProviderMapping> {
        match self {
            ProviderLoadState::Ready(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProviderLoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Orders display names ignoring case and Latin-1 accents, then unaccented
/// before accented, then lowercase before uppercase.
///
/// Close to a browser's `localeCompare` for Western names; other scripts
/// compare by code point.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let lower = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    let (a_lower, b_lower) = (lower(a), lower(b));

    let primary = a_lower
        .iter()
        .map(|&c| base_letter(c))
        .cmp(b_lower.iter().map(|&c| base_letter(c)));

    primary.then_with(|| a_lower.cmp(&b_lower)).then_with(|| {
        for (x, y) in a.chars().zip(b.chars()) {
            if x != y {
                return match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                };
            }
        }
        a.chars().count().cmp(&b.chars().count())
    })
}

fn base_letter(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Sorts by name (unless disabled) and then keeps only email and OAuth providers.
pub fn normalize_providers(mut mapping: ProviderMapping, sort_by_name: bool) -> ProviderMapping {
    if sort_by_name {
        mapping.sort_by(|a, b| compare_names(&a.name, &b.name));
    }
    mapping.retain(|config| config.kind.is_supported());
    mapping
}

/// Resolves `url` against `base` unless it is already absolute
pub fn resolve_endpoint(url: &str, base: Option<&Url>) -> Result<Url, AuthDialogError> {
    match Url::parse(url) {
        Ok(absolute) => Ok(absolute),
        Err(url::ParseError::RelativeUrlWithoutBase) => match base {
            Some(base) => Ok(base.join(url)?),
            None => Err(AuthDialogError::InvalidUrl(format!(
                "Relative endpoint '{}' needs a base URL",
                url
            ))),
        },
        Err(e) => Err(e.into()),
    }
}

/// Loads the providers offered by a NextAuth backend
#[derive(Debug, Clone)]
pub struct ProviderLoader {
    endpoint: Url,
    sort_by_name: bool,
    http: reqwest::Client,
}

impl ProviderLoader {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            sort_by_name: true,
            http: reqwest::Client::new(),
        }
    }

    /// Loader for `url`, resolved against `base` when relative
    pub fn from_url(url: &str, base: Option<&Url>) -> Result<Self, AuthDialogError> {
        Ok(Self::new(resolve_endpoint(url, base)?))
    }

    pub fn sort_by_name(mut self, enabled: bool) -> Self {
        self.sort_by_name = enabled;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the raw provider mapping without sorting or filtering
    pub async fn fetch(&self) -> Result<ProviderMapping, AuthDialogError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AuthDialogError::Network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AuthDialogError::Http {
                status: response.status().as_u16(),
            });
        }

        let body = response
            .json::<Map<String, Value>>()
            .await
            .map_err(|e| AuthDialogError::Json(format!("Failed to parse providers: {}", e)))?;

        ProviderMapping::from_json(body)
    }

    /// Fetches, sorts and filters the providers
    pub async fn load(&self) -> Result<ProviderMapping, AuthDialogError> {
        let raw = self.fetch().await?;
        let fetched = raw.len();
        let providers = normalize_providers(raw, self.sort_by_name);
        log::info!(
            "Loaded {} of {} providers from {}",
            providers.len(),
            fetched,
            self.endpoint
        );
        Ok(providers)
    }
}
