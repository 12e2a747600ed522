use async_trait::async_trait;
use dioxus::prelude::*;
use serde::Deserialize;
use std::rc::Rc;
use url::Url;

use crate::error::AuthDialogError;
use crate::models::{SignInOptions, SignInResponse, EMAIL_PROVIDER_ID};

/// The authentication backend the dialog signs in against
#[async_trait(?Send)]
pub trait AuthClient {
    /// Starts the OAuth flow for `provider_id`
    async fn sign_in_oauth(
        &self,
        provider_id: &str,
        options: &SignInOptions,
    ) -> Result<SignInResponse, AuthDialogError>;

    /// Requests a sign-in link; `options` carries the `email` field
    async fn sign_in_email(
        &self,
        options: &SignInOptions,
    ) -> Result<SignInResponse, AuthDialogError>;

    /// Base that relative endpoints such as `/api/auth/providers` resolve against
    fn endpoint_base(&self) -> Url;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsrfReply {
    csrf_token: String,
}

#[derive(Debug, Deserialize)]
struct SignInReply {
    url: Option<String>,
}

/// Client for the REST routes of a NextAuth server
#[derive(Debug, Clone)]
pub struct NextAuthClient {
    base_url: Url,
    http: reqwest::Client,
}

impl NextAuthClient {
    /// Creates a client for a base such as `http://localhost:3000/api/auth`
    pub fn new(base_url: &str) -> Result<Self, AuthDialogError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            http: build_http_client()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the CSRF token required by every sign-in POST
    pub async fn csrf_token(&self) -> Result<String, AuthDialogError> {
        let url = self.base_url.join("csrf")?;
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AuthDialogError::Network(format!("CSRF request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AuthDialogError::Http {
                status: response.status().as_u16(),
            });
        }

        let reply = response
            .json::<CsrfReply>()
            .await
            .map_err(|e| AuthDialogError::Json(format!("Failed to parse CSRF token: {}", e)))?;
        Ok(reply.csrf_token)
    }

    /// Posts a sign-in for `provider_id` and reports where to go next
    pub async fn sign_in(
        &self,
        provider_id: &str,
        options: &SignInOptions,
    ) -> Result<SignInResponse, AuthDialogError> {
        let url = self.base_url.join(&format!("signin/{}", provider_id))?;
        let csrf_token = self.csrf_token().await?;

        let mut form = options.to_form_fields();
        form.retain(|(key, _)| key != "csrfToken" && key != "json");
        form.push(("csrfToken".to_string(), csrf_token));
        form.push(("json".to_string(), "true".to_string()));

        log::debug!("Signing in with provider '{}'", provider_id);
        let response = self
            .http
            .post(url)
            .header("Accept", "application/json")
            .form(&form)
            .send()
            .await
            .map_err(|e| AuthDialogError::Network(format!("Sign-in request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthDialogError::SignIn(format!(
                "Server returned status: {}",
                status
            )));
        }

        let reply = response
            .json::<SignInReply>()
            .await
            .map_err(|e| AuthDialogError::Json(format!("Failed to parse sign-in reply: {}", e)))?;

        let error = reply.url.as_deref().and_then(error_param);
        Ok(SignInResponse {
            url: if error.is_some() { None } else { reply.url },
            ok: error.is_none(),
            status: status.as_u16(),
            error,
        })
    }
}

#[async_trait(?Send)]
impl AuthClient for NextAuthClient {
    async fn sign_in_oauth(
        &self,
        provider_id: &str,
        options: &SignInOptions,
    ) -> Result<SignInResponse, AuthDialogError> {
        self.sign_in(provider_id, options).await
    }

    async fn sign_in_email(
        &self,
        options: &SignInOptions,
    ) -> Result<SignInResponse, AuthDialogError> {
        self.sign_in(EMAIL_PROVIDER_ID, options).await
    }

    fn endpoint_base(&self) -> Url {
        self.base_url.clone()
    }
}

fn build_http_client() -> Result<reqwest::Client, AuthDialogError> {
    let builder = reqwest::Client::builder();

    // The CSRF cookie must travel with the sign-in POST; browsers do this themselves.
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder
        .cookie_store(true)
        .user_agent("NextAuthDialog/0.1.0");

    builder
        .build()
        .map_err(|e| AuthDialogError::Network(format!("Client build failed: {}", e)))
}

fn error_param(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "error")
        .map(|(_, value)| value.into_owned())
}

/// Auth client shared with every dialog below the providing component
#[derive(Clone)]
pub struct AuthClientContext {
    client: Rc<dyn AuthClient>,
}

impl AuthClientContext {
    pub fn new(client: impl AuthClient + 'static) -> Self {
        Self {
            client: Rc::new(client),
        }
    }

    pub fn client(&self) -> Rc<dyn AuthClient> {
        Rc::clone(&self.client)
    }
}

/// Makes an auth client available to the dialogs rendered below this component.
///
/// `init` runs once, on first render.
pub fn use_auth_client_provider<C, F>(init: F) -> AuthClientContext
where
    C: AuthClient + 'static,
    F: FnOnce() -> C,
{
    use_context_provider(|| AuthClientContext::new(init()))
}

/// Returns the auth client provided by an ancestor.
///
/// Panics if no ancestor called [`use_auth_client_provider`].
pub fn use_auth_client() -> Rc<dyn AuthClient> {
    use_context::<AuthClientContext>().client()
}
