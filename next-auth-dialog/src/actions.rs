//! Sign-in requests issued by the dialog.

use crate::client::AuthClient;
use crate::email::EmailSubmitter;
use crate::error::AuthDialogError;
use crate::models::{ProviderConfig, SignInOptions, SignInResponse};
use crate::options::{email_sign_in_options, provider_sign_in_options};

/// A finished sign-in call.
///
/// When the backend reports an `error` in its returned URL, the response
/// carries no URL and nothing is followed; the backend's error page is not shown.
#[derive(Debug, Clone, PartialEq)]
pub struct SignInOutcome {
    pub response: SignInResponse,
    /// Address the browser should be sent to, unless `redirect: false` was requested
    pub redirect_to: Option<String>,
}

impl SignInOutcome {
    fn new(response: SignInResponse, options: &SignInOptions) -> Self {
        let redirect_to = if options.redirect() {
            response.url.clone()
        } else {
            None
        };
        Self {
            response,
            redirect_to,
        }
    }
}

/// Signs in with an OAuth provider using the effective options for it
pub async fn sign_in_with_provider(
    client: &dyn AuthClient,
    provider: &ProviderConfig,
    dialog_options: Option<&SignInOptions>,
) -> Result<SignInOutcome, AuthDialogError> {
    let options = provider_sign_in_options(provider, dialog_options);
    let response = client.sign_in_oauth(&provider.id, &options).await?;
    log::info!(
        "Sign-in with '{}' answered with status {}",
        provider.id,
        response.status
    );
    Ok(SignInOutcome::new(response, &options))
}

/// Submits the email address through the caller's submitter, or the auth client.
///
/// Returns `None` when a custom submitter handled the address.
pub async fn submit_email(
    client: &dyn AuthClient,
    submitter: Option<&EmailSubmitter>,
    email: &str,
    email_provider: Option<&ProviderConfig>,
    dialog_options: Option<&SignInOptions>,
) -> Result<Option<SignInOutcome>, AuthDialogError> {
    if let Some(submitter) = submitter {
        submitter
            .submit(email.to_string())
            .await
            .map_err(AuthDialogError::EmailSubmission)?;
        return Ok(None);
    }

    let options = email_sign_in_options(email_provider, dialog_options, email);
    let response = client.sign_in_email(&options).await?;
    log::info!("Email sign-in answered with status {}", response.status);
    Ok(Some(SignInOutcome::new(response, &options)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProviderKind, ProviderOverrides};
    use crate::state::DialogState;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingClient {
        oauth_calls: RefCell<Vec<(String, SignInOptions)>>,
        email_calls: RefCell<Vec<SignInOptions>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl AuthClient for RecordingClient {
        async fn sign_in_oauth(
            &self,
            provider_id: &str,
            options: &SignInOptions,
        ) -> Result<SignInResponse, AuthDialogError> {
            self.oauth_calls
                .borrow_mut()
                .push((provider_id.to_string(), options.clone()));
            if self.fail {
                return Err(AuthDialogError::SignIn("denied".to_string()));
            }
            Ok(SignInResponse {
                url: Some(format!("https://auth.test/{}", provider_id)),
                error: None,
                status: 200,
                ok: true,
            })
        }

        async fn sign_in_email(
            &self,
            options: &SignInOptions,
        ) -> Result<SignInResponse, AuthDialogError> {
            self.email_calls.borrow_mut().push(options.clone());
            Ok(SignInResponse {
                url: Some("https://auth.test/verify-request".to_string()),
                error: None,
                status: 200,
                ok: true,
            })
        }

        fn endpoint_base(&self) -> url::Url {
            url::Url::parse("https://auth.test/api/auth/").unwrap()
        }
    }

    fn github(options: Option<SignInOptions>) -> ProviderConfig {
        ProviderConfig::new("github", "GitHub", ProviderKind::Oauth).with_overrides(
            ProviderOverrides {
                sign_in_options: options,
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_provider_click_uses_provider_options() {
        let client = RecordingClient::default();
        let provider_options = SignInOptions::new().with("callbackUrl", "/github");
        let dialog_options = SignInOptions::new().with("callbackUrl", "/dialog");

        sign_in_with_provider(&client, &github(Some(provider_options.clone())), Some(&dialog_options))
            .await
            .unwrap();

        assert_eq!(
            *client.oauth_calls.borrow(),
            vec![("github".to_string(), provider_options)]
        );
    }

    #[tokio::test]
    async fn test_provider_click_falls_back_to_dialog_options() {
        let client = RecordingClient::default();
        let dialog_options = SignInOptions::new().with("callbackUrl", "/dialog");

        let outcome = sign_in_with_provider(&client, &github(None), Some(&dialog_options))
            .await
            .unwrap();

        assert_eq!(
            *client.oauth_calls.borrow(),
            vec![("github".to_string(), dialog_options)]
        );
        assert_eq!(outcome.redirect_to.as_deref(), Some("https://auth.test/github"));
    }

    #[tokio::test]
    async fn test_redirect_false_suppresses_navigation() {
        let client = RecordingClient::default();
        let options = SignInOptions::new().with("redirect", false);

        let outcome = sign_in_with_provider(&client, &github(Some(options)), None)
            .await
            .unwrap();

        assert_eq!(outcome.redirect_to, None);
        assert!(outcome.response.url.is_some());
    }

    #[test]
    fn test_backend_error_is_not_followed() {
        let response = SignInResponse {
            url: None,
            error: Some("OAuthSignin".to_string()),
            status: 200,
            ok: false,
        };

        let outcome = SignInOutcome::new(response, &SignInOptions::new());
        assert_eq!(outcome.redirect_to, None);
        assert_eq!(outcome.response.error.as_deref(), Some("OAuthSignin"));
    }

    #[tokio::test]
    async fn test_provider_failure_is_returned() {
        let client = RecordingClient {
            fail: true,
            ..Default::default()
        };

        let result = sign_in_with_provider(&client, &github(None), None).await;
        assert_eq!(result, Err(AuthDialogError::SignIn("denied".to_string())));
    }

    #[tokio::test]
    async fn test_default_email_submission_sets_email_option() {
        let client = RecordingClient::default();
        let dialog_options = SignInOptions::new().with("callbackUrl", "/dialog");

        let outcome = submit_email(&client, None, "user@example.com", None, Some(&dialog_options))
            .await
            .unwrap();

        assert_eq!(
            *client.email_calls.borrow(),
            vec![SignInOptions::new()
                .with("callbackUrl", "/dialog")
                .with("email", "user@example.com")]
        );
        assert!(outcome.is_some());
    }

    #[tokio::test]
    async fn test_custom_submitter_replaces_auth_client() {
        let client = RecordingClient::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let submitter = {
            let seen = Rc::clone(&seen);
            EmailSubmitter::new(move |email: String| {
                let seen = Rc::clone(&seen);
                async move {
                    seen.borrow_mut().push(email);
                    Ok(())
                }
            })
        };

        let outcome = submit_email(&client, Some(&submitter), "user@example.com", None, None)
            .await
            .unwrap();

        assert_eq!(outcome, None);
        assert_eq!(*seen.borrow(), vec!["user@example.com".to_string()]);
        assert!(client.email_calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_custom_submitter_failure_is_returned() {
        let client = RecordingClient::default();
        let submitter = EmailSubmitter::new(|_email: String| async { Err("quota exceeded".to_string()) });

        let result = submit_email(&client, Some(&submitter), "user@example.com", None, None).await;
        assert_eq!(
            result,
            Err(AuthDialogError::EmailSubmission("quota exceeded".to_string()))
        );
    }

    #[tokio::test]
    async fn test_rapid_double_submit_invokes_once() {
        let calls = Rc::new(Cell::new(0));
        let submitter = {
            let calls = Rc::clone(&calls);
            EmailSubmitter::new(move |_email: String| {
                calls.set(calls.get() + 1);
                async { Ok(()) }
            })
        };
        let client = RecordingClient::default();

        let mut state = DialogState::default();
        let ticket = state.email_changed("user@example.com".to_string());
        state.validation_resolved(ticket, true);

        // Both presses arrive before the first submission completes.
        let first = state.begin_submit();
        let second = state.begin_submit();
        for email in [first, second].into_iter().flatten() {
            submit_email(&client, Some(&submitter), &email, None, None)
                .await
                .unwrap();
        }
        state.finish_submit();

        assert_eq!(calls.get(), 1);
        assert!(!state.email_submitting());
    }
}
