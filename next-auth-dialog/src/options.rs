//! Resolution of the sign-in option bag handed to the auth client.
//!
//! Options come in layers ordered from lowest to highest precedence:
//! dialog-level first, provider-level last. The highest layer that is present
//! is used as a whole; layers are not merged key by key.

use crate::models::{ProviderConfig, SignInOptions};

/// Picks the highest-precedence present layer, or an empty bag.
pub fn resolve_sign_in_options<'a, I>(layers: I) -> SignInOptions
where
    I: IntoIterator<Item = Option<&'a SignInOptions>>,
{
    layers
        .into_iter()
        .flatten()
        .last()
        .cloned()
        .unwrap_or_default()
}

/// Options for an OAuth sign-in with `provider`
pub fn provider_sign_in_options(
    provider: &ProviderConfig,
    dialog: Option<&SignInOptions>,
) -> SignInOptions {
    resolve_sign_in_options([dialog, provider.overrides.sign_in_options.as_ref()])
}

/// Options for the email sign-in, with the submitted address set on a copy
pub fn email_sign_in_options(
    email_provider: Option<&ProviderConfig>,
    dialog: Option<&SignInOptions>,
    email: &str,
) -> SignInOptions {
    let provider_layer = email_provider.and_then(|p| p.overrides.sign_in_options.as_ref());
    let mut options = resolve_sign_in_options([dialog, provider_layer]);
    options.insert("email", email);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProviderKind, ProviderOverrides};

    fn github(options: Option<SignInOptions>) -> ProviderConfig {
        ProviderConfig::new("github", "GitHub", ProviderKind::Oauth).with_overrides(
            ProviderOverrides {
                sign_in_options: options,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_provider_options_win_as_a_whole() {
        let dialog = SignInOptions::new()
            .with("callbackUrl", "/dialog")
            .with("redirect", false);
        let provider = github(Some(SignInOptions::new().with("callbackUrl", "/github")));

        let resolved = provider_sign_in_options(&provider, Some(&dialog));
        assert_eq!(resolved, SignInOptions::new().with("callbackUrl", "/github"));
    }

    #[test]
    fn test_dialog_options_used_when_provider_has_none() {
        let dialog = SignInOptions::new().with("callbackUrl", "/dialog");
        let resolved = provider_sign_in_options(&github(None), Some(&dialog));
        assert_eq!(resolved, dialog);
    }

    #[test]
    fn test_no_layers_gives_empty_bag() {
        assert_eq!(
            provider_sign_in_options(&github(None), None),
            SignInOptions::new()
        );
    }

    #[test]
    fn test_email_options_do_not_mutate_caller_bag() {
        let dialog = SignInOptions::new().with("callbackUrl", "/dialog");
        let resolved = email_sign_in_options(None, Some(&dialog), "user@example.com");

        assert_eq!(
            resolved,
            SignInOptions::new()
                .with("callbackUrl", "/dialog")
                .with("email", "user@example.com")
        );
        assert!(dialog.get("email").is_none());
    }

    #[test]
    fn test_email_provider_options_take_precedence() {
        let email = ProviderConfig::new("email", "Email", ProviderKind::Email).with_overrides(
            ProviderOverrides {
                sign_in_options: Some(SignInOptions::new().with("redirect", false)),
                ..Default::default()
            },
        );
        let dialog = SignInOptions::new().with("callbackUrl", "/dialog");

        let resolved = email_sign_in_options(Some(&email), Some(&dialog), "a@b.io");
        assert_eq!(
            resolved,
            SignInOptions::new()
                .with("redirect", false)
                .with("email", "a@b.io")
        );
    }
}
