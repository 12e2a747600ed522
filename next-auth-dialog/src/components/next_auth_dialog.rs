use dioxus::prelude::*;
use std::collections::HashMap;
use url::Url;

use crate::client::use_auth_client;
use crate::components::AuthDialog;
use crate::config::DialogConfig;
use crate::error::AuthDialogError;
use crate::loader::{ProviderLoadState, ProviderLoader, DEFAULT_PROVIDERS_URL};
use crate::models::{ProviderMapping, ProviderOverrides};

#[derive(Props, Clone, PartialEq)]
pub struct NextAuthDialogProps {
    pub open: bool,
    /// Provider discovery endpoint; relative URLs resolve against the auth client
    #[props(default = DEFAULT_PROVIDERS_URL.to_string(), into)]
    pub url: String,
    /// Keep the backend's provider order instead of sorting by name
    #[props(default)]
    pub disable_sort_by_name: bool,
    /// Presentation overrides keyed by provider id, laid over the fetched data
    #[props(default)]
    pub provider_overrides: HashMap<String, ProviderOverrides>,
    #[props(default)]
    pub config: DialogConfig,
    pub children: Element,
}

/// [`AuthDialog`] fed by the providers of a NextAuth backend.
///
/// The provider list is fetched when the component mounts and again when
/// `url` or the sort flag change. Fetching runs on the component's scope and
/// is dropped with it.
///
/// # Example
/// ```rust,ignore
/// use_auth_client_provider(|| NextAuthClient::new("http://localhost:3000/api/auth").unwrap());
///
/// NextAuthDialog {
///     open: open(),
///     config: DialogConfig {
///         on_close: Some(EventHandler::new(move |_| open.set(false))),
///         ..Default::default()
///     },
/// }
/// ```
#[component]
pub fn NextAuthDialog(props: NextAuthDialogProps) -> Element {
    let client = use_auth_client();
    let url = props.url.clone();
    let sort_by_name = !props.disable_sort_by_name;

    let providers = use_resource(use_reactive!(|(url, sort_by_name)| {
        load_providers(url, client.endpoint_base(), sort_by_name)
    }));

    let status = match &*providers.read() {
        None => ProviderLoadState::Loading,
        Some(Ok(mapping)) => {
            let mut mapping = mapping.clone();
            mapping.apply_overrides(&props.provider_overrides);
            ProviderLoadState::Ready(mapping)
        }
        Some(Err(e)) => ProviderLoadState::Failed(e.user_message()),
    };

    rsx! {
        AuthDialog { open: props.open, status, config: props.config.clone(), {props.children.clone()} }
    }
}

async fn load_providers(
    url: String,
    base: Url,
    sort_by_name: bool,
) -> Result<ProviderMapping, AuthDialogError> {
    let result = match ProviderLoader::from_url(&url, Some(&base)) {
        Ok(loader) => loader.sort_by_name(sort_by_name).load().await,
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        log::error!("Error loading providers from {}: {}", url, e);
    }
    result
}
