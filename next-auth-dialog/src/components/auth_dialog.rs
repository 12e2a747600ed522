use dioxus::prelude::*;

use crate::actions::{self, SignInOutcome};
use crate::client::use_auth_client;
use crate::components::EmailField;
use crate::config::DialogConfig;
use crate::email::Validation;
use crate::loader::ProviderLoadState;
use crate::state::DialogState;
use crate::view::{dialog_class, dialog_css, merge_styles, ContentText, DialogView, ProviderButtonView};

const BACKDROP_STYLE: &str = "position: fixed; inset: 0; z-index: 1300; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.5);";
const DIALOG_STYLE: &str = "position: relative; box-sizing: border-box; width: calc(100% - 64px); max-height: calc(100% - 64px); margin: 32px; overflow-y: auto; display: flex; flex-direction: column; background: #fff; border-radius: 4px; box-shadow: 0 11px 15px -7px rgba(0,0,0,0.2), 0 24px 38px 3px rgba(0,0,0,0.14); font-family: sans-serif;";
const TITLE_STYLE: &str = "display: flex; align-items: center; gap: 8px; padding: 16px 24px; margin: 0; font-size: 20px; font-weight: 500;";
const CLOSE_STYLE: &str = "align-items: center; justify-content: center; width: 40px; height: 40px; border: none; border-radius: 50%; background: transparent; font-size: 20px; cursor: pointer;";
const CONTENT_TEXT_STYLE: &str = "margin: 0 0 16px 0; font-size: 16px; color: #555;";
const ERROR_TEXT_STYLE: &str = "margin: 0 0 16px 0; font-size: 16px; color: #c62828;";
const PROGRESS_TRACK_STYLE: &str = "position: relative; height: 4px; margin-bottom: 16px; overflow: hidden; background: #cce0f5;";
const PROGRESS_BAR_STYLE: &str = "position: absolute; top: 0; bottom: 0; width: 40%; background: #0066cc; animation: nad-progress 1.4s ease-in-out infinite;";
const DIVIDER_STYLE: &str = "display: flex; align-items: center; gap: 12px; color: #666; font-size: 14px;";
const BUTTON_STYLE: &str = "display: flex; align-items: center; justify-content: flex-start; width: 100%; padding: 8px 22px; border: none; border-radius: 4px; background: #0066cc; color: #fff; font-size: 15px; cursor: pointer;";
const ICON_BOX_STYLE: &str = "display: inline-flex; align-items: center; justify-content: center; width: 32px; margin-right: 12px; font-size: 24px;";

#[derive(Props, Clone, PartialEq)]
pub struct AuthDialogProps {
    /// Whether the dialog is shown
    pub open: bool,
    /// Providers to offer, or the loading/error state of fetching them
    #[props(default)]
    pub status: ProviderLoadState,
    #[props(default)]
    pub config: DialogConfig,
    /// Rendered above the email field
    pub children: Element,
}

/// Modal sign-in dialog.
///
/// Shows an email field when the providers contain an `email` entry (or when
/// forced by the configuration) and one button per other provider, in the
/// order given. Sign-ins go through the auth client provided with
/// [`use_auth_client_provider`](crate::client::use_auth_client_provider).
///
/// # Example
/// ```rust,ignore
/// AuthDialog {
///     open: true,
///     status: ProviderLoadState::Ready(providers),
///     config: DialogConfig {
///         labels: DialogLabels { title: "Sign in".to_string(), ..Default::default() },
///         ..Default::default()
///     },
/// }
/// ```
#[component]
pub fn AuthDialog(props: AuthDialogProps) -> Element {
    let client = use_auth_client();
    let mut state = use_signal(DialogState::default);
    let config = props.config.clone();
    let providers = props.status.providers().cloned().unwrap_or_default();

    let change_email = use_callback({
        let validator = config.validator.clone();
        move |text: String| {
            let ticket = state.write().email_changed(text.clone());
            match validator.check(&text) {
                Validation::Ready(valid) => {
                    state.write().validation_resolved(ticket, valid);
                }
                Validation::Pending(pending) => {
                    spawn(async move {
                        let valid = pending.await;
                        if !state.write().validation_resolved(ticket, valid) {
                            log::debug!("Dropped stale email validation result");
                        }
                    });
                }
            }
        }
    });

    let submit_email = use_callback({
        let client = client.clone();
        let submitter = config.on_submit_email.clone();
        let options = config.sign_in_options.clone();
        let email_provider = providers.email_provider().cloned();
        move |_: ()| {
            let Some(email) = state.write().begin_submit() else {
                log::debug!("Ignoring email submit: address invalid or submission running");
                return;
            };
            let client = client.clone();
            let submitter = submitter.clone();
            let options = options.clone();
            let email_provider = email_provider.clone();

            spawn(async move {
                let result = actions::submit_email(
                    client.as_ref(),
                    submitter.as_ref(),
                    &email,
                    email_provider.as_ref(),
                    options.as_ref(),
                )
                .await;
                match result {
                    Ok(Some(outcome)) => follow_redirect(&outcome).await,
                    Ok(None) => {}
                    Err(e) => log::warn!("Email sign-in failed: {}", e),
                }
                state.write().finish_submit();
            });
        }
    });

    let click_provider = use_callback({
        let client = client.clone();
        let options = config.sign_in_options.clone();
        let on_success = config.on_oauth_sign_in_success;
        let on_error = config.on_oauth_sign_in_error;
        let providers = providers.clone();
        move |id: String| {
            let Some(provider) = providers.get(&id).cloned() else {
                log::warn!("Clicked unknown provider '{}'", id);
                return;
            };
            let client = client.clone();
            let options = options.clone();

            spawn(async move {
                match actions::sign_in_with_provider(client.as_ref(), &provider, options.as_ref()).await {
                    Ok(outcome) => {
                        if let Some(handler) = on_success {
                            handler.call(outcome.response.clone());
                        }
                        follow_redirect(&outcome).await;
                    }
                    Err(e) => {
                        log::warn!("Sign-in with '{}' failed: {}", provider.id, e);
                        if let Some(handler) = on_error {
                            handler.call(e);
                        }
                    }
                }
            });
        }
    });

    if !props.open {
        return rsx! {};
    }

    let view = DialogView::build(&config, &props.status);
    let styles = &config.styles;
    let on_close = config.on_close;
    let close = move || {
        if let Some(handler) = on_close {
            handler.call(());
        }
    };

    let content_style = if view.title.is_some() {
        merge_styles("padding: 8px 24px 32px 24px;", Some(&styles.content))
    } else {
        merge_styles("padding: 8px 24px 20px 24px;", Some(&styles.content))
    };
    let progress = match &config.progress {
        Some(custom) => custom.clone(),
        None => rsx! {
            div { style: merge_styles(PROGRESS_TRACK_STYLE, Some(&styles.progress)),
                div { style: PROGRESS_BAR_STYLE }
            }
        },
    };
    let email = state.read().email().to_string();
    let valid_email = state.read().valid_email();
    let submitting = state.read().email_submitting();

    rsx! {
        style { {dialog_css(config.breakpoint)} }
        div {
            class: "nad-backdrop",
            style: BACKDROP_STYLE,
            onclick: move |_| close(),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: dialog_class(config.breakpoint),
                role: "dialog",
                "aria-modal": "true",
                style: merge_styles(DIALOG_STYLE, Some(&styles.dialog)),
                onclick: move |evt| evt.stop_propagation(),

                if let Some(title) = &view.title {
                    h2 { style: merge_styles(TITLE_STYLE, Some(&styles.title)),
                        button {
                            class: "nad-close",
                            r#type: "button",
                            "aria-label": "{config.labels.close}",
                            style: CLOSE_STYLE,
                            onclick: move |_| close(),
                            "✕"
                        }
                        span { "{title}" }
                    }
                }

                div { style: content_style,
                    if view.loading {
                        {progress}
                    } else {
                        match &view.content_text {
                            ContentText::Error(message) => rsx! {
                                p { style: merge_styles(ERROR_TEXT_STYLE, Some(&styles.error_text)), "{message}" }
                            },
                            ContentText::Description(text) if !text.is_empty() => rsx! {
                                p { style: merge_styles(CONTENT_TEXT_STYLE, Some(&styles.content_text)), "{text}" }
                            },
                            ContentText::Description(_) => rsx! {},
                        }
                        div { style: "display: flex; flex-direction: column; gap: 16px;",
                            {props.children.clone()}
                            if let Some(field) = &view.email_field {
                                EmailField {
                                    email: email.clone(),
                                    valid_email,
                                    submitting,
                                    placeholder: field.placeholder.clone(),
                                    helper_text: field.helper_text.clone(),
                                    style: field.style.clone(),
                                    disable_auto_focus: config.disable_auto_focus,
                                    on_change: change_email,
                                    on_submit: submit_email,
                                }
                            }
                            if let Some(divider) = &view.divider {
                                div { style: merge_styles(DIVIDER_STYLE, Some(&styles.divider)),
                                    hr { style: "flex: 1; border: none; border-top: 1px solid #ddd;" }
                                    span { "{divider}" }
                                    hr { style: "flex: 1; border: none; border-top: 1px solid #ddd;" }
                                }
                            }
                            for button in view.buttons.iter() {
                                ProviderButton {
                                    key: "{button.id}",
                                    button: button.clone(),
                                    on_click: click_provider,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProviderButton(button: ProviderButtonView, on_click: EventHandler<String>) -> Element {
    let id = button.id.clone();

    rsx! {
        button {
            r#type: "button",
            style: merge_styles(BUTTON_STYLE, Some(&button.button_style)),
            onclick: move |_| on_click.call(id.clone()),
            if let Some(icon) = &button.icon {
                span { style: merge_styles(ICON_BOX_STYLE, Some(&button.icon_style)),
                    if let Some(src) = icon.image_url() {
                        img { src: "{src}", width: "24", height: "24", alt: "" }
                    } else if let crate::icons::IconSource::Text(text) = icon {
                        "{text}"
                    }
                }
            }
            if let Some(label) = &button.label {
                span { style: button.label_style.clone(), "{label}" }
            }
        }
    }
}

/// Sends the browser to the URL returned by the auth client, when requested
async fn follow_redirect(outcome: &SignInOutcome) {
    if let Some(url) = &outcome.redirect_to {
        log::info!("Redirecting to {}", url);
        let target = serde_json::Value::from(url.as_str());
        if let Err(e) = document::eval(&format!("window.location.href = {};", target)).await {
            log::warn!("Redirect to {} failed: {:?}", url, e);
        }
    }
}
