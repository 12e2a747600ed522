use dioxus::prelude::*;
use dioxus_i18n::prelude::*;
use dioxus_i18n::t;
use next_auth_dialog::{
    use_auth_client_provider, AuthDialogError, DialogConfig, DialogLabels, NextAuthClient,
    NextAuthDialog, SignInResponse,
};

mod config;
mod error;
mod i18n;

use config::DemoSettings;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();

    let settings = DemoSettings::load().unwrap_or_else(|e| {
        log::warn!("Using default settings: {}", e);
        DemoSettings::default()
    });
    let client = match settings.auth_client() {
        Ok(client) => client,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::new()
        .with_context(settings)
        .with_context(client)
        .launch(App);
}

#[cfg(target_os = "android")]
fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("next-auth-dialog"),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[component]
fn App() -> Element {
    let settings = use_context::<DemoSettings>();
    let client = use_context::<NextAuthClient>();
    use_auth_client_provider(move || client);
    let language = settings.language();
    use_init_i18n(move || i18n::init_i18n(language));

    let mut open = use_signal(|| true);
    let mut last_event = use_signal(|| None::<String>);

    let on_close = use_callback(move |_: ()| open.set(false));
    let on_success = use_callback(move |response: SignInResponse| {
        log::info!("Sign-in started: {:?}", response.url);
        last_event.set(Some(t!("demo-sign-in-started", status: response.status)));
    });
    let on_error = use_callback(move |error: AuthDialogError| {
        last_event.set(Some(t!("demo-sign-in-failed", error: error.to_string())));
    });

    let config = DialogConfig {
        breakpoint: settings.breakpoint,
        labels: DialogLabels {
            title: t!("dialog-title"),
            description: t!("dialog-description"),
            divider: t!("dialog-divider"),
            email_helper_text: t!("email-helper-text"),
            email_placeholder: t!("email-placeholder"),
            close: t!("dialog-close"),
        },
        hide_title: settings.hide_title,
        always_show_email_field: settings.always_show_email_field,
        sign_in_options: settings.sign_in_options.clone(),
        on_close: Some(on_close),
        on_oauth_sign_in_success: Some(on_success),
        on_oauth_sign_in_error: Some(on_error),
        ..Default::default()
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "demo",
            h1 { {t!("demo-heading")} }
            button { class: "btn-primary", onclick: move |_| open.set(true), {t!("demo-open-dialog")} }
            if let Some(event) = last_event() {
                p { class: "demo-event", "{event}" }
            }

            NextAuthDialog {
                open: open(),
                url: settings.providers_url.clone(),
                disable_sort_by_name: settings.disable_sort_by_name,
                config,
            }
        }
    }
}
