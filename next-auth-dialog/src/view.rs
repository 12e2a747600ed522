//! What the dialog shows, derived from its configuration and state.

use crate::config::DialogConfig;
use crate::icons::{provider_icon, IconSource};
use crate::loader::ProviderLoadState;
use crate::models::{Breakpoint, ProviderConfig};

/// Text area between the title and the controls
#[derive(Debug, Clone, PartialEq)]
pub enum ContentText {
    Description(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailFieldView {
    pub placeholder: String,
    pub helper_text: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderButtonView {
    pub id: String,
    pub icon: Option<IconSource>,
    pub label: Option<String>,
    pub button_style: String,
    pub label_style: String,
    pub icon_style: String,
}

/// Render model of the dialog
#[derive(Debug, Clone, PartialEq)]
pub struct DialogView {
    pub loading: bool,
    /// `None` when the title block is hidden
    pub title: Option<String>,
    pub content_text: ContentText,
    pub email_field: Option<EmailFieldView>,
    /// Divider text, present only between an email field and provider buttons
    pub divider: Option<String>,
    pub buttons: Vec<ProviderButtonView>,
}

impl DialogView {
    pub fn build(config: &DialogConfig, status: &ProviderLoadState) -> Self {
        let labels = &config.labels;
        let title = (!config.hide_title).then(|| labels.title.clone());
        let content_text = match status.error() {
            Some(error) => ContentText::Error(error.to_string()),
            None => ContentText::Description(labels.description.clone()),
        };

        if status.is_loading() {
            return Self {
                loading: true,
                title,
                content_text,
                email_field: None,
                divider: None,
                buttons: Vec::new(),
            };
        }

        let providers = status.providers();
        let email_provider = providers.and_then(|p| p.email_provider());
        let email_field = (email_provider.is_some() || config.always_show_email_field)
            .then(|| email_field_view(config, email_provider));

        let buttons: Vec<ProviderButtonView> = providers
            .map(|p| p.buttons().map(|provider| button_view(config, provider)).collect())
            .unwrap_or_default();

        let divider = (email_field.is_some() && !buttons.is_empty())
            .then(|| labels.divider.clone());

        Self {
            loading: false,
            title,
            content_text,
            email_field,
            divider,
            buttons,
        }
    }
}

fn email_field_view(config: &DialogConfig, provider: Option<&ProviderConfig>) -> EmailFieldView {
    let overrides = provider.map(|p| &p.overrides);
    let placeholder = overrides
        .and_then(|o| o.placeholder.clone())
        .or_else(|| provider.map(|p| p.name.clone()).filter(|name| !name.is_empty()))
        .unwrap_or_else(|| config.labels.email_placeholder.clone());
    let helper_text = overrides
        .and_then(|o| o.helper_text.clone())
        .unwrap_or_else(|| config.labels.email_helper_text.clone());

    EmailFieldView {
        placeholder,
        helper_text,
        style: merge_styles(
            &config.styles.email_field,
            overrides.and_then(|o| o.text_field_style.as_deref()),
        ),
    }
}

fn button_view(config: &DialogConfig, provider: &ProviderConfig) -> ProviderButtonView {
    let overrides = &provider.overrides;
    let hide_icon = config.hide_provider_icon || overrides.hide_provider_icon.unwrap_or(false);
    let hide_name = config.hide_provider_name || overrides.hide_provider_name.unwrap_or(false);

    ProviderButtonView {
        id: provider.id.clone(),
        icon: (!hide_icon).then(|| provider_icon(provider)),
        label: (!hide_name).then(|| {
            overrides
                .label
                .clone()
                .unwrap_or_else(|| provider.name.clone())
        }),
        button_style: merge_styles(&config.styles.button, overrides.button_style.as_deref()),
        label_style: merge_styles(&config.styles.button_label, overrides.label_style.as_deref()),
        icon_style: merge_styles(&config.styles.button_icon, overrides.icon_style.as_deref()),
    }
}

/// Joins inline style fragments; later declarations win.
pub fn merge_styles(base: &str, over: Option<&str>) -> String {
    [Some(base), over]
        .into_iter()
        .flatten()
        .map(|s| s.trim().trim_end_matches(';').trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// CSS class of a dialog using `breakpoint`
pub fn dialog_class(breakpoint: Breakpoint) -> String {
    format!("nad-dialog nad-bp-{}", breakpoint.name())
}

/// Stylesheet for the breakpoint-dependent layout and the animations
pub fn dialog_css(breakpoint: Breakpoint) -> String {
    let bp = breakpoint.name();
    format!(
        ".nad-dialog.nad-bp-{bp} {{ max-width: {max}px; }}\n\
         .nad-dialog.nad-bp-{bp} .nad-close {{ display: none; }}\n\
         @media (max-width: {down:.2}px) {{\n\
         \x20 .nad-dialog.nad-bp-{bp} {{ max-width: none; width: 100%; height: 100%; max-height: none; margin: 0; border-radius: 0; }}\n\
         \x20 .nad-dialog.nad-bp-{bp} .nad-close {{ display: inline-flex; }}\n\
         }}\n\
         @keyframes nad-spin {{ to {{ transform: rotate(360deg); }} }}\n\
         @keyframes nad-progress {{ from {{ left: -40%; }} to {{ left: 100%; }} }}\n",
        bp = bp,
        max = breakpoint.dialog_max_width_px(),
        down = f64::from(breakpoint.width_px()) - 0.05,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialogLabels;
    use crate::models::{ProviderKind, ProviderMapping, ProviderOverrides};

    fn oauth(id: &str, name: &str) -> ProviderConfig {
        ProviderConfig::new(id, name, ProviderKind::Oauth)
    }

    fn email() -> ProviderConfig {
        ProviderConfig::new("email", "Email", ProviderKind::Email)
    }

    fn ready(configs: Vec<ProviderConfig>) -> ProviderLoadState {
        ProviderLoadState::Ready(configs.into_iter().collect())
    }

    fn button_ids(view: &DialogView) -> Vec<&str> {
        view.buttons.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_loading_shows_only_progress() {
        let view = DialogView::build(&DialogConfig::default(), &ProviderLoadState::Loading);
        assert!(view.loading);
        assert!(view.email_field.is_none());
        assert!(view.divider.is_none());
        assert!(view.buttons.is_empty());
        assert_eq!(view.title, Some(String::new()));
    }

    #[test]
    fn test_buttons_follow_mapping_order_without_email() {
        let status = ready(vec![oauth("auth0", "Auth0"), email(), oauth("github", "GitHub")]);
        let view = DialogView::build(&DialogConfig::default(), &status);

        assert_eq!(button_ids(&view), vec!["auth0", "github"]);
        assert!(view.email_field.is_some());
        assert_eq!(view.divider.as_deref(), Some("or"));
    }

    #[test]
    fn test_failed_load_shows_error_and_no_buttons() {
        let status = ProviderLoadState::Failed("Error loading providers: boom".to_string());
        let view = DialogView::build(&DialogConfig::default(), &status);

        assert!(!view.loading);
        assert!(view.buttons.is_empty());
        assert_eq!(
            view.content_text,
            ContentText::Error("Error loading providers: boom".to_string())
        );
    }

    #[test]
    fn test_always_show_email_field_without_email_provider() {
        let config = DialogConfig {
            always_show_email_field: true,
            ..Default::default()
        };

        let with_oauth = DialogView::build(&config, &ready(vec![oauth("github", "GitHub")]));
        assert!(with_oauth.email_field.is_some());
        assert!(with_oauth.divider.is_some());

        let alone = DialogView::build(&config, &ready(vec![]));
        assert!(alone.email_field.is_some());
        assert!(alone.divider.is_none());
    }

    #[test]
    fn test_no_divider_without_email_field() {
        let view = DialogView::build(&DialogConfig::default(), &ready(vec![oauth("github", "GitHub")]));
        assert!(view.email_field.is_none());
        assert!(view.divider.is_none());
        assert_eq!(button_ids(&view), vec!["github"]);
    }

    #[test]
    fn test_hide_title() {
        let config = DialogConfig {
            hide_title: true,
            ..Default::default()
        };
        assert_eq!(DialogView::build(&config, &ready(vec![])).title, None);
    }

    #[test]
    fn test_label_and_icon_suppression() {
        let zoho = oauth("zoho", "Zoho").with_overrides(ProviderOverrides {
            hide_provider_name: Some(true),
            ..Default::default()
        });
        let github = oauth("github", "GitHub").with_overrides(ProviderOverrides {
            label: Some("Continue with GitHub".to_string()),
            ..Default::default()
        });
        let status = ready(vec![github, zoho]);

        let view = DialogView::build(&DialogConfig::default(), &status);
        assert_eq!(view.buttons[0].label.as_deref(), Some("Continue with GitHub"));
        assert_eq!(view.buttons[1].label, None);
        assert!(view.buttons[1].icon.is_some());

        let config = DialogConfig {
            hide_provider_icon: true,
            ..Default::default()
        };
        let view = DialogView::build(&config, &status);
        assert!(view.buttons.iter().all(|b| b.icon.is_none()));
    }

    #[test]
    fn test_email_field_text_precedence() {
        let config = DialogConfig {
            labels: DialogLabels {
                email_placeholder: "E-Mail".to_string(),
                email_helper_text: "Link kommt per Mail.".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let plain = DialogView::build(&config, &ready(vec![ProviderConfig::new("email", "", ProviderKind::Email)]));
        let field = plain.email_field.unwrap();
        assert_eq!(field.placeholder, "E-Mail");
        assert_eq!(field.helper_text, "Link kommt per Mail.");

        let custom = email().with_overrides(ProviderOverrides {
            placeholder: Some("you@company.com".to_string()),
            helper_text: Some("Check your inbox".to_string()),
            ..Default::default()
        });
        let field = DialogView::build(&config, &ready(vec![custom])).email_field.unwrap();
        assert_eq!(field.placeholder, "you@company.com");
        assert_eq!(field.helper_text, "Check your inbox");

        let named = DialogView::build(&config, &ready(vec![email()])).email_field.unwrap();
        assert_eq!(named.placeholder, "Email");
    }

    #[test]
    fn test_sorted_mapping_renders_in_name_order() {
        let raw: ProviderMapping = vec![
            oauth("twitter", "Twitter"),
            oauth("github", "GitHub"),
            ProviderConfig::new("credentials", "Credentials", ProviderKind::from("credentials".to_string())),
            oauth("auth0", "auth0"),
        ]
        .into_iter()
        .collect();
        let status = ProviderLoadState::Ready(crate::loader::normalize_providers(raw, true));

        let view = DialogView::build(&DialogConfig::default(), &status);
        assert_eq!(button_ids(&view), vec!["auth0", "github", "twitter"]);
    }

    #[test]
    fn test_merge_styles() {
        assert_eq!(merge_styles("color: red;", Some("color: blue")), "color: red; color: blue");
        assert_eq!(merge_styles("", Some("margin: 0;")), "margin: 0");
        assert_eq!(merge_styles("padding: 4px", None), "padding: 4px");
    }

    #[test]
    fn test_dialog_css_media_query() {
        let css = dialog_css(Breakpoint::Sm);
        assert!(css.contains("@media (max-width: 599.95px)"));
        assert!(css.contains(".nad-dialog.nad-bp-sm { max-width: 600px; }"));
        assert_eq!(dialog_class(Breakpoint::Sm), "nad-dialog nad-bp-sm");
    }
}
