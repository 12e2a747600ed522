use dioxus::prelude::*;

use crate::view::merge_styles;

const FIELD_STYLE: &str = "display: flex; align-items: center; gap: 8px; padding: 4px 8px 4px 12px; border: 1px solid #c4c4c4; border-radius: 4px; background: #fff;";
const INPUT_STYLE: &str = "flex: 1; min-width: 0; padding: 12px 0; border: none; outline: none; font-size: 16px; background: transparent;";
const SUBMIT_STYLE: &str = "display: inline-flex; align-items: center; justify-content: center; width: 40px; height: 40px; border: none; border-radius: 50%; background: transparent; font-size: 20px; cursor: pointer;";
const SPINNER_STYLE: &str = "display: inline-block; width: 20px; height: 20px; border: 3px solid #0066cc; border-right-color: transparent; border-radius: 50%; animation: nad-spin 0.8s linear infinite;";

/// Email input with a send button.
///
/// Validation and submission belong to the parent: every keystroke is reported
/// through `on_change`, and `on_submit` fires on Enter or on the send button
/// only while `valid_email` is set and nothing is being submitted.
#[component]
pub fn EmailField(
    /// Current text
    email: String,
    valid_email: bool,
    /// Shows a spinner on the send button and blocks further submits
    #[props(default)]
    submitting: bool,
    placeholder: String,
    helper_text: String,
    /// Extra inline CSS for the field
    #[props(default)]
    style: String,
    #[props(default)]
    disable_auto_focus: bool,
    on_change: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let can_submit = valid_email && !submitting;

    rsx! {
        div { class: "nad-email-field", style: "display: flex; flex-direction: column; gap: 4px;",
            div { style: merge_styles(FIELD_STYLE, Some(&style)),
                span { style: "font-size: 20px; color: #666;", "✉️" }
                input {
                    r#type: "email",
                    required: true,
                    autofocus: !disable_auto_focus,
                    value: "{email}",
                    placeholder: "{placeholder}",
                    style: INPUT_STYLE,
                    oninput: move |evt| on_change.call(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter && can_submit {
                            on_submit.call(());
                        }
                    },
                }
                button {
                    r#type: "button",
                    "aria-label": "Send sign-in link",
                    disabled: !can_submit,
                    style: if can_submit { SUBMIT_STYLE.to_string() } else { format!("{} opacity: 0.4; cursor: default;", SUBMIT_STYLE) },
                    onclick: move |_| {
                        if can_submit {
                            on_submit.call(());
                        }
                    },
                    if submitting {
                        span { style: SPINNER_STYLE }
                    } else {
                        "➤"
                    }
                }
            }
            p { style: "margin: 0 0 0 14px; font-size: 12px; color: #666;", "{helper_text}" }
        }
    }
}
