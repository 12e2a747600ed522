use dioxus_i18n::prelude::*;
use unic_langid::{langid, LanguageIdentifier};

/// Initialize i18n with the bundled locales, falling back to English
pub fn init_i18n(language: LanguageIdentifier) -> I18nConfig {
    I18nConfig::new(language)
        .with_locale(Locale::new_static(
            langid!("en-US"),
            include_str!("../locales/en-US.ftl"),
        ))
        .with_locale(Locale::new_static(
            langid!("de-DE"),
            include_str!("../locales/de-DE.ftl"),
        ))
        .with_fallback(langid!("en-US"))
}
