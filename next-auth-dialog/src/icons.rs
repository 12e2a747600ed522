use crate::models::ProviderConfig;

/// Shown when a provider has neither an explicit nor a known icon
pub const FALLBACK_ICON: &str = "mdi:login";

/// How an icon is drawn
#[derive(Debug, Clone, PartialEq)]
pub enum IconSource {
    /// Iconify `prefix:name`
    Iconify(String),
    /// Image URL
    Url(String),
    /// Literal text such as an emoji
    Text(String),
}

impl IconSource {
    /// Classifies an icon string from provider data
    pub fn parse(icon: &str) -> Self {
        if icon.starts_with("http://")
            || icon.starts_with("https://")
            || icon.starts_with('/')
            || icon.starts_with("data:")
        {
            IconSource::Url(icon.to_string())
        } else if is_iconify_name(icon) {
            IconSource::Iconify(icon.to_string())
        } else {
            IconSource::Text(icon.to_string())
        }
    }

    /// Image address to render, if this icon is an image
    pub fn image_url(&self) -> Option<String> {
        match self {
            IconSource::Iconify(name) => iconify_url(name),
            IconSource::Url(url) => Some(url.clone()),
            IconSource::Text(_) => None,
        }
    }
}

fn is_iconify_name(icon: &str) -> bool {
    match icon.split_once(':') {
        Some((prefix, name)) => {
            let valid = |s: &str| {
                !s.is_empty()
                    && s.chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            };
            valid(prefix) && valid(name)
        }
        None => false,
    }
}

/// SVG address of an Iconify icon on the public API
pub fn iconify_url(name: &str) -> Option<String> {
    let (prefix, icon) = name.split_once(':')?;
    Some(format!("https://api.iconify.design/{}/{}.svg", prefix, icon))
}

/// Icon for well-known provider ids
pub fn builtin_icon(provider_id: &str) -> Option<&'static str> {
    let icon = match provider_id {
        "42-school" => "simple-icons:42",
        "apple" => "mdi:apple",
        "atlassian" => "logos:atlassian",
        "auth0" => "logos:auth0-icon",
        "azure-ad" | "azure-ad-b2c" => "logos:microsoft-azure",
        "battlenet" => "simple-icons:battledotnet",
        "box" => "logos:box",
        "cognito" => "logos:aws-cognito",
        "discord" => "logos:discord-icon",
        "dropbox" => "logos:dropbox",
        "email" => "mdi:email-outline",
        "eveonline" => "simple-icons:eveonline",
        "facebook" => "logos:facebook",
        "foursquare" => "logos:foursquare-icon",
        "freshbooks" => "simple-icons:freshbooks",
        "github" => "mdi:github",
        "gitlab" => "logos:gitlab",
        "google" => "logos:google-icon",
        "hubspot" => "logos:hubspot",
        "instagram" => "skill-icons:instagram",
        "kakao" => "simple-icons:kakaotalk",
        "keycloak" => "simple-icons:keycloak",
        "line" => "simple-icons:line",
        "linkedin" => "logos:linkedin-icon",
        "mailchimp" => "logos:mailchimp-freddie",
        "mailru" => "simple-icons:maildotru",
        "medium" => "logos:medium-icon",
        "naver" => "simple-icons:naver",
        "netlify" => "logos:netlify",
        "okta" => "logos:okta-icon",
        "onelogin" => "simple-icons:onelogin",
        "osu" => "simple-icons:osu",
        "patreon" => "logos:patreon",
        "pipedrive" => "simple-icons:pipedrive",
        "reddit" => "logos:reddit-icon",
        "salesforce" => "logos:salesforce",
        "slack" => "logos:slack-icon",
        "spotify" => "logos:spotify-icon",
        "strava" => "logos:strava",
        "todoist" => "simple-icons:todoist",
        "trakt" => "simple-icons:trakt",
        "twitch" => "logos:twitch",
        "twitter" => "logos:twitter",
        "vk" => "simple-icons:vk",
        "wikimedia" => "simple-icons:wikimediacommons",
        "wordpress" => "logos:wordpress-icon",
        "yandex" => "simple-icons:yandexcloud",
        "zoho" => "simple-icons:zoho",
        "zoom" => "logos:zoom-icon",
        _ => return None,
    };
    Some(icon)
}

/// Explicit override, then the built-in table, then [`FALLBACK_ICON`]
pub fn provider_icon(provider: &ProviderConfig) -> IconSource {
    match &provider.overrides.icon {
        Some(icon) => IconSource::parse(icon),
        None => IconSource::Iconify(
            builtin_icon(&provider.id)
                .unwrap_or(FALLBACK_ICON)
                .to_string(),
        ),
    }
}
