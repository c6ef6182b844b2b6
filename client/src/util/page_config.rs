//! Read the page configuration the host rendered onto `<body>`.

use widgets::page_config::PageConfig;
#[cfg(feature = "hydrate")]
use widgets::page_config::{LOGOUT_URL_ATTR, PROFILE_THEME_ATTR, SESSION_TIMEOUT_ATTR};

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

/// Parsed body attributes, or defaults (monitor off, theme auto) when the
/// page has no body or runs outside the browser.
pub fn read() -> PageConfig {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return PageConfig::default();
        };
        let timeout = body.get_attribute(SESSION_TIMEOUT_ATTR);
        let theme = body.get_attribute(PROFILE_THEME_ATTR);
        let logout = body.get_attribute(LOGOUT_URL_ATTR);
        PageConfig::from_attributes(timeout.as_deref(), theme.as_deref(), logout.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PageConfig::default()
    }
}
