//! User-installed web apps persisted under [`INSTALLED_WEB_APPS_KEY`], plus the embedding policy
//! used when one is launched.
//!
//! Names are unique case-insensitively (unlike files).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::storage::{
    kv::{load_json_with, save_json_with, KeyValueStore},
    INSTALLED_WEB_APPS_KEY,
};

/// Hosts that refuse to render inside a frame. Subdomains match too.
pub const NON_EMBEDDABLE_HOSTS: &[&str] = &[
    "google.com",
    "youtube.com",
    "github.com",
    "facebook.com",
    "twitter.com",
    "x.com",
    "instagram.com",
    "linkedin.com",
    "amazon.com",
    "netflix.com",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One installed web app as stored on disk.
pub struct InstalledWebApp {
    /// Display name, unique ignoring case.
    pub name: String,
    /// Absolute URL the app opens.
    pub url: String,
    /// Favicon URL derived from the url's host.
    pub icon: String,
}

/// Installer validation and persistence failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallError {
    /// Name or url was blank.
    #[error("name and url are required")]
    MissingField,
    /// The url is not an absolute URL with a host.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// An app with the same name (ignoring case) exists.
    #[error("web app \"{0}\" is already installed")]
    DuplicateName(String),
    /// The index does not address an installed app.
    #[error("no web app at index {0}")]
    IndexOutOfRange(usize),
    /// The backing store could not be read or written.
    #[error("web app store failure: {0}")]
    Store(String),
}

impl InstallError {
    /// Fixed message shown in the installer's message area.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField => "Please enter both a name and a URL.".to_string(),
            Self::InvalidUrl(_) => "Please enter a valid URL (e.g. https://example.com).".to_string(),
            Self::DuplicateName(name) => format!("An app named \"{name}\" is already installed."),
            Self::IndexOutOfRange(_) => "That app is no longer installed.".to_string(),
            Self::Store(_) => "Could not save the installed apps.".to_string(),
        }
    }
}

/// Whether a URL can be shown in an embedded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedPolicy {
    /// Render inside a frame sized to the window.
    Embed,
    /// Render a fallback with an "open in new tab" action.
    OpenExternally,
}

/// Favicon service URL for a host.
pub fn favicon_url(host: &str) -> String {
    format!("https://www.google.com/s2/favicons?domain={host}&sz=64")
}

/// Returns the host of an absolute URL.
fn absolute_url_host(url: &str) -> Result<String, InstallError> {
    let parsed = Url::parse(url).map_err(|_| InstallError::InvalidUrl(url.to_string()))?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .ok_or_else(|| InstallError::InvalidUrl(url.to_string()))
}

/// Validates an install request against the current collection and builds the record.
///
/// # Errors
///
/// Returns [`InstallError::MissingField`], [`InstallError::InvalidUrl`], or
/// [`InstallError::DuplicateName`], checked in that order.
pub fn validate_install(
    apps: &[InstalledWebApp],
    name: &str,
    url: &str,
) -> Result<InstalledWebApp, InstallError> {
    let name = name.trim();
    let url = url.trim();
    if name.is_empty() || url.is_empty() {
        return Err(InstallError::MissingField);
    }
    let host = absolute_url_host(url)?;
    let lowered = name.to_lowercase();
    if apps.iter().any(|app| app.name.to_lowercase() == lowered) {
        return Err(InstallError::DuplicateName(name.to_string()));
    }
    Ok(InstalledWebApp {
        name: name.to_string(),
        url: url.to_string(),
        icon: favicon_url(&host),
    })
}

/// Decides how a launched web app is rendered.
///
/// Unparsable URLs are opened externally since a frame would only show a browser error.
pub fn embed_policy(url: &str) -> EmbedPolicy {
    let Ok(host) = absolute_url_host(url) else {
        return EmbedPolicy::OpenExternally;
    };
    let host = host.to_lowercase();
    let blocked = NON_EMBEDDABLE_HOSTS.iter().any(|denied| {
        host == *denied
            || host
                .strip_suffix(denied)
                .is_some_and(|prefix| prefix.ends_with('.'))
    });
    if blocked {
        EmbedPolicy::OpenExternally
    } else {
        EmbedPolicy::Embed
    }
}

/// Loads the installed web apps. A missing key is an empty collection.
///
/// # Errors
///
/// Returns an error when the store read fails or the stored JSON is corrupt.
pub async fn load_web_apps<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<Vec<InstalledWebApp>, String> {
    Ok(load_json_with(store, INSTALLED_WEB_APPS_KEY)
        .await?
        .unwrap_or_default())
}

/// Validates, appends, and persists a web app, returning the updated collection.
///
/// # Errors
///
/// See [`validate_install`]. Nothing is written on failure.
pub async fn install_web_app<S: KeyValueStore + ?Sized>(
    store: &S,
    name: &str,
    url: &str,
) -> Result<Vec<InstalledWebApp>, InstallError> {
    let mut apps = load_web_apps(store).await.map_err(InstallError::Store)?;
    let record = validate_install(&apps, name, url)?;
    apps.push(record);
    save_json_with(store, INSTALLED_WEB_APPS_KEY, &apps)
        .await
        .map_err(InstallError::Store)?;
    Ok(apps)
}

/// Removes and persists the web app at `index`, returning the updated collection.
///
/// # Errors
///
/// Returns [`InstallError::IndexOutOfRange`] or [`InstallError::Store`].
pub async fn uninstall_web_app<S: KeyValueStore + ?Sized>(
    store: &S,
    index: usize,
) -> Result<Vec<InstalledWebApp>, InstallError> {
    let mut apps = load_web_apps(store).await.map_err(InstallError::Store)?;
    if index >= apps.len() {
        return Err(InstallError::IndexOutOfRange(index));
    }
    apps.remove(index);
    save_json_with(store, INSTALLED_WEB_APPS_KEY, &apps)
        .await
        .map_err(InstallError::Store)?;
    Ok(apps)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::MemoryKeyValueStore;

    #[test]
    fn install_derives_icon_from_host() {
        let store = MemoryKeyValueStore::default();
        let apps = block_on(install_web_app(&store, " Docs ", "https://docs.example.com/a?b=1"))
            .expect("install");
        assert_eq!(
            apps,
            vec![InstalledWebApp {
                name: "Docs".to_string(),
                url: "https://docs.example.com/a?b=1".to_string(),
                icon: "https://www.google.com/s2/favicons?domain=docs.example.com&sz=64"
                    .to_string(),
            }]
        );
    }

    #[test]
    fn unparsable_url_leaves_collection_unchanged_with_message() {
        let store = MemoryKeyValueStore::default();
        block_on(install_web_app(&store, "Wiki", "https://wikipedia.org")).expect("seed");
        let before = store.raw(INSTALLED_WEB_APPS_KEY);

        let err = block_on(install_web_app(&store, "Bad", "not a url")).unwrap_err();

        assert_eq!(err, InstallError::InvalidUrl("not a url".to_string()));
        assert!(!err.user_message().is_empty());
        assert_eq!(store.raw(INSTALLED_WEB_APPS_KEY), before);
    }

    #[test]
    fn blank_fields_are_rejected_first() {
        assert_eq!(
            validate_install(&[], "  ", "https://a.example"),
            Err(InstallError::MissingField)
        );
        assert_eq!(validate_install(&[], "A", ""), Err(InstallError::MissingField));
    }

    #[test]
    fn host_less_urls_are_invalid() {
        assert!(matches!(
            validate_install(&[], "Mail", "mailto:someone@example.com"),
            Err(InstallError::InvalidUrl(_))
        ));
    }

    #[test]
    fn duplicate_names_ignore_case() {
        let store = MemoryKeyValueStore::default();
        block_on(install_web_app(&store, "Docs", "https://docs.example.com")).expect("seed");
        let err = block_on(install_web_app(&store, "DOCS", "https://other.example.com"))
            .unwrap_err();
        assert_eq!(err, InstallError::DuplicateName("DOCS".to_string()));
        assert_eq!(block_on(load_web_apps(&store)).expect("load").len(), 1);
    }

    #[test]
    fn install_then_uninstall_restores_collection() {
        let store = MemoryKeyValueStore::default();
        block_on(install_web_app(&store, "Wiki", "https://wikipedia.org")).expect("seed");
        let before = block_on(load_web_apps(&store)).expect("load");

        let after_install =
            block_on(install_web_app(&store, "Docs", "https://docs.example.com")).expect("install");
        assert_eq!(after_install.len(), before.len() + 1);
        let after_uninstall =
            block_on(uninstall_web_app(&store, after_install.len() - 1)).expect("uninstall");

        assert_eq!(after_uninstall, before);
        assert_eq!(block_on(load_web_apps(&store)).expect("reload"), before);
    }

    #[test]
    fn uninstall_out_of_range_is_rejected() {
        let store = MemoryKeyValueStore::default();
        assert_eq!(
            block_on(uninstall_web_app(&store, 0)).unwrap_err(),
            InstallError::IndexOutOfRange(0)
        );
        assert_eq!(store.raw(INSTALLED_WEB_APPS_KEY), None);
    }

    #[test]
    fn deny_listed_hosts_and_subdomains_open_externally() {
        assert_eq!(embed_policy("https://github.com/rust-lang"), EmbedPolicy::OpenExternally);
        assert_eq!(embed_policy("https://www.YouTube.com/"), EmbedPolicy::OpenExternally);
        assert_eq!(embed_policy("https://x.com"), EmbedPolicy::OpenExternally);
        assert_eq!(embed_policy("https://notgithub.com"), EmbedPolicy::Embed);
        assert_eq!(embed_policy("https://docs.example.com"), EmbedPolicy::Embed);
        assert_eq!(embed_policy("not a url"), EmbedPolicy::OpenExternally);
    }
}
