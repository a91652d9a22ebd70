//! Key-value storage contracts and the fixed keys the desktop persists under.

pub mod kv;

/// Key holding the single notes buffer (raw string).
pub const NOTEPAD_KEY: &str = "notepad";
/// Key holding the JSON array of `{name, content}` file records.
pub const FILES_KEY: &str = "files";
/// Key holding the JSON array of `{name, url, icon}` installed web apps.
pub const INSTALLED_WEB_APPS_KEY: &str = "installedWebApps";
/// Key holding the session flag (`"true"` or absent).
pub const LOGGED_IN_KEY: &str = "loggedIn";
/// Key holding the plaintext name of the signed-in user.
pub const USERNAME_KEY: &str = "username";
