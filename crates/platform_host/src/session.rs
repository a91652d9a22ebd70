//! Login credential check and the persisted session flag.

use thiserror::Error;

use crate::storage::{kv::KeyValueStore, LOGGED_IN_KEY, USERNAME_KEY};

/// The single account accepted by the login gate.
pub const ACCOUNT_USERNAME: &str = "mael";
const ACCOUNT_PASSWORD: &str = "1234";

/// Why a credential pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Both fields were empty.
    #[error("username and password are empty")]
    Empty,
    /// The pair does not match the account. Covers one empty field.
    #[error("username or password is incorrect")]
    Mismatch,
}

impl CredentialError {
    /// Fixed message shown under the login form.
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::Empty => "Please enter a username and password.",
            Self::Mismatch => "Incorrect username or password.",
        }
    }
}

/// Checks a candidate pair against the account.
///
/// # Errors
///
/// Returns [`CredentialError::Empty`] only when both fields are empty. Any other mismatch,
/// including exactly one empty field, is [`CredentialError::Mismatch`].
pub fn check_credentials(username: &str, password: &str) -> Result<(), CredentialError> {
    if username.is_empty() && password.is_empty() {
        return Err(CredentialError::Empty);
    }
    if username == ACCOUNT_USERNAME && password == ACCOUNT_PASSWORD {
        Ok(())
    } else {
        Err(CredentialError::Mismatch)
    }
}

/// Pure predicate form of [`check_credentials`].
pub fn verify_credentials(username: &str, password: &str) -> bool {
    check_credentials(username, password).is_ok()
}

/// Persisted login state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Signed-in user, `None` while logged out.
    pub username: Option<String>,
}

impl SessionState {
    /// Session for a signed-in user.
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// Whether the desktop should be revealed.
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }
}

/// Reads the session flag. Only the literal `"true"` counts as logged in.
///
/// # Errors
///
/// Returns an error when the store read fails.
pub async fn load_session<S: KeyValueStore + ?Sized>(store: &S) -> Result<SessionState, String> {
    if store.get_item(LOGGED_IN_KEY).await?.as_deref() != Some("true") {
        return Ok(SessionState::default());
    }
    let username = store.get_item(USERNAME_KEY).await?.unwrap_or_default();
    Ok(SessionState::signed_in(username))
}

/// Writes the session flag and username.
///
/// # Errors
///
/// Returns an error when a store write fails.
pub async fn save_session<S: KeyValueStore + ?Sized>(
    store: &S,
    username: &str,
) -> Result<(), String> {
    store.set_item(LOGGED_IN_KEY, "true").await?;
    store.set_item(USERNAME_KEY, username).await
}

/// Removes the session flag and username.
///
/// # Errors
///
/// Returns an error when a store delete fails.
pub async fn clear_session<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), String> {
    store.remove_item(LOGGED_IN_KEY).await?;
    store.remove_item(USERNAME_KEY).await
}
