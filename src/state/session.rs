//! Persisted auth session as seen by the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow stores a token and a JSON user record. Every header
//! component reads them through `read_session`, which never fails: missing,
//! unreadable or malformed entries degrade to an anonymous session. Nothing
//! here validates the token; presence alone means "logged in" for display.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::StorageKeys;
use crate::error::Result;
use crate::util::storage::SessionStore;

/// User record written by the login flow.
///
/// Name fields that are not strings are treated as absent. Unknown fields are
/// kept so a rewrite does not drop them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_owned)))
}

impl UserInfo {
    /// Parse a stored record; anything that is not a JSON object yields an
    /// empty record.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: UserInfo,
}

impl Session {
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Name to show in the header, present only for a logged-in session.
    pub fn display_name(&self) -> Option<&str> {
        if !self.has_token() {
            return None;
        }
        self.user.full_name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.display_name().is_some()
    }

    /// Name used in the hero greeting: `first_name`, else the first word of
    /// `full_name`.
    pub fn greeting_name(&self) -> Option<&str> {
        let full_name = self.display_name()?;
        self.user
            .first_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .or_else(|| full_name.split_whitespace().next())
    }
}

/// Read the current session from storage.
pub fn read_session(store: &dyn SessionStore, keys: &StorageKeys) -> Session {
    let token = store.get_item(&keys.token_key).unwrap_or_else(|e| {
        log::debug!("token read failed: {e}");
        None
    });
    let user = match store.get_item(&keys.user_info_key) {
        Ok(Some(raw)) => UserInfo::parse(&raw),
        Ok(None) => UserInfo::default(),
        Err(e) => {
            log::debug!("user info read failed: {e}");
            UserInfo::default()
        }
    };
    Session { token, user }
}

/// Persist a session. Used by the login flow integration, not by the header.
pub fn write_session(store: &dyn SessionStore, keys: &StorageKeys, session: &Session) -> Result<()> {
    match session.token.as_deref() {
        Some(token) => store.set_item(&keys.token_key, token)?,
        None => store.remove_item(&keys.token_key)?,
    }
    let raw = serde_json::to_string(&session.user)?;
    store.set_item(&keys.user_info_key, &raw)
}

/// Forget both session entries. Both removals are attempted; the first
/// failure is returned.
pub fn clear_session(store: &dyn SessionStore, keys: &StorageKeys) -> Result<()> {
    let token = store.remove_item(&keys.token_key);
    let user = store.remove_item(&keys.user_info_key);
    token.and(user)
}
