//! Header configuration: storage keys, navigation routes, log level.
//!
//! SYSTEM CONTEXT
//! ==============
//! Host pages may override any field by putting a JSON object in the
//! `data-header-config` attribute of `<body>`. Missing fields keep their
//! defaults. Toast and reload timings are fixed and live next to the code
//! that uses them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::dom::View;
use crate::error::Result;

/// Attribute on `<body>` that carries a JSON override.
pub const CONFIG_ATTRIBUTE: &str = "data-header-config";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub storage: StorageKeys,
    pub routes: Routes,
    pub log_level: LogLevel,
}

/// `localStorage` keys shared with the login flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub token_key: String,
    pub user_info_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            token_key: "auth_token".to_owned(),
            user_info_key: "user_info".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Routes {
    pub dashboard: String,
    pub login: String,
    pub register: String,
    pub profile: String,
    pub my_quizzes: String,
    pub browse_quizzes: String,
    pub create_quiz: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            dashboard: "/dashboard".to_owned(),
            login: "/login".to_owned(),
            register: "/register".to_owned(),
            profile: "/profile".to_owned(),
            my_quizzes: "/my-quizzes".to_owned(),
            browse_quizzes: "/browse-quizzes".to_owned(),
            create_quiz: "/create-quiz".to_owned(),
        }
    }
}

/// Console log verbosity for the browser build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

impl HeaderConfig {
    /// Parse a JSON override. Absent fields fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the override attached to the page body. A missing attribute
    /// yields defaults; a malformed one is returned as an error so the
    /// caller can report it once a logger is installed.
    pub fn from_page(view: &dyn View) -> Result<Self> {
        match view.body().and_then(|body| view.attribute(body, CONFIG_ATTRIBUTE)) {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}
