use std::fmt;

use serde::Deserialize;

use crate::domain::validation::ConfigError;

/// Account settings captured once when a sender is constructed.
///
/// Every field has a default, so partial configuration is valid:
/// - `username`, `password`, `sender`: empty string,
/// - `logging`: `false`.
///
/// The struct implements [`Deserialize`] with `#[serde(default)]`, so it can be loaded from
/// any serde format. [`SendConfig::from_env`] reads it from `MSMAZ_*` environment variables.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SendConfig {
    /// Gateway account name (`user`).
    pub username: String,
    /// Gateway account password (`password`).
    pub password: String,
    /// Sender name shown to the recipient (`from`).
    pub sender: String,
    /// Persist every send attempt through the configured log store.
    pub logging: bool,
}

impl SendConfig {
    pub const USERNAME_VAR: &'static str = "MSMAZ_USERNAME";
    pub const PASSWORD_VAR: &'static str = "MSMAZ_PASSWORD";
    pub const SENDER_VAR: &'static str = "MSMAZ_SENDER";
    pub const LOGGING_VAR: &'static str = "MSMAZ_LOGGING";

    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            sender: sender.into(),
            logging: false,
        }
    }

    /// Enable or disable persistence of send attempts.
    pub fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, applying defaults for missing keys.
    ///
    /// The logging flag accepts `1/true/yes/on` and `0/false/no/off` (case-insensitive) and
    /// treats an empty value as `false`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let logging = match lookup(Self::LOGGING_VAR) {
            Some(value) => parse_bool(Self::LOGGING_VAR, &value)?,
            None => false,
        };

        Ok(Self {
            username: lookup(Self::USERNAME_VAR).unwrap_or_default(),
            password: lookup(Self::PASSWORD_VAR).unwrap_or_default(),
            sender: lookup(Self::SENDER_VAR).unwrap_or_default(),
            logging,
        })
    }
}

impl fmt::Debug for SendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("sender", &self.sender)
            .field("logging", &self.logging)
            .finish()
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_owned(),
        }),
    }
}
