//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default OAuth token endpoint used to refresh access tokens.
fn default_google_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// Default base URL of the Google Calendar API.
fn default_google_api_base() -> String {
    "https://www.googleapis.com/calendar/v3".to_string()
}

/// Default path of the persisted OAuth token file.
fn default_google_token_file() -> String {
    "token.json".to_string()
}

/// Configuration for the rsvp-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Telegram bot token (`TELEGRAM_BOT_TOKEN`).
    pub telegram_bot_token: String,
    /// Identifier of the Google calendar the bot manages (`CALENDAR_ID`).
    pub calendar_id: String,
    /// OAuth client id for the Google Calendar API (`GOOGLE_CLIENT_ID`).
    #[serde(default)]
    pub google_client_id: String,
    /// OAuth client secret for the Google Calendar API (`GOOGLE_CLIENT_SECRET`).
    #[serde(default)]
    pub google_client_secret: String,
    /// Token endpoint used to refresh expired access tokens (`GOOGLE_TOKEN_URI`).
    #[serde(default = "default_google_token_uri")]
    pub google_token_uri: String,
    /// Base URL of the Google Calendar API (`GOOGLE_API_BASE`).
    #[serde(default = "default_google_api_base")]
    pub google_api_base: String,
    /// Path of the file where OAuth tokens are persisted (`GOOGLE_TOKEN_FILE`).
    #[serde(default = "default_google_token_file")]
    pub google_token_file: String,
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("RSVP_BOT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.telegram_bot_token.is_empty() {
            return Err(anyhow::anyhow!("A Telegram bot token is required."));
        }

        if result.calendar_id.is_empty() {
            return Err(anyhow::anyhow!("A Google calendar id is required."));
        }

        Ok(result)
    }
}
