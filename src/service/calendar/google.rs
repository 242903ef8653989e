//! Google Calendar client for rsvp-bot.
//!
//! Talks to the Calendar v3 REST API with a bearer token persisted in a
//! local token file. A `401 Unauthorized` triggers one refresh-token grant
//! against the configured token endpoint, after which the original request
//! is retried and the refreshed token written back to the file. The
//! interactive consent flow is provisioned out-of-band.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::base::{
    config::Config,
    types::{Event, Res, Void},
};

use super::{CalendarClient, GenericCalendarClient};

// Extra methods on `CalendarClient` applied by the Google implementation.

impl CalendarClient {
    /// Creates a new Google Calendar client.
    pub fn google(config: &Config) -> Res<Self> {
        let client = GoogleCalendarClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }
}

// Structs.

/// OAuth tokens as persisted in the token file.
///
/// Extra fields from the provider's token response are dropped; only what
/// the refresh grant needs survives a rewrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredToken {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Response payload of a refresh-token grant.
#[derive(Debug, Deserialize)]
struct RefreshedToken {
    access_token: String,
}

/// Payload of an upcoming-events listing.
#[derive(Debug, Deserialize)]
struct EventList {
    #[serde(default)]
    items: Vec<Event>,
}

/// Google Calendar client implementation.
pub struct GoogleCalendarClient {
    config: Config,
    http: reqwest::Client,
    token: Mutex<StoredToken>,
}

impl GoogleCalendarClient {
    /// Create a new Google Calendar client from the persisted token file.
    #[instrument(name = "GoogleCalendarClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let token = Self::load_token(&config.google_token_file)?;

        if token.access_token.is_empty() {
            info!("No access token stored yet; the first calendar call will refresh.");
        }

        Ok(Self {
            config: config.clone(),
            http: reqwest::Client::new(),
            token: Mutex::new(token),
        })
    }

    fn load_token(path: &str) -> Res<StoredToken> {
        if !std::path::Path::new(path).exists() {
            return Ok(StoredToken::default());
        }

        let raw = std::fs::read_to_string(path)?;

        Ok(serde_json::from_str(&raw)?)
    }

    fn save_token(&self, token: &StoredToken) -> Void {
        let raw = serde_json::to_string_pretty(token)?;
        std::fs::write(&self.config.google_token_file, raw)?;

        Ok(())
    }

    fn events_url(&self) -> String {
        format!("{}/calendars/{}/events", self.config.google_api_base, self.config.calendar_id)
    }

    fn event_url(&self, event_id: &str) -> String {
        format!("{}/{}", self.events_url(), event_id)
    }

    /// Sends a request with bearer authorization, refreshing the access
    /// token and retrying once on `401 Unauthorized`.
    async fn authorized(&self, request: reqwest::RequestBuilder) -> Res<reqwest::Response> {
        let access_token = self.token.lock().await.access_token.clone();

        let retry = request.try_clone().ok_or_else(|| anyhow::anyhow!("Calendar request cannot be retried."))?;

        let response = request.bearer_auth(&access_token).send().await?;
        if response.status() != reqwest::StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let refreshed = self.refresh_access_token().await?;

        Ok(retry.bearer_auth(refreshed).send().await?)
    }

    /// Exchanges the stored refresh token for a fresh access token and
    /// persists it.
    async fn refresh_access_token(&self) -> Res<String> {
        let mut token = self.token.lock().await;

        let refresh_token = token
            .refresh_token
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No refresh token stored; re-authorize the bot."))?;

        info!("Refreshing Google access token ...");

        let form = [
            ("client_id", self.config.google_client_id.as_str()),
            ("client_secret", self.config.google_client_secret.as_str()),
            ("refresh_token", refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let response = self.http.post(&self.config.google_token_uri).form(&form).send().await?.error_for_status()?;
        let refreshed: RefreshedToken = response.json().await?;

        token.access_token = refreshed.access_token.clone();
        self.save_token(&token)?;

        Ok(refreshed.access_token)
    }
}

#[async_trait]
impl GenericCalendarClient for GoogleCalendarClient {
    #[instrument(skip(self))]
    async fn upcoming_events(&self) -> Res<Vec<Event>> {
        let time_min = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let request = self.http.get(self.events_url()).query(&[
            ("singleEvents", "true"),
            ("orderBy", "startTime"),
            ("timeMin", time_min.as_str()),
        ]);

        let response = self.authorized(request).await?.error_for_status()?;
        let list: EventList = response.json().await?;

        debug!("Fetched {} upcoming events", list.items.len());

        Ok(list.items)
    }

    #[instrument(skip(self))]
    async fn event(&self, event_id: &str) -> Res<Event> {
        let request = self.http.get(self.event_url(event_id));

        let response = self.authorized(request).await?.error_for_status()?;

        Ok(response.json().await?)
    }

    #[instrument(skip(self, description))]
    async fn patch_description(&self, event_id: &str, description: &str) -> Void {
        let request = self
            .http
            .patch(self.event_url(event_id))
            .query(&[("sendUpdates", "none")])
            .json(&serde_json::json!({ "description": description }));

        self.authorized(request).await?.error_for_status()?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn quick_create(&self, text: &str) -> Res<Event> {
        let request = self.http.post(format!("{}/quickAdd", self.events_url())).query(&[("text", text)]);

        let response = self.authorized(request).await?.error_for_status()?;

        Ok(response.json().await?)
    }
}
