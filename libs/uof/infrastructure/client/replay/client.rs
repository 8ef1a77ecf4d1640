use super::error::{ReplayError, Result};
use super::templates::{self, render, ReplayParams, Template};
use crate::domain::Urn;
use crate::infrastructure::config::ReplayConfig;
use reqwest::Client;
use tracing::{debug, info, warn};

pub const STAGING_URL: &str = "https://stgapi.betradar.com";
pub const PRODUCTION_URL: &str = "https://api.betradar.com";

const TOKEN_HEADER: &str = "x-access-token";

/// Replay server control client.
///
/// Builds the playlist of recorded events and starts playback. Requests
/// are never retried: `reset` and `add` are safe to resend, `play` is not
/// always, so the caller decides.
///
/// Every request authenticates with the `x-access-token` header alone.
/// The bookmaker id is not sent here: the server derives it from the
/// token, and it only matters to the broker connection.
#[derive(Debug, Clone)]
pub struct ReplayClient {
    base_url: String,
    token: String,
    client: Client,
}

impl ReplayClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client: Client::new(),
        }
    }

    pub fn staging(token: impl Into<String>) -> Self {
        Self::new(STAGING_URL, token)
    }

    pub fn production(token: impl Into<String>) -> Self {
        Self::new(PRODUCTION_URL, token)
    }

    pub fn from_config(config: &ReplayConfig, token: impl Into<String>) -> Self {
        Self::new(config.resolved_base_url(), token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Empty the playlist
    pub async fn reset(&self) -> Result<()> {
        self.send(&templates::RESET, &ReplayParams::default()).await
    }

    /// Stop the replay in progress
    pub async fn stop(&self) -> Result<()> {
        self.send(&templates::STOP, &ReplayParams::default()).await
    }

    /// Append an event to the playlist
    pub async fn add(&self, event: &Urn) -> Result<()> {
        self.send(&templates::ADD_EVENT, &ReplayParams::event(*event))
            .await
    }

    /// Start or resume playing the playlist
    pub async fn play(&self, speed: u32, max_delay: u32, use_replay_timestamp: bool) -> Result<()> {
        self.send(
            &templates::PLAY,
            &ReplayParams::play(speed, max_delay, use_replay_timestamp),
        )
        .await
    }

    /// Replay a single event from a clean playlist
    pub async fn start_event(&self, event: &Urn, speed: u32, max_delay: u32) -> Result<()> {
        info!(event = %event, speed, max_delay, "Starting event replay");
        self.reset().await?;
        self.add(event).await?;
        self.play(speed, max_delay, false).await
    }

    /// Play one of the provider's predefined scenarios
    pub async fn start_scenario(&self, scenario_id: u32, speed: u32, max_delay: u32) -> Result<()> {
        info!(scenario_id, speed, max_delay, "Starting scenario replay");
        self.send(
            &templates::START_SCENARIO,
            &ReplayParams::scenario(scenario_id, speed, max_delay),
        )
        .await
    }

    async fn send(&self, template: &Template, params: &ReplayParams) -> Result<()> {
        let url = format!("{}{}", self.base_url, render(template.path, params)?);
        debug!("{} {}", template.method, url);

        let response = self
            .client
            .request(template.method.clone(), &url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), url = %url, "Replay request rejected");
            return Err(ReplayError::ReplayControl {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
