use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::CardError;
use crate::model::{GameVariant, PlayerProfile, RawStatsPayload};

pub const FACEIT_API_URL: &str = "https://open.faceit.com/data/v4";

/// The two FACEIT Data API calls a card needs.
#[async_trait]
pub trait FaceitApiClient: Send + Sync {
    async fn get_player(&self, nickname: &str) -> Result<PlayerProfile, CardError>;

    async fn get_player_stats(
        &self,
        player_id: &str,
        game: GameVariant,
    ) -> Result<RawStatsPayload, CardError>;
}

pub struct HttpFaceitClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HttpFaceitClient {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CardError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, CardError>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| CardError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "faceit api returned an error status");
            return Err(CardError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| CardError::Parse(e.to_string()))
    }
}

#[async_trait]
impl FaceitApiClient for HttpFaceitClient {
    async fn get_player(&self, nickname: &str) -> Result<PlayerProfile, CardError> {
        let url = format!("{}/players", self.base_url);
        self.get_json(&url, &[("nickname", nickname)]).await
    }

    async fn get_player_stats(
        &self,
        player_id: &str,
        game: GameVariant,
    ) -> Result<RawStatsPayload, CardError> {
        let url = format!("{}/players/{}/stats/{}", self.base_url, player_id, game);
        self.get_json(&url, &[]).await
    }
}
