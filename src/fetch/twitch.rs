//! Twitch Helix API client.
//!
//! App access tokens come from the OAuth2 client-credentials flow and are
//! cached until the API answers 401, at which point the cache is dropped and
//! the next tick retries with a fresh token.

use oauth2::basic::BasicClient;
use oauth2::{ClientId, ClientSecret, EndpointNotSet, EndpointSet, TokenResponse, TokenUrl};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::config::ConfigError;
use crate::error::fetch::FetchError;
use crate::model::snapshot::StreamSnapshot;

pub const TWITCH_TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";
pub const TWITCH_API_BASE_URL: &str = "https://api.twitch.tv/helix";

/// OAuth2 client with only the token endpoint configured; client-credentials
/// exchange never touches the authorization endpoint.
type TwitchOAuthClient =
    BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

pub struct TwitchClient {
    http: reqwest::Client,
    client_id: String,
    oauth: TwitchOAuthClient,
    token: RwLock<Option<String>>,
}

impl TwitchClient {
    pub fn new(
        http: reqwest::Client,
        client_id: String,
        client_secret: String,
    ) -> Result<Self, ConfigError> {
        let token_url =
            TokenUrl::new(TWITCH_TOKEN_URL.to_string()).map_err(|e| ConfigError::InvalidValue {
                name: "TWITCH_TOKEN_URL".to_string(),
                message: e.to_string(),
            })?;

        let oauth = BasicClient::new(ClientId::new(client_id.clone()))
            .set_client_secret(ClientSecret::new(client_secret))
            .set_token_uri(token_url);

        Ok(Self {
            http,
            client_id,
            oauth,
            token: RwLock::new(None),
        })
    }

    /// Gets the cached app token or exchanges client credentials for a new
    /// one.
    async fn app_token(&self) -> Result<String, FetchError> {
        if let Some(token) = self.token.read().await.clone() {
            return Ok(token);
        }

        let response = self
            .oauth
            .exchange_client_credentials()
            .request_async(&self.http)
            .await
            .map_err(|e| {
                warn!("Twitch token exchange failed: {}", e);
                FetchError::Transient { status: None }
            })?;

        let token = response.access_token().secret().clone();
        *self.token.write().await = Some(token.clone());

        Ok(token)
    }

    async fn invalidate_token(&self) {
        *self.token.write().await = None;
    }

    /// Checks whether a channel is live.
    ///
    /// # Returns
    /// - `Ok(Some(StreamSnapshot))` - The channel is live
    /// - `Ok(None)` - The channel is offline
    /// - `Err(FetchError)` - API failure; a 401 drops the cached token and
    ///   is reported transient so the next tick retries with a fresh one
    pub async fn stream_by_login(&self, login: &str) -> Result<Option<StreamSnapshot>, FetchError> {
        let token = self.app_token().await?;

        let response = self
            .http
            .get(format!("{}/streams", TWITCH_API_BASE_URL))
            .query(&[("user_login", login)])
            .header("Client-ID", &self.client_id)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status().as_u16();
        if status == 401 {
            self.invalidate_token().await;
            return Err(FetchError::Transient { status: Some(401) });
        }
        if !response.status().is_success() {
            return Err(FetchError::from_status(status));
        }

        let streams: StreamsDto = response.json().await.map_err(FetchError::from)?;
        let Some(stream) = streams.data.into_iter().next() else {
            return Ok(None);
        };

        // The profile image is decoration; a failed lookup never fails the
        // poll.
        let profile_image_url = match self.profile_image(login, &token).await {
            Ok(url) => url,
            Err(e) => {
                debug!("profile image lookup failed for {}: {}", login, e);
                None
            }
        };

        Ok(Some(stream.into_snapshot(login, profile_image_url)))
    }

    async fn profile_image(&self, login: &str, token: &str) -> Result<Option<String>, FetchError> {
        let response = self
            .http
            .get(format!("{}/users", TWITCH_API_BASE_URL))
            .query(&[("login", login)])
            .header("Client-ID", &self.client_id)
            .bearer_auth(token)
            .send()
            .await
            .map_err(FetchError::from)?;

        if !response.status().is_success() {
            return Err(FetchError::from_status(response.status().as_u16()));
        }

        let users: UsersDto = response.json().await.map_err(FetchError::from)?;
        Ok(users.data.into_iter().next().map(|u| u.profile_image_url))
    }
}

#[derive(Debug, Deserialize)]
struct StreamsDto {
    #[serde(default)]
    data: Vec<StreamDto>,
}

#[derive(Debug, Deserialize)]
struct StreamDto {
    user_name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    game_name: String,
    #[serde(default)]
    viewer_count: u64,
    #[serde(default)]
    thumbnail_url: String,
}

#[derive(Debug, Deserialize)]
struct UsersDto {
    #[serde(default)]
    data: Vec<UserDto>,
}

#[derive(Debug, Deserialize)]
struct UserDto {
    #[serde(default)]
    profile_image_url: String,
}

impl StreamDto {
    fn into_snapshot(self, login: &str, profile_image_url: Option<String>) -> StreamSnapshot {
        // Helix hands back a sizing template for the preview image.
        let thumbnail_url = if self.thumbnail_url.is_empty() {
            None
        } else {
            Some(
                self.thumbnail_url
                    .replace("{width}", "1280")
                    .replace("{height}", "720"),
            )
        };

        StreamSnapshot {
            login: login.to_string(),
            user_name: self.user_name,
            title: self.title,
            game_name: self.game_name,
            viewer_count: self.viewer_count,
            thumbnail_url,
            profile_image_url,
        }
    }
}
