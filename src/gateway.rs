use crate::config::Settings;
use crate::error::SearchError;
use crate::models::{AirportRecord, SearchResponse, TokenResponse};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Anything that can resolve an airport keyword search. Implemented by
/// [`AmadeusGateway`] for real lookups and by stubs in tests.
#[async_trait]
pub trait AirportDirectory: Send + Sync {
    async fn search(&self, keyword: &str) -> Result<Vec<AirportRecord>, SearchError>;
}

/// Client for the upstream directory API: exchanges the stored credentials
/// for a bearer token, then runs the keyword search with it.
///
/// Tokens are short-lived and re-fetched on every search; this layer does no
/// caching and no retries, both of which belong to the caller.
pub struct AmadeusGateway {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl AmadeusGateway {
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: settings.base_url.clone(),
            client_id: settings.credentials.client_id.clone(),
            client_secret: settings.credentials.client_secret.clone(),
        }
    }

    /// Exchange the credential pair for a bearer token.
    pub async fn obtain_token(&self) -> Result<String, SearchError> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(format!("{}/v1/security/oauth2/token", self.base_url))
            .form(&params)
            .send()
            .await
            .map_err(|err| SearchError::Auth(err.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::Auth(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| SearchError::Auth(err.to_string()))?;

        Ok(token.access_token)
    }

    /// Run one keyword search against the upstream locations endpoint.
    /// An empty `data` array is a valid success, not an error.
    #[instrument(skip(self))]
    pub async fn search_airports(&self, keyword: &str) -> Result<Vec<AirportRecord>, SearchError> {
        let token = self.obtain_token().await?;

        let response = self
            .http
            .get(format!("{}/v1/reference-data/locations", self.base_url))
            .bearer_auth(&token)
            .query(&[
                ("subType", "AIRPORT"),
                ("keyword", keyword),
                ("page[limit]", "10"),
            ])
            .send()
            .await
            .map_err(|err| SearchError::Upstream(err.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::Upstream(format!(
                "locations endpoint returned {}",
                response.status()
            )));
        }

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|err| SearchError::Upstream(err.to_string()))?;

        debug!(count = payload.data.len(), "upstream search resolved");
        Ok(payload.data)
    }
}

#[async_trait]
impl AirportDirectory for AmadeusGateway {
    async fn search(&self, keyword: &str) -> Result<Vec<AirportRecord>, SearchError> {
        self.search_airports(keyword).await
    }
}
