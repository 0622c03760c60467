use reqwest::{Response, Url};

use crate::error::{Action, ApiError};
use crate::store_models::{Door, DoorId, Draft};

/// The two calls the editor makes against the API. [`DoorsClient`] is the
/// HTTP implementation; tests swap in a recording fake.
#[allow(async_fn_in_trait)]
pub trait DoorApi {
    async fn fetch_door(&self, id: &DoorId) -> Result<Door, ApiError>;
    async fn update_door(&self, id: &DoorId, draft: &Draft) -> Result<Door, ApiError>;
}

#[derive(Clone, Debug)]
pub struct DoorsClient {
    api_uri: String,
    client: reqwest::Client,
}

impl DoorsClient {
    pub fn new(api_uri: &str) -> Self {
        DoorsClient {
            api_uri: api_uri.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// `{api_uri}/{id}` with the id percent-encoded as a single path segment.
    pub fn door_url(&self, action: Action, id: &DoorId) -> Result<Url, ApiError> {
        let invalid = || ApiError::InvalidUrl {
            action,
            uri: self.api_uri.clone(),
        };
        let mut url = Url::parse(&self.api_uri).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }
}

async fn parse_door(action: Action, payload: Response) -> Result<Door, ApiError> {
    let status = payload.status();
    if !status.is_success() {
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        return Err(ApiError::Status { action, reason });
    }
    let body = payload
        .text()
        .await
        .map_err(|source| ApiError::Transport { action, source })?;
    serde_json::from_str(&body).map_err(|source| ApiError::Decode { action, source })
}

impl DoorApi for DoorsClient {
    async fn fetch_door(&self, id: &DoorId) -> Result<Door, ApiError> {
        let url = self.door_url(Action::Fetch, id)?;
        log::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                action: Action::Fetch,
                source,
            })?;
        parse_door(Action::Fetch, resp).await
    }

    async fn update_door(&self, id: &DoorId, draft: &Draft) -> Result<Door, ApiError> {
        let url = self.door_url(Action::Update, id)?;
        log::debug!("PUT {} {:?}", url, draft);
        let resp = self
            .client
            .put(url)
            .json(draft)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                action: Action::Update,
                source,
            })?;
        parse_door(Action::Update, resp).await
    }
}
