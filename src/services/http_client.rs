use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::middleware::auth::attach_bearer;
use crate::storage::token_store::TokenStore;

/// Shared REST client. The bearer token is looked up for every request.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &Config, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        let mut base_url = config.api_base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn segments_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("{} cannot be used as a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<JsonValue> {
        let req = self.client.get(self.url(path)?);
        self.send(req).await
    }

    #[instrument(skip(self, params))]
    pub async fn get_with<Q>(&self, path: &str, params: &Q) -> Result<JsonValue>
    where
        Q: Serialize + ?Sized,
    {
        let req = self.client.get(self.url(path)?).query(params);
        self.send(req).await
    }

    #[instrument(skip(self, body))]
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<JsonValue>
    where
        B: Serialize + ?Sized,
    {
        let req = self.client.post(self.url(path)?).json(body);
        self.send(req).await
    }

    /// `DELETE <base>/<collection>/<id>`, with `id` sent as one encoded segment.
    #[instrument(skip(self))]
    pub async fn delete(&self, collection: &str, id: &str) -> Result<JsonValue> {
        let req = self.client.delete(self.segments_url(&[collection, id])?);
        self.send(req).await
    }

    async fn send(&self, req: RequestBuilder) -> Result<JsonValue> {
        let req = attach_bearer(req, self.tokens.as_ref())?;
        let response = req.send().await?;
        let status = response.status();
        let body = read_body(response).await?;

        if !status.is_success() {
            warn!(%status, "API request failed");
            return Err(Error::Api { status, body });
        }

        debug!(%status, "API request succeeded");
        Ok(body)
    }
}

/// Empty bodies become `null`, non-JSON bodies are kept as a JSON string.
async fn read_body(response: Response) -> Result<JsonValue> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(JsonValue::Null);
    }
    Ok(serde_json::from_str(&text).unwrap_or(JsonValue::String(text)))
}
