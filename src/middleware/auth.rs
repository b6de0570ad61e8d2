use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::token_store::TokenStore;

/// Builds the `Authorization` value from whatever token the store holds right now.
pub fn bearer_header(store: &dyn TokenStore) -> Result<Option<HeaderValue>> {
    let Some(token) = store.token()? else {
        return Ok(None);
    };
    let token = token.trim();
    if token.is_empty() {
        return Ok(None);
    }
    HeaderValue::from_str(&format!("Bearer {}", token))
        .map(Some)
        .map_err(|_| Error::Storage("stored token is not a valid header value".to_string()))
}

pub fn attach_bearer(req: RequestBuilder, store: &dyn TokenStore) -> Result<RequestBuilder> {
    match bearer_header(store)? {
        Some(value) => Ok(req.header(AUTHORIZATION, value)),
        None => {
            debug!("No token in storage, sending request without authorization");
            Ok(req)
        }
    }
}
