use std::marker::PhantomData;

use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::dto::list_dto::{extract_items, extract_total, PageQuery};
use crate::error::{Error, Result};
use crate::models::admin_user::AdminUser;
use crate::models::application::Application;
use crate::models::event::Event;
use crate::models::offer::Offer;
use crate::models::portfolio::PortfolioItem;
use crate::models::{Creatable, Resource};
use crate::services::http_client::ApiClient;

pub type OfferService = ResourceService<Offer>;
pub type ApplicationService = ResourceService<Application>;
pub type AdminService = ResourceService<AdminUser>;
pub type EventService = ResourceService<Event>;
pub type PortfolioService = ResourceService<PortfolioItem>;

/// One page of records plus the total the backend advertised alongside it.
#[derive(Debug, Clone)]
pub struct PageSlice<R> {
    pub items: Vec<R>,
    pub total: Option<u64>,
}

/// REST access to one resource collection.
pub struct ResourceService<R> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    fn collection_path() -> String {
        format!("/{}", R::ENDPOINT)
    }

    pub async fn fetch_page(&self, page: u32, limit: u32) -> Result<PageSlice<R>> {
        let query = PageQuery { page, limit };
        debug!(endpoint = R::ENDPOINT, page, limit, "Fetching page");
        let body = self
            .client
            .get_with(&Self::collection_path(), &query)
            .await?;
        let total = extract_total(&body);
        Ok(PageSlice {
            items: decode_items(body),
            total,
        })
    }

    pub async fn fetch_all(&self) -> Result<Vec<R>> {
        debug!(endpoint = R::ENDPOINT, "Fetching full collection");
        let body = self.client.get(&Self::collection_path()).await?;
        Ok(decode_items(body))
    }

    /// Size of the unpaginated collection.
    pub async fn count(&self) -> Result<u64> {
        let body = self.client.get(&Self::collection_path()).await?;
        let count = collection_values::<R>(body).len();
        Ok(count as u64)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(R::ENDPOINT, id).await?;
        info!(endpoint = R::ENDPOINT, id, "Record deleted");
        Ok(())
    }
}

impl<R: Creatable> ResourceService<R> {
    /// Validates and posts `payload`. Returns the created record when the
    /// response carries one in a recognizable shape.
    pub async fn create(&self, payload: &R::Payload) -> Result<Option<R>> {
        payload.validate()?;
        let body = self.client.post(&Self::collection_path(), payload).await?;
        let created = created_record::<R>(body)?;
        info!(endpoint = R::ENDPOINT, "Record created");
        Ok(created)
    }
}

/// Pulls the created record out of a 2xx create response.
///
/// Resources with a `MISSING_RECORD_ERROR` must return the record under
/// `CREATED_KEY`; any other body is an `UnexpectedResponse`.
fn created_record<R: Creatable>(body: JsonValue) -> Result<Option<R>> {
    let record = match body {
        JsonValue::Object(mut map) if map.contains_key(R::CREATED_KEY) => {
            map.remove(R::CREATED_KEY).unwrap_or(JsonValue::Null)
        }
        other => {
            if let Some(message) = R::MISSING_RECORD_ERROR {
                warn!(endpoint = R::ENDPOINT, body = %other, "Create response has no `{}` record", R::CREATED_KEY);
                return Err(Error::UnexpectedResponse(message.to_string()));
            }
            other
        }
    };
    match serde_json::from_value::<R>(record) {
        Ok(created) => Ok(Some(created)),
        Err(e) => {
            warn!(endpoint = R::ENDPOINT, error = %e, "Create response did not contain the record");
            match R::MISSING_RECORD_ERROR {
                Some(message) => Err(Error::UnexpectedResponse(message.to_string())),
                None => Ok(None),
            }
        }
    }
}

fn collection_values<R: Resource>(body: JsonValue) -> Vec<JsonValue> {
    match extract_items(body, R::COLLECTION_KEY) {
        Some(items) => items,
        None => {
            warn!(endpoint = R::ENDPOINT, "Unexpected collection shape, showing an empty list");
            Vec::new()
        }
    }
}

/// Decodes every record, skipping the ones that do not match the model.
fn decode_items<R: Resource>(body: JsonValue) -> Vec<R> {
    collection_values::<R>(body)
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<R>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(endpoint = R::ENDPOINT, error = %e, "Skipping malformed record");
                None
            }
        })
        .collect()
}
