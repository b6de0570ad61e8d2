pub mod admin_user;
pub mod application;
pub mod event;
pub mod offer;
pub mod portfolio;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A backend collection the list screens know how to fetch, show and delete.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Path segment under the API base, e.g. `offre`.
    const ENDPOINT: &'static str;
    /// Array property used when the backend wraps the collection in an object.
    const COLLECTION_KEY: &'static str;
    /// Whether the endpoint honours `page` / `limit`.
    const PAGINATED: bool;
    const LOAD_ERROR: &'static str;
    const DELETE_ERROR: &'static str;

    fn id(&self) -> &str;
    fn columns() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// A resource the back-office can also create.
pub trait Creatable: Resource {
    type Payload: Serialize + Validate + Send + Sync;
    /// Property the backend nests the created record under, if any.
    const CREATED_KEY: &'static str;
    const CREATE_ERROR: &'static str;
    /// When set, a success reply without the record under `CREATED_KEY` is
    /// treated as a failure carrying this message.
    const MISSING_RECORD_ERROR: Option<&'static str> = None;
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Int(i64),
        ObjectId {
            #[serde(rename = "$oid")]
            oid: String,
        },
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Int(i) => i.to_string(),
        StringOrNumber::ObjectId { oid } => oid,
    })
}

pub(crate) fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        String(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Text>::deserialize(deserializer)? {
        Some(Text::String(s)) => Some(s),
        Some(Text::Int(i)) => Some(i.to_string()),
        Some(Text::Float(f)) => Some(f.to_string()),
        None => None,
    })
}

pub(crate) fn cell(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}
