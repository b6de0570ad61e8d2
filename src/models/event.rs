use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::{cell, deserialize_id, Resource};

/// News item ("actualité"). Only the listed columns are read, the rest is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Resource for Event {
    const ENDPOINT: &'static str = "event";
    const COLLECTION_KEY: &'static str = "events";
    const PAGINATED: bool = false;
    const LOAD_ERROR: &'static str =
        "Une erreur est survenue lors du chargement des actualités.";
    const DELETE_ERROR: &'static str =
        "Une erreur est survenue lors de la suppression de l'actualité.";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Titre", "Date", "Lieu"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            cell(self.title.as_deref()),
            cell(self.date.as_deref()),
            cell(self.location.as_deref()),
        ]
    }
}
