use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::{cell, deserialize_id, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Resource for PortfolioItem {
    const ENDPOINT: &'static str = "portfolio";
    const COLLECTION_KEY: &'static str = "portfolios";
    const PAGINATED: bool = false;
    const LOAD_ERROR: &'static str = "Une erreur est survenue lors du chargement du portfolio.";
    const DELETE_ERROR: &'static str =
        "Une erreur est survenue lors de la suppression du projet.";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Titre", "Catégorie", "Lien"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            cell(self.title.as_deref()),
            cell(self.category.as_deref()),
            cell(self.link.as_deref()),
        ]
    }
}
