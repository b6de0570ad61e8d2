use serde::{Deserialize, Serialize};

use super::{cell, deserialize_id, Creatable, Resource};
use crate::dto::offer_dto::CreateOfferPayload;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub missions: Vec<String>,
    #[serde(rename = "Qualifications", alias = "qualifications", default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub departement: Option<String>,
    #[serde(default)]
    pub contract: Option<String>,
    #[serde(rename = "type", default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
}

impl Resource for Offer {
    const ENDPOINT: &'static str = "offre";
    const COLLECTION_KEY: &'static str = "offers";
    const PAGINATED: bool = true;
    const LOAD_ERROR: &'static str = "Une erreur est survenue lors du chargement des offres.";
    const DELETE_ERROR: &'static str =
        "Une erreur est survenue lors de la suppression de l'offre.";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Titre", "Location", "Département", "Type de Contrat"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            cell(self.title.as_deref()),
            cell(self.location.as_deref()),
            cell(self.departement.as_deref()),
            cell(self.contract.as_deref()),
        ]
    }
}

impl Creatable for Offer {
    type Payload = CreateOfferPayload;
    const CREATED_KEY: &'static str = "offre";
    const CREATE_ERROR: &'static str = "Erreur lors de la création de l'offre.";
}
