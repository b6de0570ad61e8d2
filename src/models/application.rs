use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{cell, deserialize_id, deserialize_opt_text, Resource};
use crate::utils::time::format_day;

/// A candidate's application (postulation) to an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id", default)]
    pub id: String,
    #[serde(rename = "nom", default)]
    pub last_name: Option<String>,
    #[serde(rename = "prenom", default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub phone: Option<String>,
    #[serde(rename = "offre", default)]
    pub offer: Option<String>,
    #[serde(rename = "cv", default)]
    pub cv_url: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Application {
    const ENDPOINT: &'static str = "application";
    const COLLECTION_KEY: &'static str = "applications";
    const PAGINATED: bool = true;
    const LOAD_ERROR: &'static str =
        "Une erreur est survenue lors du chargement des postulations.";
    const DELETE_ERROR: &'static str =
        "Une erreur est survenue lors de la suppression de la postulation.";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Nom", "Prénom", "Email", "Telephone", "Offre", "CV", "Date"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            cell(self.last_name.as_deref()),
            cell(self.first_name.as_deref()),
            cell(self.email.as_deref()),
            cell(self.phone.as_deref()),
            cell(self.offer.as_deref()),
            cell(self.cv_url.as_deref()),
            cell(self.created_at.map(format_day).as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_phone_and_timestamp_are_accepted() {
        let app: Application = serde_json::from_value(json!({
            "_id": "a1",
            "nom": "Ben Ali",
            "prenom": "Sami",
            "email": "sami@example.com",
            "phone": 21612345678_i64,
            "offre": "Backend Engineer",
            "cv": "https://cdn.example.com/cv/sami.pdf",
            "createdAt": "2024-03-05T10:15:00.000Z"
        }))
        .unwrap();

        assert_eq!(app.phone.as_deref(), Some("21612345678"));
        let cells = app.cells();
        assert_eq!(cells[0], "Ben Ali");
        assert_eq!(cells[6], "05/03/2024");
    }
}
