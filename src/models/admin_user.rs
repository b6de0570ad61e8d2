use serde::{Deserialize, Serialize};

use super::{cell, deserialize_id, Creatable, Resource};
use crate::dto::admin_dto::CreateAdminPayload;

/// Back-office account. The password never comes back from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id", default)]
    pub id: String,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Resource for AdminUser {
    const ENDPOINT: &'static str = "admin";
    const COLLECTION_KEY: &'static str = "admins";
    const PAGINATED: bool = false;
    const LOAD_ERROR: &'static str = "Une erreur est survenue lors du chargement des admins.";
    const DELETE_ERROR: &'static str =
        "Une erreur est survenue lors de la suppression de l'utilisateur.";

    fn id(&self) -> &str {
        &self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Nom", "Email", "Rôle"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            cell(self.fullname.as_deref()),
            cell(self.email.as_deref()),
            cell(self.role.as_deref()),
        ]
    }
}

impl Creatable for AdminUser {
    type Payload = CreateAdminPayload;
    const CREATED_KEY: &'static str = "admin";
    const CREATE_ERROR: &'static str =
        "Une erreur est survenue lors de l'ajout de l'utilisateur.";
    const MISSING_RECORD_ERROR: Option<&'static str> =
        Some("Unexpected response from server when adding user.");
}
