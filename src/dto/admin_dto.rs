use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_ADMIN_ROLE: &str = "Admin";

/// Body of `POST /admin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateAdminPayload {
    #[validate(length(min = 1, message = "Le nom est requis"))]
    pub fullname: String,
    #[validate(email(message = "Email invalide"))]
    pub email: String,
    #[validate(length(min = 1, message = "Le mot de passe est requis"))]
    pub password: String,
    #[validate(length(min = 1, message = "Le rôle est requis"))]
    pub role: String,
}

impl Default for CreateAdminPayload {
    fn default() -> Self {
        Self {
            fullname: String::new(),
            email: String::new(),
            password: String::new(),
            role: DEFAULT_ADMIN_ROLE.to_string(),
        }
    }
}
