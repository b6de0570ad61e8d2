use tracing::info;

use crate::dto::admin_dto::CreateAdminPayload;
use crate::models::admin_user::AdminUser;
use crate::screens::list::ListController;
use crate::utils::validation::{self, FieldErrors};

/// "Ajouter un utilisateur" form on the users screen.
#[derive(Debug, Default)]
pub struct AdminForm {
    values: CreateAdminPayload,
    errors: FieldErrors,
}

impl AdminForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &CreateAdminPayload {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_fullname(&mut self, value: impl Into<String>) {
        self.values.fullname = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.values.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.values.password = value.into();
    }

    pub fn set_role(&mut self, value: impl Into<String>) {
        self.values.role = value.into();
    }

    /// Validates, creates the account through the list screen and clears the
    /// form on success. Server failures land in the list's error state.
    pub async fn submit(&mut self, users: &ListController<AdminUser>) -> bool {
        let payload = CreateAdminPayload {
            fullname: self.values.fullname.trim().to_string(),
            email: self.values.email.trim().to_string(),
            password: self.values.password.clone(),
            role: self.values.role.trim().to_string(),
        };
        if let Err(errors) = validation::validate(&payload) {
            self.errors = errors;
            return false;
        }
        self.errors.clear();

        if users.create(&payload).await {
            info!(email = %payload.email, role = %payload.role, "Admin account added");
            self.values = CreateAdminPayload::default();
            true
        } else {
            false
        }
    }
}
