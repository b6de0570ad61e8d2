use std::borrow::Cow;

use tracing::{error, info};
use validator::{Validate, ValidationError};

use crate::dto::offer_dto::{ContractType, CreateOfferPayload, Department, EmploymentType};
use crate::screens::SubmitStatus;
use crate::services::resource_service::OfferService;
use crate::utils::validation::{self, FieldErrors};
use crate::widgets::dropdown::Dropdown;
use crate::widgets::pointer::{Bounds, PointerEvents};

pub const TITLE_MAX_CHARS: u64 = 64;
pub const OFFER_CREATED: &str = "Offre créée avec succès!";
pub const OFFER_CREATE_FAILED: &str = "Erreur lors de la création de l'offre.";

/// Inline error keys use the form's field names.
const FORM_FIELD_NAMES: &[(&str, &str)] = &[
    ("employment_type", "type"),
    ("qualifications", "Qualifications"),
];

/// Raw form state, before trimming and blank-entry filtering.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct OfferFormValues {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "At least one mission is required"))]
    pub missions: Vec<String>,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(required(message = "Departement is required"))]
    pub departement: Option<Department>,
    #[validate(required(message = "Contract is required"))]
    pub contract: Option<ContractType>,
    pub education: String,
    #[validate(required(message = "Type is required"))]
    pub employment_type: Option<EmploymentType>,
    #[validate(length(min = 1, message = "At least one qualification is required"))]
    pub qualifications: Vec<String>,
}

impl Default for OfferFormValues {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            missions: vec![String::new()],
            location: String::new(),
            departement: None,
            contract: None,
            education: String::new(),
            employment_type: None,
            qualifications: vec![String::new()],
        }
    }
}

fn title_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(title_error("required", "Title is required"));
    }
    if title.chars().count() as u64 > TITLE_MAX_CHARS {
        return Err(title_error("length", "Title must be at most 64 characters"));
    }
    Ok(())
}

fn non_blank(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

impl OfferFormValues {
    /// Trimmed copy with blank missions and qualifications removed.
    pub fn normalized(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            missions: non_blank(&self.missions),
            location: self.location.trim().to_string(),
            departement: self.departement,
            contract: self.contract,
            education: self.education.trim().to_string(),
            employment_type: self.employment_type,
            qualifications: non_blank(&self.qualifications),
        }
    }

    /// Normalizes and validates, producing the request body or field errors.
    pub fn to_payload(&self) -> Result<CreateOfferPayload, FieldErrors> {
        let values = self.normalized();
        validation::validate(&values)
            .map_err(|errors| validation::rename_fields(errors, FORM_FIELD_NAMES))?;

        let (Some(departement), Some(contract), Some(employment_type)) =
            (values.departement, values.contract, values.employment_type)
        else {
            return Err(FieldErrors::new());
        };

        Ok(CreateOfferPayload {
            title: values.title,
            description: values.description,
            missions: values.missions,
            location: values.location,
            departement,
            contract,
            education: Some(values.education).filter(|e| !e.is_empty()),
            employment_type,
            qualifications: values.qualifications,
        })
    }
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Invalid,
    Created,
    Failed,
}

/// Offer creation screen.
pub struct OfferForm {
    service: OfferService,
    values: OfferFormValues,
    errors: FieldErrors,
    status: Option<SubmitStatus>,
    pub departement: Dropdown<Department>,
    pub contract: Dropdown<ContractType>,
    pub employment_type: Dropdown<EmploymentType>,
}

impl OfferForm {
    pub fn new(service: OfferService, pointer: &PointerEvents) -> Self {
        Self {
            service,
            values: OfferFormValues::default(),
            errors: FieldErrors::new(),
            status: None,
            departement: Dropdown::new(pointer, Bounds::new(0.0, 0.0, 320.0, 40.0)),
            contract: Dropdown::new(pointer, Bounds::new(0.0, 60.0, 320.0, 40.0)),
            employment_type: Dropdown::new(pointer, Bounds::new(0.0, 120.0, 320.0, 40.0)),
        }
    }

    pub fn values(&self) -> &OfferFormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.values.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.values.description = description.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.values.location = location.into();
    }

    pub fn set_education(&mut self, education: impl Into<String>) {
        self.values.education = education.into();
    }

    pub fn select_departement(&mut self, departement: Department) {
        self.values.departement = Some(self.departement.select(departement));
    }

    pub fn select_contract(&mut self, contract: ContractType) {
        self.values.contract = Some(self.contract.select(contract));
    }

    pub fn select_employment_type(&mut self, employment_type: EmploymentType) {
        self.values.employment_type = Some(self.employment_type.select(employment_type));
    }

    /// Lets every open dropdown react to document clicks.
    pub fn handle_pointer_events(&mut self) {
        self.departement.handle_pointer_events();
        self.contract.handle_pointer_events();
        self.employment_type.handle_pointer_events();
    }

    pub fn missions(&self) -> &[String] {
        &self.values.missions
    }

    pub fn set_mission(&mut self, index: usize, text: impl Into<String>) {
        if let Some(entry) = self.values.missions.get_mut(index) {
            *entry = text.into();
        }
    }

    pub fn append_mission(&mut self) {
        self.values.missions.push(String::new());
    }

    pub fn remove_mission(&mut self, index: usize) {
        if index < self.values.missions.len() {
            self.values.missions.remove(index);
        }
    }

    pub fn qualifications(&self) -> &[String] {
        &self.values.qualifications
    }

    pub fn set_qualification(&mut self, index: usize, text: impl Into<String>) {
        if let Some(entry) = self.values.qualifications.get_mut(index) {
            *entry = text.into();
        }
    }

    pub fn append_qualification(&mut self) {
        self.values.qualifications.push(String::new());
    }

    pub fn remove_qualification(&mut self, index: usize) {
        if index < self.values.qualifications.len() {
            self.values.qualifications.remove(index);
        }
    }

    pub fn reset(&mut self) {
        self.values = OfferFormValues::default();
        self.errors.clear();
        self.departement.clear();
        self.contract.clear();
        self.employment_type.clear();
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let payload = match self.values.to_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };
        self.errors.clear();

        match self.service.create(&payload).await {
            Ok(created) => {
                info!(
                    title = %payload.title,
                    id = created.as_ref().map(|o| o.id.as_str()).unwrap_or(""),
                    "Offer created"
                );
                self.reset();
                self.status = Some(SubmitStatus::Success(OFFER_CREATED.to_string()));
                SubmitOutcome::Created
            }
            Err(e) => {
                error!(error = %e, "Error creating offer");
                let message = e
                    .server_message()
                    .unwrap_or_else(|| OFFER_CREATE_FAILED.to_string());
                self.status = Some(SubmitStatus::Error(message));
                SubmitOutcome::Failed
            }
        }
    }
}
