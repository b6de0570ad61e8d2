use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::widgets::dropdown::DropdownOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Développement Web et Mobile")]
    WebAndMobile,
    #[serde(rename = "UI/UX Design et Graphisme")]
    DesignAndGraphics,
    #[serde(rename = "HR et Communication")]
    HrAndCommunication,
    #[serde(rename = "Marketing et SEO")]
    MarketingAndSeo,
    #[serde(rename = "Commerciale")]
    Sales,
}

impl DropdownOption for Department {
    fn all() -> &'static [Self] {
        &[
            Self::WebAndMobile,
            Self::DesignAndGraphics,
            Self::HrAndCommunication,
            Self::MarketingAndSeo,
            Self::Sales,
        ]
    }

    fn value(self) -> &'static str {
        match self {
            Self::WebAndMobile => "Développement Web et Mobile",
            Self::DesignAndGraphics => "UI/UX Design et Graphisme",
            Self::HrAndCommunication => "HR et Communication",
            Self::MarketingAndSeo => "Marketing et SEO",
            Self::Sales => "Commerciale",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::HrAndCommunication => "Communication",
            Self::Sales => "Centre Commercial",
            other => other.value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "CDI")]
    Permanent,
    #[serde(rename = "CDD")]
    FixedTerm,
    #[serde(rename = "Stage")]
    Internship,
    #[serde(rename = "Alternance")]
    WorkStudy,
    #[serde(rename = "Freelance")]
    Freelance,
}

impl DropdownOption for ContractType {
    fn all() -> &'static [Self] {
        &[
            Self::Permanent,
            Self::FixedTerm,
            Self::Internship,
            Self::WorkStudy,
            Self::Freelance,
        ]
    }

    fn value(self) -> &'static str {
        match self {
            Self::Permanent => "CDI",
            Self::FixedTerm => "CDD",
            Self::Internship => "Stage",
            Self::WorkStudy => "Alternance",
            Self::Freelance => "Freelance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Temps plein")]
    FullTime,
    #[serde(rename = "Temps partiel")]
    PartTime,
    #[serde(rename = "Freelance")]
    Freelance,
    #[serde(rename = "Stage")]
    Internship,
    #[serde(rename = "Alternance")]
    WorkStudy,
}

impl DropdownOption for EmploymentType {
    fn all() -> &'static [Self] {
        &[
            Self::FullTime,
            Self::PartTime,
            Self::Freelance,
            Self::Internship,
            Self::WorkStudy,
        ]
    }

    fn value(self) -> &'static str {
        match self {
            Self::FullTime => "Temps plein",
            Self::PartTime => "Temps partiel",
            Self::Freelance => "Freelance",
            Self::Internship => "Stage",
            Self::WorkStudy => "Alternance",
        }
    }
}

/// Body of `POST /offre`. Field names follow the backend schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateOfferPayload {
    #[validate(length(min = 1, max = 64))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub missions: Vec<String>,
    #[validate(length(min = 1))]
    pub location: String,
    pub departement: Department,
    pub contract: ContractType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    #[serde(rename = "Qualifications")]
    #[validate(length(min = 1))]
    pub qualifications: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> CreateOfferPayload {
        CreateOfferPayload {
            title: "Backend Engineer".into(),
            description: "Own the API layer".into(),
            missions: vec!["Build APIs".into()],
            location: "Tunis".into(),
            departement: Department::WebAndMobile,
            contract: ContractType::Permanent,
            education: None,
            employment_type: EmploymentType::FullTime,
            qualifications: vec!["3 years experience".into()],
        }
    }

    #[test]
    fn serializes_backend_field_names() {
        let value = serde_json::to_value(payload()).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Backend Engineer",
                "description": "Own the API layer",
                "missions": ["Build APIs"],
                "location": "Tunis",
                "departement": "Développement Web et Mobile",
                "contract": "CDI",
                "type": "Temps plein",
                "Qualifications": ["3 years experience"]
            })
        );
    }

    #[test]
    fn rejects_long_title_and_empty_lists() {
        let mut p = payload();
        p.title = "x".repeat(65);
        p.missions.clear();
        let errors = p.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("missions"));
        assert!(!fields.contains_key("description"));
    }

    #[test]
    fn option_labels_differ_from_values_where_renamed() {
        assert_eq!(Department::HrAndCommunication.value(), "HR et Communication");
        assert_eq!(Department::HrAndCommunication.label(), "Communication");
        assert_eq!(Department::Sales.label(), "Centre Commercial");
        assert_eq!(ContractType::all().len(), 5);
        assert_eq!(EmploymentType::PartTime.label(), "Temps partiel");
    }
}
