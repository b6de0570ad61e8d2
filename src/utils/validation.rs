use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

/// Field name to inline message, one (the first) message per field.
pub type FieldErrors = BTreeMap<String, String>;

pub fn validate<T: Validate>(val: &T) -> Result<(), FieldErrors> {
    val.validate().map_err(|errors| field_messages(&errors))
}

pub fn field_messages(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let first = errs.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value ({})", first.code));
            Some((field.to_string(), message))
        })
        .collect()
}

/// Re-keys field errors, e.g. from a struct field name to the name the form
/// shows for it. Keys without a mapping are kept.
pub fn rename_fields(errors: FieldErrors, names: &[(&str, &str)]) -> FieldErrors {
    errors
        .into_iter()
        .map(|(field, message)| {
            let key = names
                .iter()
                .find(|(from, _)| *from == field)
                .map(|(_, to)| to.to_string())
                .unwrap_or(field);
            (key, message)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn collects_custom_and_default_messages() {
        let sample = Sample {
            name: String::new(),
            email: "not-an-email".into(),
        };
        let errors = validate(&sample).unwrap_err();
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Invalid value (email)")
        );
    }

    #[test]
    fn valid_values_pass() {
        let sample = Sample {
            name: "Ines".into(),
            email: "ines@example.com".into(),
        };
        assert!(validate(&sample).is_ok());
    }

    #[test]
    fn renames_only_mapped_fields() {
        let errors = FieldErrors::from([
            ("employment_type".to_string(), "Type is required".to_string()),
            ("title".to_string(), "Title is required".to_string()),
        ]);
        let renamed = rename_fields(errors, &[("employment_type", "type")]);
        assert_eq!(renamed.get("type").map(String::as_str), Some("Type is required"));
        assert!(renamed.contains_key("title"));
        assert!(!renamed.contains_key("employment_type"));
    }
}
