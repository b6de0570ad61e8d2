pub mod admin_form;
pub mod list;
pub mod offer_form;
pub mod table;

/// Banner shown above a form after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Success(String),
    Error(String),
}

impl SubmitStatus {
    pub fn message(&self) -> &str {
        match self {
            SubmitStatus::Success(msg) | SubmitStatus::Error(msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitStatus::Success(_))
    }
}
