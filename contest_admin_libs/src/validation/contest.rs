use crate::{api::ValidationErrors, validation::is_blank};
use serde::{Deserialize, Serialize};

pub const YEAR_REQUIRED: &str = "Year is required";
pub const NAME_REQUIRED: &str = "Contest name is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestInput {
    pub year: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ContestInput {
    pub fn new(year: &str, name: &str, description: &str) -> Self {
        Self {
            year: Some(String::from(year)),
            name: Some(String::from(name)),
            description: Some(String::from(description)),
        }
    }
}

/// Check that every contest field is filled in. All failing fields are reported at once.
pub fn validate_contest(input: &ContestInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(input.year.as_deref()) {
        errors.insert("year", YEAR_REQUIRED);
    }
    if is_blank(input.name.as_deref()) {
        errors.insert("name", NAME_REQUIRED);
    }
    if is_blank(input.description.as_deref()) {
        errors.insert("description", DESCRIPTION_REQUIRED);
    }

    errors
}
