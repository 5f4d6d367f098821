use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    // Records written by hand or imported from csv may carry no id.
    #[serde(default = "generate_id")]
    pub id: String,

    pub name: String,
    pub number: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Name must not be empty".to_string()
    }

    pub fn number_req() -> String {
        "Number must not be empty".to_string()
    }
}

impl Contact {
    pub fn new(name: String, number: String) -> Self {
        Contact {
            id: generate_id(),
            name,
            number,
        }
    }

    /// Lowercased name, the form every name comparison is made in.
    pub fn normalized_name(&self) -> String {
        normalize(&self.name)
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.normalized_name() == normalize(name)
    }

    /// Name and number only need to be present.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }

        if self.number.trim().is_empty() {
            return Err(AppError::Validation(ValidationReq::number_req()));
        }

        Ok(())
    }
}

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}
