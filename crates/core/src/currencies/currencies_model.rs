use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A currency known to the directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub sign: String,
}

/// Input model for registering a new currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrency {
    pub code: String,
    pub name: String,
    pub sign: String,
}

impl NewCurrency {
    pub fn new(code: impl Into<String>, name: impl Into<String>, sign: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            sign: sign.into(),
        }
    }

    /// Rejects blank fields. Codes are kept exactly as given: lookups are case-sensitive.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("code", &self.code), ("name", &self.name), ("sign", &self.sign)] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field.to_string()).into());
            }
        }
        Ok(())
    }
}
