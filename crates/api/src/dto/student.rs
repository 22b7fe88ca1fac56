use campus_core::error::CoreError;
use campus_core::types::{DbId, Timestamp};
use campus_db::models::Gender;
use serde::{Deserialize, Serialize};

/// Maximum length of the external student code and contact fields,
/// matching the column widths.
const MAX_CODE_LEN: usize = 10;

/// Payload for creating a student. No identifier; the store assigns it.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentCreateDto {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Timestamp,
    pub gender: Gender,
    pub contact: Option<String>,
    pub year_entrance: Timestamp,
}

/// Read shape of a student; also the full-update payload, in which case
/// `id` must match the path identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDto {
    pub id: DbId,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Timestamp,
    pub gender: Gender,
    pub contact: Option<String>,
    pub year_entrance: Timestamp,
}

fn validate_fields(
    student_id: &str,
    first_name: &str,
    last_name: &str,
    contact: Option<&str>,
) -> Result<(), CoreError> {
    if student_id.trim().is_empty() {
        return Err(CoreError::Validation("student_id is required".into()));
    }
    if student_id.len() > MAX_CODE_LEN {
        return Err(CoreError::Validation(format!(
            "student_id must be at most {MAX_CODE_LEN} characters"
        )));
    }
    if first_name.trim().is_empty() {
        return Err(CoreError::Validation("first_name is required".into()));
    }
    if last_name.trim().is_empty() {
        return Err(CoreError::Validation("last_name is required".into()));
    }
    if let Some(contact) = contact {
        if contact.len() > MAX_CODE_LEN {
            return Err(CoreError::Validation(format!(
                "contact must be at most {MAX_CODE_LEN} characters"
            )));
        }
    }
    Ok(())
}

impl StudentCreateDto {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_fields(
            &self.student_id,
            &self.first_name,
            &self.last_name,
            self.contact.as_deref(),
        )
    }
}

impl StudentDto {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_fields(
            &self.student_id,
            &self.first_name,
            &self.last_name,
            self.contact.as_deref(),
        )
    }
}
