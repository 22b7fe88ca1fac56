use campus_core::error::CoreError;
use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// Payload for creating a course. `date_created` defaults to now.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseCreateDto {
    pub name: String,
    pub date_created: Option<Timestamp>,
}

/// Read shape of a course; also the full-update payload, in which case
/// `id` must match the path identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDto {
    pub id: DbId,
    pub name: String,
    pub date_created: Timestamp,
}

fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name is required".into()));
    }
    Ok(())
}

impl CourseCreateDto {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)
    }
}

impl CourseDto {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn blank_name_rejected() {
        let dto = CourseCreateDto {
            name: "  ".into(),
            date_created: None,
        };
        assert_matches!(dto.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn named_course_passes() {
        let dto = CourseCreateDto {
            name: "Algebra".into(),
            date_created: None,
        };
        assert!(dto.validate().is_ok());
    }
}
