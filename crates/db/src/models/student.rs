//! Student entity model.

use campus_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::gender::Gender;

/// A student row from the `students` table.
///
/// `id` is assigned by the store on insert and immutable thereafter.
/// `student_id` is the external student code, unique across live rows
/// (case-insensitive, whitespace-trimmed).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Timestamp,
    pub gender: Gender,
    pub contact: Option<String>,
    pub year_entrance: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
