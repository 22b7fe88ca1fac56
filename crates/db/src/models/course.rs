//! Course entity model.

use campus_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A course row from the `courses` table.
///
/// `name` is unique across live rows (case-insensitive, whitespace-trimmed).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub name: String,
    /// Client-suppliable creation date; defaults to now on insert.
    pub date_created: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
