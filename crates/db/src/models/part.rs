//! Part entity model and DTOs.

use bauorder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A part row from the `parts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Part {
    pub id: DbId,
    pub name: String,
    pub project_id: DbId,
    pub tenant_id: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new part under a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePart {
    pub name: String,
}

/// DTO for updating an existing part.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePart {
    pub name: Option<String>,
}
