//! Project entity model and DTOs.

use bauorder_core::assignment::RoleAssignments;
use bauorder_core::project::ProjectStatus;
use bauorder_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::pending_company::PendingCompany;

/// A project row from the `projects` table.
///
/// Each `*_company_id` is unset, resolved (points at a companies row), or
/// pending (unset while a pending_companies row exists for that role).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub number: String,
    pub description: Option<String>,
    pub masonry_company_id: Option<DbId>,
    pub architect_company_id: Option<DbId>,
    pub engineer_company_id: Option<DbId>,
    pub client_company_id: Option<DbId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub tenant_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project with direct company references only.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub number: String,
    pub description: Option<String>,
    pub masonry_company_id: Option<DbId>,
    pub architect_company_id: Option<DbId>,
    pub engineer_company_id: Option<DbId>,
    pub client_company_id: Option<DbId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Defaults to planning if omitted.
    pub status: Option<ProjectStatus>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub number: Option<String>,
    pub description: Option<String>,
    pub masonry_company_id: Option<DbId>,
    pub architect_company_id: Option<DbId>,
    pub engineer_company_id: Option<DbId>,
    pub client_company_id: Option<DbId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
}

/// DTO for the two-phase create: per-role assignments may reference an
/// existing company or name a new one to be created later.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectWithCompanies {
    pub name: String,
    pub number: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub companies: RoleAssignments,
}

/// Result of the two-phase create: the project plus the placeholder rows
/// queued for the resolution workflow. A non-empty `pending_companies` is
/// the caller's trigger to launch it.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedProjectWithPending {
    pub project: Project,
    pub pending_companies: Vec<PendingCompany>,
}
