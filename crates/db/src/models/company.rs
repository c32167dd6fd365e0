//! Company entity model and DTOs.

use bauorder_core::company::CompanyRole;
use bauorder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A company row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub name: String,
    pub company_type: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tenant_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new company directly (not via resolution).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompany {
    pub name: String,
    pub company_type: CompanyRole,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// DTO for updating an existing company. All fields are optional.
///
/// The company type is immutable after creation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
