//! Pending-company placeholder model and DTOs.

use bauorder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A placeholder row from the `pending_companies` table: a promise to
/// create a company later. Destroyed when resolved into a real company or
/// explicitly discarded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingCompany {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub company_type: String,
    pub tenant_id: String,
    pub created_at: Timestamp,
}

/// Contact fields supplied when resolving a pending company into a real
/// one. Name, type, and tenant come from the pending row itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompleteCompany {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
