//! Order entity model and DTOs.

use bauorder_core::order::OrderStatus;
use bauorder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// PDF-draft metadata stored on every order.
///
/// Project name/number are snapshotted from the project row at creation
/// time, not live references: renaming the project later must not change
/// drafts already written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMetadata {
    pub project_name: String,
    pub project_number: String,
    pub designer_initials: String,
    pub engineer_initials: String,
}

/// An order row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub project_id: DbId,
    pub draft_name: String,
    pub draft_number: String,
    pub order_number: String,
    pub manufacturer_id: String,
    pub template_name: String,
    pub metadata: Json<OrderMetadata>,
    pub status: String,
    pub tenant_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new order under a project.
///
/// The metadata snapshot is assembled server-side from the project row
/// plus the initials given here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub draft_name: String,
    pub draft_number: String,
    pub order_number: String,
    pub manufacturer_id: String,
    pub template_name: String,
    pub designer_initials: String,
    pub engineer_initials: String,
    /// Defaults to draft if omitted.
    pub status: Option<OrderStatus>,
}

/// DTO for updating an existing order. Metadata is immutable and has no
/// field here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrder {
    pub draft_name: Option<String>,
    pub draft_number: Option<String>,
    pub order_number: Option<String>,
    pub manufacturer_id: Option<String>,
    pub template_name: Option<String>,
    pub status: Option<OrderStatus>,
}
