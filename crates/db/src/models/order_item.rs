//! Order line-item model and DTOs.

use bauorder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Physical dimensions of an ordered article. All axes optional; which
/// ones apply depends on the article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub diameter: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// A line-item row from the `order_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub position: i32,
    pub article_number: String,
    pub description: String,
    pub quantity: f64,
    pub dimensions: Json<Dimensions>,
    /// Free-form manufacturer-specific payload.
    pub manufacturer_data: Option<serde_json::Value>,
    pub tenant_id: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new line item under an order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderItem {
    pub position: i32,
    pub article_number: String,
    pub description: String,
    pub quantity: f64,
    #[serde(default)]
    pub dimensions: Dimensions,
    pub manufacturer_data: Option<serde_json::Value>,
}

/// DTO for updating an existing line item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderItem {
    pub position: Option<i32>,
    pub article_number: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub dimensions: Option<Dimensions>,
    pub manufacturer_data: Option<serde_json::Value>,
}
