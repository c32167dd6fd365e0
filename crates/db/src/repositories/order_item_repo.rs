//! Repository for the `order_items` table.

use bauorder_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::order_item::{CreateOrderItem, OrderItem, UpdateOrderItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, order_id, position, article_number, description, \
    quantity, dimensions, manufacturer_data, tenant_id, created_at";

/// Provides CRUD operations for order line items.
pub struct OrderItemRepo;

impl OrderItemRepo {
    /// Insert a new line item under an order, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: &str,
        order_id: DbId,
        input: &CreateOrderItem,
    ) -> Result<OrderItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO order_items (order_id, position, article_number, description,
                quantity, dimensions, manufacturer_data, tenant_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(order_id)
            .bind(input.position)
            .bind(&input.article_number)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(Json(input.dimensions.clone()))
            .bind(&input.manufacturer_data)
            .bind(tenant_id)
            .fetch_one(pool)
            .await
    }

    /// Find a line item by its internal ID within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
    ) -> Result<Option<OrderItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM order_items WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List an order's line items ordered by position.
    pub async fn list_by_order(
        pool: &PgPool,
        tenant_id: &str,
        order_id: DbId,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM order_items
             WHERE order_id = $1 AND tenant_id = $2
             ORDER BY position"
        );
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(order_id)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a line item. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
        input: &UpdateOrderItem,
    ) -> Result<Option<OrderItem>, sqlx::Error> {
        let query = format!(
            "UPDATE order_items SET
                position = COALESCE($3, position),
                article_number = COALESCE($4, article_number),
                description = COALESCE($5, description),
                quantity = COALESCE($6, quantity),
                dimensions = COALESCE($7, dimensions),
                manufacturer_data = COALESCE($8, manufacturer_data)
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderItem>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(input.position)
            .bind(&input.article_number)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(input.dimensions.clone().map(Json))
            .bind(&input.manufacturer_data)
            .fetch_optional(pool)
            .await
    }

    /// Delete a line item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: &str, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM order_items WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
