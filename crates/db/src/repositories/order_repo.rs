//! Repository for the `orders` table.

use bauorder_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::order::{CreateOrder, Order, OrderMetadata, UpdateOrder};
use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, draft_name, draft_number, order_number, \
    manufacturer_id, template_name, metadata, status, tenant_id, created_at, updated_at";

/// Provides CRUD operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order under a project, returning the created row.
    ///
    /// Metadata snapshots the project's name and number as they are right
    /// now; later project renames do not touch it. If `status` is `None`
    /// in the input, defaults to draft.
    pub async fn create(
        pool: &PgPool,
        project: &Project,
        input: &CreateOrder,
    ) -> Result<Order, sqlx::Error> {
        let metadata = OrderMetadata {
            project_name: project.name.clone(),
            project_number: project.number.clone(),
            designer_initials: input.designer_initials.clone(),
            engineer_initials: input.engineer_initials.clone(),
        };
        let query = format!(
            "INSERT INTO orders (project_id, draft_name, draft_number, order_number,
                manufacturer_id, template_name, metadata, status, tenant_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 'draft'), $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(project.id)
            .bind(&input.draft_name)
            .bind(&input.draft_number)
            .bind(&input.order_number)
            .bind(&input.manufacturer_id)
            .bind(&input.template_name)
            .bind(Json(metadata))
            .bind(input.status.map(|s| s.as_str()))
            .bind(&project.tenant_id)
            .fetch_one(pool)
            .await
    }

    /// Find an order by its internal ID within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's orders in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        tenant_id: &str,
        project_id: DbId,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders
             WHERE project_id = $1 AND tenant_id = $2
             ORDER BY id"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(project_id)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update an order's draft fields or status. Only non-`None` fields
    /// in `input` are applied; metadata is immutable once written.
    pub async fn update(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
        input: &UpdateOrder,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET
                draft_name = COALESCE($3, draft_name),
                draft_number = COALESCE($4, draft_number),
                order_number = COALESCE($5, order_number),
                manufacturer_id = COALESCE($6, manufacturer_id),
                template_name = COALESCE($7, template_name),
                status = COALESCE($8, status),
                updated_at = NOW()
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(&input.draft_name)
            .bind(&input.draft_number)
            .bind(&input.order_number)
            .bind(&input.manufacturer_id)
            .bind(&input.template_name)
            .bind(input.status.map(|s| s.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Delete an order by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: &str, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
