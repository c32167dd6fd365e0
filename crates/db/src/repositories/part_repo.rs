//! Repository for the `parts` table.

use bauorder_core::types::DbId;
use sqlx::PgPool;

use crate::models::part::{CreatePart, Part, UpdatePart};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, project_id, tenant_id, created_at";

/// Provides CRUD operations for parts.
pub struct PartRepo;

impl PartRepo {
    /// Insert a new part under a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: &str,
        project_id: DbId,
        input: &CreatePart,
    ) -> Result<Part, sqlx::Error> {
        let query = format!(
            "INSERT INTO parts (name, project_id, tenant_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Part>(&query)
            .bind(&input.name)
            .bind(project_id)
            .bind(tenant_id)
            .fetch_one(pool)
            .await
    }

    /// Find a part by its internal ID within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
    ) -> Result<Option<Part>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parts WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, Part>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's parts in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        tenant_id: &str,
        project_id: DbId,
    ) -> Result<Vec<Part>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM parts
             WHERE project_id = $1 AND tenant_id = $2
             ORDER BY id"
        );
        sqlx::query_as::<_, Part>(&query)
            .bind(project_id)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a part. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
        input: &UpdatePart,
    ) -> Result<Option<Part>, sqlx::Error> {
        let query = format!(
            "UPDATE parts SET name = COALESCE($3, name)
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Part>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a part by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: &str, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM parts WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
