//! Repository for the `pending_companies` table and the resolution
//! workflow that converts placeholders into real companies.

use bauorder_core::company::CompanyRole;
use bauorder_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::Company;
use crate::models::pending_company::{CompleteCompany, PendingCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, company_type, tenant_id, created_at";

/// Column list for the `companies` table (used by the completion insert).
const COMPANY_COLUMNS: &str =
    "id, name, company_type, address, phone, email, tenant_id, created_at, updated_at";

/// Provides placeholder CRUD and the completion workflow.
pub struct PendingCompanyRepo;

impl PendingCompanyRepo {
    /// Insert a placeholder row for a project role.
    ///
    /// At most one placeholder may exist per (project, role); a duplicate
    /// violates `uq_pending_companies_project_role`.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        name: &str,
        company_type: CompanyRole,
        tenant_id: &str,
    ) -> Result<PendingCompany, sqlx::Error> {
        let query = format!(
            "INSERT INTO pending_companies (project_id, name, company_type, tenant_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PendingCompany>(&query)
            .bind(project_id)
            .bind(name)
            .bind(company_type.as_str())
            .bind(tenant_id)
            .fetch_one(pool)
            .await
    }

    /// Find a placeholder by its internal ID within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
    ) -> Result<Option<PendingCompany>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM pending_companies WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, PendingCompany>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's placeholders in the store's natural listing
    /// order. The resolution workflow walks this list one row at a time;
    /// callers must not depend on a specific cross-restart order.
    pub async fn list_by_project(
        pool: &PgPool,
        tenant_id: &str,
        project_id: DbId,
    ) -> Result<Vec<PendingCompany>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pending_companies
             WHERE project_id = $1 AND tenant_id = $2
             ORDER BY id"
        );
        sqlx::query_as::<_, PendingCompany>(&query)
            .bind(project_id)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// List all of a tenant's placeholders.
    pub async fn list_by_tenant(
        pool: &PgPool,
        tenant_id: &str,
    ) -> Result<Vec<PendingCompany>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM pending_companies WHERE tenant_id = $1 ORDER BY id");
        sqlx::query_as::<_, PendingCompany>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Resolve a placeholder into a real company.
    ///
    /// In one transaction: lock the placeholder row (the claim step, so
    /// exactly one of several concurrent resolutions proceeds), insert
    /// the company from the placeholder's name/type/tenant plus the given
    /// contact fields, patch the owning project's matching role column if
    /// the project still exists, and delete the placeholder.
    ///
    /// Returns `None` if the placeholder is gone: never created, already
    /// resolved, or discarded.
    pub async fn complete(
        pool: &PgPool,
        tenant_id: &str,
        pending_id: DbId,
        contact: &CompleteCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let claim_query = format!(
            "SELECT {COLUMNS} FROM pending_companies
             WHERE id = $1 AND tenant_id = $2
             FOR UPDATE"
        );
        let pending = sqlx::query_as::<_, PendingCompany>(&claim_query)
            .bind(pending_id)
            .bind(tenant_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(pending) = pending else {
            return Ok(None);
        };

        let insert_query = format!(
            "INSERT INTO companies (name, company_type, address, phone, email, tenant_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COMPANY_COLUMNS}"
        );
        let company = sqlx::query_as::<_, Company>(&insert_query)
            .bind(&pending.name)
            .bind(&pending.company_type)
            .bind(&contact.address)
            .bind(&contact.phone)
            .bind(&contact.email)
            .bind(&pending.tenant_id)
            .fetch_one(&mut *tx)
            .await?;

        let role = CompanyRole::from_str_db(&pending.company_type)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let patch_query = format!(
            "UPDATE projects SET {} = $2, updated_at = NOW()
             WHERE id = $1 AND tenant_id = $3",
            role.fk_column()
        );
        let patched = sqlx::query(&patch_query)
            .bind(pending.project_id)
            .bind(company.id)
            .bind(&pending.tenant_id)
            .execute(&mut *tx)
            .await?;
        if patched.rows_affected() == 0 {
            // Project deleted in the interim: the company still gets
            // created, just orphaned.
            tracing::debug!(
                project_id = pending.project_id,
                pending_id,
                "owning project gone, skipping role patch"
            );
        }

        sqlx::query("DELETE FROM pending_companies WHERE id = $1")
            .bind(pending.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            pending_id,
            company_id = company.id,
            role = role.as_str(),
            "pending company resolved"
        );
        Ok(Some(company))
    }

    /// Delete a placeholder without creating a company. The owning
    /// project's role column stays whatever it was.
    ///
    /// Returns `true` if a row was removed.
    pub async fn remove(pool: &PgPool, tenant_id: &str, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pending_companies WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
