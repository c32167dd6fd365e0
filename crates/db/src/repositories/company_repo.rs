//! Repository for the `companies` table.

use std::collections::HashMap;

use bauorder_core::company::CompanyRole;
use bauorder_core::search::matches_name;
use bauorder_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany, UpdateCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, company_type, address, phone, email, tenant_id, created_at, updated_at";

/// Provides CRUD and search operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a new company, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: &str,
        input: &CreateCompany,
    ) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (name, company_type, address, phone, email, tenant_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .bind(input.company_type.as_str())
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(tenant_id)
            .fetch_one(pool)
            .await
    }

    /// Find a company by its internal ID within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List all of a tenant's companies in insertion order.
    pub async fn list_by_tenant(
        pool: &PgPool,
        tenant_id: &str,
    ) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE tenant_id = $1 ORDER BY id");
        sqlx::query_as::<_, Company>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// List a tenant's companies of one type in insertion order.
    pub async fn list_by_tenant_and_type(
        pool: &PgPool,
        tenant_id: &str,
        company_type: CompanyRole,
    ) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM companies
             WHERE tenant_id = $1 AND company_type = $2
             ORDER BY id"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(tenant_id)
            .bind(company_type.as_str())
            .fetch_all(pool)
            .await
    }

    /// Update a company. Only non-`None` fields in `input` are applied;
    /// the company type is never changed.
    ///
    /// Returns `None` if no row with the given `id` exists in the tenant.
    pub async fn update(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET
                name = COALESCE($3, name),
                address = COALESCE($4, address),
                phone = COALESCE($5, phone),
                email = COALESCE($6, email),
                updated_at = NOW()
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company by ID. Returns `true` if a row was removed.
    ///
    /// No cascade: projects referencing the company keep their (now
    /// dangling) role references, which projections resolve to null.
    pub async fn delete(pool: &PgPool, tenant_id: &str, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search on company names.
    ///
    /// Scopes by tenant (and type, when given) via the index, then
    /// filters in memory. Per-tenant company counts are small; no
    /// pagination.
    pub async fn search_by_name(
        pool: &PgPool,
        tenant_id: &str,
        company_type: Option<CompanyRole>,
        term: &str,
    ) -> Result<Vec<Company>, sqlx::Error> {
        let companies = match company_type {
            Some(ct) => Self::list_by_tenant_and_type(pool, tenant_id, ct).await?,
            None => Self::list_by_tenant(pool, tenant_id).await?,
        };
        Ok(companies
            .into_iter()
            .filter(|c| matches_name(&c.name, term))
            .collect())
    }

    /// Group all of a tenant's companies by type.
    ///
    /// Types with zero companies are absent from the mapping; callers
    /// default missing keys to empty.
    pub async fn tree(
        pool: &PgPool,
        tenant_id: &str,
    ) -> Result<HashMap<String, Vec<Company>>, sqlx::Error> {
        let companies = Self::list_by_tenant(pool, tenant_id).await?;
        let mut tree: HashMap<String, Vec<Company>> = HashMap::new();
        for company in companies {
            tree.entry(company.company_type.clone())
                .or_default()
                .push(company);
        }
        Ok(tree)
    }
}
