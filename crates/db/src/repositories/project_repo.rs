//! Repository for the `projects` table.
//!
//! Besides plain CRUD this hosts the reference-integrity half of the
//! pending-company workflow: `create_with_companies` partitions role
//! assignments into direct references and queued placeholders.

use bauorder_core::company::CompanyRole;
use bauorder_core::types::DbId;
use sqlx::PgPool;

use crate::error::WorkflowError;
use crate::models::navigation::{ProjectWithCompanies, ResolvedCompanies};
use crate::models::project::{
    CreateProject, CreateProjectWithCompanies, CreatedProjectWithPending, Project, UpdateProject,
};
use crate::repositories::{CompanyRepo, PendingCompanyRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, number, description, \
    masonry_company_id, architect_company_id, engineer_company_id, client_company_id, \
    start_date, end_date, status, tenant_id, created_at, updated_at";

/// Provides CRUD operations and the two-phase create for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with direct company references, returning the
    /// created row.
    ///
    /// If `status` is `None` in the input, defaults to planning.
    pub async fn create(
        pool: &PgPool,
        tenant_id: &str,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, number, description,
                masonry_company_id, architect_company_id, engineer_company_id, client_company_id,
                start_date, end_date, status, tenant_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, 'planning'), $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.number)
            .bind(&input.description)
            .bind(input.masonry_company_id)
            .bind(input.architect_company_id)
            .bind(input.engineer_company_id)
            .bind(input.client_company_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status.map(|s| s.as_str()))
            .bind(tenant_id)
            .fetch_one(pool)
            .await
    }

    /// Two-phase create: persist the project with its resolved role
    /// references set, then queue one pending-company row per role that
    /// was given a free-text name.
    ///
    /// The two phases are deliberately not one transaction; a failure
    /// after the project insert surfaces as
    /// [`WorkflowError::PartialCompletion`] naming the project that was
    /// created and how much of the batch committed. No retry, no
    /// rollback.
    pub async fn create_with_companies(
        pool: &PgPool,
        tenant_id: &str,
        input: &CreateProjectWithCompanies,
    ) -> Result<CreatedProjectWithPending, WorkflowError> {
        let assignments = &input.companies;

        let query = format!(
            "INSERT INTO projects (name, number, description,
                masonry_company_id, architect_company_id, engineer_company_id, client_company_id,
                start_date, end_date, tenant_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.number)
            .bind(&input.description)
            .bind(assignments.existing_id(CompanyRole::Masonry))
            .bind(assignments.existing_id(CompanyRole::Architect))
            .bind(assignments.existing_id(CompanyRole::Engineer))
            .bind(assignments.existing_id(CompanyRole::Client))
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(tenant_id)
            .fetch_one(pool)
            .await?;

        let new_names = assignments.new_names();
        let mut pending_companies = Vec::with_capacity(new_names.len());
        for (role, name) in &new_names {
            match PendingCompanyRepo::create(pool, project.id, name, *role, tenant_id).await {
                Ok(row) => pending_companies.push(row),
                Err(source) => {
                    tracing::warn!(
                        project_id = project.id,
                        created = pending_companies.len(),
                        expected = new_names.len(),
                        role = role.as_str(),
                        "pending-company batch aborted mid-way"
                    );
                    return Err(WorkflowError::PartialCompletion {
                        project_id: project.id,
                        created: pending_companies.len(),
                        expected: new_names.len(),
                        source,
                    });
                }
            }
        }

        Ok(CreatedProjectWithPending {
            project,
            pending_companies,
        })
    }

    /// Find a project by its internal ID within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List all of a tenant's projects in insertion order.
    pub async fn list_by_tenant(
        pool: &PgPool,
        tenant_id: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE tenant_id = $1 ORDER BY id");
        sqlx::query_as::<_, Project>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists in the tenant.
    pub async fn update(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($3, name),
                number = COALESCE($4, number),
                description = COALESCE($5, description),
                masonry_company_id = COALESCE($6, masonry_company_id),
                architect_company_id = COALESCE($7, architect_company_id),
                engineer_company_id = COALESCE($8, engineer_company_id),
                client_company_id = COALESCE($9, client_company_id),
                start_date = COALESCE($10, start_date),
                end_date = COALESCE($11, end_date),
                status = COALESCE($12, status),
                updated_at = NOW()
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(&input.name)
            .bind(&input.number)
            .bind(&input.description)
            .bind(input.masonry_company_id)
            .bind(input.architect_company_id)
            .bind(input.engineer_company_id)
            .bind(input.client_company_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status.map(|s| s.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Pending-company rows for the project are left in place; resolving
    /// them later still creates the company and skips the project patch.
    pub async fn delete(pool: &PgPool, tenant_id: &str, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a project by ID, enriched with its resolved role references.
    pub async fn find_with_companies(
        pool: &PgPool,
        tenant_id: &str,
        id: DbId,
    ) -> Result<Option<ProjectWithCompanies>, sqlx::Error> {
        let project = Self::find_by_id(pool, tenant_id, id).await?;
        match project {
            Some(project) => {
                let companies = Self::resolve_companies(pool, &project).await?;
                Ok(Some(ProjectWithCompanies { project, companies }))
            }
            None => Ok(None),
        }
    }

    /// Resolve all four role references of a project concurrently.
    ///
    /// Unset and dangling references both come back as `None`.
    pub(crate) async fn resolve_companies(
        pool: &PgPool,
        project: &Project,
    ) -> Result<ResolvedCompanies, sqlx::Error> {
        let (masonry, architect, engineer, client) = tokio::try_join!(
            Self::resolve_reference(pool, &project.tenant_id, project.masonry_company_id),
            Self::resolve_reference(pool, &project.tenant_id, project.architect_company_id),
            Self::resolve_reference(pool, &project.tenant_id, project.engineer_company_id),
            Self::resolve_reference(pool, &project.tenant_id, project.client_company_id),
        )?;
        Ok(ResolvedCompanies {
            masonry,
            architect,
            engineer,
            client,
        })
    }

    async fn resolve_reference(
        pool: &PgPool,
        tenant_id: &str,
        company_id: Option<DbId>,
    ) -> Result<Option<crate::models::company::Company>, sqlx::Error> {
        match company_id {
            Some(id) => CompanyRepo::find_by_id(pool, tenant_id, id).await,
            None => Ok(None),
        }
    }
}
