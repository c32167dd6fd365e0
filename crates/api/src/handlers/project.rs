//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauorder_core::error::CoreError;
use bauorder_core::types::DbId;
use bauorder_db::models::navigation::ProjectWithCompanies;
use bauorder_db::models::pending_company::PendingCompany;
use bauorder_db::models::project::{
    CreateProject, CreateProjectWithCompanies, Project, UpdateProject,
};
use bauorder_db::repositories::{PendingCompanyRepo, ProjectRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthTenant;
use crate::state::AppState;

/// Response payload of the two-phase create. A non-empty
/// `pending_companies` is the client's trigger to launch the resolution
/// workflow.
#[derive(Debug, Serialize)]
pub struct CreateProjectResponse {
    pub project_id: DbId,
    pub project: Project,
    pub pending_companies: Vec<PendingCompany>,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &tenant.tenant_id, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// POST /api/v1/projects/with-companies
pub async fn create_with_companies(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Json(input): Json<CreateProjectWithCompanies>,
) -> AppResult<(StatusCode, Json<CreateProjectResponse>)> {
    let created =
        ProjectRepo::create_with_companies(&state.pool, &tenant.tenant_id, &input).await?;
    tracing::info!(
        project_id = created.project.id,
        pending = created.pending_companies.len(),
        "project created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CreateProjectResponse {
            project_id: created.project.id,
            project: created.project,
            pending_companies: created.pending_companies,
        }),
    ))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    tenant: AuthTenant,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_by_tenant(&state.pool, &tenant.tenant_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, &tenant.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}/with-companies
pub async fn get_with_companies(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithCompanies>> {
    let project = ProjectRepo::find_with_companies(&state.pool, &tenant.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}/pending-companies
pub async fn list_pending_companies(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<PendingCompany>>> {
    let pending = PendingCompanyRepo::list_by_project(&state.pool, &tenant.tenant_id, id).await?;
    Ok(Json(pending))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, &tenant.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, &tenant.tenant_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
