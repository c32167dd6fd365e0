//! Handlers for parts, nested under `/projects/{project_id}/parts` and
//! addressable at `/parts/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauorder_core::error::CoreError;
use bauorder_core::types::DbId;
use bauorder_db::models::part::{CreatePart, Part, UpdatePart};
use bauorder_db::repositories::{PartRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthTenant;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/parts
pub async fn create(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreatePart>,
) -> AppResult<(StatusCode, Json<Part>)> {
    // The store enforces no references; check the parent here.
    ProjectRepo::find_by_id(&state.pool, &tenant.tenant_id, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    let part = PartRepo::create(&state.pool, &tenant.tenant_id, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(part)))
}

/// GET /api/v1/projects/{project_id}/parts
pub async fn list_by_project(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Part>>> {
    let parts = PartRepo::list_by_project(&state.pool, &tenant.tenant_id, project_id).await?;
    Ok(Json(parts))
}

/// GET /api/v1/parts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<Json<Part>> {
    let part = PartRepo::find_by_id(&state.pool, &tenant.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Part", id }))?;
    Ok(Json(part))
}

/// PUT /api/v1/parts/{id}
pub async fn update(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePart>,
) -> AppResult<Json<Part>> {
    let part = PartRepo::update(&state.pool, &tenant.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Part", id }))?;
    Ok(Json(part))
}

/// DELETE /api/v1/parts/{id}
pub async fn delete(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PartRepo::delete(&state.pool, &tenant.tenant_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Part", id }))
    }
}
