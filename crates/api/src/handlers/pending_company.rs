//! Handlers for the `/pending-companies` resource: the server side of the
//! resolution workflow.
//!
//! "Skip" is purely client-side (the wizard advances past a row without
//! calling anything); the row stays in place for later re-entry.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauorder_core::error::CoreError;
use bauorder_core::types::DbId;
use bauorder_db::models::company::Company;
use bauorder_db::models::pending_company::{CompleteCompany, PendingCompany};
use bauorder_db::repositories::PendingCompanyRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthTenant;
use crate::state::AppState;

/// GET /api/v1/pending-companies
pub async fn list(
    State(state): State<AppState>,
    tenant: AuthTenant,
) -> AppResult<Json<Vec<PendingCompany>>> {
    let pending = PendingCompanyRepo::list_by_tenant(&state.pool, &tenant.tenant_id).await?;
    Ok(Json(pending))
}

/// POST /api/v1/pending-companies/{id}/complete
///
/// Resolves the placeholder into a real company and patches the owning
/// project's role reference. 404 when the placeholder is gone: never
/// created, resolved concurrently, or discarded.
pub async fn complete(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
    Json(input): Json<CompleteCompany>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let company = PendingCompanyRepo::complete(&state.pool, &tenant.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PendingCompany",
            id,
        }))?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// DELETE /api/v1/pending-companies/{id}
///
/// Explicit discard: deletes the placeholder without creating a company.
pub async fn remove(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = PendingCompanyRepo::remove(&state.pool, &tenant.tenant_id, id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PendingCompany",
            id,
        }))
    }
}
